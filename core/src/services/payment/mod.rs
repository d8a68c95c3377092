//! Payment recording: the combined book-and-pay flow and payment history

mod service;

pub use service::{PaymentRequest, PaymentService};
