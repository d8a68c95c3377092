//! Repository traits for entity persistence
//!
//! Each entity gets a trait defining its data-access contract, implemented
//! for MySQL in `ky_infra` and as in-memory mocks here for service tests.

pub mod booking;
pub mod listing;
pub mod otp;
pub mod payment;
pub mod user;

pub use booking::{BookingRepository, MockBookingRepository};
pub use listing::{ListingRepository, MockListingRepository};
pub use otp::{MockOtpRepository, OtpRepository};
pub use payment::{MockPaymentRepository, PaymentRepository};
pub use user::{MockUserRepository, UserRepository};
