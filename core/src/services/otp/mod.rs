//! OTP lifecycle management
//!
//! Owns creation, verification, expiry and attempt-limiting of one-time
//! passcodes keyed by phone number. Delivery goes through the [`SmsSender`]
//! trait so the core stays free of any SMS provider specifics.

mod service;
mod sms;

#[cfg(test)]
mod tests;

pub use service::{IssuedOtp, OtpConfig, OtpService};
pub use sms::{MockSms, SmsSender};
