//! Domain entities for the Kukaya booking platform

pub mod booking;
pub mod listing;
pub mod payment;
pub mod phone_otp;
pub mod user;

pub use booking::{Booking, BookingStatus};
pub use listing::{Category, Listing, ServiceType};
pub use payment::{Payment, PaymentMethod};
pub use phone_otp::PhoneOtp;
pub use user::{User, UserRole};
