//! Authentication route handlers
//!
//! - Phone verification (requesting and verifying codes)
//! - Admin password login
//! - Profile read/update
//! - Logout

mod admin_login;
mod logout;
mod profile;
mod request_otp;
mod verify_otp;

pub use admin_login::admin_login;
pub use logout::logout;
pub use profile::{profile, update_profile};
pub use request_otp::request_otp;
pub use verify_otp::verify_otp;
