//! Authentication: OTP login, admin login, profiles
//!
//! Login is phone-first: customers request a code, verify it, and get an
//! access token; an account is created on first successful verification.
//! Admins authenticate with phone + password instead.

mod service;


pub use service::{AuthService, LoginResult};
