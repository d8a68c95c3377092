//! Domain services
//!
//! Services orchestrate entities and repositories into the platform's
//! operations. Every operation that acts on behalf of a user takes an
//! explicit [`Caller`] rather than relying on ambient request state.

pub mod auth;
pub mod booking;
pub mod context;
pub mod listing;
pub mod otp;
pub mod payment;
pub mod token;

pub use context::Caller;
