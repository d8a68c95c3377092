//! Core business logic and domain layer for the Kukaya backend
//!
//! This crate contains the domain entities, repository traits, and services
//! that implement the booking platform's rules: phone-OTP authentication,
//! listing management, booking creation with date-overlap protection, and
//! payment recording. It performs no I/O of its own; persistence and SMS
//! delivery are reached through traits implemented in `ky_infra`.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

pub use errors::{DomainError, DomainResult};
