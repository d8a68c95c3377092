//! Infrastructure layer for the Kukaya backend
//!
//! Concrete implementations of the core's repository and SMS traits:
//! MySQL persistence via sqlx, and a console SMS sender for development.

pub mod database;
pub mod sms;

pub use database::connection::DatabasePool;
pub use sms::ConsoleSms;
