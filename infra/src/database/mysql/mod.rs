//! MySQL implementations of the core repository traits
//!
//! Conventions shared by all repositories here:
//! - entity ids and foreign keys are stored as `CHAR(36)` UUID strings;
//! - list-valued listing fields persist as comma-separated text
//!   (`apartment_names`, `rooms_per_floor`) or JSON text
//!   (`nearby_locations`, `offers`);
//! - every sqlx error is mapped to `DomainError::Database`.

mod booking_repository;
mod listing_repository;
mod otp_repository;
mod payment_repository;
mod user_repository;

pub use booking_repository::MySqlBookingRepository;
pub use listing_repository::MySqlListingRepository;
pub use otp_repository::MySqlOtpRepository;
pub use payment_repository::MySqlPaymentRepository;
pub use user_repository::MySqlUserRepository;

use ky_core::errors::DomainError;

/// Map a sqlx error into the domain error space
pub(crate) fn db_err(context: &str, err: sqlx::Error) -> DomainError {
    tracing::error!(error = %err, "{}", context);
    DomainError::Database {
        message: format!("{}: {}", context, err),
    }
}

/// Parse a `CHAR(36)` column back into a Uuid
pub(crate) fn parse_uuid(value: &str) -> Result<uuid::Uuid, DomainError> {
    uuid::Uuid::parse_str(value).map_err(|e| DomainError::Database {
        message: format!("Invalid UUID in database: {}", e),
    })
}
