//! Booking repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::booking::Booking;
use crate::errors::DomainError;

/// Repository contract for Booking entities
///
/// `create` and `update` are expected to re-check the overlap invariant
/// under a row-locking transaction where the backing store supports it, so
/// that two concurrent writes for the same listing cannot both pass the
/// service-level check.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new booking
    async fn create(&self, booking: Booking) -> Result<Booking, DomainError>;

    /// Update an existing booking
    async fn update(&self, booking: Booking) -> Result<Booking, DomainError>;

    /// Find a booking by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError>;

    /// A customer's bookings, newest first
    async fn list_by_customer(&self, customer_id: Uuid) -> Result<Vec<Booking>, DomainError>;

    /// Pending and confirmed bookings for a listing — the overlap universe
    async fn active_for_listing(&self, listing_id: Uuid) -> Result<Vec<Booking>, DomainError>;
}
