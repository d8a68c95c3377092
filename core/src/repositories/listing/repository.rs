//! Listing repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::listing::{Category, Listing};
use crate::errors::DomainError;

/// Repository contract for Listing entities
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Persist a new listing
    async fn create(&self, listing: Listing) -> Result<Listing, DomainError>;

    /// Update an existing listing
    async fn update(&self, listing: Listing) -> Result<Listing, DomainError>;

    /// Find a listing by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, DomainError>;

    /// Active listings visible to customers, optionally filtered by
    /// category, newest first
    async fn list_active(&self, category: Option<Category>) -> Result<Vec<Listing>, DomainError>;

    /// All listings belonging to an owner, newest first
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Listing>, DomainError>;

    /// Every listing regardless of state, newest first (admin view)
    async fn list_all(&self) -> Result<Vec<Listing>, DomainError>;
}
