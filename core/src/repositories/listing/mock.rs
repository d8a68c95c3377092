//! Mock implementation of ListingRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::listing::{Category, Listing};
use crate::errors::DomainError;

use super::repository::ListingRepository;

/// In-memory listing repository for tests
#[derive(Default)]
pub struct MockListingRepository {
    listings: Arc<RwLock<HashMap<Uuid, Listing>>>,
}

impl MockListingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a listing directly
    pub async fn insert(&self, listing: Listing) {
        self.listings.write().await.insert(listing.id, listing);
    }
}

fn newest_first(mut listings: Vec<Listing>) -> Vec<Listing> {
    listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    listings
}

#[async_trait]
impl ListingRepository for MockListingRepository {
    async fn create(&self, listing: Listing) -> Result<Listing, DomainError> {
        self.listings
            .write()
            .await
            .insert(listing.id, listing.clone());
        Ok(listing)
    }

    async fn update(&self, listing: Listing) -> Result<Listing, DomainError> {
        let mut listings = self.listings.write().await;
        if !listings.contains_key(&listing.id) {
            return Err(DomainError::not_found("Listing"));
        }
        listings.insert(listing.id, listing.clone());
        Ok(listing)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, DomainError> {
        Ok(self.listings.read().await.get(&id).cloned())
    }

    async fn list_active(&self, category: Option<Category>) -> Result<Vec<Listing>, DomainError> {
        let listings = self.listings.read().await;
        Ok(newest_first(
            listings
                .values()
                .filter(|l| l.is_active)
                .filter(|l| category.map_or(true, |c| l.category == c))
                .cloned()
                .collect(),
        ))
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Listing>, DomainError> {
        let listings = self.listings.read().await;
        Ok(newest_first(
            listings
                .values()
                .filter(|l| l.owner_id == owner_id)
                .cloned()
                .collect(),
        ))
    }

    async fn list_all(&self) -> Result<Vec<Listing>, DomainError> {
        let listings = self.listings.read().await;
        Ok(newest_first(listings.values().cloned().collect()))
    }
}
