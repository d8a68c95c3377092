//! Mock implementation of BookingRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::booking::Booking;
use crate::errors::DomainError;

use super::repository::BookingRepository;

/// In-memory booking repository for tests
#[derive(Default)]
pub struct MockBookingRepository {
    bookings: Arc<RwLock<HashMap<Uuid, Booking>>>,
}

impl MockBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a booking directly
    pub async fn insert(&self, booking: Booking) {
        self.bookings.write().await.insert(booking.id, booking);
    }
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn create(&self, booking: Booking) -> Result<Booking, DomainError> {
        self.bookings
            .write()
            .await
            .insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn update(&self, booking: Booking) -> Result<Booking, DomainError> {
        let mut bookings = self.bookings.write().await;
        if !bookings.contains_key(&booking.id) {
            return Err(DomainError::not_found("Booking"));
        }
        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        Ok(self.bookings.read().await.get(&id).cloned())
    }

    async fn list_by_customer(&self, customer_id: Uuid) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        let mut mine: Vec<Booking> = bookings
            .values()
            .filter(|b| b.customer_id == customer_id)
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(mine)
    }

    async fn active_for_listing(&self, listing_id: Uuid) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .values()
            .filter(|b| b.listing_id == listing_id && b.is_active())
            .cloned()
            .collect())
    }
}
