//! Listing service implementation.

use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::domain::entities::listing::{Category, Listing, ServiceType};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::ListingRepository;
use crate::services::context::Caller;

/// All fields needed to publish a new listing
#[derive(Debug, Clone)]
pub struct ListingDraft {
    pub name: String,
    pub details: String,
    pub location: String,
    pub price: f64,
    pub category: Category,
    pub service_type: ServiceType,
    pub num_apartments: Option<u32>,
    pub num_rooms: Option<u32>,
    pub apartment_names: Vec<String>,
    pub num_floors: Option<u32>,
    pub rooms_per_floor: Vec<u32>,
    pub nearby_locations: Vec<String>,
    pub offers: Vec<String>,
}

/// Partial update for an existing listing; unset fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct ListingPatch {
    pub name: Option<String>,
    pub details: Option<String>,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub is_active: Option<bool>,
    pub category: Option<Category>,
    pub service_type: Option<ServiceType>,
    pub num_apartments: Option<u32>,
    pub num_rooms: Option<u32>,
    pub apartment_names: Option<Vec<String>>,
    pub num_floors: Option<u32>,
    pub rooms_per_floor: Option<Vec<u32>>,
    pub nearby_locations: Option<Vec<String>>,
    pub offers: Option<Vec<String>>,
}

/// Publishes and maintains listings
pub struct ListingService<L: ListingRepository> {
    listings: Arc<L>,
}

impl<L: ListingRepository> ListingService<L> {
    pub fn new(listings: Arc<L>) -> Self {
        Self { listings }
    }

    /// Publish a new listing owned by the caller (owners and admins only)
    pub async fn add(&self, caller: &Caller, draft: ListingDraft) -> DomainResult<Listing> {
        if !caller.can_manage_listings() {
            return Err(DomainError::PermissionDenied);
        }

        let now = Utc::now();
        let listing = Listing {
            id: Uuid::new_v4(),
            owner_id: caller.user_id,
            name: draft.name,
            details: draft.details,
            location: draft.location,
            price: draft.price,
            is_active: true,
            category: draft.category,
            service_type: draft.service_type,
            num_apartments: draft.num_apartments,
            num_rooms: draft.num_rooms,
            apartment_names: draft.apartment_names,
            num_floors: draft.num_floors,
            rooms_per_floor: draft.rooms_per_floor,
            nearby_locations: draft.nearby_locations,
            offers: draft.offers,
            created_at: now,
            updated_at: now,
        };

        listing
            .validate()
            .map_err(|errors| DomainError::Fields { errors })?;

        let created = self.listings.create(listing).await?;
        info!(
            listing_id = %created.id,
            category = created.category.as_str(),
            event = "listing_added",
            "Listing published"
        );
        Ok(created)
    }

    /// Edit an existing listing
    ///
    /// Owners may edit only their own listings; admins may edit any.
    pub async fn edit(
        &self,
        caller: &Caller,
        listing_id: Uuid,
        patch: ListingPatch,
    ) -> DomainResult<Listing> {
        let mut listing = self
            .listings
            .find_by_id(listing_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Listing"))?;

        if !caller.can_manage_listings()
            || (!caller.is_admin() && listing.owner_id != caller.user_id)
        {
            return Err(DomainError::PermissionDenied);
        }

        apply_patch(&mut listing, patch);
        listing.updated_at = Utc::now();

        listing
            .validate()
            .map_err(|errors| DomainError::Fields { errors })?;

        self.listings.update(listing).await
    }

    /// The caller's own listings (owners and admins only)
    pub async fn owner_listings(&self, caller: &Caller) -> DomainResult<Vec<Listing>> {
        if !caller.can_manage_listings() {
            return Err(DomainError::PermissionDenied);
        }
        self.listings.list_by_owner(caller.user_id).await
    }

    /// Active listings for customers, optionally filtered by category
    pub async fn public_list(&self, category: Option<Category>) -> DomainResult<Vec<Listing>> {
        self.listings.list_active(category).await
    }

    /// Every listing in the system (admins only)
    pub async fn admin_list(&self, caller: &Caller) -> DomainResult<Vec<Listing>> {
        if !caller.is_admin() {
            return Err(DomainError::PermissionDenied);
        }
        self.listings.list_all().await
    }
}

fn apply_patch(listing: &mut Listing, patch: ListingPatch) {
    if let Some(name) = patch.name {
        listing.name = name;
    }
    if let Some(details) = patch.details {
        listing.details = details;
    }
    if let Some(location) = patch.location {
        listing.location = location;
    }
    if let Some(price) = patch.price {
        listing.price = price;
    }
    if let Some(is_active) = patch.is_active {
        listing.is_active = is_active;
    }
    if let Some(category) = patch.category {
        listing.category = category;
    }
    if let Some(service_type) = patch.service_type {
        listing.service_type = service_type;
    }
    if let Some(num_apartments) = patch.num_apartments {
        listing.num_apartments = Some(num_apartments);
    }
    if let Some(num_rooms) = patch.num_rooms {
        listing.num_rooms = Some(num_rooms);
    }
    if let Some(apartment_names) = patch.apartment_names {
        listing.apartment_names = apartment_names;
    }
    if let Some(num_floors) = patch.num_floors {
        listing.num_floors = Some(num_floors);
    }
    if let Some(rooms_per_floor) = patch.rooms_per_floor {
        listing.rooms_per_floor = rooms_per_floor;
    }
    if let Some(nearby_locations) = patch.nearby_locations {
        listing.nearby_locations = nearby_locations;
    }
    if let Some(offers) = patch.offers {
        listing.offers = offers;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::UserRole;
    use crate::repositories::MockListingRepository;

    fn draft() -> ListingDraft {
        ListingDraft {
            name: "Kariakoo Lodge".to_string(),
            details: "Rooms above the market".to_string(),
            location: "Kariakoo, Dar es Salaam".to_string(),
            price: 30_000.0,
            category: Category::Lodge,
            service_type: ServiceType::Standalone,
            num_apartments: None,
            num_rooms: Some(12),
            apartment_names: Vec::new(),
            num_floors: None,
            rooms_per_floor: Vec::new(),
            nearby_locations: Vec::new(),
            offers: Vec::new(),
        }
    }

    fn make_service() -> (ListingService<MockListingRepository>, Arc<MockListingRepository>) {
        let repo = Arc::new(MockListingRepository::new());
        (ListingService::new(repo.clone()), repo)
    }

    fn owner() -> Caller {
        Caller::new(Uuid::new_v4(), UserRole::Owner)
    }

    #[tokio::test]
    async fn test_customer_cannot_add_listing() {
        let (service, _repo) = make_service();
        let customer = Caller::new(Uuid::new_v4(), UserRole::Customer);
        assert!(matches!(
            service.add(&customer, draft()).await,
            Err(DomainError::PermissionDenied)
        ));
    }

    #[tokio::test]
    async fn test_add_assigns_caller_as_owner() {
        let (service, _repo) = make_service();
        let caller = owner();
        let listing = service.add(&caller, draft()).await.unwrap();
        assert_eq!(listing.owner_id, caller.user_id);
        assert!(listing.is_active);
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_draft_with_field_errors() {
        let (service, _repo) = make_service();
        let mut bad = draft();
        bad.num_rooms = None;
        match service.add(&owner(), bad).await {
            Err(DomainError::Fields { errors }) => {
                assert!(errors.contains_key("num_apartments"))
            }
            other => panic!("expected field errors, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_owner_cannot_edit_foreign_listing() {
        let (service, _repo) = make_service();
        let listing = service.add(&owner(), draft()).await.unwrap();

        let other_owner = owner();
        let patch = ListingPatch {
            price: Some(50_000.0),
            ..Default::default()
        };
        assert!(matches!(
            service.edit(&other_owner, listing.id, patch).await,
            Err(DomainError::PermissionDenied)
        ));
    }

    #[tokio::test]
    async fn test_admin_can_edit_any_listing() {
        let (service, _repo) = make_service();
        let listing = service.add(&owner(), draft()).await.unwrap();

        let admin = Caller::new(Uuid::new_v4(), UserRole::Admin);
        let patch = ListingPatch {
            price: Some(55_000.0),
            is_active: Some(false),
            ..Default::default()
        };
        let updated = service.edit(&admin, listing.id, patch).await.unwrap();
        assert_eq!(updated.price, 55_000.0);
        assert!(!updated.is_active);
    }

    #[tokio::test]
    async fn test_edit_unknown_listing_is_not_found() {
        let (service, _repo) = make_service();
        let result = service
            .edit(&owner(), Uuid::new_v4(), ListingPatch::default())
            .await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_public_list_filters_category_and_hides_inactive() {
        let (service, _repo) = make_service();
        let caller = owner();
        let lodge = service.add(&caller, draft()).await.unwrap();

        let mut hotel = draft();
        hotel.category = Category::Hotel;
        hotel.name = "Uhuru Hotel".to_string();
        let hotel = service.add(&caller, hotel).await.unwrap();

        let patch = ListingPatch {
            is_active: Some(false),
            ..Default::default()
        };
        service.edit(&caller, hotel.id, patch).await.unwrap();

        let lodges = service.public_list(Some(Category::Lodge)).await.unwrap();
        assert_eq!(lodges.len(), 1);
        assert_eq!(lodges[0].id, lodge.id);

        let all = service.public_list(None).await.unwrap();
        assert_eq!(all.len(), 1, "deactivated listing must be hidden");
    }

    #[tokio::test]
    async fn test_admin_list_requires_admin() {
        let (service, _repo) = make_service();
        assert!(matches!(
            service.admin_list(&owner()).await,
            Err(DomainError::PermissionDenied)
        ));
    }
}
