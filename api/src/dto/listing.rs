//! Listing DTOs.
//!
//! `category` and `service_type` arrive as strings and are parsed into the
//! typed domain values, with unknown values reported as field-level errors.
//! The mobile app sends the price as `price_amount`.

use serde::Deserialize;
use validator::Validate;

use ky_core::domain::entities::listing::{Category, ServiceType};
use ky_core::errors::{DomainError, DomainResult};
use ky_core::services::listing::{ListingDraft, ListingPatch};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddListingRequest {
    #[validate(length(min = 1, max = 255, message = "name is required."))]
    pub name: String,

    #[serde(default)]
    pub details: String,

    #[validate(length(min = 1, max = 255, message = "location is required."))]
    pub location: String,

    /// Price per day in TZS
    pub price_amount: f64,

    pub category: String,

    pub service_type: String,

    pub num_apartments: Option<u32>,
    pub num_rooms: Option<u32>,
    #[serde(default)]
    pub apartment_names: Vec<String>,

    pub num_floors: Option<u32>,
    #[serde(default)]
    pub rooms_per_floor: Vec<u32>,

    #[serde(default)]
    pub nearby_locations: Vec<String>,
    #[serde(default)]
    pub offers: Vec<String>,
}

impl AddListingRequest {
    /// Parse the string-typed fields and build the service draft
    pub fn into_draft(self) -> DomainResult<ListingDraft> {
        let category = parse_category(&self.category)?;
        let service_type = parse_service_type(&self.service_type)?;

        Ok(ListingDraft {
            name: self.name,
            details: self.details,
            location: self.location,
            price: self.price_amount,
            category,
            service_type,
            num_apartments: self.num_apartments,
            num_rooms: self.num_rooms,
            apartment_names: self.apartment_names,
            num_floors: self.num_floors,
            rooms_per_floor: self.rooms_per_floor,
            nearby_locations: self.nearby_locations,
            offers: self.offers,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditListingRequest {
    pub name: Option<String>,
    pub details: Option<String>,
    pub location: Option<String>,
    pub price_amount: Option<f64>,
    pub is_active: Option<bool>,
    pub category: Option<String>,
    pub service_type: Option<String>,
    pub num_apartments: Option<u32>,
    pub num_rooms: Option<u32>,
    pub apartment_names: Option<Vec<String>>,
    pub num_floors: Option<u32>,
    pub rooms_per_floor: Option<Vec<u32>>,
    pub nearby_locations: Option<Vec<String>>,
    pub offers: Option<Vec<String>>,
}

impl EditListingRequest {
    /// Parse the string-typed fields and build the service patch
    pub fn into_patch(self) -> DomainResult<ListingPatch> {
        let category = self.category.as_deref().map(parse_category).transpose()?;
        let service_type = self
            .service_type
            .as_deref()
            .map(parse_service_type)
            .transpose()?;

        Ok(ListingPatch {
            name: self.name,
            details: self.details,
            location: self.location,
            price: self.price_amount,
            is_active: self.is_active,
            category,
            service_type,
            num_apartments: self.num_apartments,
            num_rooms: self.num_rooms,
            apartment_names: self.apartment_names,
            num_floors: self.num_floors,
            rooms_per_floor: self.rooms_per_floor,
            nearby_locations: self.nearby_locations,
            offers: self.offers,
        })
    }
}

fn parse_category(value: &str) -> DomainResult<Category> {
    Category::parse(value).ok_or_else(|| {
        DomainError::field(
            "category",
            "category must be one of: apartment, hotel, lodge, office.",
        )
    })
}

fn parse_service_type(value: &str) -> DomainResult<ServiceType> {
    ServiceType::parse(value).ok_or_else(|| {
        DomainError::field(
            "service_type",
            "service_type must be either \"standalone\" or \"ghorofa\".",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> AddListingRequest {
        AddListingRequest {
            name: "Kigamboni Lodge".to_string(),
            details: String::new(),
            location: "Kigamboni".to_string(),
            price_amount: 25_000.0,
            category: "lodge".to_string(),
            service_type: "standalone".to_string(),
            num_apartments: None,
            num_rooms: Some(8),
            apartment_names: Vec::new(),
            num_floors: None,
            rooms_per_floor: Vec::new(),
            nearby_locations: Vec::new(),
            offers: Vec::new(),
        }
    }

    #[test]
    fn test_into_draft_parses_enums() {
        let draft = request().into_draft().unwrap();
        assert_eq!(draft.category, Category::Lodge);
        assert_eq!(draft.service_type, ServiceType::Standalone);
        assert_eq!(draft.price, 25_000.0);
    }

    #[test]
    fn test_unknown_category_is_field_error() {
        let mut bad = request();
        bad.category = "villa".to_string();
        match bad.into_draft() {
            Err(DomainError::Fields { errors }) => assert!(errors.contains_key("category")),
            other => panic!("expected field error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_service_type_is_field_error() {
        let mut bad = request();
        bad.service_type = "shared".to_string();
        match bad.into_draft() {
            Err(DomainError::Fields { errors }) => assert!(errors.contains_key("service_type")),
            other => panic!("expected field error, got {other:?}"),
        }
    }

    #[test]
    fn test_edit_patch_passes_through_set_fields_only() {
        let patch = EditListingRequest {
            price_amount: Some(30_000.0),
            ..Default::default()
        }
        .into_patch()
        .unwrap();
        assert_eq!(patch.price, Some(30_000.0));
        assert!(patch.name.is_none());
        assert!(patch.category.is_none());
    }
}
