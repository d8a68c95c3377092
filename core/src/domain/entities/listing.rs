//! Listing entity: a bookable rental unit (apartment, hotel, lodge or office).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ky_shared::types::response::FieldErrors;

/// Category of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Apartment,
    Hotel,
    Lodge,
    Office,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Apartment => "apartment",
            Category::Hotel => "hotel",
            Category::Lodge => "lodge",
            Category::Office => "office",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "apartment" => Some(Category::Apartment),
            "hotel" => Some(Category::Hotel),
            "lodge" => Some(Category::Lodge),
            "office" => Some(Category::Office),
            _ => None,
        }
    }

    /// Parse the plural filter labels used by the public listing endpoint
    /// (`apartments`, `hotels`, `lodge`, `offices`)
    pub fn parse_filter(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "apartments" => Some(Category::Apartment),
            "hotels" => Some(Category::Hotel),
            "lodge" => Some(Category::Lodge),
            "offices" => Some(Category::Office),
            _ => None,
        }
    }
}

/// How a property is laid out and offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    /// Separate stand-alone units
    Standalone,
    /// A multi-storey building let floor by floor
    Ghorofa,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Standalone => "standalone",
            ServiceType::Ghorofa => "ghorofa",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "standalone" => Some(ServiceType::Standalone),
            "ghorofa" => Some(ServiceType::Ghorofa),
            _ => None,
        }
    }
}

/// A bookable rental unit published by an owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique identifier
    pub id: Uuid,

    /// Owner of the listing
    pub owner_id: Uuid,

    /// Display name
    pub name: String,

    /// Free-text description
    pub details: String,

    /// Human-readable location
    pub location: String,

    /// Price per day in TZS
    pub price: f64,

    /// Whether the listing is visible to customers
    pub is_active: bool,

    /// Listing category
    pub category: Category,

    /// Layout of the property
    pub service_type: ServiceType,

    /// Number of stand-alone units (standalone only)
    pub num_apartments: Option<u32>,

    /// Rooms per stand-alone unit (standalone only)
    pub num_rooms: Option<u32>,

    /// Names of the individual stand-alone units
    pub apartment_names: Vec<String>,

    /// Number of floors (ghorofa only)
    pub num_floors: Option<u32>,

    /// Room counts per floor (ghorofa only)
    pub rooms_per_floor: Vec<u32>,

    /// Nearby landmarks
    pub nearby_locations: Vec<String>,

    /// Offers and features
    pub offers: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    /// Validate the listing's cross-field rules
    ///
    /// Returns a field-level error map mirroring the API's `errors` shape:
    /// standalone listings need `num_apartments` or `num_rooms`, ghorofa
    /// listings need `num_floors` and `rooms_per_floor`, and the basic
    /// fields must be present and sane.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert("name".to_string(), vec!["name is required.".to_string()]);
        }
        if self.location.trim().is_empty() {
            errors.insert(
                "location".to_string(),
                vec!["location is required.".to_string()],
            );
        }
        if !self.price.is_finite() || self.price < 0.0 {
            errors.insert(
                "price".to_string(),
                vec!["price must be a non-negative number.".to_string()],
            );
        }

        match self.service_type {
            ServiceType::Standalone => {
                if self.num_apartments.is_none() && self.num_rooms.is_none() {
                    errors.insert(
                        "num_apartments".to_string(),
                        vec!["num_apartments or num_rooms is required for standalone.".to_string()],
                    );
                }
            }
            ServiceType::Ghorofa => {
                if self.num_floors.is_none() {
                    errors.insert(
                        "num_floors".to_string(),
                        vec!["num_floors is required for ghorofa.".to_string()],
                    );
                }
                if self.rooms_per_floor.is_empty() {
                    errors.insert(
                        "rooms_per_floor".to_string(),
                        vec!["rooms_per_floor is required for ghorofa.".to_string()],
                    );
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
