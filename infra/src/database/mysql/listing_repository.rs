//! MySQL implementation of the ListingRepository trait.
//!
//! List-valued fields: `apartment_names` and `rooms_per_floor` are stored
//! as comma-separated text, `nearby_locations` and `offers` as JSON arrays.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ky_core::domain::entities::listing::{Category, Listing, ServiceType};
use ky_core::errors::DomainError;
use ky_core::repositories::ListingRepository;

use super::{db_err, parse_uuid};

/// MySQL-backed listing repository
pub struct MySqlListingRepository {
    pool: MySqlPool,
}

/// Join numbers into the comma-separated storage form
fn join_counts(values: &[u32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse a comma-separated count column, skipping non-numeric fragments
fn split_counts(raw: &str) -> Vec<u32> {
    raw.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

fn join_names(values: &[String]) -> String {
    values.join(",")
}

fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

fn to_json(values: &[String]) -> Result<String, DomainError> {
    serde_json::to_string(values).map_err(|e| DomainError::Database {
        message: format!("Failed to encode JSON column: {}", e),
    })
}

fn from_json(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

impl MySqlListingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_listing(row: &sqlx::mysql::MySqlRow) -> Result<Listing, DomainError> {
        let id: String = row.try_get("id").map_err(|e| db_err("Failed to read id", e))?;
        let owner_id: String = row
            .try_get("owner_id")
            .map_err(|e| db_err("Failed to read owner_id", e))?;
        let category: String = row
            .try_get("category")
            .map_err(|e| db_err("Failed to read category", e))?;
        let service_type: String = row
            .try_get("service_type")
            .map_err(|e| db_err("Failed to read service_type", e))?;
        let apartment_names: String = row
            .try_get("apartment_names")
            .map_err(|e| db_err("Failed to read apartment_names", e))?;
        let rooms_per_floor: String = row
            .try_get("rooms_per_floor")
            .map_err(|e| db_err("Failed to read rooms_per_floor", e))?;
        let nearby_locations: String = row
            .try_get("nearby_locations")
            .map_err(|e| db_err("Failed to read nearby_locations", e))?;
        let offers: String = row
            .try_get("offers")
            .map_err(|e| db_err("Failed to read offers", e))?;

        Ok(Listing {
            id: parse_uuid(&id)?,
            owner_id: parse_uuid(&owner_id)?,
            name: row
                .try_get("name")
                .map_err(|e| db_err("Failed to read name", e))?,
            details: row
                .try_get("details")
                .map_err(|e| db_err("Failed to read details", e))?,
            location: row
                .try_get("location")
                .map_err(|e| db_err("Failed to read location", e))?,
            price: row
                .try_get("price")
                .map_err(|e| db_err("Failed to read price", e))?,
            is_active: row
                .try_get("is_active")
                .map_err(|e| db_err("Failed to read is_active", e))?,
            category: Category::parse(&category).ok_or_else(|| DomainError::Database {
                message: format!("Unknown category in database: {}", category),
            })?,
            service_type: ServiceType::parse(&service_type).ok_or_else(|| {
                DomainError::Database {
                    message: format!("Unknown service_type in database: {}", service_type),
                }
            })?,
            num_apartments: row
                .try_get("num_apartments")
                .map_err(|e| db_err("Failed to read num_apartments", e))?,
            num_rooms: row
                .try_get("num_rooms")
                .map_err(|e| db_err("Failed to read num_rooms", e))?,
            apartment_names: split_names(&apartment_names),
            num_floors: row
                .try_get("num_floors")
                .map_err(|e| db_err("Failed to read num_floors", e))?,
            rooms_per_floor: split_counts(&rooms_per_floor),
            nearby_locations: from_json(&nearby_locations),
            offers: from_json(&offers),
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_err("Failed to read created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| db_err("Failed to read updated_at", e))?,
        })
    }
}

const SELECT_COLUMNS: &str = "id, owner_id, name, details, location, price, is_active, \
     category, service_type, num_apartments, num_rooms, apartment_names, \
     num_floors, rooms_per_floor, nearby_locations, offers, created_at, updated_at";

#[async_trait]
impl ListingRepository for MySqlListingRepository {
    async fn create(&self, listing: Listing) -> Result<Listing, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO listings (
                id, owner_id, name, details, location, price, is_active,
                category, service_type, num_apartments, num_rooms, apartment_names,
                num_floors, rooms_per_floor, nearby_locations, offers,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(listing.id.to_string())
        .bind(listing.owner_id.to_string())
        .bind(&listing.name)
        .bind(&listing.details)
        .bind(&listing.location)
        .bind(listing.price)
        .bind(listing.is_active)
        .bind(listing.category.as_str())
        .bind(listing.service_type.as_str())
        .bind(listing.num_apartments)
        .bind(listing.num_rooms)
        .bind(join_names(&listing.apartment_names))
        .bind(listing.num_floors)
        .bind(join_counts(&listing.rooms_per_floor))
        .bind(to_json(&listing.nearby_locations)?)
        .bind(to_json(&listing.offers)?)
        .bind(listing.created_at)
        .bind(listing.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| db_err("Failed to create listing", e))?;

        Ok(listing)
    }

    async fn update(&self, listing: Listing) -> Result<Listing, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE listings SET
                name = ?, details = ?, location = ?, price = ?, is_active = ?,
                category = ?, service_type = ?, num_apartments = ?, num_rooms = ?,
                apartment_names = ?, num_floors = ?, rooms_per_floor = ?,
                nearby_locations = ?, offers = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&listing.name)
        .bind(&listing.details)
        .bind(&listing.location)
        .bind(listing.price)
        .bind(listing.is_active)
        .bind(listing.category.as_str())
        .bind(listing.service_type.as_str())
        .bind(listing.num_apartments)
        .bind(listing.num_rooms)
        .bind(join_names(&listing.apartment_names))
        .bind(listing.num_floors)
        .bind(join_counts(&listing.rooms_per_floor))
        .bind(to_json(&listing.nearby_locations)?)
        .bind(to_json(&listing.offers)?)
        .bind(listing.updated_at)
        .bind(listing.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| db_err("Failed to update listing", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Listing"));
        }
        Ok(listing)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, DomainError> {
        let query = format!("SELECT {} FROM listings WHERE id = ?", SELECT_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_err("Failed to find listing", e))?;

        row.as_ref().map(Self::row_to_listing).transpose()
    }

    async fn list_active(&self, category: Option<Category>) -> Result<Vec<Listing>, DomainError> {
        let rows = match category {
            Some(category) => {
                let query = format!(
                    "SELECT {} FROM listings WHERE is_active = TRUE AND category = ? \
                     ORDER BY created_at DESC",
                    SELECT_COLUMNS
                );
                sqlx::query(&query)
                    .bind(category.as_str())
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {} FROM listings WHERE is_active = TRUE ORDER BY created_at DESC",
                    SELECT_COLUMNS
                );
                sqlx::query(&query).fetch_all(&self.pool).await
            }
        }
        .map_err(|e| db_err("Failed to list active listings", e))?;

        rows.iter().map(Self::row_to_listing).collect()
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Listing>, DomainError> {
        let query = format!(
            "SELECT {} FROM listings WHERE owner_id = ? ORDER BY created_at DESC",
            SELECT_COLUMNS
        );
        let rows = sqlx::query(&query)
            .bind(owner_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_err("Failed to list owner listings", e))?;

        rows.iter().map(Self::row_to_listing).collect()
    }

    async fn list_all(&self) -> Result<Vec<Listing>, DomainError> {
        let query = format!(
            "SELECT {} FROM listings ORDER BY created_at DESC",
            SELECT_COLUMNS
        );
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_err("Failed to list listings", e))?;

        rows.iter().map(Self::row_to_listing).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_column_round_trip() {
        assert_eq!(join_counts(&[4, 4, 2]), "4,4,2");
        assert_eq!(split_counts("4,4,2"), vec![4, 4, 2]);
        assert_eq!(split_counts(""), Vec::<u32>::new());
        // Non-numeric fragments are dropped rather than failing the row
        assert_eq!(split_counts("4, x, 2"), vec![4, 2]);
    }

    #[test]
    fn test_name_column_round_trip() {
        let names = vec!["A1".to_string(), "A2".to_string()];
        assert_eq!(join_names(&names), "A1,A2");
        assert_eq!(split_names("A1, A2,"), names);
        assert_eq!(split_names(""), Vec::<String>::new());
    }

    #[test]
    fn test_json_column_round_trip() {
        let values = vec!["Mlimani City".to_string(), "Coco Beach".to_string()];
        let encoded = to_json(&values).unwrap();
        assert_eq!(from_json(&encoded), values);
        // Corrupt JSON degrades to empty rather than failing the row
        assert_eq!(from_json("not-json"), Vec::<String>::new());
    }
}
