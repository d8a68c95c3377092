//! MySQL implementation of the BookingRepository trait.
//!
//! Writes re-check the overlap invariant inside a transaction that locks
//! the listing's active rows (`SELECT ... FOR UPDATE`), so two concurrent
//! writes for the same listing serialize instead of both passing the
//! service-level check.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySql, MySqlPool, Row, Transaction};
use uuid::Uuid;

use ky_core::domain::entities::booking::{Booking, BookingStatus};
use ky_core::errors::DomainError;
use ky_core::repositories::BookingRepository;

use super::{db_err, parse_uuid};

/// MySQL-backed booking repository
pub struct MySqlBookingRepository {
    pool: MySqlPool,
}

const SELECT_COLUMNS: &str =
    "id, customer_id, listing_id, check_in, check_out, rooms, notes, status, created_at";

fn row_to_booking(row: &sqlx::mysql::MySqlRow) -> Result<Booking, DomainError> {
    let id: String = row.try_get("id").map_err(|e| db_err("Failed to read id", e))?;
    let customer_id: String = row
        .try_get("customer_id")
        .map_err(|e| db_err("Failed to read customer_id", e))?;
    let listing_id: String = row
        .try_get("listing_id")
        .map_err(|e| db_err("Failed to read listing_id", e))?;
    let status: String = row
        .try_get("status")
        .map_err(|e| db_err("Failed to read status", e))?;
    let rooms: u32 = row
        .try_get("rooms")
        .map_err(|e| db_err("Failed to read rooms", e))?;

    Ok(Booking {
        id: parse_uuid(&id)?,
        customer_id: parse_uuid(&customer_id)?,
        listing_id: parse_uuid(&listing_id)?,
        check_in: row
            .try_get::<Option<NaiveDate>, _>("check_in")
            .map_err(|e| db_err("Failed to read check_in", e))?,
        check_out: row
            .try_get::<Option<NaiveDate>, _>("check_out")
            .map_err(|e| db_err("Failed to read check_out", e))?,
        rooms,
        notes: row
            .try_get("notes")
            .map_err(|e| db_err("Failed to read notes", e))?,
        status: BookingStatus::parse(&status).ok_or_else(|| DomainError::Database {
            message: format!("Unknown booking status in database: {}", status),
        })?,
        created_at: row
            .try_get::<DateTime<Utc>, _>("created_at")
            .map_err(|e| db_err("Failed to read created_at", e))?,
    })
}

impl MySqlBookingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Lock and load the listing's active bookings within a transaction
    async fn active_for_update(
        tx: &mut Transaction<'_, MySql>,
        listing_id: Uuid,
    ) -> Result<Vec<Booking>, DomainError> {
        let query = format!(
            "SELECT {} FROM bookings \
             WHERE listing_id = ? AND status IN ('pending', 'confirmed') \
             FOR UPDATE",
            SELECT_COLUMNS
        );
        let rows = sqlx::query(&query)
            .bind(listing_id.to_string())
            .fetch_all(&mut **tx)
            .await
            .map_err(|e| db_err("Failed to lock bookings for listing", e))?;

        rows.iter().map(row_to_booking).collect()
    }

    /// Re-run the overlap predicate under the row locks
    fn conflicts(
        existing: &[Booking],
        booking: &Booking,
    ) -> bool {
        match (booking.check_in, booking.check_out) {
            (Some(check_in), Some(check_out)) => existing
                .iter()
                .filter(|other| other.id != booking.id)
                .any(|other| other.overlaps(check_in, check_out)),
            _ => false,
        }
    }
}

#[async_trait]
impl BookingRepository for MySqlBookingRepository {
    async fn create(&self, booking: Booking) -> Result<Booking, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_err("Failed to begin transaction", e))?;

        if booking.is_active() {
            let existing = Self::active_for_update(&mut tx, booking.listing_id).await?;
            if Self::conflicts(&existing, &booking) {
                return Err(DomainError::Conflict {
                    message: "The listing is already booked for those dates.".to_string(),
                });
            }
        }

        sqlx::query(
            r#"
            INSERT INTO bookings (
                id, customer_id, listing_id, check_in, check_out,
                rooms, notes, status, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(booking.id.to_string())
        .bind(booking.customer_id.to_string())
        .bind(booking.listing_id.to_string())
        .bind(booking.check_in)
        .bind(booking.check_out)
        .bind(booking.rooms)
        .bind(&booking.notes)
        .bind(booking.status.as_str())
        .bind(booking.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| db_err("Failed to create booking", e))?;

        tx.commit()
            .await
            .map_err(|e| db_err("Failed to commit booking", e))?;
        Ok(booking)
    }

    async fn update(&self, booking: Booking) -> Result<Booking, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_err("Failed to begin transaction", e))?;

        if booking.is_active() {
            let existing = Self::active_for_update(&mut tx, booking.listing_id).await?;
            if Self::conflicts(&existing, &booking) {
                return Err(DomainError::Conflict {
                    message: "The listing is already booked for those dates.".to_string(),
                });
            }
        }

        let result = sqlx::query(
            r#"
            UPDATE bookings
            SET check_in = ?, check_out = ?, rooms = ?, notes = ?, status = ?
            WHERE id = ?
            "#,
        )
        .bind(booking.check_in)
        .bind(booking.check_out)
        .bind(booking.rooms)
        .bind(&booking.notes)
        .bind(booking.status.as_str())
        .bind(booking.id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(|e| db_err("Failed to update booking", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Booking"));
        }

        tx.commit()
            .await
            .map_err(|e| db_err("Failed to commit booking update", e))?;
        Ok(booking)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        let query = format!("SELECT {} FROM bookings WHERE id = ?", SELECT_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_err("Failed to find booking", e))?;

        row.as_ref().map(row_to_booking).transpose()
    }

    async fn list_by_customer(&self, customer_id: Uuid) -> Result<Vec<Booking>, DomainError> {
        let query = format!(
            "SELECT {} FROM bookings WHERE customer_id = ? ORDER BY created_at DESC",
            SELECT_COLUMNS
        );
        let rows = sqlx::query(&query)
            .bind(customer_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_err("Failed to list customer bookings", e))?;

        rows.iter().map(row_to_booking).collect()
    }

    async fn active_for_listing(&self, listing_id: Uuid) -> Result<Vec<Booking>, DomainError> {
        let query = format!(
            "SELECT {} FROM bookings \
             WHERE listing_id = ? AND status IN ('pending', 'confirmed')",
            SELECT_COLUMNS
        );
        let rows = sqlx::query(&query)
            .bind(listing_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_err("Failed to list active bookings", e))?;

        rows.iter().map(row_to_booking).collect()
    }
}
