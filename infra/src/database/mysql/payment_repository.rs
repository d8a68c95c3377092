//! MySQL implementation of the PaymentRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ky_core::domain::entities::payment::{Payment, PaymentMethod};
use ky_core::errors::DomainError;
use ky_core::repositories::PaymentRepository;

use super::{db_err, parse_uuid};

/// MySQL-backed payment repository
pub struct MySqlPaymentRepository {
    pool: MySqlPool,
}

impl MySqlPaymentRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_payment(row: &sqlx::mysql::MySqlRow) -> Result<Payment, DomainError> {
        let id: String = row.try_get("id").map_err(|e| db_err("Failed to read id", e))?;
        let method: String = row
            .try_get("method")
            .map_err(|e| db_err("Failed to read method", e))?;
        let booking_id: Option<String> = row
            .try_get("booking_id")
            .map_err(|e| db_err("Failed to read booking_id", e))?;

        Ok(Payment {
            id: parse_uuid(&id)?,
            phone: row
                .try_get("phone")
                .map_err(|e| db_err("Failed to read phone", e))?,
            listing_name: row
                .try_get("listing_name")
                .map_err(|e| db_err("Failed to read listing_name", e))?,
            rooms: row
                .try_get("rooms")
                .map_err(|e| db_err("Failed to read rooms", e))?,
            method: PaymentMethod::parse(&method).ok_or_else(|| DomainError::Database {
                message: format!("Unknown payment method in database: {}", method),
            })?,
            total_amount: row
                .try_get("total_amount")
                .map_err(|e| db_err("Failed to read total_amount", e))?,
            days_booked: row
                .try_get("days_booked")
                .map_err(|e| db_err("Failed to read days_booked", e))?,
            booking_id: booking_id.as_deref().map(parse_uuid).transpose()?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_err("Failed to read created_at", e))?,
        })
    }
}

#[async_trait]
impl PaymentRepository for MySqlPaymentRepository {
    async fn create(&self, payment: Payment) -> Result<Payment, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO payments (
                id, phone, listing_name, rooms, method,
                total_amount, days_booked, booking_id, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(payment.id.to_string())
        .bind(&payment.phone)
        .bind(&payment.listing_name)
        .bind(payment.rooms)
        .bind(payment.method.as_str())
        .bind(payment.total_amount)
        .bind(payment.days_booked)
        .bind(payment.booking_id.map(|id| id.to_string()))
        .bind(payment.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| db_err("Failed to create payment", e))?;

        Ok(payment)
    }

    async fn list_by_phone(&self, phone: &str) -> Result<Vec<Payment>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, phone, listing_name, rooms, method, total_amount, \
             days_booked, booking_id, created_at \
             FROM payments WHERE phone = ? ORDER BY created_at DESC",
        )
        .bind(phone)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to list payments", e))?;

        rows.iter().map(Self::row_to_payment).collect()
    }
}
