//! MySQL implementation of the OtpRepository trait.
//!
//! One row per phone number (unique key on `phone`). The attempt counter
//! is incremented with a guarded UPDATE so the cap holds even under
//! concurrent verifications of the same code.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use tracing::debug;

use ky_core::domain::entities::phone_otp::{PhoneOtp, MAX_ATTEMPTS};
use ky_core::errors::DomainError;
use ky_core::repositories::OtpRepository;
use ky_shared::utils::phone::mask_phone;

use super::db_err;

/// MySQL-backed OTP repository
pub struct MySqlOtpRepository {
    pool: MySqlPool,
}

impl MySqlOtpRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<PhoneOtp, DomainError> {
        Ok(PhoneOtp {
            phone: row
                .try_get("phone")
                .map_err(|e| db_err("Failed to read phone", e))?,
            code: row
                .try_get("code")
                .map_err(|e| db_err("Failed to read code", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_err("Failed to read created_at", e))?,
            verified: row
                .try_get("verified")
                .map_err(|e| db_err("Failed to read verified", e))?,
            attempts: row
                .try_get("attempts")
                .map_err(|e| db_err("Failed to read attempts", e))?,
            expiry_minutes: row
                .try_get("expiry_minutes")
                .map_err(|e| db_err("Failed to read expiry_minutes", e))?,
        })
    }
}

#[async_trait]
impl OtpRepository for MySqlOtpRepository {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<PhoneOtp>, DomainError> {
        let row = sqlx::query(
            "SELECT phone, code, created_at, verified, attempts, expiry_minutes \
             FROM phone_otps WHERE phone = ?",
        )
        .bind(phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_err("Failed to find OTP record", e))?;

        row.as_ref().map(Self::row_to_record).transpose()
    }

    async fn upsert(&self, record: PhoneOtp) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO phone_otps (phone, code, created_at, verified, attempts, expiry_minutes)
            VALUES (?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                code = VALUES(code),
                created_at = VALUES(created_at),
                verified = VALUES(verified),
                attempts = VALUES(attempts),
                expiry_minutes = VALUES(expiry_minutes)
            "#,
        )
        .bind(&record.phone)
        .bind(&record.code)
        .bind(record.created_at)
        .bind(record.verified)
        .bind(record.attempts)
        .bind(record.expiry_minutes)
        .execute(&self.pool)
        .await
        .map_err(|e| db_err("Failed to upsert OTP record", e))?;

        debug!(phone = %mask_phone(&record.phone), "Stored OTP record");
        Ok(())
    }

    async fn register_attempt(&self, phone: &str) -> Result<bool, DomainError> {
        // Guarded atomic increment: the WHERE clause makes the cap hold
        // under concurrent verifications of the same record.
        let result = sqlx::query(
            "UPDATE phone_otps SET attempts = attempts + 1 \
             WHERE phone = ? AND attempts < ?",
        )
        .bind(phone)
        .bind(MAX_ATTEMPTS)
        .execute(&self.pool)
        .await
        .map_err(|e| db_err("Failed to register OTP attempt", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn mark_verified(&self, phone: &str) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE phone_otps SET verified = TRUE WHERE phone = ?")
            .bind(phone)
            .execute(&self.pool)
            .await
            .map_err(|e| db_err("Failed to mark OTP verified", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Verification code"));
        }
        Ok(())
    }
}
