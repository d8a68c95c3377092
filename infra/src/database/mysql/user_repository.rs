//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ky_core::domain::entities::user::{User, UserRole};
use ky_core::errors::DomainError;
use ky_core::repositories::UserRepository;

use super::{db_err, parse_uuid};

/// MySQL-backed user repository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(|e| db_err("Failed to read id", e))?;
        let role: String = row
            .try_get("role")
            .map_err(|e| db_err("Failed to read role", e))?;

        Ok(User {
            id: parse_uuid(&id)?,
            phone: row
                .try_get("phone")
                .map_err(|e| db_err("Failed to read phone", e))?,
            role: UserRole::parse(&role).ok_or_else(|| DomainError::Database {
                message: format!("Unknown user role in database: {}", role),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| db_err("Failed to read password_hash", e))?,
            is_active: row
                .try_get("is_active")
                .map_err(|e| db_err("Failed to read is_active", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_err("Failed to read created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| db_err("Failed to read updated_at", e))?,
        })
    }
}

const SELECT_COLUMNS: &str =
    "id, phone, role, password_hash, is_active, created_at, updated_at";

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE phone = ?", SELECT_COLUMNS);
        let row = sqlx::query(&query)
            .bind(phone)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_err("Failed to find user by phone", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ?", SELECT_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_err("Failed to find user by id", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, phone, role, password_hash, is_active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.phone)
        .bind(user.role.as_str())
        .bind(&user.password_hash)
        .bind(user.is_active)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(user),
            // Unique key on phone
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(DomainError::Validation {
                    message: "Phone number already registered.".to_string(),
                })
            }
            Err(e) => Err(db_err("Failed to create user", e)),
        }
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET phone = ?, role = ?, password_hash = ?, is_active = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.phone)
        .bind(user.role.as_str())
        .bind(&user.password_hash)
        .bind(user.is_active)
        .bind(user.updated_at)
        .bind(user.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| db_err("Failed to update user", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("User"));
        }
        Ok(user)
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users ORDER BY created_at DESC",
            SELECT_COLUMNS
        );
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_err("Failed to list users", e))?;

        rows.iter().map(Self::row_to_user).collect()
    }
}
