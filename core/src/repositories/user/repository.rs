//! User repository trait defining the interface for user data persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository contract for User entities
///
/// Implementations handle the actual storage while keeping the domain layer
/// free of database concerns. Phone numbers are always canonical
/// `255XXXXXXXXX` strings and unique across users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by canonical phone number
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    ///
    /// Fails with a validation error when the phone is already registered.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// All users, newest first (admin listing)
    async fn list_all(&self) -> Result<Vec<User>, DomainError>;
}
