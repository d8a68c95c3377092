//! User entity representing a registered account in the Kukaya system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a user in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A customer booking rental units
    Customer,
    /// A property owner publishing listings
    Owner,
    /// A platform administrator
    Admin,
}

impl UserRole {
    /// Database/string representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Customer => "customer",
            UserRole::Owner => "owner",
            UserRole::Admin => "admin",
        }
    }

    /// Parse a role from its string form
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "customer" => Some(UserRole::Customer),
            "owner" => Some(UserRole::Owner),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

/// A registered user, identified by phone number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,

    /// Phone number in canonical `255XXXXXXXXX` form, unique per user
    pub phone: String,

    /// Role of this account
    pub role: UserRole,

    /// Bcrypt password hash; present only for admin accounts
    #[serde(skip_serializing, default)]
    pub password_hash: Option<String>,

    /// Whether the account is active
    pub is_active: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with the given phone and role
    pub fn new(phone: String, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            phone,
            role,
            password_hash: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this user is an administrator
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Whether this user may create and edit listings
    pub fn can_manage_listings(&self) -> bool {
        matches!(self.role, UserRole::Owner | UserRole::Admin)
    }

    /// Change the phone number, bumping `updated_at`
    pub fn update_phone(&mut self, phone: String) {
        self.phone = phone;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = User::new("255712345678".to_string(), UserRole::Customer);
        assert_eq!(user.phone, "255712345678");
        assert_eq!(user.role, UserRole::Customer);
        assert!(user.is_active);
        assert!(user.password_hash.is_none());
        assert!(!user.is_admin());
        assert!(!user.can_manage_listings());
    }

    #[test]
    fn test_role_permissions() {
        let owner = User::new("255712345678".to_string(), UserRole::Owner);
        assert!(owner.can_manage_listings());
        assert!(!owner.is_admin());

        let admin = User::new("255712345679".to_string(), UserRole::Admin);
        assert!(admin.can_manage_listings());
        assert!(admin.is_admin());
    }

    #[test]
    fn test_role_round_trip() {
        for role in [UserRole::Customer, UserRole::Owner, UserRole::Admin] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::parse("landlord"), None);
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(
            serde_json::to_string(&UserRole::Customer).unwrap(),
            "\"customer\""
        );
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn test_update_phone_bumps_timestamp() {
        let mut user = User::new("255712345678".to_string(), UserRole::Customer);
        let before = user.updated_at;
        user.update_phone("255788000111".to_string());
        assert_eq!(user.phone, "255788000111");
        assert!(user.updated_at >= before);
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let mut user = User::new("255712345678".to_string(), UserRole::Admin);
        user.password_hash = Some("$2b$12$secret".to_string());
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
    }
}
