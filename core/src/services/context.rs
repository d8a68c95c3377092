//! Explicit caller context for service operations.

use uuid::Uuid;

use crate::domain::entities::user::UserRole;

/// Identity of the authenticated caller, passed explicitly into every
/// operation that needs one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    /// Id of the authenticated user
    pub user_id: Uuid,

    /// Role carried by the caller's token
    pub role: UserRole,
}

impl Caller {
    pub fn new(user_id: Uuid, role: UserRole) -> Self {
        Self { user_id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn can_manage_listings(&self) -> bool {
        matches!(self.role, UserRole::Owner | UserRole::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_permissions() {
        let customer = Caller::new(Uuid::new_v4(), UserRole::Customer);
        assert!(!customer.is_admin());
        assert!(!customer.can_manage_listings());

        let owner = Caller::new(Uuid::new_v4(), UserRole::Owner);
        assert!(owner.can_manage_listings());

        let admin = Caller::new(Uuid::new_v4(), UserRole::Admin);
        assert!(admin.is_admin());
        assert!(admin.can_manage_listings());
    }
}
