//! Authentication service implementation.

use std::sync::Arc;
use tracing::{info, warn};

use ky_shared::utils::phone::{canonicalize_tz_phone, mask_phone};

use crate::domain::entities::user::{User, UserRole};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{OtpRepository, UserRepository};
use crate::services::context::Caller;
use crate::services::otp::{IssuedOtp, OtpService, SmsSender};
use crate::services::token::TokenService;

/// Outcome of a successful login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    /// Whether the account was created by this login
    pub created: bool,
    pub token: String,
    pub expires_in: i64,
}

/// Phone-first authentication service
pub struct AuthService<U, O, S>
where
    U: UserRepository,
    O: OtpRepository,
    S: SmsSender,
{
    users: Arc<U>,
    otp: OtpService<O, S>,
    tokens: Arc<TokenService>,
}

impl<U, O, S> AuthService<U, O, S>
where
    U: UserRepository,
    O: OtpRepository,
    S: SmsSender,
{
    pub fn new(users: Arc<U>, otp: OtpService<O, S>, tokens: Arc<TokenService>) -> Self {
        Self { users, otp, tokens }
    }

    /// Validate the phone and issue a login code for it
    pub async fn request_login_code(&self, phone: &str) -> DomainResult<IssuedOtp> {
        let canonical = canonicalize_phone(phone)?;
        self.otp.generate(&canonical).await
    }

    /// Verify a login code; creates the account on first login
    pub async fn login_with_code(&self, phone: &str, code: &str) -> DomainResult<LoginResult> {
        let canonical = canonicalize_phone(phone)?;
        self.otp.verify(&canonical, code).await?;

        let (user, created) = match self.users.find_by_phone(&canonical).await? {
            Some(user) => (user, false),
            None => {
                let user = self
                    .users
                    .create(User::new(canonical.clone(), UserRole::Customer))
                    .await?;
                info!(
                    phone = %mask_phone(&canonical),
                    event = "user_registered",
                    "Created account on first login"
                );
                (user, true)
            }
        };

        let issued = self.tokens.issue(&user)?;
        info!(
            phone = %mask_phone(&canonical),
            event = "login",
            role = user.role.as_str(),
            "Login successful"
        );

        Ok(LoginResult {
            user,
            created,
            token: issued.token,
            expires_in: issued.expires_in,
        })
    }

    /// Password login for administrators
    ///
    /// Any failure — unknown phone, non-admin role, missing or wrong
    /// password — reports the same `PermissionDenied` so the endpoint does
    /// not leak which part was wrong.
    pub async fn admin_login(&self, phone: &str, password: &str) -> DomainResult<LoginResult> {
        let canonical = canonicalize_phone(phone)?;

        let user = self
            .users
            .find_by_phone(&canonical)
            .await?
            .ok_or(DomainError::PermissionDenied)?;

        if !user.is_admin() {
            warn!(
                phone = %mask_phone(&canonical),
                event = "admin_login_rejected",
                "Admin login attempted by non-admin account"
            );
            return Err(DomainError::PermissionDenied);
        }

        let hash = user
            .password_hash
            .as_deref()
            .ok_or(DomainError::PermissionDenied)?;
        let password_ok = bcrypt::verify(password, hash).map_err(|e| DomainError::Internal {
            message: format!("Password verification failed: {}", e),
        })?;
        if !password_ok {
            warn!(
                phone = %mask_phone(&canonical),
                event = "admin_login_rejected",
                "Wrong admin password"
            );
            return Err(DomainError::PermissionDenied);
        }

        let issued = self.tokens.issue(&user)?;
        info!(phone = %mask_phone(&canonical), event = "admin_login", "Admin login successful");

        Ok(LoginResult {
            user,
            created: false,
            token: issued.token,
            expires_in: issued.expires_in,
        })
    }

    /// The calling user's profile
    pub async fn profile(&self, caller: &Caller) -> DomainResult<User> {
        self.users
            .find_by_id(caller.user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    /// Update the calling user's phone number
    ///
    /// Role changes are not possible through this path.
    pub async fn update_profile(
        &self,
        caller: &Caller,
        new_phone: Option<String>,
    ) -> DomainResult<User> {
        let mut user = self.profile(caller).await?;

        if let Some(phone) = new_phone {
            let canonical = canonicalize_phone(&phone)?;
            if let Some(existing) = self.users.find_by_phone(&canonical).await? {
                if existing.id != user.id {
                    return Err(DomainError::field(
                        "phone",
                        "Phone number already registered.",
                    ));
                }
            }
            user.update_phone(canonical);
        }

        self.users.update(user).await
    }

    /// All users, admins only
    pub async fn list_users(&self, caller: &Caller) -> DomainResult<Vec<User>> {
        if !caller.is_admin() {
            return Err(DomainError::PermissionDenied);
        }
        self.users.list_all().await
    }
}

fn canonicalize_phone(phone: &str) -> DomainResult<String> {
    canonicalize_tz_phone(phone)
        .ok_or_else(|| DomainError::field("phone", "Enter a valid Tanzanian mobile number."))
}
