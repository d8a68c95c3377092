//! Authentication DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use ky_core::domain::entities::user::{User, UserRole};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RequestOtpRequest {
    #[validate(length(min = 9, max = 16, message = "Phone number is required."))]
    pub phone: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(length(min = 9, max = 16, message = "Phone number is required."))]
    pub phone: String,
    #[validate(length(min = 4, max = 6, message = "OTP must be 4 or 6 digits."))]
    pub otp: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdminLoginRequest {
    #[validate(length(min = 9, max = 16, message = "Phone number is required."))]
    pub phone: String,
    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileRequest {
    pub phone: Option<String>,
}

/// Public view of a user
#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: Uuid,
    pub phone: String,
    pub role: UserRole,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            phone: user.phone.clone(),
            role: user.role,
        }
    }
}
