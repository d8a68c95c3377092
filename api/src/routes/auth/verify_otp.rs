//! Handler for POST /api/v1/auth/verify-otp

use actix_web::{web, HttpResponse};
use serde::Serialize;
use validator::Validate;

use ky_core::repositories::{
    BookingRepository, ListingRepository, OtpRepository, PaymentRepository, UserRepository,
};
use ky_core::services::otp::SmsSender;
use ky_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::{UserDto, VerifyOtpRequest};
use crate::handlers::{domain_error_response, validation_error_response};

#[derive(Serialize)]
struct LoginPayload {
    user: UserDto,
    /// Whether the account was created by this login
    created: bool,
    token: String,
    expires_in: i64,
}

/// Verify a login code and authenticate the user
///
/// A successful verification logs the phone in, creating a customer
/// account on first login, and returns a bearer token.
///
/// # Request body
///
/// ```json
/// { "phone": "255700000000", "otp": "4821" }
/// ```
///
/// # Responses
///
/// - 200: `{"ok": true, "user": {...}, "created": bool, "token": "...",
///   "expires_in": 86400, "message": "Login successful."}`
/// - 400: invalid phone, expired code, wrong code, or attempt cap reached
/// - 404: no code was requested for this phone
pub async fn verify_otp<U, O, S, L, B, P>(
    state: web::Data<AppState<U, O, S, L, B, P>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    S: SmsSender + 'static,
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
    P: PaymentRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .auth
        .login_with_code(&request.phone, &request.otp)
        .await
    {
        Ok(result) => HttpResponse::Ok().json(
            ApiResponse::success(LoginPayload {
                user: UserDto::from(&result.user),
                created: result.created,
                token: result.token,
                expires_in: result.expires_in,
            })
            .with_message("Login successful."),
        ),
        Err(err) => domain_error_response(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn test_verify_otp_rejects_short_code() {
        let request = VerifyOtpRequest {
            phone: "255700000000".to_string(),
            otp: "12".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[actix_rt::test]
    async fn test_verify_otp_accepts_valid_request() {
        let request = VerifyOtpRequest {
            phone: "255700000000".to_string(),
            otp: "4821".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
