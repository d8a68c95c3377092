//! Handler for POST /api/v1/auth/admin-login

use actix_web::{web, HttpResponse};
use serde::Serialize;
use validator::Validate;

use ky_core::repositories::{
    BookingRepository, ListingRepository, OtpRepository, PaymentRepository, UserRepository,
};
use ky_core::services::otp::SmsSender;
use ky_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::{AdminLoginRequest, UserDto};
use crate::handlers::{domain_error_response, validation_error_response};

#[derive(Serialize)]
struct AdminLoginPayload {
    user: UserDto,
    token: String,
    expires_in: i64,
}

/// Password login for administrators
///
/// # Responses
///
/// - 200: `{"ok": true, "user": {...}, "token": "...", "expires_in": ...}`
/// - 403: unknown phone, non-admin account, or wrong password (all
///   deliberately indistinguishable)
pub async fn admin_login<U, O, S, L, B, P>(
    state: web::Data<AppState<U, O, S, L, B, P>>,
    request: web::Json<AdminLoginRequest>,
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
        .admin_login(&request.phone, &request.password)
        .await
    {
        Ok(result) => HttpResponse::Ok().json(
            ApiResponse::success(AdminLoginPayload {
                user: UserDto::from(&result.user),
                token: result.token,
                expires_in: result.expires_in,
            })
            .with_message("Admin login successful."),
        ),
        Err(err) => domain_error_response(&err),
    }
}
