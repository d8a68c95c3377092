//! Handler for POST /api/v1/auth/request-otp

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::Validate;

use ky_core::repositories::{
    BookingRepository, ListingRepository, OtpRepository, PaymentRepository, UserRepository,
};
use ky_core::services::otp::SmsSender;
use ky_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::RequestOtpRequest;
use crate::handlers::{domain_error_response, validation_error_response};

#[derive(Serialize)]
struct RequestOtpPayload {
    expires_at: DateTime<Utc>,
    /// Present only when `OTP_DEV_ECHO` is on; stands in for SMS delivery
    /// during development
    #[serde(skip_serializing_if = "Option::is_none")]
    otp: Option<String>,
}

/// Request a login code for a phone number
///
/// # Request body
///
/// ```json
/// { "phone": "255700000000" }
/// ```
///
/// # Responses
///
/// - 200: `{"ok": true, "expires_at": "...", "message": "..."}` (plus
///   `"otp"` when the dev echo flag is on)
/// - 400: invalid phone number
pub async fn request_otp<U, O, S, L, B, P>(
    state: web::Data<AppState<U, O, S, L, B, P>>,
    request: web::Json<RequestOtpRequest>,
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

    match state.auth.request_login_code(&request.phone).await {
        Ok(issued) => {
            let otp = state.auth_config.echo_otp.then_some(issued.code);
            HttpResponse::Ok().json(
                ApiResponse::success(RequestOtpPayload {
                    expires_at: issued.expires_at,
                    otp,
                })
                .with_message("Verification code sent successfully."),
            )
        }
        Err(err) => domain_error_response(&err),
    }
}
