//! Handlers for GET /api/v1/auth/profile and PUT/PATCH /api/v1/auth/profile/update

use actix_web::{web, HttpResponse};
use serde::Serialize;

use ky_core::repositories::{
    BookingRepository, ListingRepository, OtpRepository, PaymentRepository, UserRepository,
};
use ky_core::services::otp::SmsSender;
use ky_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::{UpdateProfileRequest, UserDto};
use crate::handlers::domain_error_response;
use crate::middleware::CallerContext;

#[derive(Serialize)]
struct ProfilePayload {
    user: UserDto,
}

/// The calling user's profile
pub async fn profile<U, O, S, L, B, P>(
    state: web::Data<AppState<U, O, S, L, B, P>>,
    ctx: CallerContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    S: SmsSender + 'static,
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
    P: PaymentRepository + 'static,
{
    match state.auth.profile(ctx.caller()).await {
        Ok(user) => HttpResponse::Ok().json(ApiResponse::success(ProfilePayload {
            user: UserDto::from(&user),
        })),
        Err(err) => domain_error_response(&err),
    }
}

/// Update the calling user's phone number
///
/// Role changes are not possible through this endpoint.
pub async fn update_profile<U, O, S, L, B, P>(
    state: web::Data<AppState<U, O, S, L, B, P>>,
    ctx: CallerContext,
    request: web::Json<UpdateProfileRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    S: SmsSender + 'static,
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
    P: PaymentRepository + 'static,
{
    let request = request.into_inner();
    match state
        .auth
        .update_profile(ctx.caller(), request.phone)
        .await
    {
        Ok(user) => HttpResponse::Ok().json(
            ApiResponse::success(ProfilePayload {
                user: UserDto::from(&user),
            })
            .with_message("Profile updated successfully."),
        ),
        Err(err) => domain_error_response(&err),
    }
}
