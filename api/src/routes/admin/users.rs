//! Handler for GET /api/v1/admin/users

use actix_web::{web, HttpResponse};
use serde::Serialize;

use ky_core::repositories::{
    BookingRepository, ListingRepository, OtpRepository, PaymentRepository, UserRepository,
};
use ky_core::services::otp::SmsSender;
use ky_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::UserDto;
use crate::handlers::domain_error_response;
use crate::middleware::CallerContext;

#[derive(Serialize)]
struct UsersPayload {
    users: Vec<UserDto>,
}

/// Every registered user, newest first (admins only)
pub async fn list_users<U, O, S, L, B, P>(
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
    match state.auth.list_users(ctx.caller()).await {
        Ok(users) => HttpResponse::Ok().json(ApiResponse::success(UsersPayload {
            users: users.iter().map(UserDto::from).collect(),
        })),
        Err(err) => domain_error_response(&err),
    }
}
