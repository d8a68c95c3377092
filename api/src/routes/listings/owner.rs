//! Handler for GET /api/v1/listings/owner

use actix_web::{web, HttpResponse};
use serde::Serialize;

use ky_core::domain::entities::listing::Listing;
use ky_core::repositories::{
    BookingRepository, ListingRepository, OtpRepository, PaymentRepository, UserRepository,
};
use ky_core::services::otp::SmsSender;
use ky_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::handlers::domain_error_response;
use crate::middleware::CallerContext;

#[derive(Serialize)]
struct ListingsPayload {
    listings: Vec<Listing>,
}

/// The calling owner's listings, newest first
pub async fn owner_listings<U, O, S, L, B, P>(
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
    match state.listings.owner_listings(ctx.caller()).await {
        Ok(listings) => HttpResponse::Ok().json(ApiResponse::success(ListingsPayload { listings })),
        Err(err) => domain_error_response(&err),
    }
}
