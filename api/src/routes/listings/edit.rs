//! Handler for PUT/PATCH /api/v1/listings/edit/{listing_id}

use actix_web::{web, HttpResponse};
use serde::Serialize;
use uuid::Uuid;

use ky_core::domain::entities::listing::Listing;
use ky_core::repositories::{
    BookingRepository, ListingRepository, OtpRepository, PaymentRepository, UserRepository,
};
use ky_core::services::otp::SmsSender;
use ky_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::dto::listing::EditListingRequest;
use crate::handlers::domain_error_response;
use crate::middleware::CallerContext;

#[derive(Serialize)]
struct ListingPayload {
    listing: Listing,
}

/// Partially update a listing
///
/// Owners may edit only their own listings; admins may edit any. The
/// merged listing is re-validated before saving.
pub async fn edit<U, O, S, L, B, P>(
    state: web::Data<AppState<U, O, S, L, B, P>>,
    ctx: CallerContext,
    path: web::Path<Uuid>,
    request: web::Json<EditListingRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    S: SmsSender + 'static,
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
    P: PaymentRepository + 'static,
{
    let listing_id = path.into_inner();
    let patch = match request.into_inner().into_patch() {
        Ok(patch) => patch,
        Err(err) => return domain_error_response(&err),
    };

    match state.listings.edit(ctx.caller(), listing_id, patch).await {
        Ok(listing) => HttpResponse::Ok().json(ApiResponse::success(ListingPayload { listing })),
        Err(err) => domain_error_response(&err),
    }
}
