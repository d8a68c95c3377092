//! Handler for POST /api/v1/listings/add

use actix_web::{web, HttpResponse};
use serde::Serialize;
use validator::Validate;

use ky_core::domain::entities::listing::Listing;
use ky_core::repositories::{
    BookingRepository, ListingRepository, OtpRepository, PaymentRepository, UserRepository,
};
use ky_core::services::otp::SmsSender;
use ky_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::dto::listing::AddListingRequest;
use crate::handlers::{domain_error_response, validation_error_response};
use crate::middleware::CallerContext;

#[derive(Serialize)]
struct ListingPayload {
    listing: Listing,
}

/// Publish a new listing (owners and admins only)
///
/// # Responses
///
/// - 200: `{"ok": true, "listing": {...}, "message": "..."}`
/// - 400: `{"ok": false, "errors": {field: [messages]}}`
/// - 403: caller is a customer
pub async fn add<U, O, S, L, B, P>(
    state: web::Data<AppState<U, O, S, L, B, P>>,
    ctx: CallerContext,
    request: web::Json<AddListingRequest>,
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

    let draft = match request.into_inner().into_draft() {
        Ok(draft) => draft,
        Err(err) => return domain_error_response(&err),
    };

    match state.listings.add(ctx.caller(), draft).await {
        Ok(listing) => HttpResponse::Ok().json(
            ApiResponse::success(ListingPayload { listing })
                .with_message("Listing added successfully."),
        ),
        Err(err) => domain_error_response(&err),
    }
}
