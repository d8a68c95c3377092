//! Handler for GET /api/v1/listings

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use ky_core::domain::entities::listing::{Category, Listing};
use ky_core::repositories::{
    BookingRepository, ListingRepository, OtpRepository, PaymentRepository, UserRepository,
};
use ky_core::services::otp::SmsSender;
use ky_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::handlers::domain_error_response;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Filter label: `apartments`, `hotels`, `lodge`, `offices`, or `All`
    category: Option<String>,
}

#[derive(Serialize)]
struct ListingsPayload {
    listings: Vec<Listing>,
}

/// Public listing of active units, optionally filtered by category
///
/// Unknown filter labels (including the app's `All` tab) mean no filter.
pub async fn public_list<U, O, S, L, B, P>(
    state: web::Data<AppState<U, O, S, L, B, P>>,
    query: web::Query<ListQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    S: SmsSender + 'static,
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
    P: PaymentRepository + 'static,
{
    let category = query
        .category
        .as_deref()
        .and_then(Category::parse_filter);

    match state.listings.public_list(category).await {
        Ok(listings) => HttpResponse::Ok().json(ApiResponse::success(ListingsPayload { listings })),
        Err(err) => domain_error_response(&err),
    }
}
