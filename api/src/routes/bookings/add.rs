//! Handler for POST /api/v1/bookings/add

use actix_web::{web, HttpResponse};
use serde::Serialize;

use ky_core::domain::entities::booking::Booking;
use ky_core::repositories::{
    BookingRepository, ListingRepository, OtpRepository, PaymentRepository, UserRepository,
};
use ky_core::services::otp::SmsSender;
use ky_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::dto::booking::AddBookingRequest;
use crate::handlers::domain_error_response;
use crate::middleware::CallerContext;

#[derive(Serialize)]
struct BookingPayload {
    booking: Booking,
}

/// Book a listing for the calling customer
///
/// # Request body
///
/// ```json
/// {
///     "listing_id": "...",
///     "check_in": "2024-01-10",
///     "check_out": "2024-01-15",
///     "rooms": 1,
///     "notes": "..."
/// }
/// ```
///
/// Dates are optional but must come as a pair; overlapping stays on the
/// same listing are rejected.
///
/// # Responses
///
/// - 200: `{"ok": true, "booking": {...}}`
/// - 400: invalid dates
/// - 404: unknown listing
/// - 409: dates overlap an existing booking
pub async fn add<U, O, S, L, B, P>(
    state: web::Data<AppState<U, O, S, L, B, P>>,
    ctx: CallerContext,
    request: web::Json<AddBookingRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    S: SmsSender + 'static,
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
    P: PaymentRepository + 'static,
{
    match state
        .bookings
        .book(ctx.caller(), request.into_inner().into())
        .await
    {
        Ok(booking) => HttpResponse::Ok().json(ApiResponse::success(BookingPayload { booking })),
        Err(err) => domain_error_response(&err),
    }
}
