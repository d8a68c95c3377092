//! Handler for PATCH /api/v1/bookings/{booking_id}/status

use actix_web::{web, HttpResponse};
use serde::Serialize;
use uuid::Uuid;

use ky_core::domain::entities::booking::Booking;
use ky_core::repositories::{
    BookingRepository, ListingRepository, OtpRepository, PaymentRepository, UserRepository,
};
use ky_core::services::otp::SmsSender;
use ky_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::dto::booking::UpdateBookingStatusRequest;
use crate::handlers::domain_error_response;
use crate::middleware::CallerContext;

#[derive(Serialize)]
struct BookingPayload {
    booking: Booking,
}

/// Confirm or cancel a booking (listing owner or admin)
///
/// Cancelled bookings are immutable; confirming one, or moving any
/// booking back to pending, is rejected.
pub async fn update_status<U, O, S, L, B, P>(
    state: web::Data<AppState<U, O, S, L, B, P>>,
    ctx: CallerContext,
    path: web::Path<Uuid>,
    request: web::Json<UpdateBookingStatusRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    S: SmsSender + 'static,
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
    P: PaymentRepository + 'static,
{
    let status = match request.parsed_status() {
        Ok(status) => status,
        Err(err) => return domain_error_response(&err),
    };

    match state
        .bookings
        .update_status(ctx.caller(), path.into_inner(), status)
        .await
    {
        Ok(booking) => HttpResponse::Ok().json(ApiResponse::success(BookingPayload { booking })),
        Err(err) => domain_error_response(&err),
    }
}
