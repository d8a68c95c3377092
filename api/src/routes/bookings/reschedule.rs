//! Handler for PATCH /api/v1/bookings/{booking_id}/reschedule

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
use crate::dto::booking::RescheduleBookingRequest;
use crate::handlers::domain_error_response;
use crate::middleware::CallerContext;

#[derive(Serialize)]
struct BookingPayload {
    booking: Booking,
}

/// Move a booking to new dates (the booking's customer, or an admin)
///
/// The overlap check excludes the booking itself, so shifting a stay
/// within its own window is allowed.
pub async fn reschedule<U, O, S, L, B, P>(
    state: web::Data<AppState<U, O, S, L, B, P>>,
    ctx: CallerContext,
    path: web::Path<Uuid>,
    request: web::Json<RescheduleBookingRequest>,
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
        .reschedule(
            ctx.caller(),
            path.into_inner(),
            request.check_in,
            request.check_out,
        )
        .await
    {
        Ok(booking) => HttpResponse::Ok().json(ApiResponse::success(BookingPayload { booking })),
        Err(err) => domain_error_response(&err),
    }
}
