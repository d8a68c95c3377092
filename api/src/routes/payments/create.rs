//! Handler for POST /api/v1/payments

use actix_web::{web, HttpResponse};
use serde::Serialize;

use ky_core::domain::entities::booking::Booking;
use ky_core::domain::entities::payment::Payment;
use ky_core::repositories::{
    BookingRepository, ListingRepository, OtpRepository, PaymentRepository, UserRepository,
};
use ky_core::services::otp::SmsSender;
use ky_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::dto::payment::MakePaymentRequest;
use crate::handlers::domain_error_response;
use crate::middleware::CallerContext;

#[derive(Serialize)]
struct PaymentPayload {
    booking: Booking,
    payment: Payment,
}

/// Book a listing and record the payment in one step
///
/// # Responses
///
/// - 200: `{"ok": true, "booking": {...}, "payment": {...}, "message": "..."}`
/// - 400: bad amount/method, invalid dates
/// - 404: unknown listing
/// - 409: dates overlap an existing booking
pub async fn make_payment<U, O, S, L, B, P>(
    state: web::Data<AppState<U, O, S, L, B, P>>,
    ctx: CallerContext,
    request: web::Json<MakePaymentRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    S: SmsSender + 'static,
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
    P: PaymentRepository + 'static,
{
    let payment_request = match request.into_inner().into_request() {
        Ok(payment_request) => payment_request,
        Err(err) => return domain_error_response(&err),
    };

    match state.payments.pay(ctx.caller(), payment_request).await {
        Ok((booking, payment)) => HttpResponse::Ok().json(
            ApiResponse::success(PaymentPayload { booking, payment })
                .with_message("Booking and payment successfully recorded."),
        ),
        Err(err) => domain_error_response(&err),
    }
}
