//! Handler for GET /api/v1/payments/history

use actix_web::{web, HttpResponse};
use serde::Serialize;

use ky_core::domain::entities::payment::Payment;
use ky_core::repositories::{
    BookingRepository, ListingRepository, OtpRepository, PaymentRepository, UserRepository,
};
use ky_core::services::otp::SmsSender;
use ky_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::handlers::domain_error_response;
use crate::middleware::CallerContext;

#[derive(Serialize)]
struct PaymentsPayload {
    payments: Vec<Payment>,
}

/// The calling user's payments, newest first
pub async fn history<U, O, S, L, B, P>(
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
    match state.payments.history(ctx.caller()).await {
        Ok(payments) => HttpResponse::Ok().json(ApiResponse::success(PaymentsPayload { payments })),
        Err(err) => domain_error_response(&err),
    }
}
