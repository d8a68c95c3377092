//! Application state and route wiring.

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use ky_core::repositories::{
    BookingRepository, ListingRepository, OtpRepository, PaymentRepository, UserRepository,
};
use ky_core::services::auth::AuthService;
use ky_core::services::booking::BookingService;
use ky_core::services::listing::ListingService;
use ky_core::services::otp::SmsSender;
use ky_core::services::payment::PaymentService;
use ky_shared::config::AuthConfig;
use ky_shared::types::response::ApiResponse;

use crate::routes;

/// Shared services handed to every handler
pub struct AppState<U, O, S, L, B, P>
where
    U: UserRepository,
    O: OtpRepository,
    S: SmsSender,
    L: ListingRepository,
    B: BookingRepository,
    P: PaymentRepository,
{
    pub auth: Arc<AuthService<U, O, S>>,
    pub listings: Arc<ListingService<L>>,
    pub bookings: Arc<BookingService<B, L>>,
    pub payments: Arc<PaymentService<P, U, B, L>>,
    pub auth_config: AuthConfig,
}

/// Register every route under `/api/v1` plus the health check
///
/// The `TokenService` must be registered separately as
/// `web::Data<Arc<TokenService>>` for the bearer-auth extractor.
pub fn configure<U, O, S, L, B, P>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    S: SmsSender + 'static,
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
    P: PaymentRepository + 'static,
{
    cfg.route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route(
                            "/request-otp",
                            web::post().to(routes::auth::request_otp::<U, O, S, L, B, P>),
                        )
                        .route(
                            "/verify-otp",
                            web::post().to(routes::auth::verify_otp::<U, O, S, L, B, P>),
                        )
                        .route(
                            "/admin-login",
                            web::post().to(routes::auth::admin_login::<U, O, S, L, B, P>),
                        )
                        .route(
                            "/profile",
                            web::get().to(routes::auth::profile::<U, O, S, L, B, P>),
                        )
                        .route(
                            "/profile/update",
                            web::put().to(routes::auth::update_profile::<U, O, S, L, B, P>),
                        )
                        .route(
                            "/profile/update",
                            web::patch().to(routes::auth::update_profile::<U, O, S, L, B, P>),
                        )
                        .route("/logout", web::post().to(routes::auth::logout)),
                )
                .service(
                    web::scope("/listings")
                        .route(
                            "",
                            web::get().to(routes::listings::public_list::<U, O, S, L, B, P>),
                        )
                        .route(
                            "/owner",
                            web::get().to(routes::listings::owner_listings::<U, O, S, L, B, P>),
                        )
                        .route(
                            "/add",
                            web::post().to(routes::listings::add::<U, O, S, L, B, P>),
                        )
                        .route(
                            "/edit/{listing_id}",
                            web::put().to(routes::listings::edit::<U, O, S, L, B, P>),
                        )
                        .route(
                            "/edit/{listing_id}",
                            web::patch().to(routes::listings::edit::<U, O, S, L, B, P>),
                        ),
                )
                .service(
                    web::scope("/bookings")
                        .route(
                            "/add",
                            web::post().to(routes::bookings::add::<U, O, S, L, B, P>),
                        )
                        .route(
                            "/history",
                            web::get().to(routes::bookings::history::<U, O, S, L, B, P>),
                        )
                        .route(
                            "/{booking_id}/status",
                            web::patch().to(routes::bookings::update_status::<U, O, S, L, B, P>),
                        )
                        .route(
                            "/{booking_id}/reschedule",
                            web::patch().to(routes::bookings::reschedule::<U, O, S, L, B, P>),
                        ),
                )
                .service(
                    web::scope("/payments")
                        .route("", web::post().to(routes::payments::make_payment::<U, O, S, L, B, P>))
                        .route(
                            "/history",
                            web::get().to(routes::payments::history::<U, O, S, L, B, P>),
                        ),
                )
                .service(
                    web::scope("/admin")
                        .route(
                            "/users",
                            web::get().to(routes::admin::list_users::<U, O, S, L, B, P>),
                        )
                        .route(
                            "/listings",
                            web::get().to(routes::admin::list_listings::<U, O, S, L, B, P>),
                        ),
                ),
        )
        .default_service(web::route().to(not_found));
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "kukaya-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error("Endpoint not found."))
}
