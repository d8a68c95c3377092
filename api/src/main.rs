//! Kukaya API server entry point.

use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use ky_api::{app, middleware};
use ky_core::services::auth::AuthService;
use ky_core::services::booking::BookingService;
use ky_core::services::listing::ListingService;
use ky_core::services::otp::{OtpConfig, OtpService};
use ky_core::services::payment::PaymentService;
use ky_core::services::token::TokenService;
use ky_infra::database::mysql::{
    MySqlBookingRepository, MySqlListingRepository, MySqlOtpRepository, MySqlPaymentRepository,
    MySqlUserRepository,
};
use ky_infra::{ConsoleSms, DatabasePool};
use ky_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    info!("Starting Kukaya API server");

    let pool = DatabasePool::new(&config.database).await?;
    pool.health_check().await?;
    let mysql = pool.inner();

    let users = Arc::new(MySqlUserRepository::new(mysql.clone()));
    let otps = Arc::new(MySqlOtpRepository::new(mysql.clone()));
    let listings = Arc::new(MySqlListingRepository::new(mysql.clone()));
    let bookings = Arc::new(MySqlBookingRepository::new(mysql.clone()));
    let payments = Arc::new(MySqlPaymentRepository::new(mysql));

    let sms = Arc::new(ConsoleSms::new());
    let tokens = Arc::new(TokenService::new(
        config.auth.jwt_secret.clone(),
        config.auth.token_ttl_seconds,
    ));

    let otp_service = OtpService::new(
        otps,
        sms,
        OtpConfig {
            code_length: config.auth.otp_code_length,
            expiry_minutes: config.auth.otp_expiry_minutes,
        },
    );

    let auth_service = Arc::new(AuthService::new(users.clone(), otp_service, tokens.clone()));
    let listing_service = Arc::new(ListingService::new(listings.clone()));
    let booking_service = Arc::new(BookingService::new(bookings, listings.clone()));
    let payment_service = Arc::new(PaymentService::new(
        payments,
        users,
        listings,
        booking_service.clone(),
    ));

    let state = web::Data::new(app::AppState {
        auth: auth_service,
        listings: listing_service,
        bookings: booking_service,
        payments: payment_service,
        auth_config: config.auth.clone(),
    });
    let tokens_data = web::Data::new(tokens);

    let bind_address = config.server.bind_address();
    let server_config = config.server.clone();
    info!(address = %bind_address, "Server binding");

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::cors::create_cors(&server_config))
            .app_data(state.clone())
            .app_data(tokens_data.clone())
            .configure(
                app::configure::<
                    MySqlUserRepository,
                    MySqlOtpRepository,
                    ConsoleSms,
                    MySqlListingRepository,
                    MySqlBookingRepository,
                    MySqlPaymentRepository,
                >,
            )
    });

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(bind_address)?.run().await?;
    Ok(())
}
