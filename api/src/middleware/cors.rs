//! CORS configuration.

use actix_cors::Cors;
use actix_web::http::header;

use ky_shared::config::ServerConfig;

/// Build the CORS middleware from server configuration
///
/// With no configured origins (development) any origin is allowed;
/// otherwise only the configured list.
pub fn create_cors(config: &ServerConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(3600);

    if config.cors_origins.is_empty() {
        cors.allow_any_origin()
    } else {
        config
            .cors_origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}
