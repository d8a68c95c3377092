//! Authentication and OTP lifecycle configuration

use serde::{Deserialize, Serialize};

/// Authentication configuration: token issuance and OTP lifecycle
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret used to sign access tokens (HS256)
    pub jwt_secret: String,

    /// Access token lifetime in seconds
    pub token_ttl_seconds: i64,

    /// Requested OTP code length (values other than 4 or 6 coerce to 6)
    pub otp_code_length: usize,

    /// Minutes until a generated OTP expires
    pub otp_expiry_minutes: i64,

    /// Echo the generated OTP in the HTTP response instead of relying on
    /// SMS delivery. Development only.
    pub echo_otp: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("insecure-dev-secret"),
            token_ttl_seconds: 24 * 3600,
            otp_code_length: 4,
            otp_expiry_minutes: 5,
            echo_otp: false,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            jwt_secret: std::env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            token_ttl_seconds: std::env::var("TOKEN_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.token_ttl_seconds),
            otp_code_length: std::env::var("OTP_CODE_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.otp_code_length),
            otp_expiry_minutes: std::env::var("OTP_EXPIRY_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.otp_expiry_minutes),
            echo_otp: std::env::var("OTP_DEV_ECHO")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.echo_otp),
        }
    }
}
