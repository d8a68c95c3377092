//! Development SMS sender that logs instead of sending.

use async_trait::async_trait;
use tracing::info;

use ky_core::errors::DomainError;
use ky_core::services::otp::SmsSender;
use ky_shared::utils::phone::mask_phone;

/// Logs verification codes instead of delivering them
///
/// Stands in for a real SMS gateway during development; pair it with the
/// `OTP_DEV_ECHO` config flag to surface codes in API responses.
#[derive(Default)]
pub struct ConsoleSms;

impl ConsoleSms {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SmsSender for ConsoleSms {
    async fn send_code(&self, phone: &str, code: &str) -> Result<(), DomainError> {
        info!(
            phone = %mask_phone(phone),
            code = code,
            "[DEV MODE] verification code (no SMS gateway configured)"
        );
        Ok(())
    }
}
