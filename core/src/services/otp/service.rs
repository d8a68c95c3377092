//! OTP lifecycle service implementation.

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use ky_shared::utils::phone::mask_phone;

use crate::domain::entities::phone_otp::{PhoneOtp, DEFAULT_CODE_LENGTH};
use crate::errors::{DomainError, DomainResult, OtpError};
use crate::repositories::OtpRepository;

use super::sms::SmsSender;

/// OTP lifecycle configuration
#[derive(Debug, Clone)]
pub struct OtpConfig {
    /// Requested code length; values other than 4 or 6 coerce to 6
    pub code_length: usize,

    /// Minutes until a generated code expires
    pub expiry_minutes: i64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            expiry_minutes: 5,
        }
    }
}

/// A freshly issued code, as returned to the caller
#[derive(Debug, Clone)]
pub struct IssuedOtp {
    /// The generated code (exposed to the HTTP response only in dev mode)
    pub code: String,

    /// When the code stops being accepted
    pub expires_at: DateTime<Utc>,
}

/// Manages the OTP lifecycle: generation, verification, expiry and
/// attempt-limiting, one record per phone number
pub struct OtpService<O: OtpRepository, S: SmsSender> {
    repo: Arc<O>,
    sms: Arc<S>,
    config: OtpConfig,
}

impl<O: OtpRepository, S: SmsSender> OtpService<O, S> {
    pub fn new(repo: Arc<O>, sms: Arc<S>, config: OtpConfig) -> Self {
        Self { repo, sms, config }
    }

    /// Generate and deliver a fresh code for a phone number
    ///
    /// Overwrites any previous record for the phone: attempts reset to 0,
    /// verified resets to false, the expiry clock restarts.
    pub async fn generate(&self, phone: &str) -> DomainResult<IssuedOtp> {
        let record = PhoneOtp::issue_with_expiry(
            phone.to_string(),
            self.config.code_length,
            self.config.expiry_minutes,
        );
        let issued = IssuedOtp {
            code: record.code.clone(),
            expires_at: record.created_at + Duration::minutes(record.expiry_minutes),
        };

        self.repo.upsert(record).await?;
        self.sms.send_code(phone, &issued.code).await?;

        info!(
            phone = %mask_phone(phone),
            event = "otp_generated",
            "Issued verification code"
        );

        Ok(issued)
    }

    /// Verify a submitted code against the phone's live record
    ///
    /// Order of checks: expiry, then the attempt cap, then the durable
    /// attempt increment, then the code comparison. The increment happens
    /// on every call that reaches it — including mismatches — which bounds
    /// brute force at the cap regardless of outcome. Expired checks do not
    /// touch the counter.
    pub async fn verify(&self, phone: &str, submitted: &str) -> DomainResult<()> {
        let record = self
            .repo
            .find_by_phone(phone)
            .await?
            .ok_or_else(|| DomainError::not_found("Verification code"))?;

        if record.is_expired() {
            warn!(phone = %mask_phone(phone), event = "otp_expired", "Verification past expiry");
            return Err(OtpError::Expired.into());
        }

        if record.attempts_exhausted() {
            warn!(
                phone = %mask_phone(phone),
                event = "otp_attempts_exhausted",
                "Verification attempt cap reached"
            );
            return Err(OtpError::AttemptsExhausted.into());
        }

        // Guarded increment; a `false` here means a concurrent verification
        // burned the last attempt between our read and now.
        if !self.repo.register_attempt(phone).await? {
            return Err(OtpError::AttemptsExhausted.into());
        }

        if record.matches(submitted) {
            self.repo.mark_verified(phone).await?;
            info!(phone = %mask_phone(phone), event = "otp_verified", "Verification succeeded");
            Ok(())
        } else {
            warn!(
                phone = %mask_phone(phone),
                event = "otp_mismatch",
                remaining = record.remaining_attempts() - 1,
                "Verification code mismatch"
            );
            Err(OtpError::Mismatch.into())
        }
    }
}
