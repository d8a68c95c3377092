//! OTP repository trait.
//!
//! OTP records are keyed uniquely by phone number: requesting a new code
//! overwrites the old record, and records are never deleted.

use async_trait::async_trait;

use crate::domain::entities::phone_otp::PhoneOtp;
use crate::errors::DomainError;

/// Repository contract for PhoneOtp records
#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Find the live record for a phone number
    async fn find_by_phone(&self, phone: &str) -> Result<Option<PhoneOtp>, DomainError>;

    /// Insert or overwrite the record for the record's phone number
    async fn upsert(&self, record: PhoneOtp) -> Result<(), DomainError>;

    /// Durably register one verification attempt
    ///
    /// The increment must be atomic and guarded by the attempt cap
    /// (`attempts = attempts + 1` only while `attempts < MAX_ATTEMPTS`), so
    /// that concurrent verifications for the same phone cannot both slip
    /// past the cap. Returns `true` when the attempt was registered,
    /// `false` when the record is missing or the cap was already reached.
    async fn register_attempt(&self, phone: &str) -> Result<bool, DomainError>;

    /// Mark the record's code as successfully verified
    async fn mark_verified(&self, phone: &str) -> Result<(), DomainError>;
}
