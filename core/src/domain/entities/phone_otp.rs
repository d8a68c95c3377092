//! One-time passcode entity for phone-based authentication.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Maximum number of verification attempts per issued code
pub const MAX_ATTEMPTS: i32 = 5;

/// Default length of a generated code
pub const DEFAULT_CODE_LENGTH: usize = 4;

/// Default expiration time for codes, in minutes
pub const DEFAULT_EXPIRY_MINUTES: i64 = 5;

/// One-time passcode record, keyed uniquely by phone number
///
/// A phone has at most one live record: requesting a new code overwrites the
/// previous one. Records are never deleted, only superseded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneOtp {
    /// Phone number the code was issued to (canonical `255XXXXXXXXX` form)
    pub phone: String,

    /// The numeric code, 4 or 6 digits
    pub code: String,

    /// When the code was generated
    pub created_at: DateTime<Utc>,

    /// Whether the code has been successfully verified
    pub verified: bool,

    /// Number of verification attempts made against this code
    pub attempts: i32,

    /// Minutes until the code expires, counted from `created_at`
    pub expiry_minutes: i64,
}

impl PhoneOtp {
    /// Issue a fresh code for a phone number
    ///
    /// `length` is coerced to 6 unless it is exactly 4 or 6. Attempts are
    /// reset to 0 and the record is unverified.
    pub fn issue(phone: String, length: usize) -> Self {
        Self::issue_with_expiry(phone, length, DEFAULT_EXPIRY_MINUTES)
    }

    /// Issue a fresh code with a custom expiry, mainly for tests
    pub fn issue_with_expiry(phone: String, length: usize, expiry_minutes: i64) -> Self {
        Self {
            phone,
            code: Self::generate_code(length),
            created_at: Utc::now(),
            verified: false,
            attempts: 0,
            expiry_minutes,
        }
    }

    /// Generate a random numeric code of the requested length
    ///
    /// Lengths other than 4 or 6 coerce to 6. Leading zeros are allowed.
    pub fn generate_code(length: usize) -> String {
        let length = if length == 4 || length == 6 { length } else { 6 };
        let mut rng = rand::thread_rng();
        (0..length)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }

    /// Whether the code's expiry window has elapsed
    pub fn is_expired(&self) -> bool {
        let elapsed = Utc::now() - self.created_at;
        elapsed > Duration::seconds(self.expiry_minutes * 60)
    }

    /// Whether the attempt cap has been reached
    pub fn attempts_exhausted(&self) -> bool {
        self.attempts >= MAX_ATTEMPTS
    }

    /// Compare a submitted code against the stored one in constant time
    pub fn matches(&self, submitted: &str) -> bool {
        self.code.len() == submitted.len()
            && constant_time_eq(self.code.as_bytes(), submitted.as_bytes())
    }

    /// Remaining verification attempts (0 when exhausted)
    pub fn remaining_attempts(&self) -> i32 {
        (MAX_ATTEMPTS - self.attempts).max(0)
    }
}
