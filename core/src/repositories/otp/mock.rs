//! Mock implementation of OtpRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::phone_otp::{PhoneOtp, MAX_ATTEMPTS};
use crate::errors::DomainError;

use super::repository::OtpRepository;

/// In-memory OTP repository for tests
#[derive(Default)]
pub struct MockOtpRepository {
    records: Arc<RwLock<HashMap<String, PhoneOtp>>>,
}

impl MockOtpRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record directly
    pub async fn insert(&self, record: PhoneOtp) {
        self.records
            .write()
            .await
            .insert(record.phone.clone(), record);
    }
}

#[async_trait]
impl OtpRepository for MockOtpRepository {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<PhoneOtp>, DomainError> {
        Ok(self.records.read().await.get(phone).cloned())
    }

    async fn upsert(&self, record: PhoneOtp) -> Result<(), DomainError> {
        self.records
            .write()
            .await
            .insert(record.phone.clone(), record);
        Ok(())
    }

    async fn register_attempt(&self, phone: &str) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        match records.get_mut(phone) {
            Some(record) if record.attempts < MAX_ATTEMPTS => {
                record.attempts += 1;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn mark_verified(&self, phone: &str) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        match records.get_mut(phone) {
            Some(record) => {
                record.verified = true;
                Ok(())
            }
            None => Err(DomainError::not_found("Verification code")),
        }
    }
}
