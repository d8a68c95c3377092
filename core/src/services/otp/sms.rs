//! SMS delivery trait and test double.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::DomainError;

/// Outbound SMS delivery for verification codes
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Deliver a verification code to a phone number
    async fn send_code(&self, phone: &str, code: &str) -> Result<(), DomainError>;
}

/// Test double that records every message instead of sending it
#[derive(Default)]
pub struct MockSms {
    sent: Arc<RwLock<Vec<(String, String)>>>,
}

impl MockSms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages captured so far, as `(phone, code)` pairs
    pub async fn sent(&self) -> Vec<(String, String)> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl SmsSender for MockSms {
    async fn send_code(&self, phone: &str, code: &str) -> Result<(), DomainError> {
        self.sent
            .write()
            .await
            .push((phone.to_string(), code.to_string()));
        Ok(())
    }
}
