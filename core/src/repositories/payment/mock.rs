//! Mock implementation of PaymentRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::payment::Payment;
use crate::errors::DomainError;

use super::repository::PaymentRepository;

/// In-memory payment repository for tests
#[derive(Default)]
pub struct MockPaymentRepository {
    payments: Arc<RwLock<Vec<Payment>>>,
}

impl MockPaymentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentRepository for MockPaymentRepository {
    async fn create(&self, payment: Payment) -> Result<Payment, DomainError> {
        self.payments.write().await.push(payment.clone());
        Ok(payment)
    }

    async fn list_by_phone(&self, phone: &str) -> Result<Vec<Payment>, DomainError> {
        let payments = self.payments.read().await;
        let mut mine: Vec<Payment> = payments
            .iter()
            .filter(|p| p.phone == phone)
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(mine)
    }
}
