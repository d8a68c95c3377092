//! Payment repository trait.

use async_trait::async_trait;

use crate::domain::entities::payment::Payment;
use crate::errors::DomainError;

/// Repository contract for Payment entities
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Persist a new payment record
    async fn create(&self, payment: Payment) -> Result<Payment, DomainError>;

    /// Payments made by a phone number, newest first
    async fn list_by_phone(&self, phone: &str) -> Result<Vec<Payment>, DomainError>;
}
