//! Payment DTOs.

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use ky_core::domain::entities::payment::PaymentMethod;
use ky_core::errors::{DomainError, DomainResult};
use ky_core::services::payment::PaymentRequest;

#[derive(Debug, Clone, Deserialize)]
pub struct MakePaymentRequest {
    pub listing_id: Uuid,
    pub payment_method: String,
    pub total_amount: f64,
    pub rooms: Option<u32>,
    pub days_booked: Option<u32>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

impl MakePaymentRequest {
    /// Parse the method string and build the service request
    pub fn into_request(self) -> DomainResult<PaymentRequest> {
        let method = PaymentMethod::parse(&self.payment_method).ok_or_else(|| {
            DomainError::field(
                "payment_method",
                "Payment method must be either 'mobile' or 'bank'.",
            )
        })?;

        Ok(PaymentRequest {
            listing_id: self.listing_id,
            method,
            total_amount: self.total_amount,
            rooms: self.rooms,
            days_booked: self.days_booked,
            check_in: self.check_in,
            check_out: self.check_out,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parsing() {
        let request = MakePaymentRequest {
            listing_id: Uuid::new_v4(),
            payment_method: "mobile".to_string(),
            total_amount: 120_000.0,
            rooms: None,
            days_booked: None,
            check_in: None,
            check_out: None,
        };
        assert_eq!(
            request.into_request().unwrap().method,
            PaymentMethod::Mobile
        );
    }

    #[test]
    fn test_unknown_method_is_field_error() {
        let request = MakePaymentRequest {
            listing_id: Uuid::new_v4(),
            payment_method: "cash".to_string(),
            total_amount: 120_000.0,
            rooms: None,
            days_booked: None,
            check_in: None,
            check_out: None,
        };
        match request.into_request() {
            Err(DomainError::Fields { errors }) => {
                assert!(errors.contains_key("payment_method"))
            }
            other => panic!("expected field error, got {other:?}"),
        }
    }
}
