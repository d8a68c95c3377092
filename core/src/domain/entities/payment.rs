//! Payment entity: a recorded payment for a booking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the payment was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Mobile money payment
    Mobile,
    /// Bank transfer
    Bank,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Mobile => "mobile",
            PaymentMethod::Bank => "bank",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "mobile" => Some(PaymentMethod::Mobile),
            "bank" => Some(PaymentMethod::Bank),
            _ => None,
        }
    }
}

/// A payment recorded against a booking
///
/// The listing name is denormalized onto the payment so the record stays
/// readable even if the listing is later removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub id: Uuid,

    /// Payer's phone number
    pub phone: String,

    /// Name of the listing paid for
    pub listing_name: String,

    /// Number of rooms covered
    pub rooms: u32,

    /// Payment method used
    pub method: PaymentMethod,

    /// Total amount in TZS
    pub total_amount: f64,

    /// Number of days the payment covers
    pub days_booked: u32,

    /// The booking this payment settles, if still linked
    pub booking_id: Option<Uuid>,

    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// Record a new payment
    pub fn new(
        phone: String,
        listing_name: String,
        rooms: u32,
        method: PaymentMethod,
        total_amount: f64,
        days_booked: u32,
        booking_id: Option<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            phone,
            listing_name,
            rooms,
            method,
            total_amount,
            days_booked,
            booking_id,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_payment() {
        let booking_id = Uuid::new_v4();
        let payment = Payment::new(
            "255712345678".to_string(),
            "Mikocheni Apartments".to_string(),
            2,
            PaymentMethod::Mobile,
            90_000.0,
            3,
            Some(booking_id),
        );
        assert_eq!(payment.rooms, 2);
        assert_eq!(payment.method, PaymentMethod::Mobile);
        assert_eq!(payment.booking_id, Some(booking_id));
    }

    #[test]
    fn test_method_round_trip() {
        for method in [PaymentMethod::Mobile, PaymentMethod::Bank] {
            assert_eq!(PaymentMethod::parse(method.as_str()), Some(method));
        }
        assert_eq!(PaymentMethod::parse("cash"), None);
    }
}
