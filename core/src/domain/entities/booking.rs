//! Booking entity: a reservation of a listing over a date range.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

/// Status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }
}

/// A reservation of a listing by a customer
///
/// Dates are optional: a booking may be taken without a stay window (the
/// customer settles dates later). Date ranges are half-open
/// `[check_in, check_out)` — a booking ending on a day does not conflict
/// with one starting that day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier
    pub id: Uuid,

    /// Customer who made the booking
    pub customer_id: Uuid,

    /// The booked listing
    pub listing_id: Uuid,

    /// First day of the stay
    pub check_in: Option<NaiveDate>,

    /// Day after the last day of the stay
    pub check_out: Option<NaiveDate>,

    /// Number of rooms reserved
    pub rooms: u32,

    /// Free-text note from the customer
    pub notes: Option<String>,

    /// Current status
    pub status: BookingStatus,

    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Create a new pending booking with no stay window
    pub fn new(customer_id: Uuid, listing_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id,
            listing_id,
            check_in: None,
            check_out: None,
            rooms: 1,
            notes: None,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Whether this booking occupies its listing (pending or confirmed)
    pub fn is_active(&self) -> bool {
        matches!(self.status, BookingStatus::Pending | BookingStatus::Confirmed)
    }

    /// Half-open overlap test against a candidate `[check_in, check_out)`
    ///
    /// A booking missing either of its own dates occupies no days and can
    /// never conflict.
    pub fn overlaps(&self, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        match (self.check_in, self.check_out) {
            (Some(own_in), Some(own_out)) => own_in < check_out && own_out > check_in,
            _ => false,
        }
    }

    /// Transition pending → confirmed
    pub fn confirm(&mut self) -> Result<(), DomainError> {
        match self.status {
            BookingStatus::Pending => {
                self.status = BookingStatus::Confirmed;
                Ok(())
            }
            BookingStatus::Confirmed => Err(DomainError::BusinessRule {
                message: "Booking is already confirmed.".to_string(),
            }),
            BookingStatus::Cancelled => Err(DomainError::BusinessRule {
                message: "Cancelled bookings cannot be modified.".to_string(),
            }),
        }
    }

    /// Transition to cancelled; cancelled is terminal
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        match self.status {
            BookingStatus::Cancelled => Err(DomainError::BusinessRule {
                message: "Booking is already cancelled.".to_string(),
            }),
            _ => {
                self.status = BookingStatus::Cancelled;
                Ok(())
            }
        }
    }
}
