//! Booking DTOs.

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use ky_core::domain::entities::booking::BookingStatus;
use ky_core::errors::{DomainError, DomainResult};
use ky_core::services::booking::BookingRequest;

#[derive(Debug, Clone, Deserialize)]
pub struct AddBookingRequest {
    pub listing_id: Uuid,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub rooms: Option<u32>,
    pub notes: Option<String>,
}

impl From<AddBookingRequest> for BookingRequest {
    fn from(request: AddBookingRequest) -> Self {
        Self {
            listing_id: request.listing_id,
            check_in: request.check_in,
            check_out: request.check_out,
            rooms: request.rooms,
            notes: request.notes,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: String,
}

impl UpdateBookingStatusRequest {
    pub fn parsed_status(&self) -> DomainResult<BookingStatus> {
        BookingStatus::parse(&self.status).ok_or_else(|| {
            DomainError::field(
                "status",
                "status must be one of: pending, confirmed, cancelled.",
            )
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RescheduleBookingRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}
