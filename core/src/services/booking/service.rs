//! Booking service implementation.

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingStatus};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{BookingRepository, ListingRepository};
use crate::services::context::Caller;

/// A validated stay window
///
/// Constructed only through [`StayDates::new`], which enforces the
/// strictly-after invariant, so holding one means the range is well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayDates {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl StayDates {
    /// Build a stay window, rejecting inverted or zero-length ranges
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> DomainResult<Self> {
        if check_out <= check_in {
            return Err(DomainError::Validation {
                message: "check_out must be after check_in.".to_string(),
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Combine optional request dates into an optional validated window
    ///
    /// Both dates must be given together; a one-sided range is rejected
    /// before any overlap evaluation.
    pub fn from_optional(
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
    ) -> DomainResult<Option<Self>> {
        match (check_in, check_out) {
            (Some(ci), Some(co)) => Ok(Some(Self::new(ci, co)?)),
            (None, None) => Ok(None),
            _ => Err(DomainError::Validation {
                message: "check_in and check_out must be provided together.".to_string(),
            }),
        }
    }
}

/// What a customer submits to book a listing
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub listing_id: Uuid,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub rooms: Option<u32>,
    pub notes: Option<String>,
}

/// Creates bookings and guards the overlap invariant
pub struct BookingService<B: BookingRepository, L: ListingRepository> {
    bookings: Arc<B>,
    listings: Arc<L>,
}

impl<B: BookingRepository, L: ListingRepository> BookingService<B, L> {
    pub fn new(bookings: Arc<B>, listings: Arc<L>) -> Self {
        Self { bookings, listings }
    }

    /// Whether a candidate stay on a listing conflicts with an existing
    /// pending/confirmed booking
    ///
    /// `exclude_id` removes one record from the scan, for validating an
    /// update to that record. The first conflicting record decides; the
    /// caller surfaces this as a rejection, never a silent correction.
    pub async fn check_overlap(
        &self,
        listing_id: Uuid,
        stay: StayDates,
        exclude_id: Option<Uuid>,
    ) -> DomainResult<bool> {
        let existing = self.bookings.active_for_listing(listing_id).await?;
        Ok(existing
            .iter()
            .filter(|booking| Some(booking.id) != exclude_id)
            .any(|booking| booking.overlaps(stay.check_in, stay.check_out)))
    }

    /// Book a listing for the caller
    ///
    /// Dates are optional; when present they must form a valid window and
    /// pass the overlap check.
    pub async fn book(&self, caller: &Caller, request: BookingRequest) -> DomainResult<Booking> {
        let listing = self
            .listings
            .find_by_id(request.listing_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Listing"))?;

        let rooms = request.rooms.unwrap_or(1);
        if rooms == 0 {
            return Err(DomainError::Validation {
                message: "rooms must be at least 1.".to_string(),
            });
        }

        let stay = StayDates::from_optional(request.check_in, request.check_out)?;
        if let Some(stay) = stay {
            if self.check_overlap(listing.id, stay, None).await? {
                warn!(
                    listing_id = %listing.id,
                    event = "booking_conflict",
                    "Requested dates overlap an existing booking"
                );
                return Err(DomainError::Conflict {
                    message: "The listing is already booked for those dates.".to_string(),
                });
            }
        }

        let mut booking = Booking::new(caller.user_id, listing.id);
        booking.check_in = stay.map(|s| s.check_in);
        booking.check_out = stay.map(|s| s.check_out);
        booking.rooms = rooms;
        booking.notes = request.notes;

        let created = self.bookings.create(booking).await?;
        info!(
            booking_id = %created.id,
            listing_id = %listing.id,
            event = "booking_created",
            "Booking taken"
        );
        Ok(created)
    }

    /// The caller's booking history, newest first
    pub async fn history(&self, caller: &Caller) -> DomainResult<Vec<Booking>> {
        self.bookings.list_by_customer(caller.user_id).await
    }

    /// Confirm or cancel a booking
    ///
    /// Allowed for the owner of the booked listing and for admins.
    /// Cancelled bookings are immutable.
    pub async fn update_status(
        &self,
        caller: &Caller,
        booking_id: Uuid,
        status: BookingStatus,
    ) -> DomainResult<Booking> {
        let mut booking = self
            .bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking"))?;

        let listing = self
            .listings
            .find_by_id(booking.listing_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Listing"))?;

        if !caller.is_admin() && listing.owner_id != caller.user_id {
            return Err(DomainError::PermissionDenied);
        }

        match status {
            BookingStatus::Confirmed => booking.confirm()?,
            BookingStatus::Cancelled => booking.cancel()?,
            BookingStatus::Pending => {
                return Err(DomainError::BusinessRule {
                    message: "A booking cannot be moved back to pending.".to_string(),
                })
            }
        }

        let updated = self.bookings.update(booking).await?;
        info!(
            booking_id = %updated.id,
            status = updated.status.as_str(),
            event = "booking_status_changed",
            "Booking status updated"
        );
        Ok(updated)
    }

    /// Move a booking to new dates
    ///
    /// Only the booking's customer (or an admin) may reschedule, and the
    /// overlap check excludes the booking itself so moving within or
    /// adjacent to its own window is allowed.
    pub async fn reschedule(
        &self,
        caller: &Caller,
        booking_id: Uuid,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> DomainResult<Booking> {
        let mut booking = self
            .bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking"))?;

        if !caller.is_admin() && booking.customer_id != caller.user_id {
            return Err(DomainError::PermissionDenied);
        }
        if booking.status == BookingStatus::Cancelled {
            return Err(DomainError::BusinessRule {
                message: "Cancelled bookings cannot be rescheduled.".to_string(),
            });
        }

        let stay = StayDates::new(check_in, check_out)?;
        if self
            .check_overlap(booking.listing_id, stay, Some(booking.id))
            .await?
        {
            return Err(DomainError::Conflict {
                message: "The listing is already booked for those dates.".to_string(),
            });
        }

        booking.check_in = Some(stay.check_in);
        booking.check_out = Some(stay.check_out);
        self.bookings.update(booking).await
    }
}
