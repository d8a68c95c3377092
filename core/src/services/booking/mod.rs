//! Booking creation, date-overlap validation and status transitions
//!
//! The overlap validator is the invariant keeper here: for any listing, no
//! two pending/confirmed bookings may overlap under half-open
//! `[check_in, check_out)` semantics.

mod service;

#[cfg(test)]
mod tests;

pub use service::{BookingRequest, BookingService, StayDates};
