//! Booking service tests against the in-memory repositories.

use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingStatus};
use crate::domain::entities::listing::{Category, Listing, ServiceType};
use crate::domain::entities::user::UserRole;
use crate::errors::DomainError;
use crate::repositories::{MockBookingRepository, MockListingRepository};
use crate::services::booking::{BookingRequest, BookingService, StayDates};
use crate::services::context::Caller;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn listing(owner_id: Uuid) -> Listing {
    let now = Utc::now();
    Listing {
        id: Uuid::new_v4(),
        owner_id,
        name: "Msasani Apartments".to_string(),
        details: String::new(),
        location: "Msasani, Dar es Salaam".to_string(),
        price: 60_000.0,
        is_active: true,
        category: Category::Apartment,
        service_type: ServiceType::Standalone,
        num_apartments: Some(2),
        num_rooms: Some(3),
        apartment_names: Vec::new(),
        num_floors: None,
        rooms_per_floor: Vec::new(),
        nearby_locations: Vec::new(),
        offers: Vec::new(),
        created_at: now,
        updated_at: now,
    }
}

struct Fixture {
    service: BookingService<MockBookingRepository, MockListingRepository>,
    bookings: Arc<MockBookingRepository>,
    listing: Listing,
    owner: Caller,
    customer: Caller,
}

async fn fixture() -> Fixture {
    let bookings = Arc::new(MockBookingRepository::new());
    let listings = Arc::new(MockListingRepository::new());

    let owner = Caller::new(Uuid::new_v4(), UserRole::Owner);
    let listing = listing(owner.user_id);
    listings.insert(listing.clone()).await;

    Fixture {
        service: BookingService::new(bookings.clone(), listings),
        bookings,
        listing,
        owner,
        customer: Caller::new(Uuid::new_v4(), UserRole::Customer),
    }
}

fn request(listing_id: Uuid, check_in: NaiveDate, check_out: NaiveDate) -> BookingRequest {
    BookingRequest {
        listing_id,
        check_in: Some(check_in),
        check_out: Some(check_out),
        rooms: None,
        notes: None,
    }
}

/// Seed a booking with explicit dates and status, bypassing the service
async fn seed_booking(
    fx: &Fixture,
    check_in: NaiveDate,
    check_out: NaiveDate,
    status: BookingStatus,
) -> Booking {
    let mut booking = Booking::new(fx.customer.user_id, fx.listing.id);
    booking.check_in = Some(check_in);
    booking.check_out = Some(check_out);
    booking.status = status;
    fx.bookings.insert(booking.clone()).await;
    booking
}

#[tokio::test]
async fn test_book_without_dates() {
    let fx = fixture().await;
    let booking = fx
        .service
        .book(
            &fx.customer,
            BookingRequest {
                listing_id: fx.listing.id,
                check_in: None,
                check_out: None,
                rooms: Some(2),
                notes: Some("Karibu!".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.rooms, 2);
    assert!(booking.check_in.is_none());
}

#[tokio::test]
async fn test_book_unknown_listing_is_not_found() {
    let fx = fixture().await;
    let result = fx
        .service
        .book(
            &fx.customer,
            request(Uuid::new_v4(), date(2024, 1, 10), date(2024, 1, 15)),
        )
        .await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_inverted_range_rejected_before_overlap() {
    let fx = fixture().await;
    for (ci, co) in [
        (date(2024, 1, 15), date(2024, 1, 10)),
        (date(2024, 1, 10), date(2024, 1, 10)),
    ] {
        let result = fx.service.book(&fx.customer, request(fx.listing.id, ci, co)).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }
}

#[tokio::test]
async fn test_one_sided_dates_rejected() {
    let fx = fixture().await;
    let result = fx
        .service
        .book(
            &fx.customer,
            BookingRequest {
                listing_id: fx.listing.id,
                check_in: Some(date(2024, 1, 10)),
                check_out: None,
                rooms: None,
                notes: None,
            },
        )
        .await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn test_overlapping_confirmed_booking_conflicts() {
    let fx = fixture().await;
    seed_booking(&fx, date(2024, 1, 12), date(2024, 1, 20), BookingStatus::Confirmed).await;

    let result = fx
        .service
        .book(
            &fx.customer,
            request(fx.listing.id, date(2024, 1, 10), date(2024, 1, 15)),
        )
        .await;
    assert!(matches!(result, Err(DomainError::Conflict { .. })));
}

#[tokio::test]
async fn test_cancelled_booking_does_not_conflict() {
    let fx = fixture().await;
    seed_booking(&fx, date(2024, 1, 12), date(2024, 1, 20), BookingStatus::Cancelled).await;

    let booking = fx
        .service
        .book(
            &fx.customer,
            request(fx.listing.id, date(2024, 1, 10), date(2024, 1, 15)),
        )
        .await
        .unwrap();
    assert_eq!(booking.check_in, Some(date(2024, 1, 10)));
}

#[tokio::test]
async fn test_touching_ranges_do_not_conflict() {
    let fx = fixture().await;
    seed_booking(&fx, date(2024, 1, 12), date(2024, 1, 15), BookingStatus::Confirmed).await;

    // New stay starts exactly when the existing one ends
    let booking = fx
        .service
        .book(
            &fx.customer,
            request(fx.listing.id, date(2024, 1, 15), date(2024, 1, 20)),
        )
        .await
        .unwrap();
    assert_eq!(booking.check_in, Some(date(2024, 1, 15)));
}

#[tokio::test]
async fn test_dateless_bookings_do_not_conflict() {
    let fx = fixture().await;
    let mut dateless = Booking::new(fx.customer.user_id, fx.listing.id);
    dateless.status = BookingStatus::Confirmed;
    fx.bookings.insert(dateless).await;

    let stay = StayDates::new(date(2024, 1, 10), date(2024, 1, 15)).unwrap();
    assert!(!fx
        .service
        .check_overlap(fx.listing.id, stay, None)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_check_overlap_excludes_given_id() {
    let fx = fixture().await;
    let existing =
        seed_booking(&fx, date(2024, 1, 12), date(2024, 1, 20), BookingStatus::Confirmed).await;

    let stay = StayDates::new(date(2024, 1, 10), date(2024, 1, 15)).unwrap();
    assert!(fx
        .service
        .check_overlap(fx.listing.id, stay, None)
        .await
        .unwrap());
    assert!(!fx
        .service
        .check_overlap(fx.listing.id, stay, Some(existing.id))
        .await
        .unwrap());
}

#[tokio::test]
async fn test_owner_confirms_and_cancels() {
    let fx = fixture().await;
    let booking =
        seed_booking(&fx, date(2024, 2, 1), date(2024, 2, 5), BookingStatus::Pending).await;

    let confirmed = fx
        .service
        .update_status(&fx.owner, booking.id, BookingStatus::Confirmed)
        .await
        .unwrap();
    assert_eq!(confirmed.status, BookingStatus::Confirmed);

    let cancelled = fx
        .service
        .update_status(&fx.owner, booking.id, BookingStatus::Cancelled)
        .await
        .unwrap();
    assert_eq!(cancelled.status, BookingStatus::Cancelled);

    // Cancelled is terminal
    let result = fx
        .service
        .update_status(&fx.owner, booking.id, BookingStatus::Confirmed)
        .await;
    assert!(matches!(result, Err(DomainError::BusinessRule { .. })));
}

#[tokio::test]
async fn test_customer_cannot_change_status() {
    let fx = fixture().await;
    let booking =
        seed_booking(&fx, date(2024, 2, 1), date(2024, 2, 5), BookingStatus::Pending).await;

    let result = fx
        .service
        .update_status(&fx.customer, booking.id, BookingStatus::Confirmed)
        .await;
    assert!(matches!(result, Err(DomainError::PermissionDenied)));
}

#[tokio::test]
async fn test_reschedule_excludes_own_booking_from_overlap() {
    let fx = fixture().await;
    let booking =
        seed_booking(&fx, date(2024, 1, 12), date(2024, 1, 20), BookingStatus::Pending).await;

    // Shift by two days, overlapping its own old window only
    let updated = fx
        .service
        .reschedule(&fx.customer, booking.id, date(2024, 1, 14), date(2024, 1, 22))
        .await
        .unwrap();
    assert_eq!(updated.check_in, Some(date(2024, 1, 14)));
    assert_eq!(updated.check_out, Some(date(2024, 1, 22)));
}

#[tokio::test]
async fn test_reschedule_conflicts_with_other_booking() {
    let fx = fixture().await;
    let booking =
        seed_booking(&fx, date(2024, 1, 1), date(2024, 1, 5), BookingStatus::Pending).await;
    seed_booking(&fx, date(2024, 1, 12), date(2024, 1, 20), BookingStatus::Confirmed).await;

    let result = fx
        .service
        .reschedule(&fx.customer, booking.id, date(2024, 1, 14), date(2024, 1, 16))
        .await;
    assert!(matches!(result, Err(DomainError::Conflict { .. })));
}

#[tokio::test]
async fn test_reschedule_requires_booking_customer() {
    let fx = fixture().await;
    let booking =
        seed_booking(&fx, date(2024, 1, 1), date(2024, 1, 5), BookingStatus::Pending).await;

    let stranger = Caller::new(Uuid::new_v4(), UserRole::Customer);
    let result = fx
        .service
        .reschedule(&stranger, booking.id, date(2024, 2, 1), date(2024, 2, 3))
        .await;
    assert!(matches!(result, Err(DomainError::PermissionDenied)));
}

#[tokio::test]
async fn test_history_only_lists_own_bookings() {
    let fx = fixture().await;
    seed_booking(&fx, date(2024, 1, 1), date(2024, 1, 5), BookingStatus::Pending).await;

    let mut foreign = Booking::new(Uuid::new_v4(), fx.listing.id);
    foreign.check_in = Some(date(2024, 3, 1));
    foreign.check_out = Some(date(2024, 3, 4));
    fx.bookings.insert(foreign).await;

    let history = fx.service.history(&fx.customer).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].customer_id, fx.customer.user_id);
}
