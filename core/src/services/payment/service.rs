//! Payment service implementation.

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::domain::entities::booking::Booking;
use crate::domain::entities::payment::{Payment, PaymentMethod};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{BookingRepository, ListingRepository, PaymentRepository, UserRepository};
use crate::services::booking::{BookingRequest, BookingService};
use crate::services::context::Caller;

/// What a customer submits to book and pay in one step
#[derive(Debug, Clone)]
pub struct PaymentRequest {
    pub listing_id: Uuid,
    pub method: PaymentMethod,
    pub total_amount: f64,
    pub rooms: Option<u32>,
    pub days_booked: Option<u32>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

/// Records payments; the pay flow also takes the booking
pub struct PaymentService<P, U, B, L>
where
    P: PaymentRepository,
    U: UserRepository,
    B: BookingRepository,
    L: ListingRepository,
{
    payments: Arc<P>,
    users: Arc<U>,
    listings: Arc<L>,
    bookings: Arc<BookingService<B, L>>,
}

impl<P, U, B, L> PaymentService<P, U, B, L>
where
    P: PaymentRepository,
    U: UserRepository,
    B: BookingRepository,
    L: ListingRepository,
{
    pub fn new(
        payments: Arc<P>,
        users: Arc<U>,
        listings: Arc<L>,
        bookings: Arc<BookingService<B, L>>,
    ) -> Self {
        Self {
            payments,
            users,
            listings,
            bookings,
        }
    }

    /// Book a listing and record the payment for it in one step
    ///
    /// The booking goes through the normal booking path, so date validation
    /// and the overlap check apply before anything is recorded.
    pub async fn pay(
        &self,
        caller: &Caller,
        request: PaymentRequest,
    ) -> DomainResult<(Booking, Payment)> {
        if !request.total_amount.is_finite() || request.total_amount <= 0.0 {
            return Err(DomainError::field(
                "total_amount",
                "total_amount must be a positive number.",
            ));
        }

        let user = self
            .users
            .find_by_id(caller.user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        let listing = self
            .listings
            .find_by_id(request.listing_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Listing"))?;

        let booking = self
            .bookings
            .book(
                caller,
                BookingRequest {
                    listing_id: request.listing_id,
                    check_in: request.check_in,
                    check_out: request.check_out,
                    rooms: request.rooms,
                    notes: None,
                },
            )
            .await?;

        let payment = self
            .payments
            .create(Payment::new(
                user.phone,
                listing.name,
                booking.rooms,
                request.method,
                request.total_amount,
                request.days_booked.unwrap_or(1),
                Some(booking.id),
            ))
            .await?;

        info!(
            payment_id = %payment.id,
            booking_id = %booking.id,
            method = payment.method.as_str(),
            event = "payment_recorded",
            "Booking and payment recorded"
        );

        Ok((booking, payment))
    }

    /// Payments made by the calling user, newest first
    pub async fn history(&self, caller: &Caller) -> DomainResult<Vec<Payment>> {
        let user = self
            .users
            .find_by_id(caller.user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;
        self.payments.list_by_phone(&user.phone).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::domain::entities::listing::{Category, Listing, ServiceType};
    use crate::domain::entities::user::{User, UserRole};
    use crate::repositories::{
        MockBookingRepository, MockListingRepository, MockPaymentRepository, MockUserRepository,
    };

    struct Fixture {
        service: PaymentService<
            MockPaymentRepository,
            MockUserRepository,
            MockBookingRepository,
            MockListingRepository,
        >,
        caller: Caller,
        listing_id: Uuid,
    }

    async fn fixture() -> Fixture {
        let payments = Arc::new(MockPaymentRepository::new());
        let users = Arc::new(MockUserRepository::new());
        let listings = Arc::new(MockListingRepository::new());
        let bookings = Arc::new(MockBookingRepository::new());

        let user = User::new("255700000000".to_string(), UserRole::Customer);
        let caller = Caller::new(user.id, user.role);
        users.insert(user).await;

        let now = Utc::now();
        let listing = Listing {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            name: "Bahari Beach Lodge".to_string(),
            details: String::new(),
            location: "Bahari Beach".to_string(),
            price: 80_000.0,
            is_active: true,
            category: Category::Lodge,
            service_type: ServiceType::Standalone,
            num_apartments: Some(6),
            num_rooms: Some(1),
            apartment_names: Vec::new(),
            num_floors: None,
            rooms_per_floor: Vec::new(),
            nearby_locations: Vec::new(),
            offers: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        let listing_id = listing.id;
        listings.insert(listing).await;

        let booking_service = Arc::new(BookingService::new(bookings, listings.clone()));
        Fixture {
            service: PaymentService::new(payments, users, listings, booking_service),
            caller,
            listing_id,
        }
    }

    fn request(listing_id: Uuid) -> PaymentRequest {
        PaymentRequest {
            listing_id,
            method: PaymentMethod::Mobile,
            total_amount: 240_000.0,
            rooms: Some(1),
            days_booked: Some(3),
            check_in: None,
            check_out: None,
        }
    }

    #[tokio::test]
    async fn test_pay_creates_linked_booking_and_payment() {
        let fx = fixture().await;
        let (booking, payment) = fx
            .service
            .pay(&fx.caller, request(fx.listing_id))
            .await
            .unwrap();

        assert_eq!(payment.booking_id, Some(booking.id));
        assert_eq!(payment.phone, "255700000000");
        assert_eq!(payment.listing_name, "Bahari Beach Lodge");
        assert_eq!(payment.days_booked, 3);
    }

    #[tokio::test]
    async fn test_pay_rejects_non_positive_amount() {
        let fx = fixture().await;
        for bad in [0.0, -100.0, f64::NAN] {
            let mut req = request(fx.listing_id);
            req.total_amount = bad;
            match fx.service.pay(&fx.caller, req).await {
                Err(DomainError::Fields { errors }) => {
                    assert!(errors.contains_key("total_amount"))
                }
                other => panic!("expected field error, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_pay_unknown_listing_is_not_found() {
        let fx = fixture().await;
        let result = fx.service.pay(&fx.caller, request(Uuid::new_v4())).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_history_lists_own_payments() {
        let fx = fixture().await;
        fx.service
            .pay(&fx.caller, request(fx.listing_id))
            .await
            .unwrap();
        fx.service
            .pay(&fx.caller, request(fx.listing_id))
            .await
            .unwrap();

        let history = fx.service.history(&fx.caller).await.unwrap();
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|p| p.phone == "255700000000"));
    }
}
