//! The booking workflow: validate, resolve, persist, notify.

use charter_fleet::{CityRepository, VehicleRepository};
use chrono::NaiveDateTime;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::{BookingDetails, BookingRequest, BookingStatus};
use crate::notify::{self, NotificationSender};
use crate::repository::BookingRepository;
use crate::submission::BookingSubmission;
use crate::validate::validate_submission;

/// Runs booking intake and lifecycle updates against the catalog, the
/// booking store and the notification transport.
pub struct BookingService {
    cities: Arc<dyn CityRepository>,
    vehicles: Arc<dyn VehicleRepository>,
    bookings: Arc<dyn BookingRepository>,
    sender: Arc<dyn NotificationSender>,
    admin_email: String,
}

impl BookingService {
    pub fn new(
        cities: Arc<dyn CityRepository>,
        vehicles: Arc<dyn VehicleRepository>,
        bookings: Arc<dyn BookingRepository>,
        sender: Arc<dyn NotificationSender>,
        admin_email: String,
    ) -> Self {
        Self {
            cities,
            vehicles,
            bookings,
            sender,
            admin_email,
        }
    }

    /// Takes a raw submission all the way to a persisted PENDING booking.
    /// `now` is the server wall clock, passed in so the future-pickup rule
    /// stays testable.
    pub async fn submit(
        &self,
        submission: BookingSubmission,
        now: NaiveDateTime,
    ) -> Result<BookingDetails, BookingError> {
        // 1. Field rules; every violation is reported at once
        let booking = validate_submission(&submission).map_err(BookingError::Validation)?;

        // 2. Business rule: the pickup moment must still be ahead of us
        if booking.pickup_datetime() <= now {
            return Err(BookingError::PastPickup);
        }

        // 3. Resolve the city by slug or display name
        let city = self
            .cities
            .find_by_reference(&booking.city)
            .await?
            .ok_or(BookingError::UnknownCity)?;

        // 4. Resolve the vehicle preference, when one was given. The id must
        //    belong to this city and the vehicle must still be active; an id
        //    that is not even a UUID matches nothing.
        let vehicle = match booking.vehicle_id.as_deref() {
            Some(raw) => {
                let found = match Uuid::parse_str(raw) {
                    Ok(id) => self.vehicles.find_bookable(id, city.id).await?,
                    Err(_) => None,
                };
                Some(found.ok_or(BookingError::UnknownVehicle)?)
            }
            None => None,
        };

        // 5. Persist; the lifecycle starts at PENDING, never anywhere else
        let record = BookingRequest::new(&booking, city.id, vehicle.as_ref().map(|v| v.id));
        self.bookings.insert(&record).await?;

        tracing::info!(
            booking_id = %record.id,
            city = %city.slug,
            mode = %record.transport_mode,
            vehicle = vehicle.as_ref().map(|v| v.name.as_str()),
            "booking request saved"
        );

        // 6. Tell the back office. Delivery is best-effort: a failure is
        //    logged and the booking stands.
        let message = notify::booking_notification(&booking, &self.admin_email);
        if let Err(error) = self.sender.send(&message).await {
            tracing::warn!(booking_id = %record.id, %error, "booking notification failed");
        }

        Ok(BookingDetails {
            booking: record,
            city: city.summary(),
            vehicle: vehicle.map(|v| v.summary()),
        })
    }

    /// Applies an administrative status change. Only the five enumerated
    /// values are accepted; ordering between the non-terminal states is the
    /// operations team's call, not ours.
    pub async fn update_status(
        &self,
        id: Uuid,
        requested: &str,
    ) -> Result<BookingDetails, BookingError> {
        let status = BookingStatus::parse(requested)
            .ok_or_else(|| BookingError::InvalidStatus(requested.to_string()))?;

        let updated = self
            .bookings
            .update_status(id, status)
            .await?
            .ok_or(BookingError::UnknownBooking(id))?;

        tracing::info!(booking_id = %id, status = %status, "booking status updated");
        Ok(updated)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// One message per violated field rule, in form order.
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Pickup date and time must be in the future")]
    PastPickup,

    #[error("Invalid city selected")]
    UnknownCity,

    #[error("Invalid vehicle selected for this city")]
    UnknownVehicle,

    #[error("Booking not found")]
    UnknownBooking(Uuid),

    #[error("Invalid status. Must be one of: PENDING, CONFIRMED, IN_PROGRESS, COMPLETED, CANCELLED")]
    InvalidStatus(String),

    #[error("storage unavailable: {0}")]
    Store(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::EmailMessage;
    use async_trait::async_trait;
    use charter_fleet::{
        City, CityRef, CityWithCount, TransportMode, Vehicle, VehicleDetails, VehicleFilter,
    };
    use chrono::{NaiveDate, Utc};
    use std::sync::Mutex;

    // ------------------------------------------------------------------
    // doubles
    // ------------------------------------------------------------------

    struct StubFleet {
        cities: Vec<City>,
        vehicles: Vec<Vehicle>,
    }

    #[async_trait]
    impl CityRepository for StubFleet {
        async fn find_by_reference(
            &self,
            reference: &str,
        ) -> Result<Option<City>, Box<dyn std::error::Error + Send + Sync>> {
            let slug = reference.to_lowercase();
            Ok(self
                .cities
                .iter()
                .find(|c| c.slug == slug || c.name.eq_ignore_ascii_case(reference))
                .cloned())
        }

        async fn find_by_slug(
            &self,
            _slug: &str,
        ) -> Result<Option<CityWithCount>, Box<dyn std::error::Error + Send + Sync>> {
            unimplemented!("not exercised by the intake workflow")
        }

        async fn find_by_id(
            &self,
            id: Uuid,
        ) -> Result<Option<City>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(self.cities.iter().find(|c| c.id == id).cloned())
        }

        async fn list_active(
            &self,
        ) -> Result<Vec<CityWithCount>, Box<dyn std::error::Error + Send + Sync>> {
            unimplemented!("not exercised by the intake workflow")
        }

        async fn insert(
            &self,
            _city: &City,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            unimplemented!("not exercised by the intake workflow")
        }
    }

    #[async_trait]
    impl VehicleRepository for StubFleet {
        async fn find_bookable(
            &self,
            id: Uuid,
            city_id: Uuid,
        ) -> Result<Option<Vehicle>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(self
                .vehicles
                .iter()
                .find(|v| v.id == id && v.city_id == city_id && v.is_active)
                .cloned())
        }

        async fn find_by_id(
            &self,
            _id: Uuid,
        ) -> Result<Option<VehicleDetails>, Box<dyn std::error::Error + Send + Sync>> {
            unimplemented!("not exercised by the intake workflow")
        }

        async fn list(
            &self,
            _filter: &VehicleFilter,
        ) -> Result<Vec<VehicleDetails>, Box<dyn std::error::Error + Send + Sync>> {
            unimplemented!("not exercised by the intake workflow")
        }

        async fn categories_for_city(
            &self,
            _city_slug: &str,
        ) -> Result<Vec<TransportMode>, Box<dyn std::error::Error + Send + Sync>> {
            unimplemented!("not exercised by the intake workflow")
        }

        async fn insert(
            &self,
            _vehicle: &Vehicle,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            unimplemented!("not exercised by the intake workflow")
        }

        async fn update(
            &self,
            _vehicle: &Vehicle,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            unimplemented!("not exercised by the intake workflow")
        }

        async fn delete(
            &self,
            _id: Uuid,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            unimplemented!("not exercised by the intake workflow")
        }

        async fn count(&self) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
            Ok(self.vehicles.len() as u64)
        }
    }

    #[derive(Default)]
    struct FakeBookings {
        rows: Mutex<Vec<BookingRequest>>,
    }

    impl FakeBookings {
        fn stored(&self) -> Vec<BookingRequest> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl BookingRepository for FakeBookings {
        async fn insert(
            &self,
            booking: &BookingRequest,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            self.rows.lock().unwrap().push(booking.clone());
            Ok(())
        }

        async fn find_by_id(
            &self,
            id: Uuid,
        ) -> Result<Option<BookingDetails>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|b| b.id == id)
                .map(|b| details(b.clone())))
        }

        async fn list(
            &self,
            _filter: &crate::repository::BookingFilter,
            _page: crate::repository::PageRequest,
        ) -> Result<(Vec<BookingDetails>, u64), Box<dyn std::error::Error + Send + Sync>> {
            unimplemented!("not exercised by the intake workflow")
        }

        async fn update_status(
            &self,
            id: Uuid,
            status: BookingStatus,
        ) -> Result<Option<BookingDetails>, Box<dyn std::error::Error + Send + Sync>> {
            let mut rows = self.rows.lock().unwrap();
            Ok(rows.iter_mut().find(|b| b.id == id).map(|b| {
                b.update_status(status);
                details(b.clone())
            }))
        }
    }

    fn details(booking: BookingRequest) -> BookingDetails {
        let city = CityRef {
            id: booking.city_id,
            name: "London".to_string(),
            slug: "london".to_string(),
        };
        BookingDetails {
            booking,
            city,
            vehicle: None,
        }
    }

    #[derive(Default)]
    struct RecordingSender {
        sent: Mutex<Vec<EmailMessage>>,
    }

    #[async_trait]
    impl NotificationSender for RecordingSender {
        async fn send(
            &self,
            message: &EmailMessage,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            self.sent.lock().unwrap().push(message.clone());
            Ok(())
        }
    }

    struct FailingSender;

    #[async_trait]
    impl NotificationSender for FailingSender {
        async fn send(
            &self,
            _message: &EmailMessage,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            Err("smtp relay unreachable".into())
        }
    }

    // ------------------------------------------------------------------
    // fixtures
    // ------------------------------------------------------------------

    fn vehicle(name: &str, category: TransportMode, city_id: Uuid, active: bool) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category,
            capacity: "Up to 3 Passengers".to_string(),
            description: "Chauffeur-driven saloon for airport runs".to_string(),
            features: vec!["WiFi".to_string()],
            image: String::new(),
            price_range: "£150-300".to_string(),
            is_active: active,
            city_id,
            created_at: Utc::now(),
        }
    }

    struct Harness {
        service: BookingService,
        bookings: Arc<FakeBookings>,
        sent: Arc<RecordingSender>,
        london: City,
        london_car: Vehicle,
        retired_car: Vehicle,
        manchester_car: Vehicle,
    }

    fn harness() -> Harness {
        let london = City::new("London", "london", "United Kingdom");
        let manchester = City::new("Manchester", "manchester", "United Kingdom");
        let london_car = vehicle("Bentley Mulsanne", TransportMode::PrivateCar, london.id, true);
        let retired_car = vehicle("Rover 75", TransportMode::PrivateCar, london.id, false);
        let manchester_car = vehicle("Jaguar XJ", TransportMode::PrivateCar, manchester.id, true);

        let fleet = Arc::new(StubFleet {
            cities: vec![london.clone(), manchester],
            vehicles: vec![london_car.clone(), retired_car.clone(), manchester_car.clone()],
        });
        let bookings = Arc::new(FakeBookings::default());
        let sent = Arc::new(RecordingSender::default());
        let service = BookingService::new(
            fleet.clone(),
            fleet,
            bookings.clone(),
            sent.clone(),
            "ops@example.com".to_string(),
        );

        Harness {
            service,
            bookings,
            sent,
            london,
            london_car,
            retired_car,
            manchester_car,
        }
    }

    fn form() -> BookingSubmission {
        serde_json::from_value(serde_json::json!({
            "city": "london",
            "transportMode": "PRIVATE_CAR",
            "pickupLocation": "Heathrow",
            "dropoffLocation": "The Ritz",
            "pickupDate": "2031-06-01",
            "pickupTime": "14:30",
            "passengers": "2",
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@example.com",
            "phone": "+447911123456"
        }))
        .unwrap()
    }

    fn clock() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    // ------------------------------------------------------------------
    // intake
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn invalid_form_never_reaches_the_store() {
        let h = harness();
        let result = h.service.submit(BookingSubmission::default(), clock()).await;

        match result {
            Err(BookingError::Validation(errors)) => {
                assert!(errors.contains(&"City is required".to_string()));
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert!(h.bookings.stored().is_empty());
        assert!(h.sent.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn past_pickup_is_a_business_rule_not_a_field_error() {
        let h = harness();
        let late = NaiveDate::from_ymd_opt(2032, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        let result = h.service.submit(form(), late).await;
        assert!(matches!(result, Err(BookingError::PastPickup)));
        assert!(h.bookings.stored().is_empty());
    }

    #[tokio::test]
    async fn pickup_exactly_at_the_clock_is_rejected() {
        let h = harness();
        let exactly = NaiveDate::from_ymd_opt(2031, 6, 1)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();

        let result = h.service.submit(form(), exactly).await;
        assert!(matches!(result, Err(BookingError::PastPickup)));
    }

    #[tokio::test]
    async fn unknown_city_creates_nothing() {
        let h = harness();
        let mut bad = form();
        bad.city = Some("atlantis".to_string());

        let result = h.service.submit(bad, clock()).await;
        assert!(matches!(result, Err(BookingError::UnknownCity)));
        assert!(h.bookings.stored().is_empty());
    }

    #[tokio::test]
    async fn city_resolves_by_display_name_too() {
        let h = harness();
        let mut named = form();
        named.city = Some("LONDON".to_string());

        let details = h.service.submit(named, clock()).await.unwrap();
        assert_eq!(details.city.id, h.london.id);
    }

    #[tokio::test]
    async fn vehicle_from_another_city_is_rejected() {
        let h = harness();
        let mut cross = form();
        cross.vehicle_id = Some(h.manchester_car.id.to_string());

        let result = h.service.submit(cross, clock()).await;
        assert!(matches!(result, Err(BookingError::UnknownVehicle)));
        assert!(h.bookings.stored().is_empty());
    }

    #[tokio::test]
    async fn retired_vehicle_is_rejected() {
        let h = harness();
        let mut retired = form();
        retired.vehicle_id = Some(h.retired_car.id.to_string());

        let result = h.service.submit(retired, clock()).await;
        assert!(matches!(result, Err(BookingError::UnknownVehicle)));
    }

    #[tokio::test]
    async fn garbled_vehicle_id_is_rejected_not_a_crash() {
        let h = harness();
        let mut garbled = form();
        garbled.vehicle_id = Some("not-a-uuid".to_string());

        let result = h.service.submit(garbled, clock()).await;
        assert!(matches!(result, Err(BookingError::UnknownVehicle)));
    }

    #[tokio::test]
    async fn successful_submit_persists_pending_and_notifies() {
        let h = harness();
        let mut chosen = form();
        chosen.vehicle_id = Some(h.london_car.id.to_string());

        let details = h.service.submit(chosen, clock()).await.unwrap();

        assert_eq!(details.booking.status, BookingStatus::Pending);
        assert_eq!(details.city.slug, "london");
        assert_eq!(details.vehicle.as_ref().unwrap().name, "Bentley Mulsanne");

        let stored = h.bookings.stored();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, details.booking.id);
        assert_eq!(stored[0].status, BookingStatus::Pending);
        assert_eq!(stored[0].vehicle_id, Some(h.london_car.id));

        let sent = h.sent.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, ["ops@example.com"]);
        assert_eq!(
            sent[0].subject,
            "New Private Car Booking Request - Jane Doe"
        );
    }

    #[tokio::test]
    async fn notification_failure_does_not_undo_the_booking() {
        let h = harness();
        let fleet = Arc::new(StubFleet {
            cities: vec![h.london.clone()],
            vehicles: vec![],
        });
        let bookings = Arc::new(FakeBookings::default());
        let service = BookingService::new(
            fleet.clone(),
            fleet,
            bookings.clone(),
            Arc::new(FailingSender),
            "ops@example.com".to_string(),
        );

        let details = service.submit(form(), clock()).await.unwrap();
        assert_eq!(details.booking.status, BookingStatus::Pending);
        assert_eq!(bookings.stored().len(), 1);
    }

    // ------------------------------------------------------------------
    // status updates
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn status_update_walks_the_lifecycle() {
        let h = harness();
        let details = h.service.submit(form(), clock()).await.unwrap();
        let id = details.booking.id;

        let updated = h.service.update_status(id, "CONFIRMED").await.unwrap();
        assert_eq!(updated.booking.status, BookingStatus::Confirmed);

        let updated = h.service.update_status(id, "COMPLETED").await.unwrap();
        assert_eq!(updated.booking.status, BookingStatus::Completed);
    }

    #[tokio::test]
    async fn bogus_status_leaves_the_record_untouched() {
        let h = harness();
        let details = h.service.submit(form(), clock()).await.unwrap();
        let id = details.booking.id;

        let result = h.service.update_status(id, "BOGUS").await;
        assert!(matches!(result, Err(BookingError::InvalidStatus(_))));
        assert_eq!(h.bookings.stored()[0].status, BookingStatus::Pending);

        // lowercase is not accepted either
        let result = h.service.update_status(id, "confirmed").await;
        assert!(matches!(result, Err(BookingError::InvalidStatus(_))));
    }

    #[tokio::test]
    async fn unknown_booking_id_is_reported_as_missing() {
        let h = harness();
        let result = h.service.update_status(Uuid::new_v4(), "CONFIRMED").await;
        assert!(matches!(result, Err(BookingError::UnknownBooking(_))));
    }

    #[test]
    fn invalid_status_message_lists_every_legal_value() {
        let expected = format!(
            "Invalid status. Must be one of: {}",
            BookingStatus::ALL.map(|s| s.as_str()).join(", ")
        );
        assert_eq!(
            BookingError::InvalidStatus("BOGUS".to_string()).to_string(),
            expected
        );
    }
}
