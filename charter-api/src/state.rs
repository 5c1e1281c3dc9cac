use std::sync::Arc;

use charter_booking::{BookingRepository, BookingService, NotificationSender};
use charter_fleet::{CityRepository, VehicleRepository};

/// Shared handler state. The repositories are handed out separately from the
/// booking service so the read endpoints can hit storage directly.
#[derive(Clone)]
pub struct AppState {
    pub bookings: Arc<BookingService>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub cities: Arc<dyn CityRepository>,
    pub vehicles: Arc<dyn VehicleRepository>,
    pub sender: Arc<dyn NotificationSender>,
    pub admin_email: String,
}

impl AppState {
    pub fn new(
        cities: Arc<dyn CityRepository>,
        vehicles: Arc<dyn VehicleRepository>,
        booking_repo: Arc<dyn BookingRepository>,
        sender: Arc<dyn NotificationSender>,
        admin_email: String,
    ) -> Self {
        let bookings = Arc::new(BookingService::new(
            cities.clone(),
            vehicles.clone(),
            booking_repo.clone(),
            sender.clone(),
            admin_email.clone(),
        ));
        Self {
            bookings,
            booking_repo,
            cities,
            vehicles,
            sender,
            admin_email,
        }
    }
}
