//! In-memory implementation of every repository trait. Backs the API
//! integration tests and local demos; behaviour mirrors the Postgres
//! repositories, including their ordering and filter semantics.

use async_trait::async_trait;
use charter_booking::repository::{BookingFilter, BookingRepository, PageRequest};
use charter_booking::{BookingDetails, BookingRequest, BookingStatus};
use charter_fleet::{
    City, CityRepository, CityWithCount, TransportMode, Vehicle, VehicleDetails, VehicleFilter,
    VehicleRepository,
};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    cities: Vec<City>,
    vehicles: Vec<Vehicle>,
    bookings: Vec<BookingRequest>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Inner {
    fn active_vehicle_count(&self, city_id: Uuid) -> i64 {
        self.vehicles
            .iter()
            .filter(|v| v.city_id == city_id && v.is_active)
            .count() as i64
    }

    fn vehicle_details(&self, vehicle: &Vehicle) -> Option<VehicleDetails> {
        let city = self.cities.iter().find(|c| c.id == vehicle.city_id)?;
        Some(VehicleDetails {
            vehicle: vehicle.clone(),
            city: city.summary(),
        })
    }

    fn booking_details(&self, booking: &BookingRequest) -> Option<BookingDetails> {
        let city = self.cities.iter().find(|c| c.id == booking.city_id)?;
        let vehicle = booking
            .vehicle_id
            .and_then(|id| self.vehicles.iter().find(|v| v.id == id))
            .map(Vehicle::summary);
        Some(BookingDetails {
            booking: booking.clone(),
            city: city.summary(),
            vehicle,
        })
    }
}

#[async_trait]
impl CityRepository for MemoryStore {
    async fn find_by_reference(
        &self,
        reference: &str,
    ) -> Result<Option<City>, Box<dyn std::error::Error + Send + Sync>> {
        let slug = reference.to_lowercase();
        let inner = self.inner.read().await;
        Ok(inner
            .cities
            .iter()
            .find(|c| c.slug == slug || c.name.eq_ignore_ascii_case(reference))
            .cloned())
    }

    async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<CityWithCount>, Box<dyn std::error::Error + Send + Sync>> {
        let slug = slug.to_lowercase();
        let inner = self.inner.read().await;
        Ok(inner.cities.iter().find(|c| c.slug == slug).map(|c| {
            CityWithCount {
                city: c.clone(),
                vehicle_count: inner.active_vehicle_count(c.id),
            }
        }))
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<City>, Box<dyn std::error::Error + Send + Sync>> {
        let inner = self.inner.read().await;
        Ok(inner.cities.iter().find(|c| c.id == id).cloned())
    }

    async fn list_active(
        &self,
    ) -> Result<Vec<CityWithCount>, Box<dyn std::error::Error + Send + Sync>> {
        let inner = self.inner.read().await;
        let mut cities: Vec<CityWithCount> = inner
            .cities
            .iter()
            .filter(|c| c.is_active)
            .map(|c| CityWithCount {
                city: c.clone(),
                vehicle_count: inner.active_vehicle_count(c.id),
            })
            .collect();
        cities.sort_by(|a, b| a.city.name.cmp(&b.city.name));
        Ok(cities)
    }

    async fn insert(&self, city: &City) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut inner = self.inner.write().await;
        inner.cities.push(city.clone());
        Ok(())
    }
}

#[async_trait]
impl VehicleRepository for MemoryStore {
    async fn find_bookable(
        &self,
        id: Uuid,
        city_id: Uuid,
    ) -> Result<Option<Vehicle>, Box<dyn std::error::Error + Send + Sync>> {
        let inner = self.inner.read().await;
        Ok(inner
            .vehicles
            .iter()
            .find(|v| v.id == id && v.city_id == city_id && v.is_active)
            .cloned())
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<VehicleDetails>, Box<dyn std::error::Error + Send + Sync>> {
        let inner = self.inner.read().await;
        Ok(inner
            .vehicles
            .iter()
            .find(|v| v.id == id)
            .and_then(|v| inner.vehicle_details(v)))
    }

    async fn list(
        &self,
        filter: &VehicleFilter,
    ) -> Result<Vec<VehicleDetails>, Box<dyn std::error::Error + Send + Sync>> {
        let city_slug = filter.city_slug.as_ref().map(|slug| slug.to_lowercase());
        let inner = self.inner.read().await;
        let mut vehicles: Vec<VehicleDetails> = inner
            .vehicles
            .iter()
            .filter(|v| v.is_active)
            .filter(|v| filter.category.is_none_or(|category| v.category == category))
            .filter_map(|v| inner.vehicle_details(v))
            .filter(|d| {
                city_slug
                    .as_ref()
                    .is_none_or(|slug| &d.city.slug == slug)
            })
            .collect();
        // Same order as the SQL repository: category as stored text, then name
        vehicles.sort_by(|a, b| {
            (a.vehicle.category.as_str(), &a.vehicle.name)
                .cmp(&(b.vehicle.category.as_str(), &b.vehicle.name))
        });
        Ok(vehicles)
    }

    async fn categories_for_city(
        &self,
        city_slug: &str,
    ) -> Result<Vec<TransportMode>, Box<dyn std::error::Error + Send + Sync>> {
        let slug = city_slug.to_lowercase();
        let inner = self.inner.read().await;
        let Some(city) = inner.cities.iter().find(|c| c.slug == slug) else {
            return Ok(Vec::new());
        };
        let mut categories: Vec<TransportMode> = inner
            .vehicles
            .iter()
            .filter(|v| v.city_id == city.id && v.is_active)
            .map(|v| v.category)
            .collect();
        categories.sort_by_key(|category| category.as_str());
        categories.dedup();
        Ok(categories)
    }

    async fn insert(
        &self,
        vehicle: &Vehicle,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut inner = self.inner.write().await;
        inner.vehicles.push(vehicle.clone());
        Ok(())
    }

    async fn update(
        &self,
        vehicle: &Vehicle,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut inner = self.inner.write().await;
        if let Some(existing) = inner.vehicles.iter_mut().find(|v| v.id == vehicle.id) {
            *existing = vehicle.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut inner = self.inner.write().await;
        inner.vehicles.retain(|v| v.id != id);
        Ok(())
    }

    async fn count(&self) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        let inner = self.inner.read().await;
        Ok(inner.vehicles.len() as u64)
    }
}

#[async_trait]
impl BookingRepository for MemoryStore {
    async fn insert(
        &self,
        booking: &BookingRequest,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut inner = self.inner.write().await;
        inner.bookings.push(booking.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<BookingDetails>, Box<dyn std::error::Error + Send + Sync>> {
        let inner = self.inner.read().await;
        Ok(inner
            .bookings
            .iter()
            .find(|b| b.id == id)
            .and_then(|b| inner.booking_details(b)))
    }

    async fn list(
        &self,
        filter: &BookingFilter,
        page: PageRequest,
    ) -> Result<(Vec<BookingDetails>, u64), Box<dyn std::error::Error + Send + Sync>> {
        let city_slug = filter.city_slug.as_ref().map(|slug| slug.to_lowercase());
        let inner = self.inner.read().await;

        let mut matching: Vec<BookingDetails> = inner
            .bookings
            .iter()
            .filter(|b| {
                filter
                    .status
                    .as_ref()
                    .is_none_or(|status| b.status.as_str() == status)
            })
            .filter_map(|b| inner.booking_details(b))
            .filter(|d| city_slug.as_ref().is_none_or(|slug| &d.city.slug == slug))
            .collect();
        matching.sort_by(|a, b| b.booking.created_at.cmp(&a.booking.created_at));

        let total = matching.len() as u64;
        let start = (page.offset() as usize).min(matching.len());
        let end = (start + page.limit as usize).min(matching.len());
        Ok((matching[start..end].to_vec(), total))
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<Option<BookingDetails>, Box<dyn std::error::Error + Send + Sync>> {
        let mut inner = self.inner.write().await;
        let Some(index) = inner.bookings.iter().position(|b| b.id == id) else {
            return Ok(None);
        };
        inner.bookings[index].update_status(status);
        let booking = inner.bookings[index].clone();
        Ok(inner.booking_details(&booking))
    }
}
