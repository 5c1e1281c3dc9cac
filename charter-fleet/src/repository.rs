use crate::city::{City, CityWithCount};
use crate::vehicle::{TransportMode, Vehicle, VehicleDetails};
use async_trait::async_trait;
use uuid::Uuid;

/// Listing filter for the public vehicle catalog.
#[derive(Debug, Clone, Default)]
pub struct VehicleFilter {
    /// City slug, matched after lowercasing.
    pub city_slug: Option<String>,
    pub category: Option<TransportMode>,
}

/// Repository trait for city data access.
#[async_trait]
pub trait CityRepository: Send + Sync {
    /// Resolve a caller-supplied reference: slug equal to the lowercased
    /// input, or display name compared case-insensitively. Does not filter
    /// on the active flag.
    async fn find_by_reference(
        &self,
        reference: &str,
    ) -> Result<Option<City>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<CityWithCount>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<City>, Box<dyn std::error::Error + Send + Sync>>;

    /// Active cities with their active-vehicle counts, name ascending.
    async fn list_active(
        &self,
    ) -> Result<Vec<CityWithCount>, Box<dyn std::error::Error + Send + Sync>>;

    async fn insert(
        &self,
        city: &City,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Repository trait for vehicle data access.
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// The booking-time lookup: id AND owning city AND active must all match.
    async fn find_bookable(
        &self,
        id: Uuid,
        city_id: Uuid,
    ) -> Result<Option<Vehicle>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<VehicleDetails>, Box<dyn std::error::Error + Send + Sync>>;

    /// Active vehicles matching the filter, ordered category then name.
    async fn list(
        &self,
        filter: &VehicleFilter,
    ) -> Result<Vec<VehicleDetails>, Box<dyn std::error::Error + Send + Sync>>;

    /// Distinct categories with at least one active vehicle in the city.
    async fn categories_for_city(
        &self,
        city_slug: &str,
    ) -> Result<Vec<TransportMode>, Box<dyn std::error::Error + Send + Sync>>;

    async fn insert(
        &self,
        vehicle: &Vehicle,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn update(
        &self,
        vehicle: &Vehicle,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn delete(
        &self,
        id: Uuid,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn count(&self) -> Result<u64, Box<dyn std::error::Error + Send + Sync>>;
}
