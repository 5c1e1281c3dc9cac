//! Loads the launch catalog into an empty store.

use std::collections::HashMap;

use charter_fleet::seed::{CITIES, VEHICLES};
use charter_fleet::{City, CityRepository, Vehicle, VehicleRepository};
use chrono::Utc;
use uuid::Uuid;

/// Applies the launch catalog. A store that already holds vehicles is left
/// untouched, so repeated startups never duplicate the fleet; cities that
/// survived a partial earlier run are reused by slug.
pub async fn apply(
    cities: &dyn CityRepository,
    vehicles: &dyn VehicleRepository,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if vehicles.count().await? > 0 {
        tracing::info!("Catalog already present, skipping seed");
        return Ok(());
    }

    let mut city_ids: HashMap<&str, Uuid> = HashMap::new();
    for seed in &CITIES {
        let city = match cities.find_by_reference(seed.slug).await? {
            Some(existing) => existing,
            None => {
                let city = City::new(seed.name, seed.slug, seed.country);
                cities.insert(&city).await?;
                city
            }
        };
        city_ids.insert(seed.slug, city.id);
    }

    for seed in &VEHICLES {
        let city_id = city_ids.get(seed.city_slug).copied().ok_or_else(|| {
            format!(
                "vehicle {} references unseeded city {}",
                seed.name, seed.city_slug
            )
        })?;
        let vehicle = Vehicle {
            id: Uuid::new_v4(),
            name: seed.name.to_string(),
            category: seed.category,
            capacity: seed.capacity.to_string(),
            description: seed.description.to_string(),
            features: seed.features.iter().map(|f| f.to_string()).collect(),
            image: seed.image.to_string(),
            price_range: seed.price_range.to_string(),
            is_active: true,
            city_id,
            created_at: Utc::now(),
        };
        vehicles.insert(&vehicle).await?;
    }

    tracing::info!(
        cities = city_ids.len(),
        vehicles = VEHICLES.len(),
        "Launch catalog seeded"
    );
    Ok(())
}
