use async_trait::async_trait;
use charter_fleet::{CityRef, TransportMode, Vehicle, VehicleDetails, VehicleFilter,
    VehicleRepository};
use sqlx::PgPool;
use uuid::Uuid;

pub struct StoreVehicleRepository {
    pool: PgPool,
}

impl StoreVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal structs for type-safe querying
#[derive(sqlx::FromRow)]
struct VehicleRow {
    id: Uuid,
    name: String,
    category: String,
    capacity: String,
    description: String,
    features: Vec<String>,
    image: String,
    price_range: String,
    is_active: bool,
    city_id: Uuid,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl VehicleRow {
    fn into_vehicle(self) -> Result<Vehicle, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Vehicle {
            id: self.id,
            name: self.name,
            category: parse_category(&self.category)?,
            capacity: self.capacity,
            description: self.description,
            features: self.features,
            image: self.image,
            price_range: self.price_range,
            is_active: self.is_active,
            city_id: self.city_id,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct VehicleDetailsRow {
    id: Uuid,
    name: String,
    category: String,
    capacity: String,
    description: String,
    features: Vec<String>,
    image: String,
    price_range: String,
    is_active: bool,
    city_id: Uuid,
    created_at: chrono::DateTime<chrono::Utc>,
    city_name: String,
    city_slug: String,
}

impl VehicleDetailsRow {
    fn into_details(self) -> Result<VehicleDetails, Box<dyn std::error::Error + Send + Sync>> {
        let city = CityRef {
            id: self.city_id,
            name: self.city_name,
            slug: self.city_slug,
        };
        Ok(VehicleDetails {
            vehicle: Vehicle {
                id: self.id,
                name: self.name,
                category: parse_category(&self.category)?,
                capacity: self.capacity,
                description: self.description,
                features: self.features,
                image: self.image,
                price_range: self.price_range,
                is_active: self.is_active,
                city_id: self.city_id,
                created_at: self.created_at,
            },
            city,
        })
    }
}

fn parse_category(raw: &str) -> Result<TransportMode, Box<dyn std::error::Error + Send + Sync>> {
    TransportMode::parse(raw).ok_or_else(|| format!("unknown vehicle category: {raw}").into())
}

const VEHICLE_COLUMNS: &str = "v.id, v.name, v.category, v.capacity, v.description, v.features, \
     v.image, v.price_range, v.is_active, v.city_id, v.created_at";

#[async_trait]
impl VehicleRepository for StoreVehicleRepository {
    async fn find_bookable(
        &self,
        id: Uuid,
        city_id: Uuid,
    ) -> Result<Option<Vehicle>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, VehicleRow>(
            "SELECT id, name, category, capacity, description, features, image, price_range, \
             is_active, city_id, created_at FROM vehicles \
             WHERE id = $1 AND city_id = $2 AND is_active = TRUE",
        )
        .bind(id)
        .bind(city_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(VehicleRow::into_vehicle).transpose()
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<VehicleDetails>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, VehicleDetailsRow>(&format!(
            "SELECT {VEHICLE_COLUMNS}, c.name AS city_name, c.slug AS city_slug \
             FROM vehicles v JOIN cities c ON c.id = v.city_id WHERE v.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(VehicleDetailsRow::into_details).transpose()
    }

    async fn list(
        &self,
        filter: &VehicleFilter,
    ) -> Result<Vec<VehicleDetails>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = sqlx::query_as::<_, VehicleDetailsRow>(&format!(
            "SELECT {VEHICLE_COLUMNS}, c.name AS city_name, c.slug AS city_slug \
             FROM vehicles v JOIN cities c ON c.id = v.city_id \
             WHERE v.is_active = TRUE \
             AND ($1::text IS NULL OR c.slug = $1) \
             AND ($2::text IS NULL OR v.category = $2) \
             ORDER BY v.category ASC, v.name ASC"
        ))
        .bind(filter.city_slug.as_ref().map(|slug| slug.to_lowercase()))
        .bind(filter.category.map(|category| category.as_str()))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(VehicleDetailsRow::into_details).collect()
    }

    async fn categories_for_city(
        &self,
        city_slug: &str,
    ) -> Result<Vec<TransportMode>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT v.category FROM vehicles v \
             JOIN cities c ON c.id = v.city_id \
             WHERE c.slug = $1 AND v.is_active = TRUE \
             ORDER BY v.category ASC",
        )
        .bind(city_slug.to_lowercase())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(|raw| parse_category(raw)).collect()
    }

    async fn insert(
        &self,
        vehicle: &Vehicle,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query(
            "INSERT INTO vehicles (id, name, category, capacity, description, features, image, \
             price_range, is_active, city_id, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(vehicle.id)
        .bind(&vehicle.name)
        .bind(vehicle.category.as_str())
        .bind(&vehicle.capacity)
        .bind(&vehicle.description)
        .bind(&vehicle.features)
        .bind(&vehicle.image)
        .bind(&vehicle.price_range)
        .bind(vehicle.is_active)
        .bind(vehicle.city_id)
        .bind(vehicle.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(
        &self,
        vehicle: &Vehicle,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query(
            "UPDATE vehicles SET name = $2, category = $3, capacity = $4, description = $5, \
             features = $6, image = $7, price_range = $8, is_active = $9, city_id = $10 \
             WHERE id = $1",
        )
        .bind(vehicle.id)
        .bind(&vehicle.name)
        .bind(vehicle.category.as_str())
        .bind(&vehicle.capacity)
        .bind(&vehicle.description)
        .bind(&vehicle.features)
        .bind(&vehicle.image)
        .bind(&vehicle.price_range)
        .bind(vehicle.is_active)
        .bind(vehicle.city_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count(&self) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vehicles")
            .fetch_one(&self.pool)
            .await?;

        Ok(count as u64)
    }
}
