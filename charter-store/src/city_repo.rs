use async_trait::async_trait;
use charter_fleet::{City, CityRepository, CityWithCount};
use sqlx::PgPool;
use uuid::Uuid;

pub struct StoreCityRepository {
    pool: PgPool,
}

impl StoreCityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal structs for type-safe querying
#[derive(sqlx::FromRow)]
struct CityRow {
    id: Uuid,
    name: String,
    slug: String,
    country: String,
    is_active: bool,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl CityRow {
    fn into_city(self) -> City {
        City {
            id: self.id,
            name: self.name,
            slug: self.slug,
            country: self.country,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CityCountRow {
    id: Uuid,
    name: String,
    slug: String,
    country: String,
    is_active: bool,
    created_at: chrono::DateTime<chrono::Utc>,
    vehicle_count: i64,
}

impl CityCountRow {
    fn into_counted(self) -> CityWithCount {
        CityWithCount {
            city: City {
                id: self.id,
                name: self.name,
                slug: self.slug,
                country: self.country,
                is_active: self.is_active,
                created_at: self.created_at,
            },
            vehicle_count: self.vehicle_count,
        }
    }
}

const COUNTED_CITY: &str = "SELECT c.id, c.name, c.slug, c.country, c.is_active, c.created_at, \
     (SELECT COUNT(*) FROM vehicles v WHERE v.city_id = c.id AND v.is_active) AS vehicle_count \
     FROM cities c";

#[async_trait]
impl CityRepository for StoreCityRepository {
    async fn find_by_reference(
        &self,
        reference: &str,
    ) -> Result<Option<City>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, CityRow>(
            "SELECT id, name, slug, country, is_active, created_at FROM cities \
             WHERE slug = $1 OR LOWER(name) = $1",
        )
        .bind(reference.to_lowercase())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CityRow::into_city))
    }

    async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<CityWithCount>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, CityCountRow>(&format!("{COUNTED_CITY} WHERE c.slug = $1"))
            .bind(slug.to_lowercase())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(CityCountRow::into_counted))
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<City>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, CityRow>(
            "SELECT id, name, slug, country, is_active, created_at FROM cities WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CityRow::into_city))
    }

    async fn list_active(
        &self,
    ) -> Result<Vec<CityWithCount>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = sqlx::query_as::<_, CityCountRow>(&format!(
            "{COUNTED_CITY} WHERE c.is_active = TRUE ORDER BY c.name ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CityCountRow::into_counted).collect())
    }

    async fn insert(&self, city: &City) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query(
            "INSERT INTO cities (id, name, slug, country, is_active, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(city.id)
        .bind(&city.name)
        .bind(&city.slug)
        .bind(&city.country)
        .bind(city.is_active)
        .bind(city.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
