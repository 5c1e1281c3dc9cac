use async_trait::async_trait;
use charter_booking::repository::{BookingFilter, BookingRepository, PageRequest};
use charter_booking::{BookingDetails, BookingRequest, BookingStatus};
use charter_fleet::{CityRef, TransportMode, VehicleRef};
use charter_shared::Masked;
use sqlx::PgPool;
use uuid::Uuid;

pub struct StoreBookingRepository {
    pool: PgPool,
}

impl StoreBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal structs for type-safe querying
#[derive(sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    transport_mode: String,
    vehicle_id: Option<Uuid>,
    pickup_location: String,
    dropoff_location: String,
    pickup_date: chrono::NaiveDate,
    pickup_time: chrono::NaiveTime,
    passengers: i32,
    special_requests: Option<String>,
    city_id: Uuid,
    status: String,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
    city_name: String,
    city_slug: String,
    vehicle_name: Option<String>,
    vehicle_category: Option<String>,
}

impl BookingRow {
    fn into_details(self) -> Result<BookingDetails, Box<dyn std::error::Error + Send + Sync>> {
        let transport_mode = TransportMode::parse(&self.transport_mode)
            .ok_or_else(|| format!("unknown transport mode: {}", self.transport_mode))?;
        let status = BookingStatus::parse(&self.status)
            .ok_or_else(|| format!("unknown booking status: {}", self.status))?;

        // A booking keeps its vehicle_id even if the vehicle row has since
        // been deleted; the display reference is simply absent then.
        let vehicle = match (self.vehicle_id, self.vehicle_name, self.vehicle_category) {
            (Some(id), Some(name), Some(category)) => Some(VehicleRef {
                id,
                name,
                category: TransportMode::parse(&category)
                    .ok_or_else(|| format!("unknown vehicle category: {category}"))?,
            }),
            _ => None,
        };

        Ok(BookingDetails {
            booking: BookingRequest {
                id: self.id,
                first_name: self.first_name,
                last_name: self.last_name,
                email: Masked(self.email),
                phone: Masked(self.phone),
                transport_mode,
                vehicle_id: self.vehicle_id,
                pickup_location: self.pickup_location,
                dropoff_location: self.dropoff_location,
                pickup_date: self.pickup_date,
                pickup_time: self.pickup_time,
                passengers: self.passengers,
                special_requests: self.special_requests,
                city_id: self.city_id,
                status,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            city: CityRef {
                id: self.city_id,
                name: self.city_name,
                slug: self.city_slug,
            },
            vehicle,
        })
    }
}

const BOOKING_SELECT: &str = "SELECT b.id, b.first_name, b.last_name, b.email, b.phone, \
     b.transport_mode, b.vehicle_id, b.pickup_location, b.dropoff_location, b.pickup_date, \
     b.pickup_time, b.passengers, b.special_requests, b.city_id, b.status, b.created_at, \
     b.updated_at, c.name AS city_name, c.slug AS city_slug, \
     v.name AS vehicle_name, v.category AS vehicle_category \
     FROM booking_requests b \
     JOIN cities c ON c.id = b.city_id \
     LEFT JOIN vehicles v ON v.id = b.vehicle_id";

const BOOKING_FILTER: &str =
    "($1::text IS NULL OR c.slug = LOWER($1)) AND ($2::text IS NULL OR b.status = $2)";

#[async_trait]
impl BookingRepository for StoreBookingRepository {
    async fn insert(
        &self,
        booking: &BookingRequest,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query(
            "INSERT INTO booking_requests (id, first_name, last_name, email, phone, \
             transport_mode, vehicle_id, pickup_location, dropoff_location, pickup_date, \
             pickup_time, passengers, special_requests, city_id, status, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)",
        )
        .bind(booking.id)
        .bind(&booking.first_name)
        .bind(&booking.last_name)
        .bind(&booking.email.0)
        .bind(&booking.phone.0)
        .bind(booking.transport_mode.as_str())
        .bind(booking.vehicle_id)
        .bind(&booking.pickup_location)
        .bind(&booking.dropoff_location)
        .bind(booking.pickup_date)
        .bind(booking.pickup_time)
        .bind(booking.passengers)
        .bind(&booking.special_requests)
        .bind(booking.city_id)
        .bind(booking.status.as_str())
        .bind(booking.created_at)
        .bind(booking.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<BookingDetails>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, BookingRow>(&format!("{BOOKING_SELECT} WHERE b.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(BookingRow::into_details).transpose()
    }

    async fn list(
        &self,
        filter: &BookingFilter,
        page: PageRequest,
    ) -> Result<(Vec<BookingDetails>, u64), Box<dyn std::error::Error + Send + Sync>> {
        let rows = sqlx::query_as::<_, BookingRow>(&format!(
            "{BOOKING_SELECT} WHERE {BOOKING_FILTER} \
             ORDER BY b.created_at DESC LIMIT $3 OFFSET $4"
        ))
        .bind(&filter.city_slug)
        .bind(&filter.status)
        .bind(i64::from(page.limit))
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM booking_requests b \
             JOIN cities c ON c.id = b.city_id WHERE {BOOKING_FILTER}"
        ))
        .bind(&filter.city_slug)
        .bind(&filter.status)
        .fetch_one(&self.pool)
        .await?;

        let bookings = rows
            .into_iter()
            .map(BookingRow::into_details)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((bookings, total as u64))
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<Option<BookingDetails>, Box<dyn std::error::Error + Send + Sync>> {
        let updated = sqlx::query_scalar::<_, Uuid>(
            "UPDATE booking_requests SET status = $1, updated_at = NOW() \
             WHERE id = $2 RETURNING id",
        )
        .bind(status.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match updated {
            Some(id) => self.find_by_id(id).await,
            None => Ok(None),
        }
    }
}
