//! Public booking intake plus the back-office listing and lifecycle
//! endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use charter_booking::{BookingDetails, BookingFilter, BookingStatus, BookingSubmission, PageRequest};
use charter_fleet::{CityRef, TransportMode, VehicleRef};
use charter_shared::{ApiResponse, Masked, Pagination};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

// ===========================================================================
// DTOs
// ===========================================================================

#[derive(Debug, Deserialize)]
struct ListQuery {
    city: Option<String>,
    status: Option<String>,
    page: Option<u32>,
    limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct StatusUpdate {
    status: String,
}

/// What the customer gets back right after submitting the form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BookingReceipt {
    booking_id: Uuid,
    estimated_response: &'static str,
    city: String,
    vehicle: Option<String>,
}

/// One booking as the back office sees it: the flat record plus the
/// resolved city and vehicle references.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingView {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Masked<String>,
    pub phone: Masked<String>,
    pub transport_mode: TransportMode,
    pub vehicle_id: Option<Uuid>,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_date: NaiveDate,
    pub pickup_time: String,
    pub passengers: i32,
    pub special_requests: Option<String>,
    pub city_id: Uuid,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub city: CityRef,
    pub vehicle: Option<VehicleRef>,
}

impl From<BookingDetails> for BookingView {
    fn from(details: BookingDetails) -> Self {
        let BookingDetails {
            booking,
            city,
            vehicle,
        } = details;
        Self {
            id: booking.id,
            first_name: booking.first_name,
            last_name: booking.last_name,
            email: booking.email,
            phone: booking.phone,
            transport_mode: booking.transport_mode,
            vehicle_id: booking.vehicle_id,
            pickup_location: booking.pickup_location,
            dropoff_location: booking.dropoff_location,
            pickup_date: booking.pickup_date,
            // The form collects HH:MM, so that is what goes back out.
            pickup_time: booking.pickup_time.format("%H:%M").to_string(),
            passengers: booking.passengers,
            special_requests: booking.special_requests,
            city_id: booking.city_id,
            status: booking.status,
            created_at: booking.created_at,
            updated_at: booking.updated_at,
            city,
            vehicle,
        }
    }
}

// ===========================================================================
// Routes
// ===========================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/booking", post(submit_booking).get(list_bookings))
        .route("/api/booking/health", get(booking_health))
        .route("/api/booking/{id}/status", patch(update_status))
}

/// POST /api/booking
async fn submit_booking(
    State(state): State<AppState>,
    Json(submission): Json<BookingSubmission>,
) -> Result<(StatusCode, Json<ApiResponse<BookingReceipt>>), AppError> {
    let now = Utc::now().naive_utc();
    let details = state.bookings.submit(submission, now).await?;

    let receipt = BookingReceipt {
        booking_id: details.booking.id,
        estimated_response: "2 hours",
        city: details.city.name,
        vehicle: details.vehicle.map(|vehicle| vehicle.name),
    };
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Booking request submitted successfully. We will contact you within 2 hours with a detailed quote.",
            receipt,
        )),
    ))
}

/// GET /api/booking?city=&status=&page=&limit=
async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let filter = BookingFilter {
        city_slug: query.city,
        status: query.status,
    };
    let page = PageRequest::new(query.page.unwrap_or(1), query.limit.unwrap_or(20));

    let (bookings, total) = state.booking_repo.list(&filter, page).await?;
    let records: Vec<BookingView> = bookings.into_iter().map(BookingView::from).collect();

    Ok(Json(json!({
        "success": true,
        "data": records,
        "pagination": Pagination::new(page.page, page.limit, total),
    })))
}

/// PATCH /api/booking/:id/status
async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> Result<Json<ApiResponse<BookingView>>, AppError> {
    // An id that does not even parse can never match a stored booking.
    let id =
        Uuid::parse_str(&id).map_err(|_| AppError::NotFound("Booking not found".to_string()))?;

    let details = state.bookings.update_status(id, &update.status).await?;
    Ok(Json(ApiResponse::success(
        "Booking status updated successfully",
        BookingView::from(details),
    )))
}

/// GET /api/booking/health
async fn booking_health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "booking",
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
