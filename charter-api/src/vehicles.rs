//! The public vehicle catalog and its admin endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use charter_fleet::{CityRef, TransportMode, Vehicle, VehicleDetails, VehicleDraft, VehicleFilter};
use charter_shared::ApiResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct CatalogQuery {
    city: Option<String>,
    category: Option<String>,
}

/// Full vehicle record with the owning city reference attached.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VehicleView {
    id: Uuid,
    name: String,
    category: TransportMode,
    capacity: String,
    description: String,
    features: Vec<String>,
    image: String,
    price_range: String,
    is_active: bool,
    city_id: Uuid,
    created_at: DateTime<Utc>,
    city: CityRef,
}

impl VehicleView {
    fn new(vehicle: Vehicle, city: CityRef) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            category: vehicle.category,
            capacity: vehicle.capacity,
            description: vehicle.description,
            features: vehicle.features,
            image: vehicle.image,
            price_range: vehicle.price_range,
            is_active: vehicle.is_active,
            city_id: vehicle.city_id,
            created_at: vehicle.created_at,
            city,
        }
    }
}

impl From<VehicleDetails> for VehicleView {
    fn from(details: VehicleDetails) -> Self {
        Self::new(details.vehicle, details.city)
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/vehicles", get(list_vehicles).post(create_vehicle))
        .route(
            "/api/vehicles/{id}",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
        .route("/api/vehicles/categories/{city}", get(list_categories))
}

/// GET /api/vehicles?city=&category=
async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let category = match query.category.as_deref() {
        Some(raw) => Some(
            TransportMode::parse(raw)
                .ok_or_else(|| AppError::Validation("Invalid category".to_string()))?,
        ),
        None => None,
    };
    let filter = VehicleFilter {
        city_slug: query.city,
        category,
    };

    let vehicles = state.vehicles.list(&filter).await?;
    let views: Vec<VehicleView> = vehicles.into_iter().map(VehicleView::from).collect();

    Ok(Json(json!({
        "success": true,
        "data": views,
        "count": views.len(),
    })))
}

/// GET /api/vehicles/:id
async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<VehicleView>>, AppError> {
    let id =
        Uuid::parse_str(&id).map_err(|_| AppError::NotFound("Vehicle not found".to_string()))?;
    let details = state
        .vehicles
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;
    Ok(Json(ApiResponse::data(VehicleView::from(details))))
}

/// GET /api/vehicles/categories/:city
async fn list_categories(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<ApiResponse<Vec<TransportMode>>>, AppError> {
    let categories = state.vehicles.categories_for_city(&city).await?;
    Ok(Json(ApiResponse::data(categories)))
}

/// POST /api/vehicles
async fn create_vehicle(
    State(state): State<AppState>,
    Json(draft): Json<VehicleDraft>,
) -> Result<(StatusCode, Json<ApiResponse<VehicleView>>), AppError> {
    // 1. Field rules, every violation at once
    let new_vehicle = draft
        .validate()
        .map_err(|errors| AppError::Validation(errors.join(", ")))?;

    // 2. The owning city must exist
    let city = state
        .cities
        .find_by_id(new_vehicle.city_id)
        .await
        .map_err(AppError::store)?
        .ok_or_else(|| AppError::NotFound("City not found".to_string()))?;

    // 3. Persist
    let vehicle = new_vehicle.into_vehicle();
    state
        .vehicles
        .insert(&vehicle)
        .await
        .map_err(AppError::store)?;

    tracing::info!(vehicle_id = %vehicle.id, city = %city.slug, "vehicle created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Vehicle created successfully",
            VehicleView::new(vehicle, city.summary()),
        )),
    ))
}

/// PUT /api/vehicles/:id
async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<VehicleDraft>,
) -> Result<Json<ApiResponse<VehicleView>>, AppError> {
    let id =
        Uuid::parse_str(&id).map_err(|_| AppError::NotFound("Vehicle not found".to_string()))?;

    let new_vehicle = draft
        .validate()
        .map_err(|errors| AppError::Validation(errors.join(", ")))?;

    let existing = state
        .vehicles
        .find_by_id(id)
        .await
        .map_err(AppError::store)?
        .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

    let city = state
        .cities
        .find_by_id(new_vehicle.city_id)
        .await
        .map_err(AppError::store)?
        .ok_or_else(|| AppError::NotFound("City not found".to_string()))?;

    let updated = new_vehicle.apply_to(&existing.vehicle);
    state
        .vehicles
        .update(&updated)
        .await
        .map_err(AppError::store)?;

    tracing::info!(vehicle_id = %updated.id, "vehicle updated");
    Ok(Json(ApiResponse::success(
        "Vehicle updated successfully",
        VehicleView::new(updated, city.summary()),
    )))
}

/// DELETE /api/vehicles/:id
async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse>, AppError> {
    let id =
        Uuid::parse_str(&id).map_err(|_| AppError::NotFound("Vehicle not found".to_string()))?;

    state
        .vehicles
        .find_by_id(id)
        .await
        .map_err(AppError::store)?
        .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

    state.vehicles.delete(id).await.map_err(AppError::store)?;

    tracing::info!(vehicle_id = %id, "vehicle deleted");
    Ok(Json(ApiResponse::message_only("Vehicle deleted successfully")))
}
