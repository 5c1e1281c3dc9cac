use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use charter_fleet::CityWithCount;
use charter_shared::ApiResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

/// A serviced city together with the size of its active fleet.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CityView {
    id: Uuid,
    name: String,
    slug: String,
    country: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    vehicle_count: i64,
}

impl From<CityWithCount> for CityView {
    fn from(entry: CityWithCount) -> Self {
        Self {
            id: entry.city.id,
            name: entry.city.name,
            slug: entry.city.slug,
            country: entry.city.country,
            is_active: entry.city.is_active,
            created_at: entry.city.created_at,
            vehicle_count: entry.vehicle_count,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/cities", get(list_cities))
        .route("/api/cities/{slug}", get(get_city))
}

/// GET /api/cities
async fn list_cities(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CityView>>>, AppError> {
    let cities = state.cities.list_active().await?;
    let views: Vec<CityView> = cities.into_iter().map(CityView::from).collect();
    Ok(Json(ApiResponse::data(views)))
}

/// GET /api/cities/:slug
async fn get_city(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<CityView>>, AppError> {
    let city = state
        .cities
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("City not found".to_string()))?;
    Ok(Json(ApiResponse::data(CityView::from(city))))
}
