use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use charter_booking::{notify, validate_contact, ContactSubmission};
use charter_shared::ApiResponse;
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContactReceipt {
    message_id: String,
    estimated_response: &'static str,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/contact", post(submit_contact))
        .route("/api/contact/health", get(contact_health))
}

/// POST /api/contact
async fn submit_contact(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> Result<(StatusCode, Json<ApiResponse<ContactReceipt>>), AppError> {
    let message = validate_contact(&submission)
        .map_err(|errors| AppError::Validation(errors.join(", ")))?;

    // Forward to the back office; the sender's answer does not gate ours.
    let email = notify::contact_notification(&message, &state.admin_email);
    if let Err(error) = state.sender.send(&email).await {
        tracing::warn!(%error, "contact notification failed");
    }

    tracing::info!(name = %message.full_name, "contact request received");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Message sent successfully. We will get back to you within 24 hours.",
            ContactReceipt {
                message_id: format!("MSG{}", Utc::now().timestamp_millis()),
                estimated_response: "24 hours",
            },
        )),
    ))
}

/// GET /api/contact/health
async fn contact_health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "contact",
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
