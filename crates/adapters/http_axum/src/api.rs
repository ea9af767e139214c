//! JSON REST handlers for the delivery boundary.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{post, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use reflex_app::services::DeliveryHandler;
use reflex_domain::category::ConfigCategory;
use reflex_domain::error::DeliveryError;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for delivering a notification.
#[derive(Debug, Deserialize)]
pub struct NotifyRequest {
    /// Name of the notification rule that fired.
    pub notification: String,
    /// The trigger reason document, passed through to the coordinator.
    pub reason: serde_json::Value,
    /// Optional host message; accepted for interface compatibility.
    #[serde(default)]
    pub message: String,
}

/// Response body for a delivery attempt.
#[derive(Debug, Serialize)]
pub struct NotifyResponse {
    /// True when the side effect was performed; false when the delivery is
    /// disabled.
    pub delivered: bool,
}

/// Routes for the delivery boundary.
pub fn routes<H: DeliveryHandler + 'static>() -> Router<AppState<H>> {
    Router::new()
        .route("/notify", post(notify::<H>))
        .route("/configuration", put(reconfigure::<H>))
}

/// `POST /notify`
pub async fn notify<H: DeliveryHandler + 'static>(
    State(state): State<AppState<H>>,
    Json(request): Json<NotifyRequest>,
) -> Result<Json<NotifyResponse>, ApiError> {
    let reason = request.reason.to_string();
    let outcome = state
        .handler
        .deliver(&request.notification, &reason, &request.message)
        .await?;
    Ok(Json(NotifyResponse {
        delivered: outcome.is_delivered(),
    }))
}

/// `PUT /configuration`
pub async fn reconfigure<H: DeliveryHandler + 'static>(
    State(state): State<AppState<H>>,
    Json(items): Json<serde_json::Value>,
) -> Result<StatusCode, ApiError> {
    let category =
        ConfigCategory::from_value("delivery", items).map_err(DeliveryError::from)?;
    state.handler.reconfigure(category).await;
    Ok(StatusCode::NO_CONTENT)
}
