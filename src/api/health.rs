//! Health check endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use tracing::warn;

use crate::api::types::Json;

use super::state::AppState;

/// Health check status
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: HealthStatus::Healthy,
            detail: None,
        }
    }

    pub fn unhealthy(detail: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            detail: Some(detail.into()),
        }
    }
}

/// GET /health
///
/// Healthy once the model can be loaded. Load failures are reported in the
/// body, never as an error response.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    match state.model_repository.load().await {
        Ok(_) => Json(HealthResponse::healthy()),
        Err(e) => {
            warn!(error = %e, "Health check failed");
            Json(HealthResponse::unhealthy(e.to_string()))
        }
    }
}

/// GET /live - process liveness only
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}
