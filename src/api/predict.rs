//! Prediction endpoint

use std::time::Instant;

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{FeatureRecord, PredictionResult};
use crate::infrastructure::observability::record_prediction;
use crate::infrastructure::services::PredictionService;

/// POST /predict
pub async fn predict(
    State(state): State<AppState>,
    Json(features): Json<FeatureRecord>,
) -> Result<Json<PredictionResult>, ApiError> {
    let start = Instant::now();
    debug!(?features, "Predicting species");

    let service = PredictionService::new(state.model_repository.clone()).await?;
    let result = service.predict_one(&features).await?;

    record_prediction(&result.class_name, start.elapsed());

    Ok(Json(result))
}
