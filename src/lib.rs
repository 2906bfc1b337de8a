//! Iris Inference API
//!
//! Serves a pre-trained multinomial logistic regression over HTTP:
//! - `POST /predict` classifies one flower from its four measurements
//! - `GET /health` reports whether the model artifact can be loaded
//!
//! Model access sits behind the [`domain::ModelRepository`] trait; the
//! prediction pipeline lives in [`infrastructure::services::PredictionService`].

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::{info, warn};

use api::state::AppState;
use domain::ModelRepository;
use infrastructure::model::FileModelRepository;

/// Build the process-wide state: one file-backed repository shared by every
/// request. With `model.preload` the artifact is read before serving; a
/// failure there is logged and left for `/health` to report.
pub async fn create_app_state(config: &AppConfig) -> AppState {
    let repository = Arc::new(FileModelRepository::new(&config.model.path));

    if config.model.preload {
        match repository.load().await {
            Ok(_) => info!(path = %repository.path().display(), "Model preloaded"),
            Err(e) => warn!(error = %e, "Model preload failed"),
        }
    }

    AppState::new(repository)
}
