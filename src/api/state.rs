//! Application state shared across requests

use std::sync::Arc;

use crate::domain::ModelRepository;

/// Process-wide state. The repository is created once at startup, so the
/// model artifact is read from disk at most once per process.
#[derive(Clone)]
pub struct AppState {
    pub model_repository: Arc<dyn ModelRepository>,
}

impl AppState {
    pub fn new(model_repository: Arc<dyn ModelRepository>) -> Self {
        Self { model_repository }
    }
}
