//! File-backed model repository

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use ndarray::{Array1, Array2};
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::domain::{DomainError, LogisticRegression, ModelArtifact, ModelHandle, ModelRepository};

/// Default artifact location, relative to the working directory
pub const DEFAULT_MODEL_PATH: &str = "model/iris_classifier.json";

/// Loads a JSON model artifact from disk on first use and keeps it for the
/// lifetime of the repository. Failed loads are not cached.
#[derive(Debug)]
pub struct FileModelRepository {
    path: PathBuf,
    model: OnceCell<Arc<LogisticRegression>>,
}

impl FileModelRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            model: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_model(&self) -> Result<Arc<LogisticRegression>, DomainError> {
        let path = self.path.display();

        let bytes = tokio::fs::read(&self.path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                DomainError::not_found(format!("Model file not found at {}", path))
            }
            _ => DomainError::model(format!("Failed to read model file {}: {}", path, e)),
        })?;

        let artifact: ModelArtifact = serde_json::from_slice(&bytes)
            .map_err(|e| DomainError::model(format!("Failed to parse model file {}: {}", path, e)))?;

        let model = LogisticRegression::from_artifact(artifact)
            .map_err(|e| DomainError::model(format!("Invalid model file {}: {}", path, e)))?;

        info!(
            path = %path,
            classes = ?model.class_names(),
            features = ?model.feature_names(),
            "Model loaded"
        );

        Ok(Arc::new(model))
    }
}

impl Default for FileModelRepository {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_PATH)
    }
}

#[async_trait]
impl ModelRepository for FileModelRepository {
    async fn load(&self) -> Result<ModelHandle, DomainError> {
        let model = self.model.get_or_try_init(|| self.read_model()).await?;
        Ok(ModelHandle::from(Arc::clone(model)))
    }

    async fn predict(
        &self,
        model: &ModelHandle,
        rows: Array2<f64>,
    ) -> Result<Array1<i64>, DomainError> {
        let model = model
            .model()
            .ok_or_else(|| DomainError::invalid_state("Model not loaded"))?;

        debug!(rows = rows.nrows(), "Running inference");
        Ok(model.predict(&rows)?)
    }
}
