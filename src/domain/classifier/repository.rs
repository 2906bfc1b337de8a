//! Model repository trait

use async_trait::async_trait;
use ndarray::{Array1, Array2};

use super::ModelHandle;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Source of a trained classifier and the inference routine that runs it
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ModelRepository: Send + Sync {
    /// Load the model on first call and return the cached handle afterwards
    async fn load(&self) -> Result<ModelHandle, DomainError>;

    /// Predict one class id per row of `rows`
    async fn predict(
        &self,
        model: &ModelHandle,
        rows: Array2<f64>,
    ) -> Result<Array1<i64>, DomainError>;
}
