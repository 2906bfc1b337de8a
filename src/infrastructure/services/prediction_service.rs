//! Prediction service - single-record inference through a model repository

use std::sync::Arc;

use ndarray::arr2;
use tracing::debug;

use crate::domain::{
    species_name, DomainError, FeatureRecord, ModelHandle, ModelRepository, PredictionResult,
};

/// Runs one feature record through the repository's model and names the
/// predicted species
pub struct PredictionService<R: ModelRepository + ?Sized> {
    repository: Arc<R>,
    model: ModelHandle,
}

impl<R: ModelRepository + ?Sized> PredictionService<R> {
    /// Create a service, loading the model through the repository
    pub async fn new(repository: Arc<R>) -> Result<Self, DomainError> {
        let model = repository.load().await?;
        Ok(Self { repository, model })
    }

    /// Predict the species for a single feature record
    pub async fn predict_one(&self, features: &FeatureRecord) -> Result<PredictionResult, DomainError> {
        let rows = arr2(&[features.to_row()]);

        let predictions = self.repository.predict(&self.model, rows).await?;
        let class_id = *predictions
            .first()
            .ok_or_else(|| DomainError::internal("Model returned no prediction"))?;
        let class_name = species_name(class_id);

        debug!(class_id, class_name, "Prediction complete");

        Ok(PredictionResult::new(class_id, class_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classifier::MockModelRepository;
    use crate::domain::{LogisticRegression, ModelArtifact, UNKNOWN_SPECIES};
    use ndarray::{array, Array1};

    fn loaded_handle() -> ModelHandle {
        let artifact = ModelArtifact {
            algorithm: crate::domain::classifier::SUPPORTED_ALGORITHM.to_string(),
            feature_names: vec![
                "sepal_length".to_string(),
                "sepal_width".to_string(),
                "petal_length".to_string(),
                "petal_width".to_string(),
            ],
            class_names: vec![],
            coefficients: vec![vec![0.0; 4]],
            intercepts: vec![0.0],
        };
        ModelHandle::new(LogisticRegression::from_artifact(artifact).unwrap())
    }

    fn repository_predicting(
        expected_row: [f64; 4],
        prediction: Array1<i64>,
    ) -> Arc<MockModelRepository> {
        let mut repo = MockModelRepository::new();

        repo.expect_load().times(1).returning(|| Ok(loaded_handle()));
        repo.expect_predict()
            .times(1)
            .withf(move |handle, rows| handle.is_loaded() && rows == &arr2(&[expected_row]))
            .returning(move |_, _| Ok(prediction.clone()));

        Arc::new(repo)
    }

    #[tokio::test]
    async fn test_predict_setosa() {
        let repo = repository_predicting([5.1, 3.5, 1.4, 0.2], array![0]);
        let service = PredictionService::new(repo).await.unwrap();

        let result = service
            .predict_one(&FeatureRecord::new(5.1, 3.5, 1.4, 0.2))
            .await
            .unwrap();

        assert_eq!(result, PredictionResult::new(0, "Setosa"));
    }

    #[tokio::test]
    async fn test_predict_versicolor() {
        let repo = repository_predicting([6.0, 2.2, 4.0, 1.0], array![1]);
        let service = PredictionService::new(repo).await.unwrap();

        let result = service
            .predict_one(&FeatureRecord::new(6.0, 2.2, 4.0, 1.0))
            .await
            .unwrap();

        assert_eq!(result, PredictionResult::new(1, "Versicolor"));
    }

    #[tokio::test]
    async fn test_predict_virginica() {
        let repo = repository_predicting([7.3, 2.9, 6.3, 1.8], array![2]);
        let service = PredictionService::new(repo).await.unwrap();

        let result = service
            .predict_one(&FeatureRecord::new(7.3, 2.9, 6.3, 1.8))
            .await
            .unwrap();

        assert_eq!(result, PredictionResult::new(2, "Virginica"));
    }

    #[tokio::test]
    async fn test_predict_unknown_class_id() {
        let repo = repository_predicting([1.0, 1.0, 1.0, 1.0], array![99]);
        let service = PredictionService::new(repo).await.unwrap();

        let result = service
            .predict_one(&FeatureRecord::new(1.0, 1.0, 1.0, 1.0))
            .await
            .unwrap();

        assert_eq!(result.class_id, 99);
        assert_eq!(result.class_name, UNKNOWN_SPECIES);
    }

    #[tokio::test]
    async fn test_load_failure_propagates_from_constructor() {
        let mut repo = MockModelRepository::new();
        repo.expect_load()
            .times(1)
            .returning(|| Err(DomainError::not_found("Model file not found at model.json")));
        repo.expect_predict().times(0);

        let result = PredictionService::new(Arc::new(repo)).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_predict_failure_propagates_unchanged() {
        let mut repo = MockModelRepository::new();
        repo.expect_load().times(1).returning(|| Ok(ModelHandle::empty()));
        repo.expect_predict()
            .times(1)
            .returning(|_, _| Err(DomainError::invalid_state("Model not loaded")));

        let service = PredictionService::new(Arc::new(repo)).await.unwrap();
        let err = service
            .predict_one(&FeatureRecord::new(5.1, 3.5, 1.4, 0.2))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidState { .. }));
    }

    #[tokio::test]
    async fn test_empty_prediction_is_internal_error() {
        let mut repo = MockModelRepository::new();
        repo.expect_load().returning(|| Ok(loaded_handle()));
        repo.expect_predict()
            .returning(|_, _| Ok(Array1::from(Vec::<i64>::new())));

        let service = PredictionService::new(Arc::new(repo)).await.unwrap();
        let err = service
            .predict_one(&FeatureRecord::new(5.1, 3.5, 1.4, 0.2))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Internal { .. }));
    }
}
