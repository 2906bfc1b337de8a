//! Classifier entity, artifact format and handle

use std::sync::Arc;

use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use super::validation::{validate_algorithm, validate_shape, ModelValidationError, SUPPORTED_ALGORITHM};

/// Serialized form of a trained classifier, as exported by the training job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Column order expected by `coefficients`
    pub feature_names: Vec<String>,

    /// Optional label per class, in class id order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class_names: Vec<String>,

    /// One row per class, one column per feature
    pub coefficients: Vec<Vec<f64>>,

    /// One bias term per class
    pub intercepts: Vec<f64>,
}

fn default_algorithm() -> String {
    SUPPORTED_ALGORITHM.to_string()
}

/// Multinomial logistic regression ready for inference
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    feature_names: Vec<String>,
    class_names: Vec<String>,
    /// Shape (n_classes, n_features)
    coefficients: Array2<f64>,
    intercepts: Array1<f64>,
}

impl LogisticRegression {
    /// Build a model from its artifact, checking that all shapes agree
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelValidationError> {
        validate_algorithm(&artifact.algorithm)?;

        let n_features = artifact.feature_names.len();
        validate_shape(
            n_features,
            &artifact.coefficients,
            &artifact.intercepts,
            &artifact.class_names,
        )?;

        let n_classes = artifact.intercepts.len();
        let coefficients =
            Array2::from_shape_fn((n_classes, n_features), |(k, j)| artifact.coefficients[k][j]);

        Ok(Self {
            feature_names: artifact.feature_names,
            class_names: artifact.class_names,
            coefficients,
            intercepts: Array1::from(artifact.intercepts),
        })
    }

    pub fn n_features(&self) -> usize {
        self.coefficients.ncols()
    }

    pub fn n_classes(&self) -> usize {
        self.coefficients.nrows()
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    /// Raw per-class scores, shape (n_rows, n_classes)
    pub fn decision_function(&self, rows: &Array2<f64>) -> Result<Array2<f64>, ModelValidationError> {
        if rows.ncols() != self.n_features() {
            return Err(ModelValidationError::FeatureCount {
                expected: self.n_features(),
                actual: rows.ncols(),
            });
        }

        let mut scores = rows.dot(&self.coefficients.t());
        scores += &self.intercepts;
        Ok(scores)
    }

    /// Predicted class id for every row.
    ///
    /// Softmax is monotone, so the highest raw score is also the most
    /// probable class. Ties go to the lowest class id.
    pub fn predict(&self, rows: &Array2<f64>) -> Result<Array1<i64>, ModelValidationError> {
        let scores = self.decision_function(rows)?;

        Ok(scores.rows().into_iter().map(argmax).map(|idx| idx as i64).collect())
    }
}

fn argmax(row: ArrayView1<'_, f64>) -> usize {
    let mut best = 0;
    let mut best_score = f64::NEG_INFINITY;

    for (idx, &score) in row.iter().enumerate() {
        if score > best_score {
            best = idx;
            best_score = score;
        }
    }

    best
}

/// Opaque handle to a loaded classifier.
///
/// Cloning is cheap. An empty handle stands for "nothing loaded" and is
/// rejected by repositories at predict time.
#[derive(Debug, Clone, Default)]
pub struct ModelHandle(Option<Arc<LogisticRegression>>);

impl ModelHandle {
    pub fn new(model: LogisticRegression) -> Self {
        Self(Some(Arc::new(model)))
    }

    pub fn empty() -> Self {
        Self(None)
    }

    pub fn is_loaded(&self) -> bool {
        self.0.is_some()
    }

    pub fn model(&self) -> Option<&LogisticRegression> {
        self.0.as_deref()
    }
}

impl From<Arc<LogisticRegression>> for ModelHandle {
    fn from(model: Arc<LogisticRegression>) -> Self {
        Self(Some(model))
    }
}
