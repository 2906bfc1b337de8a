//! Classifier validation utilities

use std::fmt;

use crate::domain::DomainError;

/// Only artifact algorithm this service knows how to evaluate
pub const SUPPORTED_ALGORITHM: &str = "multinomial_logistic_regression";

/// Classifier validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ModelValidationError {
    /// Artifact was produced by an algorithm we cannot evaluate
    UnsupportedAlgorithm { algorithm: String },
    /// Artifact declares no classes
    NoClasses,
    /// Artifact declares no features
    NoFeatures,
    /// Number of coefficient rows does not match number of intercepts
    CoefficientRowCount { rows: usize, classes: usize },
    /// A coefficient row has the wrong width
    CoefficientWidth {
        class: usize,
        width: usize,
        expected: usize,
    },
    /// Class names present but not one per class
    ClassNameCount { names: usize, classes: usize },
    /// Input rows do not match the model's feature count
    FeatureCount { expected: usize, actual: usize },
}

impl fmt::Display for ModelValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedAlgorithm { algorithm } => {
                write!(
                    f,
                    "Unsupported algorithm '{}': expected '{}'",
                    algorithm, SUPPORTED_ALGORITHM
                )
            }
            Self::NoClasses => write!(f, "Model must define at least one class"),
            Self::NoFeatures => write!(f, "Model must define at least one feature"),
            Self::CoefficientRowCount { rows, classes } => {
                write!(
                    f,
                    "Coefficient matrix has {} rows but {} intercepts were given",
                    rows, classes
                )
            }
            Self::CoefficientWidth {
                class,
                width,
                expected,
            } => {
                write!(
                    f,
                    "Coefficient row {} has {} entries (expected {})",
                    class, width, expected
                )
            }
            Self::ClassNameCount { names, classes } => {
                write!(f, "Model has {} class names for {} classes", names, classes)
            }
            Self::FeatureCount { expected, actual } => {
                write!(f, "Expected {} features per row, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for ModelValidationError {}

impl From<ModelValidationError> for DomainError {
    fn from(err: ModelValidationError) -> Self {
        match err {
            ModelValidationError::FeatureCount { .. } => DomainError::validation(err.to_string()),
            _ => DomainError::model(err.to_string()),
        }
    }
}

/// Check the declared algorithm
pub fn validate_algorithm(algorithm: &str) -> Result<(), ModelValidationError> {
    if algorithm != SUPPORTED_ALGORITHM {
        return Err(ModelValidationError::UnsupportedAlgorithm {
            algorithm: algorithm.to_string(),
        });
    }

    Ok(())
}

/// Check that coefficients, intercepts and class names agree on shape
pub fn validate_shape(
    feature_count: usize,
    coefficients: &[Vec<f64>],
    intercepts: &[f64],
    class_names: &[String],
) -> Result<(), ModelValidationError> {
    if feature_count == 0 {
        return Err(ModelValidationError::NoFeatures);
    }

    if intercepts.is_empty() {
        return Err(ModelValidationError::NoClasses);
    }

    if coefficients.len() != intercepts.len() {
        return Err(ModelValidationError::CoefficientRowCount {
            rows: coefficients.len(),
            classes: intercepts.len(),
        });
    }

    for (class, row) in coefficients.iter().enumerate() {
        if row.len() != feature_count {
            return Err(ModelValidationError::CoefficientWidth {
                class,
                width: row.len(),
                expected: feature_count,
            });
        }
    }

    if !class_names.is_empty() && class_names.len() != intercepts.len() {
        return Err(ModelValidationError::ClassNameCount {
            names: class_names.len(),
            classes: intercepts.len(),
        });
    }

    Ok(())
}
