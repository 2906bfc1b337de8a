//! Classifier domain - trained model, its artifact format and repository

mod entity;
mod repository;
mod validation;

pub use entity::{LogisticRegression, ModelArtifact, ModelHandle};
#[cfg(test)]
pub use repository::MockModelRepository;
pub use repository::ModelRepository;
pub use validation::{validate_algorithm, validate_shape, ModelValidationError, SUPPORTED_ALGORITHM};
