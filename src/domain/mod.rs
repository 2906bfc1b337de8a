//! Domain layer - Core business logic and entities

pub mod classifier;
pub mod error;
pub mod prediction;

pub use classifier::{
    LogisticRegression, ModelArtifact, ModelHandle, ModelRepository, ModelValidationError,
};
pub use error::DomainError;
pub use prediction::{species_name, FeatureRecord, PredictionResult, UNKNOWN_SPECIES};
