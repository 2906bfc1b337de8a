//! Prediction domain - request/response records and species naming

mod entity;
mod species;

pub use entity::{FeatureRecord, PredictionResult, FEATURE_COUNT};
pub use species::{species_name, UNKNOWN_SPECIES};
