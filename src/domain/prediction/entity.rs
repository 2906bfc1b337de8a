//! Prediction input and output records

use serde::{Deserialize, Serialize};

/// Number of measurements in a feature record
pub const FEATURE_COUNT: usize = 4;

/// The four flower measurements describing one sample.
///
/// Deserialization is the validation step: all four fields must be present
/// and numeric. Values are not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
}

impl FeatureRecord {
    pub fn new(sepal_length: f64, sepal_width: f64, petal_length: f64, petal_width: f64) -> Self {
        Self {
            sepal_length,
            sepal_width,
            petal_length,
            petal_width,
        }
    }

    /// Measurements in model column order
    pub fn to_row(&self) -> [f64; FEATURE_COUNT] {
        [
            self.sepal_length,
            self.sepal_width,
            self.petal_length,
            self.petal_width,
        ]
    }
}

/// Predicted class for one feature record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub class_id: i64,
    pub class_name: String,
}

impl PredictionResult {
    pub fn new(class_id: i64, class_name: impl Into<String>) -> Self {
        Self {
            class_id,
            class_name: class_name.into(),
        }
    }
}
