//! Positional feature vector for diabetes-risk inference.

use serde::{Deserialize, Serialize};

use crate::constants::{FEATURE_COUNT, FEATURE_NAMES};
use crate::errors::PredictionError;
use crate::models::PatientRecord;

/// Ordered numeric input to the prediction service.
///
/// Position is semantically significant: the remote model interprets
/// slot index, not field names. Construction validates length and
/// finiteness so malformed data is rejected before it reaches the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    /// Build a feature vector, checking the two preconditions the wire
    /// contract leaves implicit: exactly [`FEATURE_COUNT`] values, all finite.
    pub fn new(values: Vec<f64>) -> Result<Self, PredictionError> {
        if values.len() != FEATURE_COUNT {
            return Err(PredictionError::InvalidInput {
                reason: format!("expected {FEATURE_COUNT} features, got {}", values.len()),
            });
        }
        if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
            return Err(PredictionError::InvalidInput {
                reason: format!("{} is not finite", FEATURE_NAMES[idx]),
            });
        }
        Ok(Self(values))
    }

    /// Build the vector from a patient record, in canonical slot order.
    pub fn from_record(patient: &PatientRecord) -> Result<Self, PredictionError> {
        Self::new(vec![
            patient.pregnancies,
            patient.glucose,
            patient.blood_pressure,
            patient.skin_thickness,
            patient.insulin,
            patient.bmi,
            patient.diabetes_pedigree,
            patient.age,
        ])
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for FeatureVector {
    type Error = PredictionError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<FeatureVector> for Vec<f64> {
    fn from(fv: FeatureVector) -> Self {
        fv.0
    }
}
