use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A patient row from the external record store.
///
/// The numeric fields mirror the prediction service's positional
/// feature slots; `FeatureVector::from_record` reads them in canonical
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: String,
    pub name: String,
    pub pregnancies: f64,
    pub glucose: f64,
    pub blood_pressure: f64,
    pub skin_thickness: f64,
    pub insulin: f64,
    pub bmi: f64,
    pub diabetes_pedigree: f64,
    pub age: f64,
    pub created_at: DateTime<Utc>,
}
