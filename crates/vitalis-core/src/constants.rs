//! Workspace-wide constants.

/// Number of values in a diabetes-risk feature vector.
pub const FEATURE_COUNT: usize = 8;

/// Positional names of the feature-vector slots. The remote model
/// interprets position, not names; these exist for diagnostics.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Pregnancies",
    "Glucose",
    "BloodPressure",
    "SkinThickness",
    "Insulin",
    "BMI",
    "DiabetesPedigreeFunction",
    "Age",
];

/// Endpoint path for prediction requests.
pub const PREDICT_PATH: &str = "/predict";

/// Endpoint path for the prediction service health probe.
pub const HEALTH_PATH: &str = "/health";
