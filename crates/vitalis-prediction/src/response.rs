//! Shape detection for prediction responses.
//!
//! The inference service answers in one of two schemas: a binary
//! `{"prediction": 0|1}` or a graded `{"risk_level", "probability"}`.
//! Both are live in production, so the parse boundary checks for each
//! instead of assuming one.

use serde_json::Value;
use vitalis_core::errors::PredictionError;
use vitalis_core::models::PredictionResult;

/// Map a parsed response body to a typed result.
///
/// A `prediction` field wins over the graded pair: 1 is positive,
/// anything else negative. A body with neither shape is malformed.
pub fn parse_prediction(body: &Value) -> Result<PredictionResult, PredictionError> {
    if let Some(prediction) = body.get("prediction") {
        let positive = matches!(prediction.as_f64(), Some(p) if p == 1.0);
        return Ok(PredictionResult::Binary(positive));
    }

    let risk_level = body.get("risk_level").and_then(Value::as_str);
    let probability = body.get("probability").and_then(Value::as_f64);
    if let (Some(risk_level), Some(probability)) = (risk_level, probability) {
        return Ok(PredictionResult::Graded {
            risk_level: risk_level.to_string(),
            probability,
        });
    }

    Err(PredictionError::InvalidResponseShape {
        reason: "response carries neither a prediction nor a risk_level/probability pair"
            .to_string(),
    })
}
