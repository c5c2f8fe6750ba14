//! Typed outcome of a prediction request.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a prediction call.
///
/// The inference service has been observed answering in two shapes:
/// a bare binary classification and a graded risk assessment. Both are
/// modeled explicitly; shape detection happens at the parse boundary in
/// `vitalis-prediction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PredictionResult {
    /// Binary classification: `true` means a positive (at-risk) label.
    Binary(bool),
    /// Graded assessment with a categorical level and probability in [0, 1].
    Graded { risk_level: String, probability: f64 },
}

impl PredictionResult {
    /// Human-readable one-line summary, e.g. `"Low Risk (15.3% probability)"`.
    pub fn summary(&self) -> String {
        match self {
            Self::Binary(true) => "positive".to_string(),
            Self::Binary(false) => "negative".to_string(),
            Self::Graded {
                risk_level,
                probability,
            } => format!(
                "{risk_level} Risk ({:.1}% probability)",
                probability * 100.0
            ),
        }
    }

    /// Probability for graded outcomes; binary outcomes carry none.
    pub fn probability(&self) -> Option<f64> {
        match self {
            Self::Binary(_) => None,
            Self::Graded { probability, .. } => Some(*probability),
        }
    }
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
