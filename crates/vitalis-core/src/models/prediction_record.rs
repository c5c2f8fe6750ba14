use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::FeatureVector;

/// A prediction-history row: the input that was sent and the summary
/// of what came back. Each `predict` call is independent; this record
/// exists for display, not for caching or replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub id: String,
    pub patient_id: String,
    pub features: FeatureVector,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}
