//! Dashboard view-model types.

use chrono::{DateTime, Utc};
use vitalis_core::models::PredictionResult;

/// Headline numbers at the top of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthMetrics {
    /// Derived from the graded prediction probability when available.
    pub health_score: Option<u8>,
    pub risk_level: String,
    pub reports_analyzed: usize,
    pub days_active: i64,
}

/// What came of the live prediction call.
#[derive(Debug, Clone, PartialEq)]
pub enum RiskOutcome {
    Resolved(PredictionResult),
    /// The prediction service was unavailable or answered unusably;
    /// the error text is shown in place of a result.
    Unavailable(String),
}

/// One condition's risk line on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskEntry {
    pub condition: String,
    pub outcome: RiskOutcome,
}

impl RiskEntry {
    /// Display text for the entry.
    pub fn display(&self) -> String {
        match &self.outcome {
            RiskOutcome::Resolved(result) => result.summary(),
            RiskOutcome::Unavailable(reason) => format!("unavailable: {reason}"),
        }
    }
}

/// A row in the recent-activity list.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub date: DateTime<Utc>,
    pub kind: String,
    pub status: String,
}

/// A static wellness tip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthTip {
    pub tip: &'static str,
    pub description: &'static str,
}

/// The fixed tip list shown under the metrics.
pub fn health_tips() -> Vec<HealthTip> {
    vec![
        HealthTip {
            tip: "Stay Hydrated",
            description: "Drink at least 8 glasses of water daily",
        },
        HealthTip {
            tip: "Regular Exercise",
            description: "30 minutes of activity, 5 days a week",
        },
        HealthTip {
            tip: "Sleep Well",
            description: "Aim for 7-9 hours of quality sleep",
        },
    ]
}

/// The assembled dashboard for one patient.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub patient_name: String,
    pub metrics: HealthMetrics,
    pub risk: RiskEntry,
    pub recent_activity: Vec<ActivityEntry>,
    pub tips: Vec<HealthTip>,
}
