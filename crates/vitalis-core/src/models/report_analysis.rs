use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity flag on a single report finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingFlag {
    Normal,
    Warning,
    Critical,
}

/// One measured value extracted from an uploaded report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub flag: FindingFlag,
    pub label: String,
    pub value: String,
}

/// Stored result of analyzing an uploaded medical report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportAnalysis {
    pub filename: String,
    pub file_url: String,
    /// Analysis confidence in percent.
    pub confidence: u8,
    pub findings: Vec<Finding>,
    pub recommendations: Vec<String>,
    pub created_at: DateTime<Utc>,
}
