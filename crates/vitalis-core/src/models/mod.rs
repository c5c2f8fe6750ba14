//! Data models shared across the workspace.

mod chat_message;
mod feature_vector;
mod patient_record;
mod prediction_record;
mod prediction_result;
mod report_analysis;
mod service_health;

pub use chat_message::{ChatLogEntry, ChatMessage, Sender};
pub use feature_vector::FeatureVector;
pub use patient_record::PatientRecord;
pub use prediction_record::PredictionRecord;
pub use prediction_result::PredictionResult;
pub use report_analysis::{Finding, FindingFlag, ReportAnalysis};
pub use service_health::ServiceHealth;
