use crate::errors::VitalisResult;
use crate::models::{ChatLogEntry, PatientRecord, PredictionRecord, ReportAnalysis};

/// Read/insert/update access to the external record store.
///
/// Collections are keyed by opaque identifiers; the store's schema and
/// engine live outside this codebase.
pub trait IRecordStore: Send + Sync {
    // --- Patients ---
    fn list_patients(&self) -> VitalisResult<Vec<PatientRecord>>;
    fn get_patient(&self, id: &str) -> VitalisResult<Option<PatientRecord>>;
    fn insert_patient(&self, patient: &PatientRecord) -> VitalisResult<()>;

    // --- Chat logs ---
    fn chat_logs(&self, patient_id: &str) -> VitalisResult<Vec<ChatLogEntry>>;
    fn append_chat_log(&self, entry: &ChatLogEntry) -> VitalisResult<()>;
    /// Fill in the bot reply on the patient's most recent log row.
    fn update_last_reply(&self, patient_id: &str, reply: &str) -> VitalisResult<()>;

    // --- Report analyses ---
    fn insert_report_analysis(&self, analysis: &ReportAnalysis) -> VitalisResult<()>;
    fn recent_report_analyses(&self, limit: usize) -> VitalisResult<Vec<ReportAnalysis>>;

    // --- Prediction history ---
    fn insert_prediction(&self, record: &PredictionRecord) -> VitalisResult<()>;
    fn predictions_for_patient(&self, patient_id: &str) -> VitalisResult<Vec<PredictionRecord>>;
}
