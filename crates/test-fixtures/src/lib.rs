//! In-memory fakes of the Vitalis collaborator traits plus sample data,
//! shared by tests across the workspace.
//!
//! The fakes are deliberately simple: `Mutex`-guarded vectors with the
//! same observable behavior the real external services expose through
//! the traits.

use std::sync::Mutex;

use chrono::Utc;
use vitalis_core::errors::{StoreError, UploadError, VitalisResult};
use vitalis_core::models::{
    ChatLogEntry, FeatureVector, PatientRecord, PredictionRecord, ReportAnalysis,
};
use vitalis_core::traits::{IFileStore, INotifier, IRecordStore, Notice, StoredFile};

/// The canonical example input from the prediction service docs:
/// [6, 148, 72, 35, 0, 33.6, 0.627, 50].
pub fn sample_features() -> FeatureVector {
    FeatureVector::new(vec![6.0, 148.0, 72.0, 35.0, 0.0, 33.6, 0.627, 50.0])
        .expect("sample features are valid")
}

/// A patient whose fields match `sample_features`.
pub fn sample_patient() -> PatientRecord {
    PatientRecord {
        id: uuid::Uuid::new_v4().to_string(),
        name: "Test Patient".to_string(),
        pregnancies: 6.0,
        glucose: 148.0,
        blood_pressure: 72.0,
        skin_thickness: 35.0,
        insulin: 0.0,
        bmi: 33.6,
        diabetes_pedigree: 0.627,
        age: 50.0,
        created_at: Utc::now(),
    }
}

/// In-memory record store.
#[derive(Default)]
pub struct InMemoryRecordStore {
    patients: Mutex<Vec<PatientRecord>>,
    chat_logs: Mutex<Vec<ChatLogEntry>>,
    analyses: Mutex<Vec<ReportAnalysis>>,
    predictions: Mutex<Vec<PredictionRecord>>,
    /// When set, every call fails with this backend message.
    fail_with: Mutex<Option<String>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail, for error-path tests.
    pub fn fail_with(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    fn check_failure(&self) -> VitalisResult<()> {
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(StoreError::Backend { message }.into());
        }
        Ok(())
    }
}

impl IRecordStore for InMemoryRecordStore {
    fn list_patients(&self) -> VitalisResult<Vec<PatientRecord>> {
        self.check_failure()?;
        Ok(self.patients.lock().unwrap().clone())
    }

    fn get_patient(&self, id: &str) -> VitalisResult<Option<PatientRecord>> {
        self.check_failure()?;
        Ok(self
            .patients
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    fn insert_patient(&self, patient: &PatientRecord) -> VitalisResult<()> {
        self.check_failure()?;
        self.patients.lock().unwrap().push(patient.clone());
        Ok(())
    }

    fn chat_logs(&self, patient_id: &str) -> VitalisResult<Vec<ChatLogEntry>> {
        self.check_failure()?;
        let mut logs: Vec<ChatLogEntry> = self
            .chat_logs
            .lock()
            .unwrap()
            .iter()
            .filter(|log| log.patient_id == patient_id)
            .cloned()
            .collect();
        logs.sort_by_key(|log| log.timestamp);
        Ok(logs)
    }

    fn append_chat_log(&self, entry: &ChatLogEntry) -> VitalisResult<()> {
        self.check_failure()?;
        self.chat_logs.lock().unwrap().push(entry.clone());
        Ok(())
    }

    fn update_last_reply(&self, patient_id: &str, reply: &str) -> VitalisResult<()> {
        self.check_failure()?;
        let mut logs = self.chat_logs.lock().unwrap();
        match logs
            .iter_mut()
            .rev()
            .find(|log| log.patient_id == patient_id)
        {
            Some(log) => {
                log.response = reply.to_string();
                Ok(())
            }
            None => Err(StoreError::RecordNotFound {
                collection: "chat_logs".to_string(),
                id: patient_id.to_string(),
            }
            .into()),
        }
    }

    fn insert_report_analysis(&self, analysis: &ReportAnalysis) -> VitalisResult<()> {
        self.check_failure()?;
        self.analyses.lock().unwrap().push(analysis.clone());
        Ok(())
    }

    fn recent_report_analyses(&self, limit: usize) -> VitalisResult<Vec<ReportAnalysis>> {
        self.check_failure()?;
        let mut analyses = self.analyses.lock().unwrap().clone();
        analyses.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        analyses.truncate(limit);
        Ok(analyses)
    }

    fn insert_prediction(&self, record: &PredictionRecord) -> VitalisResult<()> {
        self.check_failure()?;
        self.predictions.lock().unwrap().push(record.clone());
        Ok(())
    }

    fn predictions_for_patient(&self, patient_id: &str) -> VitalisResult<Vec<PredictionRecord>> {
        self.check_failure()?;
        let mut records: Vec<PredictionRecord> = self
            .predictions
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.patient_id == patient_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

/// In-memory file store. Records uploads and hands back `memory://` URLs.
#[derive(Default)]
pub struct InMemoryFileStore {
    uploads: Mutex<Vec<(String, usize)>>,
    reject_all: Mutex<bool>,
}

impl InMemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent upload fail, for error-path tests.
    pub fn reject_uploads(&self) {
        *self.reject_all.lock().unwrap() = true;
    }

    pub fn uploaded_paths(&self) -> Vec<String> {
        self.uploads
            .lock()
            .unwrap()
            .iter()
            .map(|(path, _)| path.clone())
            .collect()
    }
}

impl IFileStore for InMemoryFileStore {
    fn upload(&self, path: &str, bytes: &[u8]) -> VitalisResult<StoredFile> {
        if *self.reject_all.lock().unwrap() {
            return Err(UploadError::Backend {
                message: "storage unavailable".to_string(),
            }
            .into());
        }
        self.uploads
            .lock()
            .unwrap()
            .push((path.to_string(), bytes.len()));
        Ok(StoredFile {
            path: path.to_string(),
            public_url: format!("memory://{path}"),
        })
    }
}

/// Notifier that records every notice for later assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl INotifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}
