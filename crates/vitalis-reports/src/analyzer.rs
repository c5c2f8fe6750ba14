//! ReportAnalyzer — upload, analyze, persist, notify.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use vitalis_core::config::UploadConfig;
use vitalis_core::errors::{UploadError, VitalisResult};
use vitalis_core::models::{Finding, FindingFlag, ReportAnalysis};
use vitalis_core::traits::{IFileStore, INotifier, IRecordStore, Notice};

/// Runs the report-analysis flow end to end.
///
/// The analysis itself is a placeholder producing fixed findings; the
/// real model is an external service that is not part of this codebase.
pub struct ReportAnalyzer {
    files: Arc<dyn IFileStore>,
    store: Arc<dyn IRecordStore>,
    notifier: Arc<dyn INotifier>,
    config: UploadConfig,
}

impl ReportAnalyzer {
    pub fn new(
        files: Arc<dyn IFileStore>,
        store: Arc<dyn IRecordStore>,
        notifier: Arc<dyn INotifier>,
        config: UploadConfig,
    ) -> Self {
        Self {
            files,
            store,
            notifier,
            config,
        }
    }

    /// Upload a report and produce its analysis.
    ///
    /// Every failure is surfaced both as a typed error to the caller
    /// and as a destructive notice to the user.
    pub fn analyze(&self, filename: &str, bytes: &[u8]) -> VitalisResult<ReportAnalysis> {
        if bytes.len() as u64 > self.config.max_size_bytes {
            let err = UploadError::Rejected {
                reason: format!(
                    "{} bytes exceeds the {} byte limit",
                    bytes.len(),
                    self.config.max_size_bytes
                ),
            };
            self.notifier
                .notify(Notice::destructive("Upload failed", &err.to_string()));
            return Err(err.into());
        }

        let path = format!(
            "{}/{}_{filename}",
            self.config.prefix,
            Utc::now().timestamp_millis()
        );
        let stored = match self.files.upload(&path, bytes) {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, filename, "report upload failed");
                self.notifier
                    .notify(Notice::destructive("Upload failed", &e.to_string()));
                return Err(e);
            }
        };

        let analysis = placeholder_analysis(filename, &stored.public_url);

        if let Err(e) = self.store.insert_report_analysis(&analysis) {
            warn!(error = %e, filename, "saving report analysis failed");
            self.notifier
                .notify(Notice::destructive("Save failed", &e.to_string()));
            return Err(e);
        }

        info!(filename, url = %stored.public_url, "report analyzed");
        self.notifier.notify(Notice::success(
            "Report analyzed",
            "Your medical report has been analyzed and saved successfully",
        ));
        Ok(analysis)
    }
}

/// The canned analysis the demo flow produces for every report.
fn placeholder_analysis(filename: &str, file_url: &str) -> ReportAnalysis {
    ReportAnalysis {
        filename: filename.to_string(),
        file_url: file_url.to_string(),
        confidence: 94,
        findings: vec![
            Finding {
                flag: FindingFlag::Normal,
                label: "Blood Pressure".to_string(),
                value: "120/80 mmHg".to_string(),
            },
            Finding {
                flag: FindingFlag::Normal,
                label: "Heart Rate".to_string(),
                value: "72 bpm".to_string(),
            },
            Finding {
                flag: FindingFlag::Warning,
                label: "Blood Sugar".to_string(),
                value: "115 mg/dL (slightly elevated)".to_string(),
            },
            Finding {
                flag: FindingFlag::Normal,
                label: "Cholesterol".to_string(),
                value: "180 mg/dL".to_string(),
            },
        ],
        recommendations: vec![
            "Monitor blood sugar levels regularly".to_string(),
            "Consider dietary adjustments to manage glucose".to_string(),
            "Schedule follow-up with your physician in 3 months".to_string(),
        ],
        created_at: Utc::now(),
    }
}
