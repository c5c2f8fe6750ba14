//! DashboardBuilder — assembles the view from the store and a live
//! prediction call.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};
use vitalis_core::errors::{StoreError, VitalisResult};
use vitalis_core::models::{FeatureVector, PredictionRecord, PredictionResult};
use vitalis_core::traits::IRecordStore;
use vitalis_prediction::PredictionClient;

use crate::view::{
    health_tips, ActivityEntry, DashboardView, HealthMetrics, RiskEntry, RiskOutcome,
};

/// How many recent analyses appear in the activity list.
const RECENT_ANALYSES: usize = 5;

pub struct DashboardBuilder {
    store: Arc<dyn IRecordStore>,
    client: PredictionClient,
}

impl DashboardBuilder {
    pub fn new(store: Arc<dyn IRecordStore>, client: PredictionClient) -> Self {
        Self { store, client }
    }

    /// Build the dashboard for one patient.
    ///
    /// Runs a fresh prediction on the patient's feature vector and
    /// records the outcome in the prediction history. A failed call
    /// degrades the risk entry; store failures still fail the view,
    /// since there is nothing to render without records.
    pub fn build(&self, patient_id: &str) -> VitalisResult<DashboardView> {
        let patient =
            self.store
                .get_patient(patient_id)?
                .ok_or_else(|| StoreError::RecordNotFound {
                    collection: "patients".to_string(),
                    id: patient_id.to_string(),
                })?;

        let features = FeatureVector::from_record(&patient)?;
        let outcome = match self.client.predict(&features) {
            Ok(result) => {
                self.store.insert_prediction(&PredictionRecord {
                    id: uuid::Uuid::new_v4().to_string(),
                    patient_id: patient.id.clone(),
                    features,
                    summary: result.summary(),
                    created_at: Utc::now(),
                })?;
                RiskOutcome::Resolved(result)
            }
            Err(e) => {
                warn!(error = %e, patient_id, "risk prediction unavailable");
                RiskOutcome::Unavailable(e.to_string())
            }
        };

        let analyses = self.store.recent_report_analyses(RECENT_ANALYSES)?;
        let history = self.store.predictions_for_patient(&patient.id)?;

        let mut recent_activity: Vec<ActivityEntry> = analyses
            .iter()
            .map(|a| ActivityEntry {
                date: a.created_at,
                kind: format!("Report: {}", a.filename),
                status: "Reviewed".to_string(),
            })
            .collect();
        recent_activity.extend(history.iter().map(|p| ActivityEntry {
            date: p.created_at,
            kind: "Risk prediction".to_string(),
            status: p.summary.clone(),
        }));
        recent_activity.sort_by(|a, b| b.date.cmp(&a.date));

        let metrics = HealthMetrics {
            health_score: health_score(&outcome),
            risk_level: risk_level(&outcome),
            reports_analyzed: analyses.len(),
            days_active: (Utc::now() - patient.created_at).num_days(),
        };

        debug!(patient_id, risk = %metrics.risk_level, "dashboard assembled");

        Ok(DashboardView {
            patient_name: patient.name,
            metrics,
            risk: RiskEntry {
                condition: "Diabetes Risk".to_string(),
                outcome,
            },
            recent_activity,
            tips: health_tips(),
        })
    }
}

/// Score out of 100, derived from the graded probability. Binary and
/// unavailable outcomes carry no score.
fn health_score(outcome: &RiskOutcome) -> Option<u8> {
    match outcome {
        RiskOutcome::Resolved(PredictionResult::Graded { probability, .. }) => {
            Some((100.0 - probability * 100.0).round().clamp(0.0, 100.0) as u8)
        }
        _ => None,
    }
}

fn risk_level(outcome: &RiskOutcome) -> String {
    match outcome {
        RiskOutcome::Resolved(PredictionResult::Graded { risk_level, .. }) => risk_level.clone(),
        RiskOutcome::Resolved(PredictionResult::Binary(true)) => "High".to_string(),
        RiskOutcome::Resolved(PredictionResult::Binary(false)) => "Low".to_string(),
        RiskOutcome::Unavailable(_) => "Unknown".to_string(),
    }
}
