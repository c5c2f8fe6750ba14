//! PredictionClient — one POST per call against the inference endpoint.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};
use vitalis_core::config::PredictionConfig;
use vitalis_core::constants::{HEALTH_PATH, PREDICT_PATH};
use vitalis_core::errors::PredictionError;
use vitalis_core::models::{FeatureVector, PredictionResult, ServiceHealth};

use crate::response::parse_prediction;

#[derive(Serialize)]
struct PredictRequest<'a> {
    features: &'a [f64],
}

/// Client for the remote prediction service.
///
/// Holds nothing but the base URL and a reqwest client; every call is
/// an independent request with no retries and no caching. Re-invoking
/// after a failure is always safe.
#[derive(Debug)]
pub struct PredictionClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl PredictionClient {
    /// Build a client from configuration. The timeout is the
    /// transport-level default for every request; no per-call deadline
    /// is layered on top.
    pub fn new(config: &PredictionConfig) -> Result<Self, PredictionError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PredictionError::TransportFailure {
                reason: e.to_string(),
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Send one feature vector and return the typed outcome.
    ///
    /// Exactly one network call per invocation. The two observed
    /// response schemas are both handled; see `parse_prediction`.
    pub fn predict(&self, features: &FeatureVector) -> Result<PredictionResult, PredictionError> {
        let url = format!("{}{PREDICT_PATH}", self.base_url);
        debug!(url = %url, "sending prediction request");

        let response = self
            .http
            .post(&url)
            .json(&PredictRequest {
                features: features.values(),
            })
            .send()
            .map_err(|e| {
                warn!(error = %e, "prediction transport failure");
                PredictionError::TransportFailure {
                    reason: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "prediction service error");
            return Err(PredictionError::ServerError {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value =
            response
                .json()
                .map_err(|e| PredictionError::InvalidResponseShape {
                    reason: format!("JSON parse failed: {e}"),
                })?;

        let result = parse_prediction(&body)?;
        debug!(outcome = %result, "prediction resolved");
        Ok(result)
    }

    /// Probe the service's `GET /health` endpoint.
    pub fn health(&self) -> Result<ServiceHealth, PredictionError> {
        let url = format!("{}{HEALTH_PATH}", self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| PredictionError::TransportFailure {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictionError::ServerError {
                status: status.as_u16(),
            });
        }

        response
            .json()
            .map_err(|e| PredictionError::InvalidResponseShape {
                reason: format!("JSON parse failed: {e}"),
            })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
