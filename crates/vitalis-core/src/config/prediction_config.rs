use serde::{Deserialize, Serialize};

use super::defaults;

/// Prediction client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Base URL of the prediction service.
    pub base_url: String,
    /// Transport timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_BASE_URL.to_string(),
            timeout_secs: defaults::DEFAULT_TIMEOUT_SECS,
        }
    }
}
