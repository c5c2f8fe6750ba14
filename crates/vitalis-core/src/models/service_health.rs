use serde::{Deserialize, Serialize};

/// Decode of the prediction service's `GET /health` probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    pub model_loaded: bool,
}

impl ServiceHealth {
    /// The service is usable only when it reports healthy and the model
    /// actually loaded.
    pub fn is_ready(&self) -> bool {
        self.status == "healthy" && self.model_loaded
    }
}
