use serde::{Deserialize, Serialize};

use super::defaults;

/// Chat subsystem configuration.
///
/// Two responder backends exist side by side: a local simulated reply
/// and a remote chat function. Which one runs is a config choice, not
/// a code path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Responder backend: "simulated" or "remote".
    pub responder: String,
    /// Endpoint URL for the remote responder.
    pub endpoint_url: Option<String>,
    /// Delay before the simulated responder answers, in milliseconds.
    pub reply_delay_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            responder: defaults::DEFAULT_RESPONDER.to_string(),
            endpoint_url: None,
            reply_delay_ms: defaults::DEFAULT_REPLY_DELAY_MS,
        }
    }
}
