use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;
use vitalis_core::errors::{ChatError, VitalisResult};
use vitalis_core::traits::IChatResponder;

#[derive(Serialize)]
struct ChatRequest<'a> {
    patient_id: &'a str,
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatReply {
    reply: String,
}

/// Responder backed by a remote chat function.
///
/// One POST per exchange, same error discipline as the prediction
/// client: typed failures, no retries.
pub struct RemoteResponder {
    endpoint_url: String,
    http: reqwest::blocking::Client,
}

impl RemoteResponder {
    pub fn new(endpoint_url: String) -> Result<Self, ChatError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ChatError::RemoteFailure {
                reason: e.to_string(),
            })?;
        Ok(Self { endpoint_url, http })
    }
}

impl IChatResponder for RemoteResponder {
    fn respond(&self, patient_id: &str, message: &str) -> VitalisResult<String> {
        let response = self
            .http
            .post(&self.endpoint_url)
            .json(&ChatRequest {
                patient_id,
                message,
            })
            .send()
            .map_err(|e| {
                warn!(error = %e, "chat transport failure");
                ChatError::RemoteFailure {
                    reason: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::RemoteStatus {
                status: status.as_u16(),
            }
            .into());
        }

        let reply: ChatReply = response.json().map_err(|e| ChatError::InvalidReply {
            reason: e.to_string(),
        })?;
        Ok(reply.reply)
    }

    fn name(&self) -> &str {
        "remote"
    }
}
