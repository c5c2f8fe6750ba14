//! ChatSession — one exchange: store, respond, backfill the reply.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;
use vitalis_core::errors::{ChatError, VitalisResult};
use vitalis_core::models::{ChatLogEntry, ChatMessage, Sender};
use vitalis_core::traits::{IChatResponder, IRecordStore};

/// Orchestrates chat exchanges against the record store and whichever
/// responder backend configuration selected.
pub struct ChatSession {
    store: Arc<dyn IRecordStore>,
    responder: Box<dyn IChatResponder>,
}

impl ChatSession {
    pub fn new(store: Arc<dyn IRecordStore>, responder: Box<dyn IChatResponder>) -> Self {
        Self { store, responder }
    }

    /// The full message history for a patient, oldest first.
    pub fn history(&self, patient_id: &str) -> VitalisResult<Vec<ChatMessage>> {
        let logs = self.store.chat_logs(patient_id)?;
        Ok(logs.iter().flat_map(ChatLogEntry::to_messages).collect())
    }

    /// Send one user message and return the bot's reply message.
    ///
    /// The user's message is persisted with an empty reply first, then
    /// the reply is backfilled once the responder answers. A missing
    /// patient selection or an empty message never reaches the store.
    pub fn send(&self, patient_id: Option<&str>, text: &str) -> VitalisResult<ChatMessage> {
        let patient_id = patient_id.ok_or(ChatError::NoPatientSelected)?;
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage.into());
        }

        self.store.append_chat_log(&ChatLogEntry {
            patient_id: patient_id.to_string(),
            message: text.to_string(),
            response: String::new(),
            timestamp: Utc::now(),
        })?;

        let reply = self.responder.respond(patient_id, text)?;
        debug!(
            responder = self.responder.name(),
            patient_id, "chat reply received"
        );

        self.store.update_last_reply(patient_id, &reply)?;

        Ok(ChatMessage {
            sender: Sender::Bot,
            text: reply,
            timestamp: Utc::now(),
        })
    }
}
