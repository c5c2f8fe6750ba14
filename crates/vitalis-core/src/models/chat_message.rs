use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single message as presented to a human.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// A chat-log row as stored: the user's message paired with the bot's
/// reply. The reply starts empty and is filled in once the responder
/// answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatLogEntry {
    pub patient_id: String,
    pub message: String,
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatLogEntry {
    /// Expand a stored row into displayable messages: always the user's
    /// message, plus the bot reply when one has been recorded.
    pub fn to_messages(&self) -> Vec<ChatMessage> {
        let mut messages = vec![ChatMessage {
            sender: Sender::User,
            text: self.message.clone(),
            timestamp: self.timestamp,
        }];
        if !self.response.is_empty() {
            messages.push(ChatMessage {
                sender: Sender::Bot,
                text: self.response.clone(),
                timestamp: self.timestamp,
            });
        }
        messages
    }
}
