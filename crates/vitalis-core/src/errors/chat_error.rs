/// Chat session and responder errors.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("no patient selected")]
    NoPatientSelected,

    #[error("empty message")]
    EmptyMessage,

    #[error("chat service unreachable: {reason}")]
    RemoteFailure { reason: String },

    #[error("chat service returned HTTP {status}")]
    RemoteStatus { status: u16 },

    #[error("malformed chat reply: {reason}")]
    InvalidReply { reason: String },
}
