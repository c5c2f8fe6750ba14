//! Error taxonomy for the Vitalis workspace.
//!
//! Each subsystem has its own `thiserror` enum; `VitalisError` is the
//! umbrella type crossing crate boundaries.

mod chat_error;
mod prediction_error;
mod store_error;
mod upload_error;

pub use chat_error::ChatError;
pub use prediction_error::PredictionError;
pub use store_error::StoreError;
pub use upload_error::UploadError;

/// Workspace-wide result alias.
pub type VitalisResult<T> = Result<T, VitalisError>;

/// Umbrella error for all Vitalis subsystems.
#[derive(Debug, thiserror::Error)]
pub enum VitalisError {
    #[error("prediction error: {0}")]
    Prediction(#[from] PredictionError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("upload error: {0}")]
    Upload(#[from] UploadError),

    #[error("chat error: {0}")]
    Chat(#[from] ChatError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {reason}")]
    Config { reason: String },
}
