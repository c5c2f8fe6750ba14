/// File-upload errors for the external storage service.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("upload rejected: {reason}")]
    Rejected { reason: String },

    #[error("storage backend error: {message}")]
    Backend { message: String },
}
