/// Record-store errors for the external data service.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found: {collection}/{id}")]
    RecordNotFound { collection: String, id: String },

    #[error("store backend error: {message}")]
    Backend { message: String },
}
