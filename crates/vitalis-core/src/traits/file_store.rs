use serde::{Deserialize, Serialize};

use crate::errors::VitalisResult;

/// Location of a stored file, as returned by the storage service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFile {
    /// Path inside the bucket.
    pub path: String,
    /// Publicly retrievable URL.
    pub public_url: String,
}

/// Binary upload capability of the external storage service.
pub trait IFileStore: Send + Sync {
    fn upload(&self, path: &str, bytes: &[u8]) -> VitalisResult<StoredFile>;
}
