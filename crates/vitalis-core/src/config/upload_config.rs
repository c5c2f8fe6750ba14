use serde::{Deserialize, Serialize};

use super::defaults;

/// Report-upload configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Storage bucket for uploaded reports.
    pub bucket: String,
    /// Path prefix inside the bucket.
    pub prefix: String,
    /// Maximum accepted upload size in bytes.
    pub max_size_bytes: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            bucket: defaults::DEFAULT_BUCKET.to_string(),
            prefix: defaults::DEFAULT_UPLOAD_PREFIX.to_string(),
            max_size_bytes: defaults::DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}
