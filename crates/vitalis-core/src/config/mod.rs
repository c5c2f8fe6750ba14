//! Configuration for all Vitalis subsystems.
//!
//! Every struct deserializes with `#[serde(default)]`, so a partial or
//! empty TOML file yields a fully usable configuration.

pub mod defaults;

mod chat_config;
mod prediction_config;
mod upload_config;

pub use chat_config::ChatConfig;
pub use prediction_config::PredictionConfig;
pub use upload_config::UploadConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{VitalisError, VitalisResult};

/// Aggregated configuration for the whole workspace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VitalisConfig {
    pub prediction: PredictionConfig,
    pub chat: ChatConfig,
    pub upload: UploadConfig,
}

impl VitalisConfig {
    /// Parse a TOML document. Missing sections and fields fall back to
    /// their defaults.
    pub fn from_toml_str(input: &str) -> VitalisResult<Self> {
        toml::from_str(input).map_err(|e| VitalisError::Config {
            reason: e.to_string(),
        })
    }

    /// Load configuration from a TOML file on disk.
    pub fn load(path: &std::path::Path) -> VitalisResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| VitalisError::Config {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }
}
