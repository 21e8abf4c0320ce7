use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default upper bound on a single encode call (256 MiB).
pub const DEFAULT_MAX_INPUT_LEN: usize = 256 * 1024 * 1024;

/// Default extension for compressed containers.
pub const DEFAULT_EXTENSION: &str = ".huff";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HuffConfig {
    pub codec: CodecConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Inputs longer than this are rejected before any work is done.
    pub max_input_len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub extension: String,
    /// Decode the freshly built container and compare before writing it out.
    pub verify_roundtrip: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self { max_input_len: DEFAULT_MAX_INPUT_LEN }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.into(),
            verify_roundtrip: false,
        }
    }
}

impl Default for HuffConfig {
    fn default() -> Self {
        Self {
            codec: CodecConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl HuffConfig {
    /// Parse a JSON document. Missing fields fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
