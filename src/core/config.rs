// Codec configuration, loadable from JSON

use super::constants::{DEFAULT_CRC_SEED, DEFAULT_MAX_PKT_CARGO_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Settings shared by every codec variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Largest cargo, in bytes, a single packet may carry
    pub max_packet_cargo_size: usize,

    /// Initial value of the cargo CRC-16
    pub crc_seed: u16,

    /// Append the CRC-16 trailer when encoding cargo; the trailer counts
    /// against `max_packet_cargo_size`
    pub append_crc_on_encode: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_packet_cargo_size: DEFAULT_MAX_PKT_CARGO_SIZE,
            crc_seed: DEFAULT_CRC_SEED,
            append_crc_on_encode: false,
        }
    }
}

impl CodecConfig {
    /// Deserialize from JSON, missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading codec config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_packet_cargo_size == 0 {
            return Err(ConfigError::Invalid(
                "max_packet_cargo_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
