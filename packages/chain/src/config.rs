use crate::error::ChainError;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ChainConfig {
    pub chain_id: u64,
    pub genesis_height: u64,
    /// Seconds since the unix epoch.
    pub genesis_time: u64,
    /// Seconds added to the clock per mined block.
    pub block_time: u64,
    /// Close a block after every executed call.
    pub auto_mine: bool,
}

impl Default for ChainConfig {
    fn default() -> Self {
        ChainConfig {
            chain_id: 31337,
            genesis_height: 1,
            genesis_time: 1_600_000_000,
            block_time: 1,
            auto_mine: false,
        }
    }
}

impl ChainConfig {
    pub fn from_toml(source: &str) -> Result<Self, ChainError> {
        toml::from_str(source).map_err(|e| ChainError::Config {
            msg: format!("failed to parse chain config: {}", e),
        })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ChainError> {
        let path = path.as_ref();
        info!("loading chain config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| ChainError::Config {
            msg: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_toml(&content)
    }
}
