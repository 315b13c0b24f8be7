//! Store configuration loaded with figment

use crate::error::{BoardError, Result};
use crate::persistence::STORAGE_KEY;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix of environment variables that override configuration
pub const ENV_PREFIX: &str = "TASKBOARD_";

/// Settings for a [`BoardStore`](crate::BoardStore)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Name snapshots are saved under; a snapshot with another name is rejected
    pub storage_key: String,
    /// Create the sample board when opening with no boards
    pub seed_sample_data: bool,
    /// Number of activity log entries kept in memory
    pub activity_capacity: usize,
    /// Attributed on every activity log entry
    pub actor: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            seed_sample_data: true,
            activity_capacity: 200,
            actor: None,
        }
    }
}

impl StoreConfig {
    /// Layered sources, later ones win:
    /// 1. built-in defaults
    /// 2. the TOML file at `path`, if given and present
    /// 3. `TASKBOARD_*` environment variables
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(StoreConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load from defaults, an optional TOML file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::from_figment(Self::figment(path))
    }

    /// Extract and validate a config from any figment
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: StoreConfig = figment.extract().map_err(|e| BoardError::Config {
            message: e.to_string(),
        })?;
        if config.storage_key.trim().is_empty() {
            return Err(BoardError::Config {
                message: "storage_key must not be empty".to_string(),
            });
        }
        tracing::debug!(?config, "loaded store config");
        Ok(config)
    }
}
