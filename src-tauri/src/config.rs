//! App configuration loaded from `config.toml` in the app config dir.
//!
//! Every field is optional in the file; missing fields use the defaults.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const CONFIG_FILE: &str = "config.toml";

/// Which implementation backs the recipe details screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailSourceKind {
    /// Fixed demo record regardless of id.
    Demo,
    /// Lookup in the persisted catalog.
    Catalog,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Simulated login latency.
    pub auth_delay_ms: u64,
    /// Simulated details fetch latency.
    pub detail_delay_ms: u64,
    pub detail_source: DetailSourceKind,
    /// Store file holding recipes and the remembered email.
    pub store_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth_delay_ms: 1500,
            detail_delay_ms: 1000,
            detail_source: DetailSourceKind::Demo,
            store_file: "chefsmenu.json".to_string(),
        }
    }
}

impl AppConfig {
    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms)
    }

    pub fn detail_delay(&self) -> Duration {
        Duration::from_millis(self.detail_delay_ms)
    }

    /// Parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file if present, falling back to defaults.
    /// An unreadable or invalid file is logged, never fatal.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("Ignoring invalid config at {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}
