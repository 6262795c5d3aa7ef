use crate::error::{Result, StockError};
use crate::model::InventoryItem;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration for stockroom, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockConfig {
    /// Seed the store with the default stock before the session starts
    #[serde(default = "default_true")]
    pub seed_defaults: bool,

    /// Row added through the backend right after connecting
    #[serde(default = "default_fixture")]
    pub fixture: Option<InventoryItem>,

    /// Log filter used when `STOCKROOM_LOG` is not set (e.g. "warn", "debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Colorize messages when stdout is a terminal
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

fn default_fixture() -> Option<InventoryItem> {
    Some(InventoryItem::new("DummyItem", 3))
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            seed_defaults: true,
            fixture: default_fixture(),
            log_level: default_log_level(),
            color: true,
        }
    }
}

impl StockConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: StockConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            return Err(StockError::Config("log_level must not be empty".into()));
        }
        Ok(())
    }
}

/// Platform config directory, e.g. `~/.config/stockroom` on Linux.
pub fn default_config_dir() -> Result<PathBuf> {
    directories::ProjectDirs::from("com", "stockroom", "stockroom")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| StockError::Config("could not determine config directory".into()))
}
