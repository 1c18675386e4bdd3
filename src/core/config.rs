use crate::core::cache::{CacheOptions, DEFAULT_HISTORY_CAP, DEFAULT_HISTORY_LIMIT, DEFAULT_STORAGE_KEY};
use crate::core::dirs::get_data_directory;
use crate::core::error::LinguaSparkError;
use crate::core::session::DEFAULT_SESSION_KEY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub storage_key: String,
    pub session_key: String,
    pub history_cap: usize,
    pub default_history_limit: usize,
    /// Directory for stored state. Defaults to the platform data directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            session_key: DEFAULT_SESSION_KEY.to_string(),
            history_cap: DEFAULT_HISTORY_CAP,
            default_history_limit: DEFAULT_HISTORY_LIMIT,
            data_dir: None,
        }
    }
}

impl AppConfig {
    pub fn load_or_create_in(config_dir: &Path) -> Result<Self, LinguaSparkError> {
        let config_file = config_dir.join(CONFIG_FILE);

        if config_file.exists() {
            log::debug!("Loading config from {}", config_file.display());
            let content = std::fs::read_to_string(&config_file)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            let config = Self::default();
            config.save_in(config_dir)?;
            Ok(config)
        }
    }

    pub fn save_in(&self, config_dir: &Path) -> Result<(), LinguaSparkError> {
        std::fs::create_dir_all(config_dir)?;

        let config_file = config_dir.join(CONFIG_FILE);
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_file, content)?;

        Ok(())
    }

    pub fn resolve_data_dir(&self) -> Result<PathBuf, LinguaSparkError> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => get_data_directory(),
        }
    }

    pub fn cache_options(&self) -> CacheOptions {
        CacheOptions {
            storage_key: self.storage_key.clone(),
            history_cap: self.history_cap,
        }
    }
}
