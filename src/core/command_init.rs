//! Centralized initialization for CLI commands.
//!
//! Every command needs the same setup: find the configuration, load it, and
//! point a [`FileStorage`] at the data directory. [`CommandInit`] does that once
//! and hands back a [`CommandContext`] that opens the state cache and the
//! remembered-login store.
//!
//! # Directory Resolution
//! 1. `--data-dir` given: config and stored state both live there
//! 2. Otherwise the config comes from the platform config directory and the
//!    state goes to `data_dir` from that config, or the platform data directory

use crate::core::{
    cache::StateCache,
    config::AppConfig,
    dirs::get_config_directory,
    error::Result,
    session::SessionStore,
    storage::FileStorage,
};
use std::path::PathBuf;

pub struct CommandContext {
    pub config: AppConfig,
    pub storage: FileStorage,
}

pub struct CommandInit;

impl CommandInit {
    pub fn initialize(data_dir: Option<PathBuf>) -> Result<CommandContext> {
        let (config, storage_dir) = match data_dir {
            Some(dir) => {
                log::debug!("Using explicit data directory: {}", dir.display());
                let config = AppConfig::load_or_create_in(&dir)?;
                (config, dir)
            }
            None => {
                let config_dir = get_config_directory()?;
                log::debug!("Using config directory: {}", config_dir.display());
                let config = AppConfig::load_or_create_in(&config_dir)?;
                let storage_dir = config.resolve_data_dir()?;
                (config, storage_dir)
            }
        };

        log::debug!("Storing state in {}", storage_dir.display());

        Ok(CommandContext {
            config,
            storage: FileStorage::new(storage_dir),
        })
    }
}

impl CommandContext {
    pub fn cache(&self) -> StateCache<FileStorage> {
        StateCache::with_options(self.storage.clone(), self.config.cache_options())
    }

    pub fn session(&self) -> SessionStore<FileStorage> {
        SessionStore::with_key(self.storage.clone(), self.config.session_key.clone())
    }
}
