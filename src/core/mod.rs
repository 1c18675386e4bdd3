//! Core functionality for the linguaspark state cache.
//!
//! This module provides the state document, the storage contract and its
//! backends, the cache itself, configuration and terminal output helpers.

pub mod cache;
pub mod command_init;
pub mod config;
pub mod dirs;
pub mod error;
pub mod output;
pub mod session;
pub mod state;
pub mod storage;

// === Error handling ===
pub use error::{LinguaSparkError, Result};

// === State document ===
pub use state::{
    days_active, ChatMessage, ExportedState, LanguagePair, Preferences, StateDocument, Stats,
    StatsView, UserRecord,
};

// === Persistence ===
pub use storage::{FileStorage, MemoryStorage, Storage};

// === Cache ===
pub use cache::{
    CacheOptions, LoadStatus, StateCache, DEFAULT_HISTORY_CAP, DEFAULT_HISTORY_LIMIT,
    DEFAULT_STORAGE_KEY,
};
pub use session::{SessionStore, DEFAULT_SESSION_KEY};

// === Configuration ===
pub use config::AppConfig;

// === Command initialization ===
pub use command_init::{CommandContext, CommandInit};

// === Output formatting ===
pub use output::{
    print_chat_message, print_error, print_field, print_info, print_section_header, print_success,
};
