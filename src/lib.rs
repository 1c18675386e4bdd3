//! LinguaSpark state - persistent client-side state for the LinguaSpark
//! language-learning assistant.
//!
//! The library keeps one state document (logged-in user, preferences, bounded
//! chat history and learning statistics) in memory and mirrors it to a
//! key-value [`Storage`] backend after every change.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - [`StateCache`] and its [`CacheOptions`] / [`LoadStatus`]
//! - The [`StateDocument`] and its sub-records
//! - [`Storage`] with the [`MemoryStorage`] and [`FileStorage`] backends
//! - [`SessionStore`] for the remembered login
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    // Configuration
    AppConfig,
    // Cache
    CacheOptions,
    // State document
    ChatMessage,
    ExportedState,
    FileStorage,
    LanguagePair,
    // Error handling
    LinguaSparkError,
    LoadStatus,
    MemoryStorage,
    Preferences,
    Result,
    SessionStore,
    StateCache,
    StateDocument,
    Stats,
    StatsView,
    // Persistence
    Storage,
    UserRecord,
};
