//! The client-side state cache.
//!
//! [`StateCache`] owns the one live [`StateDocument`] of a session and mirrors it
//! to a [`Storage`] backend under a single key. Every mutator updates the
//! in-memory document and then rewrites the whole serialized document; there is
//! no batching and no dirty tracking.
//!
//! # Failure Model
//! - **Unreadable stored state**: replaced by a fresh default document, reported
//!   through [`StateCache::load_status`]
//! - **Failed writes**: logged; the in-memory document keeps the mutation
//! - **Failed imports**: reported to the caller, live state left untouched

use crate::core::error::{LinguaSparkError, Result};
use crate::core::state::{
    ChatMessage, ExportedState, LanguagePair, Preferences, StateDocument, StatsView, UserRecord,
    TARGET_LANG_KEY, USER_LANG_KEY,
};
use crate::core::storage::Storage;
use chrono::{DateTime, Utc};
use serde_json::Value;

pub const DEFAULT_STORAGE_KEY: &str = "linguaspark_state";
pub const DEFAULT_HISTORY_CAP: usize = 100;
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheOptions {
    /// Key the serialized document is stored under.
    pub storage_key: String,
    /// Maximum number of chat messages kept in history.
    pub history_cap: usize,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            history_cap: DEFAULT_HISTORY_CAP,
        }
    }
}

/// How the document was obtained when the cache was constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// A stored document was read and merged over defaults.
    Restored,
    /// Nothing was stored; defaults were used.
    Fresh,
    /// The stored value could not be used; defaults were substituted.
    Recovered { reason: String },
}

pub struct StateCache<S: Storage> {
    storage: S,
    options: CacheOptions,
    state: StateDocument,
    load_status: LoadStatus,
}

impl<S: Storage> StateCache<S> {
    pub fn new(storage: S) -> Self {
        Self::with_options(storage, CacheOptions::default())
    }

    pub fn with_options(storage: S, options: CacheOptions) -> Self {
        let (mut state, load_status) = load_state(&storage, &options.storage_key, Utc::now());
        state.chat_history.truncate(options.history_cap);

        log::debug!(
            "State cache ready under '{}' ({:?}, {} messages in history)",
            options.storage_key,
            load_status,
            state.chat_history.len()
        );

        Self {
            storage,
            options,
            state,
            load_status,
        }
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    pub fn options(&self) -> &CacheOptions {
        &self.options
    }

    pub fn state(&self) -> &StateDocument {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    // User

    /// Replace the user record and stamp the login time.
    pub fn set_user(&mut self, username: impl Into<String>, email: impl Into<String>) {
        self.state.user = UserRecord {
            username: Some(username.into()),
            email: Some(email.into()),
            last_login: Some(Utc::now()),
        };
        self.save();
    }

    pub fn user(&self) -> &UserRecord {
        &self.state.user
    }

    pub fn clear_user(&mut self) {
        self.state.user = UserRecord::default();
        self.save();
    }

    // Preferences

    /// Store any value under any key; the last write wins.
    pub fn set_preference(&mut self, key: &str, value: Value) {
        self.state.preferences.set(key, value);
        self.save();
    }

    pub fn preference(&self, key: &str) -> Option<Value> {
        self.state.preferences.get(key)
    }

    pub fn preferences(&self) -> &Preferences {
        &self.state.preferences
    }

    /// Set both languages and record the target language as learned.
    pub fn set_languages(&mut self, user_lang: impl Into<String>, target_lang: impl Into<String>) {
        let target_lang = target_lang.into();
        self.state
            .preferences
            .set(USER_LANG_KEY, Value::String(user_lang.into()));
        if self.state.stats.learn_language(&target_lang) {
            log::debug!("Added '{target_lang}' to learned languages");
        }
        self.state
            .preferences
            .set(TARGET_LANG_KEY, Value::String(target_lang));
        self.save();
    }

    // Chat history

    /// Record an exchange at the front of history and bump the lifetime count.
    pub fn add_chat_message(&mut self, user_message: impl Into<String>, bot_reply: impl Into<String>) {
        let now = Utc::now();
        let message = ChatMessage {
            id: now.timestamp_millis(),
            user: user_message.into(),
            bot: bot_reply.into(),
            timestamp: now,
            languages: LanguagePair {
                from: self.state.preferences.user_lang(),
                to: self.state.preferences.target_lang(),
            },
        };

        self.state.chat_history.insert(0, message);
        self.state.chat_history.truncate(self.options.history_cap);
        self.state.stats.total_messages = self.state.stats.total_messages.saturating_add(1);
        self.save();
    }

    /// The `limit` most recent messages, newest first.
    pub fn chat_history(&self, limit: usize) -> &[ChatMessage] {
        let end = limit.min(self.state.chat_history.len());
        &self.state.chat_history[..end]
    }

    /// Empty the history. The lifetime message count is left alone.
    pub fn clear_chat_history(&mut self) {
        self.state.chat_history.clear();
        self.save();
    }

    // Stats

    pub fn stats(&self) -> StatsView {
        self.stats_at(Utc::now())
    }

    pub fn stats_at(&self, now: DateTime<Utc>) -> StatsView {
        self.state.stats_view(now)
    }

    // Export / import

    pub fn export_data(&self) -> ExportedState {
        ExportedState {
            state: self.state.clone(),
            export_date: Utc::now(),
        }
    }

    /// Merge `data` over defaults and make it the live state.
    ///
    /// Returns false, leaving the current state in place, when the payload does
    /// not fit the document or cannot be persisted.
    pub fn import_data(&mut self, data: Value) -> bool {
        match self.try_import_data(data) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Error importing data: {e}");
                false
            }
        }
    }

    /// Like [`StateCache::import_data`], but reports why an import failed.
    pub fn try_import_data(&mut self, data: Value) -> Result<()> {
        if !data.is_object() {
            return Err(LinguaSparkError::import_not_an_object(&data));
        }

        let mut imported = StateDocument::from_value(data, Utc::now())
            .map_err(LinguaSparkError::import_invalid_fields)?;
        imported.chat_history.truncate(self.options.history_cap);

        persist(&mut self.storage, &self.options.storage_key, &imported)?;
        self.state = imported;
        log::debug!(
            "Imported state with {} messages in history",
            self.state.chat_history.len()
        );
        Ok(())
    }

    /// Remove the stored document and start over with fresh defaults.
    pub fn clear_all(&mut self) {
        if let Err(e) = self.storage.remove(&self.options.storage_key) {
            log::error!(
                "Failed to remove stored state '{}': {e}",
                self.options.storage_key
            );
        }
        self.state = StateDocument::fresh(Utc::now());
    }

    fn save(&mut self) {
        if let Err(e) = persist(&mut self.storage, &self.options.storage_key, &self.state) {
            log::error!("Error saving state: {e}");
        }
    }
}

fn persist<S: Storage>(storage: &mut S, key: &str, state: &StateDocument) -> Result<()> {
    let json = serde_json::to_string(state).map_err(LinguaSparkError::state_serialization_failed)?;
    storage.set(key, &json)
}

fn load_state<S: Storage>(storage: &S, key: &str, now: DateTime<Utc>) -> (StateDocument, LoadStatus) {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::debug!("No stored state under '{key}', starting fresh");
            return (StateDocument::fresh(now), LoadStatus::Fresh);
        }
        Err(e) => {
            log::warn!("Error loading state: {e}");
            return (
                StateDocument::fresh(now),
                LoadStatus::Recovered {
                    reason: e.to_string(),
                },
            );
        }
    };

    let parsed = serde_json::from_str::<Value>(&raw)
        .and_then(|value| StateDocument::from_value(value, now))
        .map_err(|e| LinguaSparkError::state_parse_failed(key, e));

    match parsed {
        Ok(state) => (state, LoadStatus::Restored),
        Err(e) => {
            log::warn!("Error loading state: {e}");
            (
                StateDocument::fresh(now),
                LoadStatus::Recovered {
                    reason: e.to_string(),
                },
            )
        }
    }
}
