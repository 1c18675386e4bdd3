//! State document data structures.
//!
//! This module defines the single record that holds every piece of client-side
//! state: the logged-in user, preferences, the bounded chat history and the
//! aggregate statistics. The whole document is stored as one JSON blob.
//!
//! # Public API
//! - [`StateDocument`]: The complete persisted unit
//! - [`UserRecord`], [`Preferences`], [`ChatMessage`], [`Stats`]: Sub-records
//! - [`StatsView`]: Stored stats plus values derived on read
//! - [`ExportedState`]: Document snapshot stamped with an export date
//!
//! # Defaults
//! Stored documents are never trusted to be complete. [`StateDocument::from_value`]
//! merges whatever was supplied over a fresh default document, so every field
//! callers read is populated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_USER_LANG: &str = "English";
pub const DEFAULT_TARGET_LANG: &str = "Spanish";
pub const DEFAULT_THEME: &str = "light";

const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub username: Option<String>,
    pub email: Option<String>,
    pub last_login: Option<DateTime<Utc>>,
}

impl UserRecord {
    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }
}

pub const USER_LANG_KEY: &str = "userLang";
pub const TARGET_LANG_KEY: &str = "targetLang";
pub const THEME_KEY: &str = "theme";
pub const NOTIFICATIONS_KEY: &str = "notifications";

/// User preferences as stored JSON values.
///
/// Any key may hold any value and the last write wins. The four known keys are
/// seeded with defaults; the typed accessors fall back to those defaults when
/// a stored value has another JSON type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences(Map<String, Value>);

impl Default for Preferences {
    fn default() -> Self {
        let mut values = Map::new();
        values.insert(USER_LANG_KEY.to_string(), Value::from(DEFAULT_USER_LANG));
        values.insert(TARGET_LANG_KEY.to_string(), Value::from(DEFAULT_TARGET_LANG));
        values.insert(THEME_KEY.to_string(), Value::from(DEFAULT_THEME));
        values.insert(NOTIFICATIONS_KEY.to_string(), Value::Bool(true));
        Self(values)
    }
}

impl Preferences {
    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.get(key).cloned()
    }

    pub fn set(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }

    pub fn user_lang(&self) -> String {
        self.text(USER_LANG_KEY, DEFAULT_USER_LANG)
    }

    pub fn target_lang(&self) -> String {
        self.text(TARGET_LANG_KEY, DEFAULT_TARGET_LANG)
    }

    pub fn theme(&self) -> String {
        self.text(THEME_KEY, DEFAULT_THEME)
    }

    pub fn notifications(&self) -> bool {
        match self.0.get(NOTIFICATIONS_KEY) {
            Some(Value::Bool(enabled)) => *enabled,
            _ => true,
        }
    }

    // Strings as-is, other values as JSON text, null or missing as the default.
    fn text(&self, key: &str, default: &str) -> String {
        match self.0.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => default.to_string(),
            Some(other) => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    pub from: String,
    pub to: String,
}

/// One recorded exchange between the learner and the assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Creation time in epoch milliseconds. Not unique within one millisecond.
    pub id: i64,
    pub user: String,
    pub bot: String,
    pub timestamp: DateTime<Utc>,
    pub languages: LanguagePair,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_messages: u64,
    pub languages_learned: Vec<String>,
    pub join_date: DateTime<Utc>,
}

impl Stats {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            total_messages: 0,
            languages_learned: Vec::new(),
            join_date: now,
        }
    }

    /// Record a target language, keeping first-seen order. Returns true if it was new.
    pub fn learn_language(&mut self, language: &str) -> bool {
        if self.languages_learned.iter().any(|l| l == language) {
            return false;
        }
        self.languages_learned.push(language.to_string());
        true
    }

    fn dedup_languages(&mut self) {
        let mut seen: Vec<String> = Vec::with_capacity(self.languages_learned.len());
        for language in self.languages_learned.drain(..) {
            if !seen.contains(&language) {
                seen.push(language);
            }
        }
        self.languages_learned = seen;
    }
}

/// Stored statistics merged with values computed at read time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsView {
    pub total_messages: u64,
    pub languages_learned: Vec<String>,
    pub join_date: DateTime<Utc>,
    /// Messages currently held in history, not the lifetime count.
    pub messages_count: usize,
    pub days_active: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDocument {
    pub user: UserRecord,
    pub preferences: Preferences,
    /// Most recent first.
    pub chat_history: Vec<ChatMessage>,
    pub stats: Stats,
}

impl StateDocument {
    /// A default document whose join date is `now`.
    pub fn fresh(now: DateTime<Utc>) -> Self {
        Self {
            user: UserRecord::default(),
            preferences: Preferences::default(),
            chat_history: Vec::new(),
            stats: Stats::new(now),
        }
    }

    /// Build a document from arbitrary JSON by merging it over fresh defaults.
    ///
    /// Fields present in `supplied` win, missing or `null` fields keep the
    /// default, and nested objects are merged key by key. Duplicate learned
    /// languages collapse to their first occurrence.
    pub fn from_value(supplied: Value, now: DateTime<Utc>) -> serde_json::Result<Self> {
        let mut merged = serde_json::to_value(Self::fresh(now))?;
        merge_over(&mut merged, supplied);
        let mut document: Self = serde_json::from_value(merged)?;
        document.stats.dedup_languages();
        Ok(document)
    }

    pub fn stats_view(&self, now: DateTime<Utc>) -> StatsView {
        StatsView {
            total_messages: self.stats.total_messages,
            languages_learned: self.stats.languages_learned.clone(),
            join_date: self.stats.join_date,
            messages_count: self.chat_history.len(),
            days_active: days_active(self.stats.join_date, now),
        }
    }
}

/// A full document copy stamped with the time it was exported.
///
/// `exportDate` is ignored when the snapshot is imported again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedState {
    #[serde(flatten)]
    pub state: StateDocument,
    pub export_date: DateTime<Utc>,
}

/// Whole days between `join_date` and `now`, rounded up.
pub fn days_active(join_date: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let elapsed = (now - join_date).num_milliseconds().abs();
    (elapsed + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
}

fn merge_over(base: &mut Value, supplied: Value) {
    match (base, supplied) {
        (_, Value::Null) => {}
        (Value::Object(base_map), Value::Object(supplied_map)) => {
            for (key, value) in supplied_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_over(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
