//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`LinguaSparkError`] which covers every failure the state
//! cache, its storage backends and the CLI can hit. It uses `thiserror` for
//! ergonomic error definitions and includes named constructors for the common
//! failure scenarios.
//!
//! # Public API
//! - [`LinguaSparkError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, LinguaSparkError>`
//!
//! # Error Categories
//! - **Storage**: read, write and remove failures, quota and disabled storage
//! - **State**: serialization and parse failures of the persisted document
//! - **Import**: payloads that cannot be merged over the default document
//! - **Configuration**: directory lookup and config file problems

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for linguaspark-state
#[derive(Error, Debug)]
pub enum LinguaSparkError {
    // Storage errors
    #[error("Storage quota exceeded writing '{key}' ({needed} bytes, {available} available)")]
    QuotaExceeded {
        key: String,
        needed: usize,
        available: usize,
    },

    #[error("Storage is disabled")]
    StorageDisabled,

    #[error("Failed to create storage directory '{path}': {source}")]
    StorageDirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read storage entry '{path}': {source}")]
    StorageReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write storage entry '{path}': {source}")]
    StorageWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to remove storage entry '{path}': {source}")]
    StorageRemoveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // State document errors
    #[error("Failed to serialize state: {source}")]
    StateSerializationFailed { source: serde_json::Error },

    #[error("Failed to parse stored state under '{key}': {source}")]
    StateParseFailed {
        key: String,
        source: serde_json::Error,
    },

    // Import errors
    #[error("Import file '{path}' is not valid JSON: {source}")]
    ImportNotJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Import payload must be a JSON object, got {kind}")]
    ImportNotAnObject { kind: &'static str },

    #[error("Import payload has invalid fields: {source}")]
    ImportInvalidFields { source: serde_json::Error },

    // Preference errors
    #[error("Preference '{key}' is not set")]
    PreferenceNotSet { key: String },

    // Configuration errors
    #[error("Could not find configuration directory")]
    ConfigDirectoryNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using LinguaSparkError
pub type Result<T> = std::result::Result<T, LinguaSparkError>;

impl LinguaSparkError {
    /// Create a quota exceeded error for a write to `key`
    pub fn quota_exceeded(key: impl Into<String>, needed: usize, available: usize) -> Self {
        Self::QuotaExceeded {
            key: key.into(),
            needed,
            available,
        }
    }

    /// Create a storage directory creation failed error
    pub fn storage_directory_creation_failed(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::StorageDirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a storage read failed error
    pub fn storage_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StorageReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a storage write failed error
    pub fn storage_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StorageWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a storage remove failed error
    pub fn storage_remove_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StorageRemoveFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a state serialization failed error
    pub fn state_serialization_failed(source: serde_json::Error) -> Self {
        Self::StateSerializationFailed { source }
    }

    /// Create a state parse failed error
    pub fn state_parse_failed(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::StateParseFailed {
            key: key.into(),
            source,
        }
    }

    /// Create an import error for a file that does not parse as JSON
    pub fn import_not_json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ImportNotJson {
            path: path.into(),
            source,
        }
    }

    /// Create an import error for a payload that is not a JSON object
    pub fn import_not_an_object(value: &serde_json::Value) -> Self {
        let kind = match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "a boolean",
            serde_json::Value::Number(_) => "a number",
            serde_json::Value::String(_) => "a string",
            serde_json::Value::Array(_) => "an array",
            serde_json::Value::Object(_) => "an object",
        };
        Self::ImportNotAnObject { kind }
    }

    /// Create an import error for fields that do not fit the state document
    pub fn import_invalid_fields(source: serde_json::Error) -> Self {
        Self::ImportInvalidFields { source }
    }

    /// Create a preference not set error
    pub fn preference_not_set(key: impl Into<String>) -> Self {
        Self::PreferenceNotSet { key: key.into() }
    }
}
