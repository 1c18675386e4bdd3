//! Key-value persistence backends.
//!
//! The state cache only needs three operations from its host: read a string by
//! key, write a string by key and remove a key. [`Storage`] captures that
//! contract so the cache can run against an in-memory map in tests and against
//! files on disk from the CLI.
//!
//! # Public API
//! - [`Storage`]: The persistence contract
//! - [`MemoryStorage`]: `HashMap` backend with optional quota and write failure switch
//! - [`FileStorage`]: One JSON file per key inside a directory
//!
//! # Guarantees
//! None beyond what the backend provides: no transactions and no arbitration
//! between concurrent writers.

use crate::core::error::{LinguaSparkError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub trait Storage {
    /// Read the value stored under `key`, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key succeeds.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// In-memory storage, mainly for tests and embedding.
///
/// A byte quota makes oversized writes fail the way a full browser store does,
/// and `set_fail_writes(true)` models storage that has been disabled.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    quota: Option<usize>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the total bytes (keys plus values) the store may hold.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            quota: Some(quota),
            ..Self::default()
        }
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Seed a raw value, bypassing quota and failure checks.
    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn used_bytes_excluding(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(LinguaSparkError::StorageDisabled);
        }
        if let Some(quota) = self.quota {
            let available = quota.saturating_sub(self.used_bytes_excluding(key));
            let needed = key.len() + value.len();
            if needed > available {
                return Err(LinguaSparkError::quota_exceeded(key, needed, available));
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Directory-backed storage with one file per key.
///
/// File names are the md5 digest of the key, so any key maps to a safe path.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entry_path(&self, key: &str) -> PathBuf {
        let digest = format!("{:x}", md5::compute(key.as_bytes()));
        self.dir.join(format!("{digest}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        log::debug!("Reading storage entry '{key}' from {}", path.display());

        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("Storage entry '{key}' does not exist");
                Ok(None)
            }
            Err(e) => {
                log::error!("Failed to read storage entry '{}': {}", path.display(), e);
                Err(LinguaSparkError::storage_read_failed(&path, e))
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            log::error!(
                "Failed to create storage directory '{}': {}",
                self.dir.display(),
                e
            );
            return Err(LinguaSparkError::storage_directory_creation_failed(
                &self.dir, e,
            ));
        }

        let path = self.entry_path(key);
        if let Err(e) = fs::write(&path, value) {
            log::error!("Failed to write storage entry '{}': {}", path.display(), e);
            return Err(LinguaSparkError::storage_write_failed(&path, e));
        }

        log::debug!("Wrote {} bytes for storage entry '{key}'", value.len());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.entry_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                log::error!("Failed to remove storage entry '{}': {}", path.display(), e);
                Err(LinguaSparkError::storage_remove_failed(&path, e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_storage_get_set_remove() -> Result<()> {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("k")?, None);

        storage.set("k", "v1")?;
        storage.set("k", "v2")?;
        assert_eq!(storage.get("k")?.as_deref(), Some("v2"));

        storage.remove("k")?;
        storage.remove("k")?;
        assert_eq!(storage.get("k")?, None);
        Ok(())
    }

    #[test]
    fn test_memory_storage_quota() {
        let mut storage = MemoryStorage::with_quota(10);
        assert!(storage.set("k", "123456789").is_ok());
        // Overwriting the same key does not count the old value twice
        assert!(storage.set("k", "abcdefghi").is_ok());

        let err = storage.set("k", "0123456789").unwrap_err();
        assert!(matches!(err, LinguaSparkError::QuotaExceeded { .. }));
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("abcdefghi"));
    }

    #[test]
    fn test_memory_storage_disabled_writes() {
        let mut storage = MemoryStorage::new();
        storage.set_fail_writes(true);
        assert!(matches!(
            storage.set("k", "v"),
            Err(LinguaSparkError::StorageDisabled)
        ));
        assert!(!storage.contains_key("k"));
    }

    #[test]
    fn test_file_storage_creates_directory() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let dir = temp_dir.path().join("nested").join("data");
        let mut storage = FileStorage::new(&dir);

        assert_eq!(storage.get("linguaspark_state")?, None);
        storage.set("linguaspark_state", "{\"a\":1}")?;

        assert!(dir.exists());
        assert!(storage.entry_path("linguaspark_state").exists());
        assert_eq!(
            storage.get("linguaspark_state")?.as_deref(),
            Some("{\"a\":1}")
        );
        Ok(())
    }

    #[test]
    fn test_file_storage_remove_missing_is_ok() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let mut storage = FileStorage::new(temp_dir.path());
        storage.remove("never-written")?;

        storage.set("k", "v")?;
        storage.remove("k")?;
        assert_eq!(storage.get("k")?, None);
        Ok(())
    }

    #[test]
    fn test_file_storage_key_maps_to_safe_file_name() {
        let storage = FileStorage::new("/tmp/data");
        let path = storage.entry_path("../../etc/passwd");
        assert_eq!(path.parent(), Some(Path::new("/tmp/data")));
        assert!(path.to_string_lossy().ends_with(".json"));
    }
}
