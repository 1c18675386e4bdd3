//! Remembered login.
//!
//! Separately from the state document, the client keeps the name of the user
//! who last logged in under its own key so a later start can resume the
//! session without asking again. Logging out forgets it.

use crate::core::error::Result;
use crate::core::storage::Storage;

pub const DEFAULT_SESSION_KEY: &str = "linguaspark_user";

pub struct SessionStore<S: Storage> {
    storage: S,
    key: String,
}

impl<S: Storage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_SESSION_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn remember(&mut self, username: &str) -> Result<()> {
        log::debug!("Remembering login for '{username}'");
        self.storage.set(&self.key, username)
    }

    /// The remembered username. Blank values count as no login.
    pub fn recall(&self) -> Result<Option<String>> {
        Ok(self
            .storage
            .get(&self.key)?
            .filter(|username| !username.trim().is_empty()))
    }

    pub fn forget(&mut self) -> Result<()> {
        self.storage.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStorage;

    #[test]
    fn test_remember_recall_forget() -> Result<()> {
        let mut session = SessionStore::new(MemoryStorage::new());
        assert_eq!(session.recall()?, None);

        session.remember("ana")?;
        assert_eq!(session.recall()?.as_deref(), Some("ana"));

        session.forget()?;
        assert_eq!(session.recall()?, None);
        Ok(())
    }

    #[test]
    fn test_blank_login_is_ignored() -> Result<()> {
        let mut storage = MemoryStorage::new();
        storage.insert_raw(DEFAULT_SESSION_KEY, "  ");
        let session = SessionStore::new(storage);
        assert_eq!(session.recall()?, None);
        Ok(())
    }

    #[test]
    fn test_works_over_borrowed_storage() -> Result<()> {
        let mut storage = MemoryStorage::new();
        {
            let mut session = SessionStore::new(&mut storage);
            session.remember("ben")?;
        }
        assert!(storage.contains_key(DEFAULT_SESSION_KEY));
        Ok(())
    }
}
