//! In-memory SaveRepository implementation for tests and headless hosts.

use std::sync::Mutex;

use super::{RepositoryError, Result, SaveRepository};

/// Keeps the save blob in a mutex-guarded slot.
#[derive(Default)]
pub struct MemorySaveRepository {
    slot: Mutex<Option<String>>,
}

impl MemorySaveRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with a pre-existing blob, as if a save were present.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(payload.into())),
        }
    }
}

impl SaveRepository for MemorySaveRepository {
    fn save(&self, payload: &str) -> Result<()> {
        let mut slot = self.slot.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = Some(payload.to_owned());
        Ok(())
    }

    fn load(&self) -> Result<Option<String>> {
        let slot = self.slot.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(slot.clone())
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self.slot.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = None;
        Ok(())
    }

    fn exists(&self) -> bool {
        self.slot.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }
}
