//! Canonical state owner and persistence orchestration.
//!
//! `ProgressStore` holds the one mutable [`PlayerState`] per session and
//! decides when bytes hit the repository. Storage faults never escape:
//! they are logged here and the game keeps playing on the in-memory
//! state.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use progress_core::{Identity, PlayerState};

use crate::migrate;
use crate::repository::SaveRepository;
use crate::sched::SaveScheduler;
use crate::snapshot::SaveFile;

/// Single source of truth for the mutable progression state.
pub struct ProgressStore {
    state: PlayerState,
    repo: Arc<dyn SaveRepository>,
    scheduler: SaveScheduler,
}

impl ProgressStore {
    /// Creates a store over `repo` with a fresh default state and the
    /// given debounce window.
    pub fn new(repo: Arc<dyn SaveRepository>, debounce: Duration) -> Self {
        Self {
            state: PlayerState::new(),
            repo,
            scheduler: SaveScheduler::new(debounce),
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PlayerState {
        &mut self.state
    }

    /// Serializable snapshot of the current state, stamped with the
    /// current wall time.
    pub fn snapshot(&self) -> SaveFile {
        SaveFile::current(self.state.clone(), Utc::now().timestamp_millis())
    }

    /// Persists immediately, superseding any pending debounced write.
    pub fn save(&mut self) {
        self.scheduler.cancel();
        write_snapshot(self.repo.as_ref(), &self.snapshot());
    }

    /// Persists after the debounce window, coalescing bursts: each call
    /// restarts the window and only the last snapshot in it is written.
    pub fn debounced_save(&mut self) {
        let repo = Arc::clone(&self.repo);
        let snapshot = self.snapshot();
        self.scheduler
            .schedule(async move { write_snapshot(repo.as_ref(), &snapshot) });
    }

    /// Loads the saved snapshot, migrating older schemas first.
    ///
    /// Returns false when no usable save exists; missing or malformed
    /// data is not an error, just a fresh start. Individual missing
    /// fields inside a parseable snapshot fall back to their defaults.
    pub fn load(&mut self) -> bool {
        let payload = match self.repo.load() {
            Ok(Some(payload)) => payload,
            Ok(None) => return false,
            Err(error) => {
                tracing::error!("failed to read saved snapshot: {error}");
                return false;
            }
        };

        let mut raw: serde_json::Value = match serde_json::from_str(&payload) {
            Ok(raw) => raw,
            Err(error) => {
                tracing::warn!("ignoring malformed snapshot: {error}");
                return false;
            }
        };

        migrate::migrate_to_current(&mut raw);

        match serde_json::from_value::<SaveFile>(raw) {
            Ok(save) => {
                self.state = save.state;
                true
            }
            Err(error) => {
                tracing::warn!("ignoring undecodable snapshot: {error}");
                false
            }
        }
    }

    /// Drops the saved snapshot and resets to a fresh state.
    pub fn clear(&mut self) {
        self.scheduler.cancel();
        if let Err(error) = self.repo.clear() {
            tracing::error!("failed to clear saved snapshot: {error}");
        }
        self.state = PlayerState::new();
    }

    /// Applies an authoritative remote snapshot.
    ///
    /// Total overwrite for progression, with one asymmetry: identity
    /// fields the remote leaves blank keep their local values, since the
    /// server is authoritative for progress but not for local session
    /// metadata. Persists immediately.
    pub fn import_remote(&mut self, remote: SaveFile) {
        let local_identity = self.state.identity.clone();
        self.state = remote.state;
        self.state.identity = merge_identity(self.state.identity.clone(), local_identity);
        self.save();
    }

    /// Whether a debounced write is still pending (test hook).
    pub fn has_pending_save(&self) -> bool {
        self.scheduler.is_pending()
    }
}

fn merge_identity(remote: Identity, local: Identity) -> Identity {
    Identity {
        uuid: if remote.uuid.is_empty() { local.uuid } else { remote.uuid },
        sid: if remote.sid.is_empty() { local.sid } else { remote.sid },
    }
}

fn write_snapshot(repo: &dyn SaveRepository, snapshot: &SaveFile) {
    let payload = match serde_json::to_string(snapshot) {
        Ok(payload) => payload,
        Err(error) => {
            tracing::error!("failed to serialize snapshot: {error}");
            return;
        }
    };
    if let Err(error) = repo.save(&payload) {
        tracing::error!("failed to write snapshot: {error}");
    }
}
