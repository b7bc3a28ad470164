//! The persisted snapshot envelope.

use progress_core::PlayerState;

use crate::migrate;

/// Everything written to storage: the state plus envelope metadata.
///
/// `save_time` is stamped (epoch ms) every time a snapshot is produced;
/// `version` tags the schema so the migration pipeline knows where to
/// start. Remote-sync uploads and downloads use this same shape.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SaveFile {
    pub version: u32,
    pub save_time: i64,
    pub state: PlayerState,
}

impl Default for SaveFile {
    fn default() -> Self {
        Self {
            // Snapshots written before versioning are treated as schema 1.
            version: 1,
            save_time: 0,
            state: PlayerState::default(),
        }
    }
}

impl SaveFile {
    /// Wraps a state clone in a current-version envelope stamped `now`.
    pub fn current(state: PlayerState, save_time: i64) -> Self {
        Self {
            version: migrate::CURRENT_VERSION,
            save_time,
            state,
        }
    }
}
