//! Repository contract for the persisted progression snapshot.
//!
//! The whole save is one JSON blob under a single well-known key. The
//! trait keeps the storage medium swappable: a file on native hosts, an
//! in-memory slot in tests and headless tools.

mod error;
mod file;
mod memory;

pub use error::{RepositoryError, Result};
pub use file::FileSaveRepository;
pub use memory::MemorySaveRepository;

/// Well-known key the snapshot lives under.
pub const SAVE_KEY: &str = "player_progress";

/// Storage for the single serialized save blob.
pub trait SaveRepository: Send + Sync {
    /// Write the blob, replacing any previous one.
    fn save(&self, payload: &str) -> Result<()>;

    /// Read the blob back. `None` means no save exists.
    fn load(&self) -> Result<Option<String>>;

    /// Delete the blob if present.
    fn clear(&self) -> Result<()>;

    /// Whether a blob currently exists.
    fn exists(&self) -> bool;
}
