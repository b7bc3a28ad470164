//! File-based SaveRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use super::{Result, SAVE_KEY, SaveRepository};

/// Stores the save blob as a single JSON file in a base directory.
///
/// Writes go through a temp file and an atomic rename so a crash mid-write
/// leaves the previous save intact rather than a truncated one.
pub struct FileSaveRepository {
    base_dir: PathBuf,
}

impl FileSaveRepository {
    /// Create a file-based save repository rooted at `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn save_path(&self) -> PathBuf {
        self.base_dir.join(format!("{SAVE_KEY}.json"))
    }
}

impl SaveRepository for FileSaveRepository {
    fn save(&self, payload: &str) -> Result<()> {
        let path = self.save_path();
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, payload)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("saved progression snapshot to {}", path.display());
        Ok(())
    }

    fn load(&self) -> Result<Option<String>> {
        let path = self.save_path();
        if !path.exists() {
            return Ok(None);
        }

        let payload = fs::read_to_string(&path)?;
        tracing::debug!("loaded progression snapshot from {}", path.display());
        Ok(Some(payload))
    }

    fn clear(&self) -> Result<()> {
        let path = self.save_path();
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("cleared progression snapshot");
        }
        Ok(())
    }

    fn exists(&self) -> bool {
        self.save_path().exists()
    }
}
