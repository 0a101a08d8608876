//! File-backed preference persistence.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StudioError};

/// Storage abstraction for named preference blobs. Blobs are flat JSON
/// objects; loading a blob that was never saved yields `None` so callers
/// apply their defaults. Typed load/save helpers live in [`crate::prefs`].
pub trait PrefStore: Send + Sync {
    fn load_raw(&self, name: &str) -> Result<Option<String>>;
    fn save_raw(&self, name: &str, raw: &str) -> Result<()>;
    fn clear(&self, name: &str) -> Result<()>;
}

/// Preference store writing one JSON file per blob under a base directory.
#[derive(Debug, Clone)]
pub struct FilePrefStore {
    base_dir: PathBuf,
}

impl FilePrefStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Store rooted at the per-user soundstage directory.
    pub fn new_default() -> Self {
        Self {
            base_dir: default_soundstage_dir(),
        }
    }

    fn blob_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(format!("{name}.json"))
    }

    fn ensure_parent(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl PrefStore for FilePrefStore {
    fn load_raw(&self, name: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.blob_path(name)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StudioError::Io(err)),
        }
    }

    fn save_raw(&self, name: &str, raw: &str) -> Result<()> {
        let path = self.blob_path(name);
        Self::ensure_parent(&path)?;
        fs::write(&path, raw)?;
        Ok(())
    }

    fn clear(&self, name: &str) -> Result<()> {
        match fs::remove_file(self.blob_path(name)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StudioError::Io(err)),
        }
    }
}

fn default_soundstage_dir() -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().join(".soundstage"))
        .unwrap_or_else(|| PathBuf::from(".soundstage"))
}
