use async_trait::async_trait;
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::{PrefEntry, PreferenceStore};
use crate::error::{Result, SiftError};

const PREFS_FILE: &str = "prefs.json";

/// File-backed preference store.
///
/// Preferences live in a single `prefs.json` (a map of key to timestamped
/// entry) under the store root. Writes are atomic: the new map is written to
/// a uniquely named tmp file and renamed into place, so a crash mid-write
/// never leaves a partial file behind. A missing file reads as empty.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the OS-appropriate per-user data directory.
    pub fn user_default() -> Result<Self> {
        let dirs = ProjectDirs::from("com", "folderol", "boldsift")
            .ok_or_else(|| SiftError::Store("Could not determine data dir".to_string()))?;
        Ok(Self::new(dirs.data_dir()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn prefs_path(&self) -> PathBuf {
        self.root.join(PREFS_FILE)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(SiftError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<HashMap<String, PrefEntry>> {
        let path = self.prefs_path();
        if !path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(path).map_err(SiftError::Io)?;
        let prefs: HashMap<String, PrefEntry> =
            serde_json::from_str(&content).map_err(SiftError::Serialization)?;
        Ok(prefs)
    }

    fn save(&self, prefs: &HashMap<String, PrefEntry>) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(prefs).map_err(SiftError::Serialization)?;

        // Atomic write: tmp file then rename.
        let tmp_file = self.root.join(format!(".prefs-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(SiftError::Io)?;
        fs::rename(&tmp_file, self.prefs_path()).map_err(SiftError::Io)?;

        Ok(())
    }
}

#[async_trait(?Send)]
impl PreferenceStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.get(key).map(|e| e.value.clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        // A corrupt prefs file must not block new writes; start over from
        // an empty map and let the atomic save replace it.
        let mut prefs = self.load().unwrap_or_default();
        prefs.insert(key.to_string(), PrefEntry::new(value));
        self.save(&prefs)
    }
}
