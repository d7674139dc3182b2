//! JSON file store: one `<key>.json` per collection.

use std::fs;
use std::path::{Path, PathBuf};

use super::{Store, StoreKey};
use crate::error::{DayboardError, DayboardResult};

/// Stores each collection as a pretty-printed JSON file in a single
/// directory. Writes go through a temp file and rename so a crash never
/// leaves a half-written collection behind.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonFileStore { dir: dir.into() }
    }

    /// Default data directory (`<platform data dir>/dayboard`).
    pub fn default_dir() -> DayboardResult<PathBuf> {
        let dir = dirs::data_dir()
            .ok_or_else(|| DayboardError::Config("Could not determine data directory".into()))?;
        Ok(dir.join("dayboard"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: StoreKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

impl Store for JsonFileStore {
    fn read(&self, key: StoreKey) -> DayboardResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn write(&self, key: StoreKey, payload: &str) -> DayboardResult<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        let temp = self.dir.join(format!("{}.json.tmp", key.as_str()));

        fs::write(&temp, payload)?;
        fs::rename(&temp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_before_any_write_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(store.read(StoreKey::Goals).unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        store.write(StoreKey::Notes, "[]").unwrap();
        assert_eq!(store.read(StoreKey::Notes).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn write_overwrites_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        store.write(StoreKey::Events, "[1]").unwrap();
        store.write(StoreKey::Events, "[2]").unwrap();

        assert_eq!(store.read(StoreKey::Events).unwrap().as_deref(), Some("[2]"));
        assert!(!dir.path().join("events.json.tmp").exists());
    }

    #[test]
    fn keys_map_to_separate_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        for key in StoreKey::ALL {
            store.write(key, "[]").unwrap();
        }

        for name in ["events.json", "notes.json", "life-events.json", "goals.json"] {
            assert!(dir.path().join(name).exists(), "missing {name}");
        }
    }
}
