//! Single-file storage: every key lives in one JSON object on disk.
//!
//! Writes go to a sibling temporary file which then replaces the existing
//! one, so a crashed write leaves the previous contents in place.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use super::{KeyValueStore, StorageError};

#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    /// Serializes read-modify-write cycles on the file
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_owned(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole key map. A missing or blank file is an empty map.
    async fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    async fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, serde_json::to_vec_pretty(entries)?).await?;
        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_owned(), value);
        self.write_entries(&entries).await
    }
}
