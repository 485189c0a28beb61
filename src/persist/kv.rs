use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::foundation::error::{AquariumError, AquariumResult};

/// String key-value storage behind the saved list and visit tracker.
pub trait KeyValueStore {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> AquariumResult<Option<String>>;
    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> AquariumResult<()>;
    /// Delete `key`. Missing keys are not an error.
    fn remove(&mut self, key: &str) -> AquariumResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> AquariumResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AquariumResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> AquariumResult<()> {
        (**self).remove(key)
    }
}

/// Process-local store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AquariumResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AquariumResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AquariumResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object file.
///
/// The file is read once on open and rewritten in full on every change. Writes go to a sibling
/// `.tmp` file that is then renamed over the original.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open `path`, starting empty when the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> AquariumResult<Self> {
        let path = path.into();
        let entries = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                AquariumError::storage(format!("parse store '{}': {e}", path.display()))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(AquariumError::storage(format!(
                    "read store '{}': {e}",
                    path.display()
                )));
            }
        };
        tracing::debug!(path = %path.display(), keys = entries.len(), "opened store");
        Ok(Self { path, entries })
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> AquariumResult<()> {
        let json = serde_json::to_vec_pretty(&self.entries)
            .map_err(|e| AquariumError::serde(format!("encode store: {e}")))?;
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| {
                AquariumError::storage(format!("create dir '{}': {e}", dir.display()))
            })?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .map_err(|e| AquariumError::storage(format!("write '{}': {e}", tmp.display())))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            AquariumError::storage(format!("rename onto '{}': {e}", self.path.display()))
        })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> AquariumResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AquariumResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> AquariumResult<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
