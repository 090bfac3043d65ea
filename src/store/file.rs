use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, Result};

/// File-backed key-value store: a single JSON object mapping keys to strings.
///
/// Entries are loaded once at [`FileStore::open`] and the whole object is
/// rewritten on each `set`. A single writer per file is assumed.
#[derive(Debug)]
pub struct FileStore {
    /// Location of the JSON file.
    path: PathBuf,
    /// Entries as last loaded or written in this session.
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// What: Open (or lazily create) the store at `path`.
    ///
    /// Inputs:
    /// - `path`: JSON file location; the file need not exist yet
    ///
    /// Output:
    /// - A store holding the file's entries, or no entries when the file is
    ///   missing, unreadable, or not a JSON object of strings.
    ///
    /// Details:
    /// - A corrupt file is not an error; it is logged and replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str::<BTreeMap<String, String>>(&s) {
                Ok(map) => {
                    tracing::debug!(
                        path = %path.display(),
                        keys = map.len(),
                        "[Store] Loaded key-value file"
                    );
                    map
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "[Store] Ignoring malformed key-value file"
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "[Store] Failed to read key-value file"
                );
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.entries.clone();
        next.insert(key.to_string(), value.to_string());
        let s = serde_json::to_string_pretty(&next)?;
        tracing::trace!(
            path = %self.path.display(),
            key,
            bytes = s.len(),
            "[Store] Writing key-value file"
        );
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, s)?;
        self.entries = next;
        Ok(())
    }
}
