use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::KeyValueStore;

/// JSON-object file backend: `{"search": "React"}`.
///
/// The whole map is loaded once on open and rewritten on every `set`.
#[derive(Debug)]
pub struct FileStore {
    /// File the map is persisted to.
    path: PathBuf,
    /// Cached contents of the file.
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// What: Open the store at `path`, loading existing entries when the file is readable.
    ///
    /// Inputs:
    /// - `path`: JSON file location; parent directories are created on first write
    ///
    /// Output:
    /// - A store holding the decoded entries, or an empty store when the file is missing or invalid.
    ///
    /// Details:
    /// - A corrupt file is logged and treated as empty; it is overwritten by the next `set`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "[Persist] State file is not a JSON object; starting empty"
                );
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "[Persist] Failed to read state file"
                );
                BTreeMap::new()
            }
        };
        tracing::debug!(
            path = %path.display(),
            keys = entries.len(),
            "[Persist] Opened state file"
        );
        Self { path, entries }
    }

    /// What: Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// What: Serialize the map and write it to disk, logging failures.
    fn flush(&self) {
        if let Some(dir) = self.path.parent()
            && let Err(e) = fs::create_dir_all(dir)
        {
            tracing::warn!(
                path = %dir.display(),
                error = %e,
                "[Persist] Failed to create state directory"
            );
            return;
        }
        match serde_json::to_string(&self.entries) {
            Ok(s) => match fs::write(&self.path, &s) {
                Ok(()) => tracing::trace!(
                    path = %self.path.display(),
                    bytes = s.len(),
                    "[Persist] State file written"
                ),
                Err(e) => tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "[Persist] Failed to write state file"
                ),
            },
            Err(e) => tracing::warn!(error = %e, "[Persist] Failed to encode state"),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        if self.entries.get(key).map(String::as_str) == Some(value) {
            return;
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Values written through one store instance are visible to a fresh one.
    ///
    /// Inputs:
    /// - Temp dir; nested path whose parent does not exist yet.
    ///
    /// Output:
    /// - File is created and reopening yields the stored value.
    fn file_store_round_trips_across_instances() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("state.json");
        let mut store = FileStore::open(&path);
        assert_eq!(store.get("search"), None);
        store.set("search", "rust");
        assert!(path.is_file());

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("search").as_deref(), Some("rust"));
    }

    #[test]
    /// What: A corrupt state file is ignored and replaced on the next write.
    ///
    /// Inputs:
    /// - File containing a JSON array instead of an object.
    ///
    /// Output:
    /// - Store opens empty; after `set` the file holds a valid object.
    fn file_store_recovers_from_corrupt_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state.json");
        fs::write(&path, "[1,2,3]").expect("seed");
        let mut store = FileStore::open(&path);
        assert_eq!(store.get("search"), None);
        store.set("search", "zig");
        let text = fs::read_to_string(&path).expect("read back");
        let map: BTreeMap<String, String> = serde_json::from_str(&text).expect("object");
        assert_eq!(map.get("search").map(String::as_str), Some("zig"));
    }
}
