use std::collections::HashMap;

use super::KeyValueStore;

/// In-memory store used by tests and `--no-persist` sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    /// Stored entries.
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// What: Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Create a store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.set(key, value);
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}
