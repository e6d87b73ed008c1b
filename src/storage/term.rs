use super::KeyValueStore;

/// A string value mirrored into a [`KeyValueStore`] under a fixed key.
///
/// Read once on construction, written on every change.
#[derive(Debug)]
pub struct SemiPersistentState {
    /// Key the value is stored under.
    key: String,
    /// Current value.
    value: String,
    /// Backing store.
    store: Box<dyn KeyValueStore>,
}

impl SemiPersistentState {
    /// What: Load the value for `key`, falling back to `initial`.
    ///
    /// Inputs:
    /// - `key`: Storage key
    /// - `initial`: Value used when the store has no entry or an empty one
    /// - `store`: Backing store
    ///
    /// Output:
    /// - State holding the resolved value; the value is written back to the store immediately.
    pub fn new(key: &str, initial: &str, mut store: Box<dyn KeyValueStore>) -> Self {
        let value = store
            .get(key)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| initial.to_string());
        store.set(key, &value);
        Self {
            key: key.to_string(),
            value,
            store,
        }
    }

    /// What: Current value.
    #[must_use]
    pub fn get(&self) -> &str {
        &self.value
    }

    /// What: Replace the value and persist it.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.store.set(&self.key, &self.value);
    }

    /// What: Append a character to the value and persist it.
    pub fn push(&mut self, ch: char) {
        self.value.push(ch);
        self.store.set(&self.key, &self.value);
    }

    /// What: Remove the last character (if any) and persist the result.
    pub fn pop(&mut self) {
        if self.value.pop().is_some() {
            self.store.set(&self.key, &self.value);
        }
    }

    /// What: Read the persisted value straight from the backing store.
    #[must_use]
    pub fn stored(&self) -> Option<String> {
        self.store.get(&self.key)
    }
}
