//! Key-value persistence for small pieces of UI state (the last search term).
//!
//! The core only talks to [`KeyValueStore`], so tests run against
//! [`MemoryStore`] while the binary uses the JSON-file backed [`FileStore`].

mod file;
mod memory;
mod term;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use term::SemiPersistentState;

/// Key under which the last entered search term is stored.
pub const SEARCH_KEY: &str = "search";

/// Minimal string key-value store.
pub trait KeyValueStore: std::fmt::Debug + Send {
    /// What: Look up the value stored under `key`.
    ///
    /// Output:
    /// - `Some(value)` when present; `None` otherwise.
    fn get(&self, key: &str) -> Option<String>;

    /// What: Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}
