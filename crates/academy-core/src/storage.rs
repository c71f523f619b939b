//! Persistent key-value storage trait.
//!
//! Mirrors the browser `localStorage` contract: string keys, string values,
//! absence of a key is meaningful.

use crate::error::Result;

/// A string key-value store that survives restarts.
///
/// Implementations must make each call atomic on its own; callers never
/// need multi-key transactions.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, `None` if absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}
