//! Scoped key-value persistence.
//!
//! The wishlist only needs a tiny "local storage" contract: read an optional
//! string for a key, write a string for a key. Writes may fail (quota, I/O);
//! callers decide whether to surface that. Two backends are provided:
//! - [`FileStore`]: one JSON object file holding every key.
//! - [`MemoryStore`]: in-process map with an optional byte quota.

use std::collections::BTreeMap;

mod file;
mod wishlist;

pub use file::FileStore;
pub use wishlist::{DEFAULT_WISHLIST_KEY, WishlistStore, decode_ids, encode_ids};

/// Error type for store operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Narrow key-value persistence contract.
pub trait KeyValueStore {
    /// Return the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// What: Store `value` under `key`, replacing any previous value.
    ///
    /// Inputs:
    /// - `key`: Entry name
    /// - `value`: Serialized payload
    ///
    /// Output:
    /// - `Ok(())` once the value is durable for this backend; `Err` when it could not be stored.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process key-value store.
///
/// With a quota set, a write whose resulting total size (keys plus values, in
/// bytes) would exceed the quota is rejected and leaves the store unchanged,
/// like a browser storage quota error.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    /// Stored entries.
    entries: BTreeMap<String, String>,
    /// Maximum total bytes, if limited.
    quota: Option<usize>,
}

impl MemoryStore {
    /// Unlimited empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store that rejects writes past `quota` bytes.
    #[must_use]
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            quota: Some(quota),
        }
    }

    /// Total bytes currently used by keys and values.
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if let Some(quota) = self.quota {
            let current = self.entries.get(key).map_or(0, |v| key.len() + v.len());
            let next = self.used_bytes() - current + key.len() + value.len();
            if next > quota {
                return Err(format!("storage quota exceeded ({next} > {quota} bytes)").into());
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
