use std::collections::BTreeSet;

use super::KeyValueStore;
use crate::state::ToggleOutcome;

/// Key under which the wishlist is persisted unless configured otherwise.
pub const DEFAULT_WISHLIST_KEY: &str = "sportify-wishlist";

/// What: Serialize wishlist ids for storage.
///
/// Inputs:
/// - `ids`: Wishlisted product ids
///
/// Output:
/// - JSON array of strings in sorted order, e.g. `["p1","p6"]`.
#[must_use]
pub fn encode_ids(ids: &BTreeSet<String>) -> String {
    // Serializing a set of strings cannot fail.
    serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_string())
}

/// What: Parse a stored wishlist value.
///
/// Inputs:
/// - `raw`: Stored text
///
/// Output:
/// - `Some(set)` when `raw` is a JSON array of strings (duplicates collapse);
///   `None` for anything else.
#[must_use]
pub fn decode_ids(raw: &str) -> Option<BTreeSet<String>> {
    serde_json::from_str::<Vec<String>>(raw)
        .ok()
        .map(|v| v.into_iter().collect())
}

/// Persisted set of wishlisted product ids.
///
/// The in-memory set is authoritative for the session; every mutation is
/// written through to the backing [`KeyValueStore`] and write failures are
/// logged and otherwise ignored.
pub struct WishlistStore {
    /// Storage key for the serialized set.
    key: String,
    /// Current membership.
    ids: BTreeSet<String>,
    /// Backing key-value store.
    backend: Box<dyn KeyValueStore>,
}

impl std::fmt::Debug for WishlistStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WishlistStore")
            .field("key", &self.key)
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}

impl WishlistStore {
    /// What: Load the wishlist from `backend` under the default key.
    ///
    /// Inputs:
    /// - `backend`: Key-value store holding (or about to hold) the wishlist
    ///
    /// Output:
    /// - Store initialized from the persisted value, or empty when it is absent or malformed.
    pub fn load(backend: Box<dyn KeyValueStore>) -> Self {
        Self::load_with_key(backend, DEFAULT_WISHLIST_KEY)
    }

    /// What: Load the wishlist from `backend` under a custom key.
    ///
    /// Inputs:
    /// - `backend`: Key-value store
    /// - `key`: Storage key
    ///
    /// Output:
    /// - Initialized store; never fails.
    ///
    /// Details:
    /// - A malformed value is logged at warn level and treated as empty. It is
    ///   left in place until the next toggle overwrites it.
    pub fn load_with_key(backend: Box<dyn KeyValueStore>, key: &str) -> Self {
        let ids = match backend.get(key) {
            None => BTreeSet::new(),
            Some(raw) => decode_ids(&raw).unwrap_or_else(|| {
                tracing::warn!(key, bytes = raw.len(), "[Wishlist] Stored value malformed; starting empty");
                BTreeSet::new()
            }),
        };
        tracing::debug!(key, count = ids.len(), "[Wishlist] Loaded");
        Self {
            key: key.to_string(),
            ids,
            backend,
        }
    }

    /// Whether `id` is wishlisted.
    #[must_use]
    pub fn is_wishlisted(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// What: Add `id` if absent, remove it if present, then persist.
    ///
    /// Inputs:
    /// - `id`: Product id; not validated against any catalog
    ///
    /// Output:
    /// - `ToggleOutcome::Added` or `ToggleOutcome::Removed`.
    ///
    /// Details:
    /// - Persistence failures are logged and swallowed; membership still changes.
    pub fn toggle(&mut self, id: &str) -> ToggleOutcome {
        let outcome = if self.ids.remove(id) {
            ToggleOutcome::Removed
        } else {
            self.ids.insert(id.to_string());
            ToggleOutcome::Added
        };
        tracing::debug!(id, ?outcome, count = self.ids.len(), "[Wishlist] Toggled");
        self.persist();
        outcome
    }

    /// Write the full set through to the backend.
    fn persist(&mut self) {
        let value = encode_ids(&self.ids);
        match self.backend.set(&self.key, &value) {
            Ok(()) => {
                tracing::trace!(key = %self.key, bytes = value.len(), "[Wishlist] Persisted");
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "[Wishlist] Failed to persist wishlist");
            }
        }
    }

    /// Wishlisted ids in storage order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Number of wishlisted ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is wishlisted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Storage key in use.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Value currently held by the backend for this wishlist's key.
    #[must_use]
    pub fn persisted_value(&self) -> Option<String> {
        self.backend.get(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn store_with(raw: Option<&str>) -> Box<dyn KeyValueStore> {
        let mut s = MemoryStore::new();
        if let Some(raw) = raw {
            s.set(DEFAULT_WISHLIST_KEY, raw).expect("seed");
        }
        Box::new(s)
    }

    #[test]
    /// What: Missing and malformed values both load as an empty wishlist.
    ///
    /// Inputs:
    /// - No stored value; `"{oops"`; `{"a":1}`; `[1,2]`.
    ///
    /// Output:
    /// - Empty wishlist in every case, no panic.
    fn load_falls_back_to_empty() {
        for raw in [None, Some("{oops"), Some(r#"{"a":1}"#), Some("[1,2]")] {
            let w = WishlistStore::load(store_with(raw));
            assert!(w.is_empty(), "raw={raw:?}");
        }
    }

    #[test]
    fn load_reads_existing_ids_and_collapses_duplicates() {
        let w = WishlistStore::load(store_with(Some(r#"["p6","p2","p6"]"#)));
        assert_eq!(w.len(), 2);
        assert!(w.is_wishlisted("p6"));
        assert!(w.is_wishlisted("p2"));
        assert!(!w.is_wishlisted("p1"));
    }

    #[test]
    /// What: Toggle twice restores membership and the persisted value.
    ///
    /// Inputs:
    /// - Wishlist `["p1","p3","p5"]`; toggle "p3" twice; toggle "p9" twice.
    ///
    /// Output:
    /// - Outcomes Removed/Added and Added/Removed; persisted value equals the initial one.
    fn double_toggle_is_identity() {
        let mut w = WishlistStore::load(store_with(None));
        for id in ["p1", "p3", "p5"] {
            w.toggle(id);
        }
        let before = w.persisted_value();

        assert_eq!(w.toggle("p3"), ToggleOutcome::Removed);
        assert!(!w.is_wishlisted("p3"));
        assert_eq!(w.toggle("p3"), ToggleOutcome::Added);
        assert_eq!(w.persisted_value(), before);

        assert_eq!(w.toggle("p9"), ToggleOutcome::Added);
        assert_eq!(w.toggle("p9"), ToggleOutcome::Removed);
        assert_eq!(w.persisted_value(), before);
    }

    #[test]
    /// What: Quota failures are swallowed and memory stays authoritative.
    ///
    /// Inputs:
    /// - Backend with a quota only large enough for the key and an empty array.
    ///
    /// Output:
    /// - Toggle reports Added, membership is true, persisted value unchanged.
    fn write_failure_is_swallowed() {
        let quota = DEFAULT_WISHLIST_KEY.len() + 2;
        let mut backend = MemoryStore::with_quota(quota);
        backend.set(DEFAULT_WISHLIST_KEY, "[]").expect("fits quota");
        let mut w = WishlistStore::load(Box::new(backend));
        assert_eq!(w.toggle("p1"), ToggleOutcome::Added);
        assert!(w.is_wishlisted("p1"));
        assert_eq!(w.persisted_value().as_deref(), Some("[]"));
    }

    #[test]
    fn encode_decode_is_set_equal() {
        let mut a = BTreeSet::new();
        for id in ["p9", "p1", "p20"] {
            a.insert(id.to_string());
        }
        let decoded = decode_ids(&encode_ids(&a)).expect("valid json");
        assert_eq!(decoded, a);
        assert_eq!(encode_ids(&a), r#"["p1","p20","p9"]"#);
    }

    #[test]
    fn custom_key_is_used() {
        let mut w = WishlistStore::load_with_key(Box::new(MemoryStore::new()), "my-list");
        w.toggle("p2");
        assert_eq!(w.key(), "my-list");
        assert_eq!(w.persisted_value().as_deref(), Some(r#"["p2"]"#));
    }
}
