//! Integration tests for wishlist persistence through the file-backed store.
//!
//! Tests cover:
//! - Membership survives a new session on the same file
//! - Double toggle restores the stored bytes
//! - Corrupt storage loads as an empty wishlist
//! - Session-level toggles through `AppState`
//! - Writes re-encode the set in canonical order

#![cfg(test)]

use std::collections::BTreeSet;

use sportify_merch::catalog::Catalog;
use sportify_merch::logic::{is_wishlisted, toggle_wishlist};
use sportify_merch::state::{AppState, QueryParams, ToggleOutcome};
use sportify_merch::store::{
    DEFAULT_WISHLIST_KEY, FileStore, KeyValueStore, WishlistStore, decode_ids, encode_ids,
};

/// What: Open a wishlist backed by `path`.
///
/// Inputs:
/// - `path`: Storage file
///
/// Output:
/// - Wishlist loaded from that file.
fn wishlist_at(path: &std::path::Path) -> WishlistStore {
    WishlistStore::load(Box::new(FileStore::open(path)))
}

#[test]
/// What: Toggles persist across sessions.
///
/// Inputs:
/// - Session 1 adds p6 and p12; session 2 reads the same file.
///
/// Output:
/// - Session 2 sees both ids and the file holds a JSON array.
fn membership_survives_new_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("storage.json");
    {
        let mut w = wishlist_at(&path);
        assert_eq!(w.toggle("p12"), ToggleOutcome::Added);
        assert_eq!(w.toggle("p6"), ToggleOutcome::Added);
    }
    let w = wishlist_at(&path);
    assert!(w.is_wishlisted("p6"));
    assert!(w.is_wishlisted("p12"));
    assert_eq!(w.len(), 2);

    let raw = FileStore::open(&path)
        .get(DEFAULT_WISHLIST_KEY)
        .expect("stored value");
    let decoded = decode_ids(&raw).expect("json array");
    assert_eq!(decoded.len(), 2);
}

#[test]
/// What: toggle(id); toggle(id) leaves the file content unchanged.
///
/// Inputs:
/// - Wishlist with p1, p2; toggle p1 twice; toggle p7 twice.
///
/// Output:
/// - File bytes identical before and after.
fn double_toggle_restores_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("storage.json");
    let mut w = wishlist_at(&path);
    w.toggle("p2");
    w.toggle("p1");
    let before = std::fs::read_to_string(&path).expect("file written");

    w.toggle("p1");
    w.toggle("p1");
    w.toggle("p7");
    w.toggle("p7");
    let after = std::fs::read_to_string(&path).expect("file still there");
    assert_eq!(before, after);
}

#[test]
fn corrupt_value_loads_empty_and_is_replaced() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("storage.json");
    let mut raw = FileStore::open(&path);
    raw.set(DEFAULT_WISHLIST_KEY, "not-json").expect("seed bad value");

    let mut w = wishlist_at(&path);
    assert!(w.is_empty());
    w.toggle("p3");
    assert_eq!(
        FileStore::open(&path).get(DEFAULT_WISHLIST_KEY).as_deref(),
        Some(r#"["p3"]"#)
    );
}

#[test]
/// What: Encoding is independent of insertion order.
///
/// Inputs:
/// - Same ids inserted in two different orders.
///
/// Output:
/// - Identical encodings that decode to set-equal values.
fn encoding_ignores_insertion_order() {
    let a: BTreeSet<String> = ["p9", "p2", "p14"].iter().map(|s| (*s).to_string()).collect();
    let b: BTreeSet<String> = ["p14", "p9", "p2"].iter().map(|s| (*s).to_string()).collect();
    assert_eq!(encode_ids(&a), encode_ids(&b));
    assert_eq!(decode_ids(&encode_ids(&a)), Some(b));
}

#[test]
/// What: Session toggles write through and a fresh session sees them.
///
/// Inputs:
/// - AppState over a file store; toggle p6 and an unknown id.
///
/// Output:
/// - Both toggles succeed; new AppState on the same file reports both wishlisted.
fn app_state_toggles_write_through() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("storage.json");
    let mut app = AppState::new(Catalog::sportify(), wishlist_at(&path), QueryParams::default());
    assert_eq!(toggle_wishlist(&mut app, "p6"), ToggleOutcome::Added);
    assert_eq!(toggle_wishlist(&mut app, "ghost"), ToggleOutcome::Added);

    let fresh = AppState::new(Catalog::sportify(), wishlist_at(&path), QueryParams::default());
    assert!(is_wishlisted(&fresh, "p6"));
    assert!(is_wishlisted(&fresh, "ghost"));
}

#[test]
/// What: A stored value in non-canonical order is rewritten sorted on the next toggle.
///
/// Inputs:
/// - File holding `["p6","p2"]`; toggle p9.
///
/// Output:
/// - Membership kept; file now holds `["p2","p6","p9"]`.
fn next_write_uses_canonical_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("storage.json");
    FileStore::open(&path)
        .set(DEFAULT_WISHLIST_KEY, r#"["p6","p2"]"#)
        .expect("seed value");

    let mut w = wishlist_at(&path);
    assert_eq!(w.ids().collect::<Vec<_>>(), vec!["p2", "p6"]);
    assert_eq!(w.toggle("p9"), ToggleOutcome::Added);
    assert_eq!(
        FileStore::open(&path).get(DEFAULT_WISHLIST_KEY).as_deref(),
        Some(r#"["p2","p6","p9"]"#)
    );
}
