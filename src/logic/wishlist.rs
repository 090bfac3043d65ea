use crate::state::{AppState, StateEvent, ToggleOutcome};

/// What: Toggle wishlist membership for `id` and notify observers.
///
/// Inputs:
/// - `app`: Session state
/// - `id`: Product id; ids unknown to the catalog are accepted as-is
///
/// Output:
/// - Whether the id was added or removed; use `outcome.message()` for confirmation text.
///
/// Details:
/// - The store persists synchronously; persistence errors never reach the caller.
pub fn toggle_wishlist(app: &mut AppState, id: &str) -> ToggleOutcome {
    if !app.catalog.contains(id) {
        tracing::debug!(id, "[Wishlist] Toggling id not present in catalog");
    }
    let outcome = app.wishlist.toggle(id);
    app.notify(StateEvent::WishlistChanged {
        id: id.to_string(),
        outcome,
    });
    outcome
}

/// Whether the product `id` is wishlisted in this session.
#[must_use]
pub fn is_wishlisted(app: &AppState, id: &str) -> bool {
    app.wishlist.is_wishlisted(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Toggle emits an event carrying the outcome.
    ///
    /// Inputs:
    /// - Subscribe; toggle "p6" twice.
    ///
    /// Output:
    /// - Events Added then Removed for "p6"; membership ends false.
    fn toggle_notifies_with_outcome() {
        let mut app = AppState::default();
        let mut rx = app.subscribe();
        assert_eq!(toggle_wishlist(&mut app, "p6"), ToggleOutcome::Added);
        assert!(is_wishlisted(&app, "p6"));
        assert_eq!(toggle_wishlist(&mut app, "p6"), ToggleOutcome::Removed);
        assert!(!is_wishlisted(&app, "p6"));

        let events: Vec<StateEvent> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
        assert_eq!(
            events,
            vec![
                StateEvent::WishlistChanged {
                    id: "p6".into(),
                    outcome: ToggleOutcome::Added
                },
                StateEvent::WishlistChanged {
                    id: "p6".into(),
                    outcome: ToggleOutcome::Removed
                },
            ]
        );
    }

    #[test]
    fn unknown_id_toggles_without_error() {
        let mut app = AppState::default();
        assert_eq!(toggle_wishlist(&mut app, "does-not-exist"), ToggleOutcome::Added);
        assert!(is_wishlisted(&app, "does-not-exist"));
        assert_eq!(toggle_wishlist(&mut app, "does-not-exist"), ToggleOutcome::Removed);
        assert!(app.wishlist.is_empty());
    }
}
