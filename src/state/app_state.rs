//! Central `AppState` container: the single owner of session state.

use tokio::sync::mpsc;

use crate::catalog::Catalog;
use crate::logic::filter_and_sort;
use crate::state::query::QueryParams;
use crate::state::types::{Product, StateEvent};
use crate::store::{MemoryStore, WishlistStore};

/// Session state for one browsing session.
///
/// Query parameters are replaced wholesale (never edited in place) and the
/// derived `results` are recomputed explicitly after each change. Observers
/// receive a [`StateEvent`] for every change through [`AppState::subscribe`].
#[derive(Debug)]
pub struct AppState {
    /// Read-only product list.
    pub catalog: Catalog,
    /// Current search/filter/sort selections.
    pub query: QueryParams,
    /// Products derived from `catalog` and `query`.
    pub results: Vec<Product>,
    /// Persisted wishlist.
    pub wishlist: WishlistStore,
    /// Id of the product shown in the detail view, if open.
    pub open_product: Option<String>,
    /// Notification channel for observers.
    events: Option<mpsc::UnboundedSender<StateEvent>>,
}

impl AppState {
    /// What: Create a session over `catalog` with an initial query.
    ///
    /// Inputs:
    /// - `catalog`: Product list
    /// - `wishlist`: Loaded wishlist store
    /// - `query`: Starting parameters (usually from settings)
    ///
    /// Output:
    /// - State with `results` already derived.
    #[must_use]
    pub fn new(catalog: Catalog, wishlist: WishlistStore, query: QueryParams) -> Self {
        let results = filter_and_sort(&catalog, &query);
        Self {
            catalog,
            query,
            results,
            wishlist,
            open_product: None,
            events: None,
        }
    }

    /// What: Register an observer for state changes.
    ///
    /// Inputs: none
    ///
    /// Output:
    /// - Receiver of every subsequent [`StateEvent`]. A new call replaces the previous observer.
    ///
    /// Details:
    /// - The channel is unbounded and sending never blocks, so no async runtime is needed;
    ///   drain it with `try_recv`.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<StateEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.events = Some(tx);
        rx
    }

    /// Send `event` to the observer, if one is listening.
    pub(crate) fn notify(&self, event: StateEvent) {
        if let Some(tx) = &self.events
            && tx.send(event).is_err()
        {
            tracing::trace!("[State] Observer dropped; event discarded");
        }
    }

    /// The product currently open in the detail view.
    #[must_use]
    pub fn open_product(&self) -> Option<&Product> {
        self.open_product
            .as_deref()
            .and_then(|id| self.catalog.get(id))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Catalog::sportify(),
            WishlistStore::load(Box::new(MemoryStore::new())),
            QueryParams::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_shows_whole_catalog() {
        let app = AppState::default();
        assert_eq!(app.results.len(), 20);
        assert!(app.open_product().is_none());
        assert!(app.wishlist.is_empty());
    }

    #[test]
    /// What: Events reach a subscriber without an async runtime.
    ///
    /// Inputs:
    /// - Subscribe, then notify `DetailClosed`.
    ///
    /// Output:
    /// - `try_recv` yields the event.
    fn notify_reaches_subscriber() {
        let mut app = AppState::default();
        let mut rx = app.subscribe();
        app.notify(StateEvent::DetailClosed);
        assert_eq!(rx.try_recv().ok(), Some(StateEvent::DetailClosed));
    }
}
