use crate::state::{AppState, Category, QueryParams, SortKey, StateEvent};

/// What: Replace the session's query parameters and recompute the results.
///
/// Inputs:
/// - `app`: Session state
/// - `query`: New parameters
///
/// Output:
/// - Updates `app.query` and `app.results`; emits `StateEvent::ResultsChanged`.
///
/// Details:
/// - Recomputes even when `query` equals the current parameters; output is
///   identical in that case.
pub fn apply_query(app: &mut AppState, query: QueryParams) {
    app.results = crate::logic::filter_and_sort(&app.catalog, &query);
    app.query = query;
    tracing::debug!(matched = app.results.len(), "[Query] Results updated");
    app.notify(StateEvent::ResultsChanged {
        count: app.results.len(),
    });
}

/// Update the search text.
pub fn set_search_term(app: &mut AppState, term: &str) {
    let next = app.query.with_search_term(term);
    apply_query(app, next);
}

/// Flip one category in the selection.
pub fn toggle_category(app: &mut AppState, category: Category) {
    let next = app.query.with_category_toggled(category);
    apply_query(app, next);
}

/// Flip the in-stock-only switch.
pub fn set_in_stock_only(app: &mut AppState, in_stock_only: bool) {
    let next = app.query.with_in_stock_only(in_stock_only);
    apply_query(app, next);
}

/// Change the sort key.
pub fn set_sort_key(app: &mut AppState, sort_key: SortKey) {
    let next = app.query.with_sort_key(sort_key);
    apply_query(app, next);
}
