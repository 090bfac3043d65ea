//! Immutable query parameters for the product grid.

use std::collections::BTreeSet;

use crate::state::types::{Category, SortKey};

/// Current search, filter and sort selections.
///
/// Values are never edited in place by the session: each change builds a new
/// `QueryParams` through one of the `with_*` methods and hands it to
/// [`crate::logic::apply_query`], which recomputes the derived view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    /// Free text matched case-insensitively against name and description.
    pub search_term: String,
    /// Categories that must all be present on a product. Empty means no filter.
    pub selected_categories: BTreeSet<Category>,
    /// Hide products that are out of stock.
    pub in_stock_only: bool,
    /// Ordering applied after filtering.
    pub sort_key: SortKey,
}

impl QueryParams {
    /// Replace the search text.
    #[must_use]
    pub fn with_search_term(&self, term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            ..self.clone()
        }
    }

    /// Replace the whole category selection.
    #[must_use]
    pub fn with_categories<I>(&self, categories: I) -> Self
    where
        I: IntoIterator<Item = Category>,
    {
        Self {
            selected_categories: categories.into_iter().collect(),
            ..self.clone()
        }
    }

    /// What: Flip one category in the multi-select group.
    ///
    /// Inputs:
    /// - `category`: Tag the user clicked
    ///
    /// Output:
    /// - New parameters with `category` removed if it was selected, added otherwise.
    #[must_use]
    pub fn with_category_toggled(&self, category: Category) -> Self {
        let mut selected = self.selected_categories.clone();
        if !selected.remove(&category) {
            selected.insert(category);
        }
        Self {
            selected_categories: selected,
            ..self.clone()
        }
    }

    /// Replace the in-stock switch.
    #[must_use]
    pub fn with_in_stock_only(&self, in_stock_only: bool) -> Self {
        Self {
            in_stock_only,
            ..self.clone()
        }
    }

    /// Replace the sort key.
    #[must_use]
    pub fn with_sort_key(&self, sort_key: SortKey) -> Self {
        Self {
            sort_key,
            ..self.clone()
        }
    }

    /// Search text normalised for matching: trimmed and lowercased.
    #[must_use]
    pub fn normalized_term(&self) -> String {
        self.search_term.trim().to_lowercase()
    }
}
