use crate::catalog::Catalog;
use crate::state::{Product, QueryParams};
use crate::util::contains_ci;

/// What: Search predicate.
///
/// Inputs:
/// - `product`: Candidate
/// - `term_lower`: Trimmed, lowercased search text (empty disables the filter)
///
/// Output:
/// - `true` when the term is empty or occurs in the name or description, ignoring case.
#[must_use]
pub fn matches_search(product: &Product, term_lower: &str) -> bool {
    term_lower.is_empty()
        || contains_ci(&product.name, term_lower)
        || contains_ci(&product.description, term_lower)
}

/// What: Category predicate with intersection semantics.
///
/// Inputs:
/// - `product`: Candidate
/// - `query`: Parameters holding the selected categories
///
/// Output:
/// - `true` when nothing is selected or the product carries every selected category.
#[must_use]
pub fn matches_categories(product: &Product, query: &QueryParams) -> bool {
    query
        .selected_categories
        .iter()
        .all(|c| product.has_category(*c))
}

/// Stock predicate: passes unless only in-stock items are wanted and this one is not.
#[must_use]
pub const fn matches_stock(product: &Product, in_stock_only: bool) -> bool {
    !in_stock_only || product.in_stock
}

/// Whether `product` passes every active filter of `query`.
#[must_use]
pub fn matches_query(product: &Product, query: &QueryParams) -> bool {
    let term = query.normalized_term();
    matches_search(product, &term)
        && matches_categories(product, query)
        && matches_stock(product, query.in_stock_only)
}

/// What: Derive the product grid for the given parameters.
///
/// Inputs:
/// - `catalog`: Read-only product list
/// - `query`: Current search, filter and sort selections
///
/// Output:
/// - Matching products, ordered per `query.sort_key`. May be empty.
///
/// Details:
/// - Pure: identical inputs always give identical output order.
/// - Filtering keeps catalog order; sorting is stable.
#[must_use]
pub fn filter_and_sort(catalog: &Catalog, query: &QueryParams) -> Vec<Product> {
    let term = query.normalized_term();
    let mut filtered: Vec<Product> = catalog
        .products()
        .iter()
        .filter(|p| {
            matches_search(p, &term)
                && matches_categories(p, query)
                && matches_stock(p, query.in_stock_only)
        })
        .cloned()
        .collect();
    crate::logic::sort_products(&mut filtered, query.sort_key);
    tracing::trace!(
        term = %term,
        categories = query.selected_categories.len(),
        in_stock_only = query.in_stock_only,
        sort = query.sort_key.as_config_key(),
        matched = filtered.len(),
        "[Catalog] Recomputed results"
    );
    filtered
}
