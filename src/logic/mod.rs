//! Core non-UI logic: deriving the product grid, wishlist toggles, and the detail view.

pub mod detail;
pub mod filter;
pub mod query;
pub mod sort;
pub mod wishlist;

// Re-export public APIs so callers can use crate::logic::... directly
pub use detail::{ProductDetail, close_detail, current_detail, open_detail, product_detail};
pub use filter::{filter_and_sort, matches_categories, matches_query, matches_search, matches_stock};
pub use query::{apply_query, set_in_stock_only, set_search_term, set_sort_key, toggle_category};
pub use sort::sort_products;
pub use wishlist::{is_wishlisted, toggle_wishlist};
