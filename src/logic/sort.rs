use crate::state::{Product, SortKey};
use crate::util::locale_cmp;

/// What: Order products in place for the given sort key.
///
/// Inputs:
/// - `products`: Filtered products, in catalog order
/// - `key`: Requested ordering
///
/// Output:
/// - Reorders `products`.
///
/// Details:
/// - `Newest` leaves catalog order untouched.
/// - Uses a stable sort, so equal prices (or names) keep their incoming order.
pub fn sort_products(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::Newest => {}
        SortKey::PriceAscending => products.sort_by(|a, b| a.price_lkr.cmp(&b.price_lkr)),
        SortKey::PriceDescending => products.sort_by(|a, b| b.price_lkr.cmp(&a.price_lkr)),
        SortKey::NameAscending => products.sort_by(|a, b| locale_cmp(&a.name, &b.name)),
    }
}
