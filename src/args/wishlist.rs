//! Command-line wishlist handling.

use crate::args::browse::print_products;
use crate::args::definition::Result;
use crate::logic::toggle_wishlist;
use crate::state::{AppState, Product};

/// What: Toggle one id and print the confirmation message.
///
/// Inputs:
/// - `app`: Session state
/// - `id`: Product id from `--toggle-wishlist`
///
/// Output:
/// - Prints e.g. `p6: Added to wishlist`. Ids outside the catalog are toggled too.
pub fn handle_toggle(app: &mut AppState, id: &str) {
    let outcome = toggle_wishlist(app, id);
    tracing::info!(id, ?outcome, "[Args] Wishlist toggled from CLI");
    println!("{id}: {}", outcome.message());
}

/// Wishlist contents split by whether the id is in the catalog.
#[derive(Debug, serde::Serialize)]
pub struct WishlistListing<'a> {
    /// Wishlisted catalog products, in catalog order.
    pub products: Vec<&'a Product>,
    /// Wishlisted ids with no catalog product, sorted.
    pub unknown_ids: Vec<&'a str>,
}

/// What: Collect the wishlist for display.
///
/// Inputs:
/// - `app`: Session state
///
/// Output:
/// - Catalog products on the wishlist plus ids the catalog does not know.
#[must_use]
pub fn wishlist_listing(app: &AppState) -> WishlistListing<'_> {
    WishlistListing {
        products: app
            .catalog
            .products()
            .iter()
            .filter(|p| app.wishlist.is_wishlisted(&p.id))
            .collect(),
        unknown_ids: app
            .wishlist
            .ids()
            .filter(|id| !app.catalog.contains(id))
            .collect(),
    }
}

/// What: Print wishlisted products in catalog order.
///
/// Inputs:
/// - `app`: Session state
/// - `json`: JSON output
///
/// Output:
/// - Text rows with a "Not in catalog" line for unknown ids, or a JSON object
///   `{"products": [...], "unknown_ids": [...]}`.
///
/// # Errors
/// - JSON serialization failure.
pub fn handle_list(app: &AppState, json: bool) -> Result<()> {
    let listing = wishlist_listing(app);
    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }
    let products: Vec<Product> = listing.products.iter().copied().cloned().collect();
    print_products(app, &products, false)?;
    if !listing.unknown_ids.is_empty() {
        println!("Not in catalog: {}", listing.unknown_ids.join(", "));
    }
    Ok(())
}
