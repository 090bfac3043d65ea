//! Command-line rendering of the product grid.

use crate::args::definition::Result;
use crate::state::{AppState, Product};
use crate::util::format_lkr;

/// What: One listing row for a product card.
///
/// Inputs:
/// - `product`: Product to show
/// - `wishlisted`: Whether to show the wishlist marker
///
/// Output:
/// - Row like `p6   Sportify Elite Gym Gloves  Rs. 4,990  In Stock  [Fitness, Accessories] ♥`.
#[must_use]
pub fn card_line(product: &Product, wishlisted: bool) -> String {
    let cats: Vec<&str> = product.categories.iter().map(|c| c.as_str()).collect();
    let mut line = format!(
        "{:<4} {:<34} {:>10}  {:<12} [{}]",
        product.id,
        product.name,
        format_lkr(product.price_lkr),
        product.stock_label(),
        cats.join(", ")
    );
    if wishlisted {
        line.push_str(" ♥");
    }
    line
}

/// What: Print a list of products as rows or JSON.
///
/// Inputs:
/// - `app`: Session state (wishlist markers)
/// - `products`: Products to print, already ordered
/// - `json`: Print a JSON array instead of rows
///
/// Output:
/// - Writes to stdout.
///
/// # Errors
/// - JSON serialization failure.
pub fn print_products(app: &AppState, products: &[Product], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(products)?);
        return Ok(());
    }
    if products.is_empty() {
        println!("No products match the current filters.");
        return Ok(());
    }
    for p in products {
        println!("{}", card_line(p, app.wishlist.is_wishlisted(&p.id)));
    }
    Ok(())
}

/// What: Print the filtered and sorted catalog.
///
/// Inputs:
/// - `app`: Session state with derived `results`
/// - `json`: JSON output
///
/// Output:
/// - Writes results, plus a footer with the count, to stdout.
///
/// # Errors
/// - JSON serialization failure.
pub fn handle_browse(app: &AppState, json: bool) -> Result<()> {
    tracing::info!(matched = app.results.len(), "[Args] Browsing catalog");
    print_products(app, &app.results, json)?;
    if !json {
        println!(
            "\n{} of {} products. Prices are in LKR.",
            app.results.len(),
            app.catalog.len()
        );
    }
    Ok(())
}
