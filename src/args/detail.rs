//! Command-line rendering of the product detail view.

use crate::args::definition::Result;
use crate::logic::{ProductDetail, open_detail};
use crate::state::AppState;

/// What: Render a detail view as text lines.
///
/// Inputs:
/// - `d`: Detail data
///
/// Output:
/// - Lines for title, description, stock/price, specs, images and actions.
#[must_use]
pub fn detail_lines(d: &ProductDetail) -> Vec<String> {
    let mut out = vec![
        d.title.clone(),
        d.description.clone(),
        String::new(),
        format!("{}  {}", d.stock_label, d.price),
    ];
    let cats: Vec<&str> = d.categories.iter().map(|c| c.as_str()).collect();
    out.push(format!("Categories: {}", cats.join(", ")));
    if !d.spec_lines.is_empty() {
        out.push("Specifications".to_string());
        out.extend(d.spec_lines.iter().map(|s| format!("  - {s}")));
    }
    out.push("Images".to_string());
    out.extend(d.images.iter().map(|img| format!("  - {} ({})", img.alt, img.src)));
    out.push(if d.purchasable {
        "Available to order".to_string()
    } else {
        "Currently unavailable".to_string()
    });
    if d.wishlisted {
        out.push("♥ On your wishlist".to_string());
    }
    out
}

/// What: Open and print the detail view for `id`.
///
/// Inputs:
/// - `app`: Session state
/// - `id`: Product id
/// - `json`: JSON output
///
/// Output:
/// - Writes the detail view to stdout.
///
/// # Errors
/// - `id` not in the catalog, or JSON serialization failure.
pub fn handle_details(app: &mut AppState, id: &str, json: bool) -> Result<()> {
    let Some(d) = open_detail(app, id) else {
        return Err(format!("no product with id '{id}'").into());
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&d)?);
    } else {
        for line in detail_lines(&d) {
            println!("{line}");
        }
    }
    Ok(())
}
