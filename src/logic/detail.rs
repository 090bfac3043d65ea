//! Detail view selection and its derived display data.

use crate::state::{AppState, Category, Product, ProductImage, StateEvent};
use crate::util::format_lkr;

/// Everything the detail panel shows for one product.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ProductDetail {
    /// Product id.
    pub id: String,
    /// Panel title.
    pub title: String,
    /// Panel description.
    pub description: String,
    /// Formatted price, e.g. "Rs. 4,990".
    pub price: String,
    /// "In Stock" or "Out of Stock".
    pub stock_label: &'static str,
    /// Category badges.
    pub categories: Vec<Category>,
    /// Carousel images in order.
    pub images: Vec<ProductImage>,
    /// Specification lines such as "Size: Adult"; only present keys are listed.
    pub spec_lines: Vec<String>,
    /// Quantity entry and add-to-cart are only enabled for in-stock products.
    pub purchasable: bool,
    /// Whether the product is on the wishlist.
    pub wishlisted: bool,
}

/// What: Build the detail view data for `product`.
///
/// Inputs:
/// - `product`: Catalog entry
/// - `wishlisted`: Current wishlist membership
///
/// Output:
/// - `ProductDetail` ready for display.
#[must_use]
pub fn product_detail(product: &Product, wishlisted: bool) -> ProductDetail {
    let mut spec_lines = Vec::new();
    if let Some(specs) = &product.specs {
        if let Some(size) = &specs.size {
            spec_lines.push(format!("Size: {size}"));
        }
        if let Some(material) = &specs.material {
            spec_lines.push(format!("Material: {material}"));
        }
    }
    ProductDetail {
        id: product.id.clone(),
        title: product.name.clone(),
        description: product.description.clone(),
        price: format_lkr(product.price_lkr),
        stock_label: product.stock_label(),
        categories: product.categories.clone(),
        images: product.images.clone(),
        spec_lines,
        purchasable: product.in_stock,
        wishlisted,
    }
}

/// What: Open the detail view for `id`.
///
/// Inputs:
/// - `app`: Session state
/// - `id`: Product id
///
/// Output:
/// - `Some(ProductDetail)` when `id` is in the catalog; `None` otherwise.
///
/// Details:
/// - An unknown id closes any open detail view instead.
pub fn open_detail(app: &mut AppState, id: &str) -> Option<ProductDetail> {
    let Some(product) = app.catalog.get(id) else {
        tracing::debug!(id, "[Detail] Unknown product; closing detail view");
        close_detail(app);
        return None;
    };
    let detail = product_detail(product, app.wishlist.is_wishlisted(id));
    app.open_product = Some(id.to_string());
    app.notify(StateEvent::DetailOpened { id: id.to_string() });
    Some(detail)
}

/// Close the detail view. No-op (and no event) when nothing is open.
pub fn close_detail(app: &mut AppState) {
    if app.open_product.take().is_some() {
        app.notify(StateEvent::DetailClosed);
    }
}

/// Detail data for the currently open product, reflecting current wishlist state.
#[must_use]
pub fn current_detail(app: &AppState) -> Option<ProductDetail> {
    app.open_product()
        .map(|p| product_detail(p, app.wishlist.is_wishlisted(&p.id)))
}
