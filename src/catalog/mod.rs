//! Read-only product catalog.
//!
//! The catalog is reference data: it is built once per session (normally from
//! the bundled Sportify seed) and never mutated afterwards. All derived views
//! borrow from it.

use std::collections::HashSet;
use std::fmt;

use crate::state::Product;

mod seed;

/// Reasons a caller-supplied product list cannot become a catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// Two records share the same id.
    DuplicateId(String),
    /// A record has no category tags.
    NoCategories(String),
    /// A record lists the same category tag twice.
    DuplicateCategory(String),
    /// A record has no images.
    NoImages(String),
    /// A record has an empty id.
    EmptyId,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate product id '{id}'"),
            Self::NoCategories(id) => write!(f, "product '{id}' has no categories"),
            Self::DuplicateCategory(id) => {
                write!(f, "product '{id}' lists a category more than once")
            }
            Self::NoImages(id) => write!(f, "product '{id}' has no images"),
            Self::EmptyId => f.write_str("product with empty id"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Immutable, ordered list of products. Order is the "newest" order.
#[derive(Clone, Debug)]
pub struct Catalog {
    /// Products in insertion order.
    products: Vec<Product>,
}

impl Catalog {
    /// What: Build a catalog from caller-supplied records.
    ///
    /// Inputs:
    /// - `products`: Records in display ("newest") order
    ///
    /// Output:
    /// - `Ok(Catalog)` when every record is valid, or the first `CatalogError` found.
    ///
    /// Details:
    /// - Ids must be non-empty and unique; every record needs at least one
    ///   category, no repeated category, and at least one image.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(products.len());
        for p in &products {
            if p.id.is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if !seen.insert(p.id.as_str()) {
                return Err(CatalogError::DuplicateId(p.id.clone()));
            }
            if p.categories.is_empty() {
                return Err(CatalogError::NoCategories(p.id.clone()));
            }
            let mut tags = HashSet::with_capacity(p.categories.len());
            if !p.categories.iter().all(|c| tags.insert(*c)) {
                return Err(CatalogError::DuplicateCategory(p.id.clone()));
            }
            if p.images.is_empty() {
                return Err(CatalogError::NoImages(p.id.clone()));
            }
        }
        tracing::debug!(count = products.len(), "[Catalog] Catalog built");
        Ok(Self { products })
    }

    /// The bundled Sportify merchandise list (twenty items, `p1`..`p20`).
    #[must_use]
    pub fn sportify() -> Self {
        Self {
            products: seed::products(),
        }
    }

    /// Products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Whether `id` names a catalog product.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sportify()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Category, ProductImage};

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("{id} name"),
            description: String::new(),
            price_lkr: 100,
            in_stock: true,
            categories: vec![Category::Fitness],
            images: vec![ProductImage {
                src: "img".into(),
                alt: "alt".into(),
            }],
            specs: None,
        }
    }

    #[test]
    /// What: The bundled seed satisfies every catalog invariant.
    ///
    /// Inputs:
    /// - `Catalog::sportify()` products fed back through `Catalog::new`.
    ///
    /// Output:
    /// - Validation succeeds with twenty products, first `p1`, last `p20`.
    fn seed_passes_validation() {
        let seed = Catalog::sportify();
        let validated = Catalog::new(seed.products().to_vec()).expect("seed must be valid");
        assert_eq!(validated.len(), 20);
        assert_eq!(validated.products()[0].id, "p1");
        assert_eq!(validated.products()[19].id, "p20");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::new(vec![product("a"), product("b"), product("a")])
            .expect_err("duplicate must fail");
        assert_eq!(err, CatalogError::DuplicateId("a".into()));
    }

    #[test]
    /// What: Records without categories or images are rejected.
    ///
    /// Inputs:
    /// - One product with empty categories; one with empty images; one with empty id.
    ///
    /// Output:
    /// - The matching `CatalogError` variant for each.
    fn incomplete_records_are_rejected() {
        let mut no_cats = product("x");
        no_cats.categories.clear();
        assert_eq!(
            Catalog::new(vec![no_cats]).expect_err("no categories"),
            CatalogError::NoCategories("x".into())
        );

        let mut no_imgs = product("y");
        no_imgs.images.clear();
        assert_eq!(
            Catalog::new(vec![no_imgs]).expect_err("no images"),
            CatalogError::NoImages("y".into())
        );

        assert_eq!(
            Catalog::new(vec![product("")]).expect_err("empty id"),
            CatalogError::EmptyId
        );
    }

    #[test]
    /// What: A category tag repeated within one record is rejected.
    ///
    /// Inputs:
    /// - Product tagged `[Fitness, Accessories, Fitness]`.
    ///
    /// Output:
    /// - `CatalogError::DuplicateCategory` naming the product.
    fn repeated_category_is_rejected() {
        let mut repeated = product("z");
        repeated.categories = vec![Category::Fitness, Category::Accessories, Category::Fitness];
        let err = Catalog::new(vec![product("a"), repeated]).expect_err("repeated tag");
        assert_eq!(err, CatalogError::DuplicateCategory("z".into()));
        assert_eq!(err.to_string(), "product 'z' lists a category more than once");
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::sportify();
        assert_eq!(
            catalog.get("p6").map(|p| p.name.as_str()),
            Some("Sportify Elite Gym Gloves")
        );
        assert!(!catalog.contains("p99"));
    }
}
