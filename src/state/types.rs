//! Core value types used by the catalog state.

use std::fmt;

/// Category tag from the closed set used to classify merchandise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub enum Category {
    /// Cricket bats, pads and gloves.
    Cricket,
    /// Balls, boots, jerseys and guards for football.
    Football,
    /// Basketball balls, shoes and jerseys.
    Basketball,
    /// Rackets, balls and bags.
    Tennis,
    /// Running shoes and apparel.
    Running,
    /// Gym and training equipment.
    Fitness,
    /// Anything worn or carried alongside the main gear.
    Accessories,
}

impl Category {
    /// Every category in display order (the order of the filter toggle group).
    pub const ALL: [Self; 7] = [
        Self::Cricket,
        Self::Football,
        Self::Basketball,
        Self::Tennis,
        Self::Running,
        Self::Fitness,
        Self::Accessories,
    ];

    /// Display label, also used as the serialized name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cricket => "Cricket",
            Self::Football => "Football",
            Self::Basketball => "Basketball",
            Self::Tennis => "Tennis",
            Self::Running => "Running",
            Self::Fitness => "Fitness",
            Self::Accessories => "Accessories",
        }
    }

    /// What: Parse a category label typed by a user or read from config.
    ///
    /// Inputs:
    /// - `s`: Label in any letter case, surrounding whitespace allowed
    ///
    /// Output:
    /// - `Some(Category)` when the label names a known category; `None` otherwise.
    #[must_use]
    pub fn from_label(s: &str) -> Option<Self> {
        let t = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(t))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One product picture: a source reference and its alt text.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProductImage {
    /// Image URL or asset reference.
    pub src: String,
    /// Accessible description of the image.
    pub alt: String,
}

/// Optional specification sheet; only size and material are known keys.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProductSpecs {
    /// Size range or fit, e.g. "EU 40–46".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Primary material, e.g. "English Willow".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
}

/// A catalog entry. Records are seeded once and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Product {
    /// Unique identifier (e.g. "p6").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Long description, also searched.
    pub description: String,
    /// Price in Sri Lankan rupees, whole units.
    pub price_lkr: u64,
    /// Whether the item can currently be ordered.
    pub in_stock: bool,
    /// Category tags; never empty.
    pub categories: Vec<Category>,
    /// Ordered pictures; the first is the card thumbnail.
    pub images: Vec<ProductImage>,
    /// Optional specification sheet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specs: Option<ProductSpecs>,
}

impl Product {
    /// Whether the product carries the given category tag.
    #[must_use]
    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// Stock badge text shown on cards and in the detail view.
    #[must_use]
    pub const fn stock_label(&self) -> &'static str {
        if self.in_stock {
            "In Stock"
        } else {
            "Out of Stock"
        }
    }
}

/// Sorting mode for the product grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SortKey {
    /// Catalog order; the seed lists newest arrivals first.
    #[default]
    Newest,
    /// Cheapest first; equal prices keep catalog order.
    PriceAscending,
    /// Most expensive first; equal prices keep catalog order.
    PriceDescending,
    /// Alphabetical by name using locale-aware collation.
    NameAscending,
}

impl SortKey {
    /// Every sort key in menu order.
    pub const ALL: [Self; 4] = [
        Self::Newest,
        Self::PriceAscending,
        Self::PriceDescending,
        Self::NameAscending,
    ];

    /// Return the string key used in settings files for this sort key.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAscending => "price_asc",
            Self::PriceDescending => "price_desc",
            Self::NameAscending => "name_asc",
        }
    }

    /// What: Parse a sort key from its settings-file form.
    ///
    /// Inputs:
    /// - `s`: Config value such as `price_asc`, `priceAsc` or `name-asc`
    ///
    /// Output:
    /// - `Some(SortKey)` for recognised values, `None` otherwise.
    ///
    /// Details:
    /// - Case-insensitive; `-` and `_` separators are optional so the camelCase
    ///   names of the web page (`priceAsc`) are accepted too.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        let norm: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match norm.as_str() {
            "newest" | "default" => Some(Self::Newest),
            "priceasc" | "priceascending" | "pricelowhigh" => Some(Self::PriceAscending),
            "pricedesc" | "pricedescending" | "pricehighlow" => Some(Self::PriceDescending),
            "nameasc" | "nameascending" | "name" | "az" => Some(Self::NameAscending),
            _ => None,
        }
    }

    /// Menu label for the sort selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::PriceAscending => "Price (Low→High)",
            Self::PriceDescending => "Price (High→Low)",
            Self::NameAscending => "Name A–Z",
        }
    }
}

/// Notification emitted by [`crate::state::AppState`] after an explicit state change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateEvent {
    /// Query parameters changed and `results` was recomputed.
    ResultsChanged {
        /// Number of products in the new result set.
        count: usize,
    },
    /// A wishlist toggle completed.
    WishlistChanged {
        /// Product id that was toggled.
        id: String,
        /// Whether the id was added or removed.
        outcome: ToggleOutcome,
    },
    /// The detail view now shows this product.
    DetailOpened {
        /// Product id shown in the detail view.
        id: String,
    },
    /// The detail view was closed.
    DetailClosed,
}

/// Result of a wishlist toggle, used for confirmation messaging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The id was not wishlisted and now is.
    Added,
    /// The id was wishlisted and no longer is.
    Removed,
}

impl ToggleOutcome {
    /// User-facing confirmation text.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Added => "Added to wishlist",
            Self::Removed => "Removed from wishlist",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Sort keys round-trip through their config key and accept web aliases.
    ///
    /// Inputs:
    /// - Every `SortKey`, plus `priceAsc`, `price-desc`, `nameAsc`, and garbage.
    ///
    /// Output:
    /// - Canonical keys parse back; aliases map to the right variant; garbage is `None`.
    fn sort_key_config_keys_and_aliases() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_config_key(key.as_config_key()), Some(key));
        }
        assert_eq!(SortKey::from_config_key("priceAsc"), Some(SortKey::PriceAscending));
        assert_eq!(SortKey::from_config_key("price-desc"), Some(SortKey::PriceDescending));
        assert_eq!(SortKey::from_config_key(" nameAsc "), Some(SortKey::NameAscending));
        assert_eq!(SortKey::from_config_key("popularity"), None);
    }

    #[test]
    /// What: Category labels parse case-insensitively.
    ///
    /// Inputs:
    /// - "football", " TENNIS ", "Curling"
    ///
    /// Output:
    /// - Known labels map to variants; unknown label yields `None`.
    fn category_from_label_is_case_insensitive() {
        assert_eq!(Category::from_label("football"), Some(Category::Football));
        assert_eq!(Category::from_label(" TENNIS "), Some(Category::Tennis));
        assert_eq!(Category::from_label("Curling"), None);
    }

    #[test]
    fn toggle_outcome_messages() {
        assert_eq!(ToggleOutcome::Added.message(), "Added to wishlist");
        assert_eq!(ToggleOutcome::Removed.message(), "Removed from wishlist");
    }
}
