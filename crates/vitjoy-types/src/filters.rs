use serde::{Deserialize, Serialize};

/// Slider bound of the storefront price filter, also the default upper bound.
pub const DEFAULT_MAX_PRICE: u64 = 50_000;

/// Inclusive price window. An inverted window (`min > max`) is not an error;
/// it simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: u64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: DEFAULT_MAX_PRICE,
        }
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Lexicographic on title, locale-aware.
    #[default]
    Name,
    /// Ascending numeric on price, stable ties.
    PriceAsc,
    /// Descending numeric on price, stable ties.
    PriceDesc,
}

/// Session-scoped query criteria for the catalog view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    /// Case-insensitive substring match against the title. Empty matches all.
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub price: PriceRange,
    /// When set, only products with an explicit in-stock flag pass.
    #[serde(default)]
    pub in_stock_only: bool,
    #[serde(default)]
    pub sort: SortBy,
}
