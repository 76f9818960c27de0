use serde::{Deserialize, Serialize};

/// Single catalog image reference. `src` is a path under the assets root,
/// `alt` is the accessible description shown when the asset is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub src: String,
    pub alt: String,
}

/// Immutable catalog record. The catalog is assembled once at startup and
/// never mutated; every derived view is computed from it fresh.
///
/// `images` ordering is significant: index 0 is the cover image used in
/// listings. The list may be empty and all consumers must tolerate that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique, stable identifier used for lookups and list keys.
    pub id: String,
    /// Display name; search matching and alphabetical sort key.
    pub title: String,
    /// Price in tenge, minor-unit-free. Unsigned by construction.
    pub price: u64,
    /// Currency/unit label, display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Short display labels ("Хит", "Новинка", ...).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Free-text description, may be absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Absent counts as "not in stock" for filtering purposes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    /// Outbound marketplace link. Absence degrades to a disabled buy action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kaspi_url: Option<String>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
}

impl Product {
    /// First image in the sequence, used in list/grid summaries.
    pub fn cover(&self) -> Option<&ProductImage> {
        self.images.first()
    }

    /// Stock filter semantics: only an explicit `true` counts as in stock.
    pub fn is_in_stock(&self) -> bool {
        self.in_stock == Some(true)
    }

    /// Description with surrounding whitespace stripped, or None when the
    /// field is absent or blank.
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}
