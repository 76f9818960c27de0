use std::collections::HashSet;
use std::path::Path;

use tracing::debug;
use vitjoy_types::{Product, ProductImage};

use crate::{Error, Result};

/// File name of an optional external catalog under the data directory.
pub const CATALOG_FILE: &str = "catalog.json";

/// The product store: an immutable list loaded once at startup.
///
/// By default the compiled-in storefront list is used. When
/// `<data-dir>/catalog.json` exists it replaces the built-in list entirely.
/// Unlike display preferences, a malformed catalog is a hard error: this is
/// business data, not a cosmetic cache.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CATALOG_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "no external catalog, using built-in list");
            return Self::from_products(builtin());
        }

        let content = std::fs::read_to_string(&path)?;
        let products: Vec<Product> = serde_json::from_str(&content)
            .map_err(|e| Error::Catalog(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), count = products.len(), "loaded external catalog");
        Self::from_products(products)
    }

    /// Wrap a product list, enforcing the unique-id invariant.
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(Error::Catalog(format!(
                    "duplicate product id: {}",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Highest price in the catalog; upper bound for price filter widgets.
    pub fn max_price(&self) -> u64 {
        self.products.iter().map(|p| p.price).max().unwrap_or(0)
    }
}

fn images(dir: &str, alts: [&str; 6]) -> Vec<ProductImage> {
    alts.iter()
        .enumerate()
        .map(|(i, alt)| ProductImage {
            src: format!("/images/{}/img{}.png", dir, i + 1),
            alt: (*alt).to_string(),
        })
        .collect()
}

/// The compiled-in storefront product list.
pub fn builtin() -> Vec<Product> {
    vec![
        Product {
            id: "green-boost".to_string(),
            title: "VITJOY Green Boost".to_string(),
            price: 5990,
            unit: Some("₸".to_string()),
            tags: vec!["Хит".to_string(), "Органик".to_string()],
            description: Some(
                "Натуральный микс витаминов и суперфудов для энергии и иммунитета."
                    .to_string(),
            ),
            in_stock: Some(true),
            kaspi_url: Some("https://kaspi.kz/shop/p/vitjoy-green-boost-123456/".to_string()),
            images: images(
                "img1",
                [
                    "Green Boost — баночка",
                    "Green Boost — баночка",
                    "Green Boost — баночка",
                    "Green Boost — баночка",
                    "Green Boost — баночка",
                    "Green Boost — баночка",
                ],
            ),
        },
        Product {
            id: "omega-plus".to_string(),
            title: "VITJOY Omega+ DHA/EPA".to_string(),
            price: 7990,
            unit: Some("₸".to_string()),
            tags: vec!["Новинка".to_string()],
            description: Some(
                "Омега-3 высокой чистоты: сердце, мозг и суставы — ежедневно.".to_string(),
            ),
            in_stock: Some(true),
            kaspi_url: Some("https://kaspi.kz/shop/p/vitjoy-omega-plus-654321/".to_string()),
            images: images(
                "img2",
                [
                    "Omega+ — блистер",
                    "Omega+ — капсулы крупно",
                    "Omega+ — на столе",
                    "Omega+ — с упаковкой",
                    "Omega+ — инфографика",
                    "Omega+ — семья и здоровье",
                ],
            ),
        },
        Product {
            id: "omega-plus2".to_string(),
            title: "VITJOY Omega+ DHA/EPA".to_string(),
            price: 7990,
            unit: Some("₸".to_string()),
            tags: vec!["Новинка".to_string()],
            description: Some(
                "Омега-3 высокой чистоты: сердце, мозг и суставы — ежедневно.".to_string(),
            ),
            in_stock: Some(true),
            kaspi_url: Some("https://kaspi.kz/shop/p/vitjoy-omega-plus-654321/".to_string()),
            images: images(
                "img3",
                [
                    "Omega+ — блистер",
                    "Omega+ — капсулы крупно",
                    "Omega+ — на столе",
                    "Omega+ — с упаковкой",
                    "Omega+ — инфографика",
                    "Omega+ — семья и здоровье",
                ],
            ),
        },
    ]
}
