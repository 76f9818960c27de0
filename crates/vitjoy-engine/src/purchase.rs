use url::Url;
use vitjoy_types::Product;

/// Outcome of checking a product's outbound marketplace link.
///
/// A missing or malformed link disables the buy action with a short
/// in-place label; it never hides the action and never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuyAction {
    /// Link is present and has a recognized scheme.
    Buy(String),
    /// Link cannot be offered; the label explains why.
    Unavailable(&'static str),
}

impl BuyAction {
    pub fn is_available(&self) -> bool {
        matches!(self, BuyAction::Buy(_))
    }

    pub fn label(&self) -> &str {
        match self {
            BuyAction::Buy(_) => "Купить на Kaspi",
            BuyAction::Unavailable(reason) => reason,
        }
    }
}

/// Validate presence and shape of the purchase link. Only `http`/`https`
/// URLs are offered to the user.
pub fn evaluate(product: &Product) -> BuyAction {
    let Some(raw) = product.kaspi_url.as_deref().map(str::trim).filter(|s| !s.is_empty())
    else {
        return BuyAction::Unavailable("Ссылка на магазин недоступна");
    };

    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            BuyAction::Buy(raw.to_string())
        }
        _ => BuyAction::Unavailable("Некорректная ссылка на магазин"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_with_link(link: Option<&str>) -> Product {
        Product {
            id: "p".to_string(),
            title: "P".to_string(),
            price: 1000,
            unit: None,
            tags: Vec::new(),
            description: None,
            in_stock: None,
            kaspi_url: link.map(str::to_string),
            images: Vec::new(),
        }
    }

    #[test]
    fn https_link_is_offered() {
        let action = evaluate(&product_with_link(Some(
            "https://kaspi.kz/shop/p/vitjoy-green-boost-123456/",
        )));
        assert!(action.is_available());
    }

    #[test]
    fn absent_link_disables_without_error() {
        let action = evaluate(&product_with_link(None));
        assert!(!action.is_available());
        assert!(!action.label().is_empty());
    }

    #[test]
    fn unrecognized_shapes_disable() {
        for bad in ["javascript:alert(1)", "kaspi.kz/shop", "ftp://host/x", "   "] {
            let action = evaluate(&product_with_link(Some(bad)));
            assert!(!action.is_available(), "{bad} should not be offered");
        }
    }
}
