use vitjoy_types::Product;

/// Group digits in threes with a thin space, the way the storefront renders
/// tenge amounts ("7 990").
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

pub fn price_with_unit(product: &Product) -> String {
    format!(
        "{} {}",
        format_price(product.price),
        product.unit.as_deref().unwrap_or("₸")
    )
}

pub fn stock_badge(product: &Product) -> &'static str {
    if product.is_in_stock() {
        "в наличии"
    } else {
        "нет в наличии"
    }
}

/// Truncate and normalize a string for one-line display.
/// - Replaces newlines with spaces
/// - Collapses consecutive whitespace
/// - Respects UTF-8 character boundaries
pub fn truncate_for_display(s: &str, max_chars: usize) -> String {
    let normalized = s
        .replace(['\n', '\r'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if normalized.chars().count() <= max_chars {
        normalized
    } else {
        let truncated: String = normalized.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(990), "990");
        assert_eq!(format_price(5990), "5 990");
        assert_eq!(format_price(50_000), "50 000");
        assert_eq!(format_price(1_234_567), "1 234 567");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let s = "Омега-3 высокой чистоты: сердце, мозг и суставы";
        let short = truncate_for_display(s, 10);
        assert!(short.chars().count() <= 10);
        assert!(short.ends_with('…'));
    }

    #[test]
    fn truncation_collapses_whitespace() {
        assert_eq!(truncate_for_display("a\n b\r\n  c", 20), "a b c");
    }
}
