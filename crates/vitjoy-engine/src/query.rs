use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::Locale;
use vitjoy_types::{Filters, Product, SortBy};

/// Derive the displayed subset and order of the catalog.
///
/// All predicates AND together: case-folded substring match on the title,
/// inclusive price window, and (when enabled) an explicit in-stock flag.
/// Sorting is stable, so equal-price products keep their original relative
/// order. The input is never mutated; identical inputs produce an identical
/// output, which is what lets callers recompute the view on every state
/// change without bookkeeping.
///
/// An inverted price window is not rejected; it yields an empty result.
pub fn apply(products: &[Product], filters: &Filters) -> Vec<Product> {
    let needle = filters.search.to_lowercase();

    let mut result: Vec<Product> = products
        .iter()
        .filter(|p| {
            let matches_search =
                needle.is_empty() || p.title.to_lowercase().contains(&needle);
            let matches_price = filters.price.contains(p.price);
            let matches_stock = !filters.in_stock_only || p.is_in_stock();
            matches_search && matches_price && matches_stock
        })
        .cloned()
        .collect();

    match filters.sort {
        SortBy::Name => {
            let collator = root_collator();
            result.sort_by(|a, b| name_cmp(collator.as_ref(), &a.title, &b.title));
        }
        SortBy::PriceAsc => result.sort_by(|a, b| a.price.cmp(&b.price)),
        SortBy::PriceDesc => result.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    result
}

/// Root-locale collator: orders Cyrillic alphabetically and keeps diacritics
/// next to their base letter instead of sorting by raw code points.
fn root_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Secondary);
    Collator::try_new(&Locale::UND.into(), options).ok()
}

fn name_cmp(collator: Option<&Collator>, a: &str, b: &str) -> Ordering {
    match collator {
        Some(c) => c.compare(a, b),
        // Collation data unavailable: still avoid byte-wise comparison of
        // the raw titles by case-folding first.
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}
