//! Query engine properties: filter boundaries, sort stability, locale
//! collation, purity, and the concrete storefront scenarios.

use vitjoy_engine::apply;
use vitjoy_types::{Filters, PriceRange, Product, SortBy};

fn product(id: &str, title: &str, price: u64, in_stock: Option<bool>) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        price,
        unit: None,
        tags: Vec::new(),
        description: None,
        in_stock,
        kaspi_url: None,
        images: Vec::new(),
    }
}

fn storefront() -> Vec<Product> {
    vec![
        product("omega-plus", "Omega+", 7990, Some(true)),
        product("green-boost", "Green Boost", 5990, Some(false)),
    ]
}

fn titles(result: &[Product]) -> Vec<&str> {
    result.iter().map(|p| p.title.as_str()).collect()
}

#[test]
fn price_filter_is_inclusive_at_both_boundaries() {
    let products = vec![
        product("below", "Below", 999, None),
        product("at-min", "At Min", 1000, None),
        product("inside", "Inside", 1500, None),
        product("at-max", "At Max", 2000, None),
        product("above", "Above", 2001, None),
    ];

    let filters = Filters {
        price: PriceRange::new(1000, 2000),
        ..Default::default()
    };

    let result = apply(&products, &filters);
    let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["at-max", "at-min", "inside"]); // name-sorted
}

#[test]
fn inverted_price_range_yields_empty_result() {
    let filters = Filters {
        price: PriceRange::new(20_000, 0),
        ..Default::default()
    };
    assert!(apply(&storefront(), &filters).is_empty());
}

#[test]
fn search_is_case_insensitive_substring() {
    let filters = Filters {
        search: "GREEN".to_string(),
        ..Default::default()
    };
    assert_eq!(titles(&apply(&storefront(), &filters)), vec!["Green Boost"]);

    let filters = Filters {
        search: "ega".to_string(),
        ..Default::default()
    };
    assert_eq!(titles(&apply(&storefront(), &filters)), vec!["Omega+"]);
}

#[test]
fn empty_search_matches_all() {
    let result = apply(&storefront(), &Filters::default());
    assert_eq!(result.len(), 2);
}

#[test]
fn stock_filter_requires_explicit_true() {
    let products = vec![
        product("yes", "Yes", 100, Some(true)),
        product("no", "No", 100, Some(false)),
        product("unknown", "Unknown", 100, None),
    ];

    let filters = Filters {
        in_stock_only: true,
        ..Default::default()
    };
    assert_eq!(titles(&apply(&products, &filters)), vec!["Yes"]);

    // Flag off: no stock filtering at all.
    assert_eq!(apply(&products, &Filters::default()).len(), 3);
}

#[test]
fn price_sort_is_stable_on_ties() {
    let products = vec![
        product("a", "A", 500, None),
        product("b", "B", 500, None),
        product("c", "C", 300, None),
        product("d", "D", 500, None),
    ];

    let asc = apply(
        &products,
        &Filters {
            sort: SortBy::PriceAsc,
            ..Default::default()
        },
    );
    assert_eq!(titles(&asc), vec!["C", "A", "B", "D"]);

    let desc = apply(
        &products,
        &Filters {
            sort: SortBy::PriceDesc,
            ..Default::default()
        },
    );
    assert_eq!(titles(&desc), vec!["A", "B", "D", "C"]);
}

#[test]
fn name_sort_is_locale_aware_not_code_point_order() {
    // Code-point order would put "Éclair" after "Zink" (É is U+00C9).
    let products = vec![
        product("z", "Zink", 100, None),
        product("e2", "Éclair", 100, None),
        product("e1", "Echinacea", 100, None),
    ];

    let result = apply(&products, &Filters::default());
    assert_eq!(titles(&result), vec!["Echinacea", "Éclair", "Zink"]);
}

#[test]
fn name_sort_orders_cyrillic_titles() {
    let products = vec![
        product("o", "Омега", 100, None),
        product("v", "Витамин D3", 100, None),
        product("m", "Магний", 100, None),
    ];

    let result = apply(&products, &Filters::default());
    assert_eq!(titles(&result), vec!["Витамин D3", "Магний", "Омега"]);
}

#[test]
fn apply_is_pure_and_idempotent() {
    let products = storefront();
    let snapshot = products.clone();

    let filters = Filters {
        search: "o".to_string(),
        sort: SortBy::PriceDesc,
        ..Default::default()
    };

    let first = apply(&products, &filters);
    let second = apply(&products, &filters);

    assert_eq!(first, second);
    assert_eq!(products, snapshot, "input list must not be mutated");
}

#[test]
fn scenario_in_stock_price_asc() {
    let filters = Filters {
        search: String::new(),
        price: PriceRange::new(0, 20_000),
        in_stock_only: true,
        sort: SortBy::PriceAsc,
    };

    let result = apply(&storefront(), &filters);
    assert_eq!(titles(&result), vec!["Omega+"]);
    assert_eq!(result[0].price, 7990);
}

#[test]
fn scenario_search_green_by_name() {
    let filters = Filters {
        search: "green".to_string(),
        price: PriceRange::new(0, 20_000),
        in_stock_only: false,
        sort: SortBy::Name,
    };

    let result = apply(&storefront(), &filters);
    assert_eq!(titles(&result), vec!["Green Boost"]);
}
