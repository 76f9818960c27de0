use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use vitjoy_engine::apply;
use vitjoy_runtime::Catalog;
use vitjoy_types::{Filters, Product};

use crate::args::OutputFormat;
use crate::presentation::format::{price_with_unit, stock_badge, truncate_for_display};

pub fn handle(catalog: &Catalog, filters: &Filters, format: OutputFormat) -> Result<()> {
    let products = apply(catalog.products(), filters);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&products)?);
        }
        OutputFormat::Plain => {
            println!("Найдено {} из {} продуктов", products.len(), catalog.len());
            if !products.is_empty() {
                print_products_table(&products);
            }
        }
    }

    Ok(())
}

fn print_products_table(products: &[Product]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").fg(Color::White),
            Cell::new("НАЗВАНИЕ").fg(Color::White),
            Cell::new("ЦЕНА").fg(Color::White),
            Cell::new("НАЛИЧИЕ").fg(Color::White),
            Cell::new("ТЕГИ").fg(Color::White),
        ]);

    for product in products {
        let stock_color = if product.is_in_stock() {
            Color::Green
        } else {
            Color::Red
        };

        table.add_row(vec![
            Cell::new(&product.id),
            Cell::new(truncate_for_display(&product.title, 40)),
            Cell::new(price_with_unit(product)),
            Cell::new(stock_badge(product)).fg(stock_color),
            Cell::new(product.tags.join(", ")),
        ]);
    }

    println!("{table}");
}
