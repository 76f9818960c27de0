use std::path::Path;

use anyhow::{bail, Result};
use owo_colors::OwoColorize;
use vitjoy_engine::{evaluate, BuyAction, Gallery};
use vitjoy_runtime::assets;
use vitjoy_runtime::Catalog;
use vitjoy_types::Product;

use crate::args::OutputFormat;
use crate::presentation::format::{price_with_unit, stock_badge};

pub fn handle(
    catalog: &Catalog,
    id: &str,
    image: Option<usize>,
    assets_root: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let Some(product) = catalog.get(id) else {
        bail!("unknown product id: {id}");
    };

    let mut gallery = Gallery::new(product.images.len());
    if let Some(index) = image {
        // Out-of-range requests are ignored, same as in the storefront.
        gallery.select(index);
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(product)?);
        }
        OutputFormat::Plain => print_detail(product, &gallery, assets_root),
    }

    Ok(())
}

fn print_detail(product: &Product, gallery: &Gallery, assets_root: Option<&Path>) {
    println!("{}", product.title.bold());
    println!("  id:      {}", product.id);
    println!("  цена:    {}", price_with_unit(product));
    if product.is_in_stock() {
        println!("  наличие: {}", stock_badge(product).green());
    } else {
        println!("  наличие: {}", stock_badge(product).red());
    }
    if !product.tags.is_empty() {
        println!("  теги:    {}", product.tags.join(", "));
    }

    println!();
    match product.description_text() {
        Some(text) => println!("{}", text),
        None => println!("{}", "Описание отсутствует.".dimmed()),
    }

    println!();
    match gallery.current() {
        Some(index) => {
            println!("Изображения: {} / {}", index + 1, gallery.len());
            for (i, img) in product.images.iter().enumerate() {
                let marker = if i == index { ">" } else { " " };
                let status = match assets_root {
                    Some(root) => match assets::resolve(root, &img.src) {
                        Some(path) => format!("{}", path.display()),
                        None => "файл не найден".to_string(),
                    },
                    None => img.src.clone(),
                };
                println!("  {} [{}] {} — {}", marker, i + 1, img.alt, status);
            }
        }
        None => println!("{}", "Нет изображений".dimmed()),
    }

    println!();
    match evaluate(product) {
        BuyAction::Buy(url) => println!("{}: {}", "Купить на Kaspi".green().bold(), url),
        BuyAction::Unavailable(reason) => {
            println!("{} ({})", "Покупка недоступна".dimmed(), reason);
        }
    }
}
