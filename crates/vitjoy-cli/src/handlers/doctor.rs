use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use serde_json::json;
use vitjoy_engine::{evaluate, BuyAction};
use vitjoy_runtime::assets;
use vitjoy_runtime::Catalog;

use crate::args::OutputFormat;

/// One integrity observation about the catalog. Nothing here is fatal;
/// doctor reports and exits 0.
#[derive(Debug)]
struct Finding {
    product_id: String,
    message: String,
}

pub fn handle(catalog: &Catalog, assets_root: Option<&Path>, format: OutputFormat) -> Result<()> {
    let findings = check(catalog, assets_root);

    match format {
        OutputFormat::Json => {
            let report: Vec<_> = findings
                .iter()
                .map(|f| json!({"productId": f.product_id, "message": f.message}))
                .collect();
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Plain => {
            if findings.is_empty() {
                println!("{} Каталог в порядке: {} продуктов", "✓".green(), catalog.len());
            } else {
                for finding in &findings {
                    println!("{} {}: {}", "!".yellow(), finding.product_id, finding.message);
                }
                println!();
                println!(
                    "Проверено продуктов: {}, замечаний: {}",
                    catalog.len(),
                    findings.len()
                );
            }
        }
    }

    Ok(())
}

fn check(catalog: &Catalog, assets_root: Option<&Path>) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut titles_seen: HashSet<&str> = HashSet::new();

    for product in catalog.products() {
        if product.price == 0 {
            findings.push(Finding {
                product_id: product.id.clone(),
                message: "нулевая цена".to_string(),
            });
        }

        if product.images.is_empty() {
            findings.push(Finding {
                product_id: product.id.clone(),
                message: "нет изображений (будет показана заглушка)".to_string(),
            });
        }

        if let BuyAction::Unavailable(reason) = evaluate(product) {
            findings.push(Finding {
                product_id: product.id.clone(),
                message: format!("ссылка на магазин: {}", reason),
            });
        }

        if let Some(root) = assets_root {
            for img in &product.images {
                if assets::resolve(root, &img.src).is_none() {
                    findings.push(Finding {
                        product_id: product.id.clone(),
                        message: format!("изображение не найдено: {}", img.src),
                    });
                }
            }
        }

        // Duplicate ids are rejected at load; duplicate titles are legal but
        // worth surfacing since they make listings ambiguous.
        if !titles_seen.insert(product.title.as_str()) {
            findings.push(Finding {
                product_id: product.id.clone(),
                message: "название дублирует другой продукт".to_string(),
            });
        }
    }

    findings
}
