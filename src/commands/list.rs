//! rab list コマンド
//!
//! カタログ全件の一覧を表示する。

use crate::catalog::Product;
use crate::commands::load_catalog;
use crate::config::AppConfig;
use crate::view::StarLine;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Filter by category (case-insensitive substring)
    #[arg(long)]
    pub category: Option<String>,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only product names
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,

    /// Catalog JSON file (defaults to the bundled catalog)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub async fn run(args: Args) -> Result<(), String> {
    let config = AppConfig::load().map_err(|e| e.to_string())?;
    let catalog = load_catalog(args.catalog.as_ref(), &config).map_err(|e| e.to_string())?;

    let total_count = catalog.len();
    let filtered = filter_by_category(catalog.products(), args.category.as_deref());

    if args.json {
        print_json(&filtered)?;
    } else if args.simple {
        print_simple(&filtered, total_count);
    } else {
        print_table(&filtered, total_count);
    }

    Ok(())
}

fn filter_by_category<'a>(products: &'a [Product], category: Option<&str>) -> Vec<&'a Product> {
    match category {
        None => products.iter().collect(),
        Some(category) => {
            let needle = category.to_lowercase();
            products
                .iter()
                .filter(|p| p.category.to_lowercase().contains(&needle))
                .collect()
        }
    }
}

fn print_json(products: &[&Product]) -> Result<(), String> {
    // 空の場合も [] を出力
    serde_json::to_string_pretty(products)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize products: {}", e))
}

fn print_simple(products: &[&Product], total_count: usize) {
    if products.is_empty() {
        print_empty(total_count);
        return;
    }
    for product in products {
        println!("{}", product.name);
    }
}

fn print_table(products: &[&Product], total_count: usize) {
    if products.is_empty() {
        print_empty(total_count);
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Name", "Category", "Rating", "Status"]);

    for product in products {
        let rating = product
            .rating
            .map(|r| format!("{} {}/5", StarLine::from_rating(r).glyphs(), r))
            .unwrap_or_else(|| "-".to_string());
        let status = if product.is_coming_soon() {
            "coming soon"
        } else {
            "available"
        };

        table.add_row(vec![
            product.id.as_str(),
            product.name.as_str(),
            product.category.as_str(),
            &rating,
            status,
        ]);
    }

    println!("{table}");
    println!("{} product(s)", products.len());
}

fn print_empty(total_count: usize) {
    if total_count == 0 {
        println!("Catalog is empty");
    } else {
        println!("No products matched");
    }
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
