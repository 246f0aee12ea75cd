//! rab info コマンド
//!
//! 1商品のレビュー概要（ヘッダ・評語・関連商品）を表示する。

use crate::catalog::{Catalog, Product};
use crate::commands::load_catalog;
use crate::config::AppConfig;
use crate::error::RabError;
use crate::output::Notice;
use crate::view::ReviewHeader;
use chrono::Local;
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Product id (see `rab list`)
    pub id: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Catalog JSON file (defaults to the bundled catalog)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub async fn run(args: Args) -> Result<(), String> {
    let config = AppConfig::load().map_err(|e| e.to_string())?;
    let catalog = load_catalog(args.catalog.as_ref(), &config).map_err(|e| e.to_string())?;

    let product = catalog
        .find(&args.id)
        .ok_or_else(|| RabError::ProductNotFound(args.id.clone()).to_string())?;

    if args.json {
        return serde_json::to_string_pretty(product)
            .map(|json| println!("{json}"))
            .map_err(|e| format!("Failed to serialize product: {}", e));
    }

    let updated = Local::now().format("%B %Y").to_string();
    print_review(product, &catalog, updated);

    Ok(())
}

fn print_review(product: &Product, catalog: &Catalog, updated: String) {
    let header = ReviewHeader::build(product, updated);

    println!("{}", header.breadcrumb.dimmed());
    println!("{}", header.title.bold());

    match (&header.stars, header.rating, header.verdict) {
        (Some(stars), Some(rating), Some(verdict)) => {
            println!("{} {}/5  {}", stars.glyphs().yellow(), rating, verdict.green());
        }
        _ => {
            if product.is_coming_soon() {
                Notice::coming_soon(&product.name).print();
            }
        }
    }
    println!("Updated: {}", header.updated);

    println!();
    println!("{}", product.description);
    println!("Category: {}", product.category);
    if !product.is_coming_soon() {
        println!("Review: {}", product.url);
    }

    let related = catalog.related(product);
    if !related.is_empty() {
        println!();
        println!("Related reviews:");
        for other in related {
            println!("  - {} ({})", other.name, other.id);
        }
    }
}
