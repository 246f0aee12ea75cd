//! rab search コマンド
//!
//! カタログを1回検索して結果を表示する。

use crate::commands::load_catalog;
use crate::config::AppConfig;
use crate::search::{self, Query, MIN_QUERY_LEN};
use crate::view::item::icon_glyph;
use crate::view::{build_items, ResultItem};
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::PathBuf;

/// 0件表示で提示する検索例
const SUGGESTED_TERMS: &str = "moringa, supplements, health";

#[derive(Debug, Parser)]
pub struct Args {
    /// Search query (2 characters minimum)
    pub query: String,

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

    // 長さゲート: 検索なし（エラーではない）
    let Some(query) = Query::parse(&args.query) else {
        println!("Enter at least {MIN_QUERY_LEN} characters to search");
        return Ok(());
    };

    let matches = search::search(&catalog, &query);
    let items = build_items(&matches, query.as_str());

    if args.json {
        print_json(&items)?;
    } else if args.simple {
        print_simple(&items, query.as_str());
    } else {
        print_results(&items, query.as_str(), catalog.is_empty());
    }

    Ok(())
}

fn print_json(items: &[ResultItem]) -> Result<(), String> {
    // 0件でも [] を出力
    serde_json::to_string_pretty(items)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize results: {}", e))
}

fn print_simple(items: &[ResultItem], term: &str) {
    if items.is_empty() {
        println!("No reviews found for '{term}'");
        return;
    }
    for item in items {
        println!("{}", item.name);
    }
}

fn print_results(items: &[ResultItem], term: &str, catalog_empty: bool) {
    if items.is_empty() {
        if catalog_empty {
            println!("Catalog is empty");
        } else {
            println!("No reviews found");
            println!("We couldn't find any reviews for \"{term}\"");
            println!("Try searching for: {SUGGESTED_TERMS}");
        }
        return;
    }

    for item in items {
        println!(
            "{} {}  {}",
            icon_glyph(&item.icon),
            format_segments(&item.name_segments),
            format!("[{}]", item.id).dimmed()
        );
        println!("   {}", format_segments(&item.description_segments));
        match (&item.stars, item.rating) {
            (Some(stars), Some(rating)) => {
                println!(
                    "   {} {}/5  {}",
                    stars.glyphs().yellow(),
                    rating,
                    item.url.dimmed()
                );
            }
            _ if item.coming_soon => {
                println!("   {}", "coming soon".yellow());
            }
            _ => {
                println!("   {}", item.url.dimmed());
            }
        }
    }
    println!("{} review(s) found", items.len());
}

/// ハイライト区間を太字化して連結
fn format_segments(segments: &[crate::view::Segment]) -> String {
    segments
        .iter()
        .map(|s| {
            if s.highlighted {
                s.text.bold().underline().to_string()
            } else {
                s.text.clone()
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
