//! rab open コマンド
//!
//! レビューページURLを解決して表示する。準備中の商品は
//! お知らせを出すだけで解決は行わない。

use crate::catalog::Product;
use crate::commands::load_catalog;
use crate::config::{AppConfig, HttpConfig};
use crate::error::RabError;
use crate::navigate::{resolve_review_url, HttpProbe};
use crate::output::Notice;
use clap::Parser;
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
pub struct Args {
    /// Product id (see `rab list`)
    pub id: String,

    /// Review site base URL (overrides config and RAB_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

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

    let base_url = args.base_url.as_deref().unwrap_or(&config.base_url);
    open_product(product, base_url).await;

    Ok(())
}

/// URLを解決して結果を表示（finder からも呼ばれる）
pub(crate) async fn open_product(product: &Product, base_url: &str) {
    if product.is_coming_soon() {
        Notice::coming_soon(&product.name).print();
        return;
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Checking review URL...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let probe = HttpProbe::new(&HttpConfig::default());
    let resolution = resolve_review_url(base_url, &product.url, &probe).await;

    spinner.finish_and_clear();
    Notice::resolved(&resolution).print();
}
