//! rab finder コマンド
//!
//! 検索TUIを起動する。カタログが読めない場合もTUI自体は起動し、
//! 検索無効モードでエラーを表示する。

use crate::catalog::Catalog;
use crate::commands::{load_catalog, open};
use crate::config::AppConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Review site base URL (overrides config and RAB_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Catalog JSON file (defaults to the bundled catalog)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub async fn run(args: Args) -> Result<(), String> {
    let config = AppConfig::load().map_err(|e| e.to_string())?;

    let (catalog, load_error) = match load_catalog(args.catalog.as_ref(), &config) {
        Ok(catalog) => (catalog, None),
        Err(e) => (Catalog::empty(), Some(e.to_string())),
    };

    let activated = crate::finder::run(&catalog, load_error).map_err(|e| e.to_string())?;

    // TUIで選択された商品はターミナル復元後にURL解決する
    if let Some(id) = activated {
        if let Some(product) = catalog.find(&id) {
            let base_url = args.base_url.as_deref().unwrap_or(&config.base_url);
            open::open_product(product, base_url).await;
        }
    }

    Ok(())
}
