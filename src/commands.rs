use crate::catalog::Catalog;
use crate::cli::{Cli, Command};
use crate::config::AppConfig;
use std::path::PathBuf;

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Search(args) => search::run(args).await,
        Command::List(args) => list::run(args).await,
        Command::Info(args) => info::run(args).await,
        Command::Open(args) => open::run(args).await,
        Command::Finder(args) => finder::run(args).await,
    }
}

/// フラグ > 設定ファイル > 同梱カタログ の順でカタログを読み込む
pub(crate) fn load_catalog(
    flag: Option<&PathBuf>,
    config: &AppConfig,
) -> crate::error::Result<Catalog> {
    match flag.or(config.catalog.as_ref()) {
        Some(path) => Catalog::load_from(path),
        None => Catalog::load_default(),
    }
}

pub mod finder;
pub mod info;
pub mod list;
pub mod open;
pub mod search;
