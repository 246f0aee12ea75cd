use clap::{Parser, Subcommand};

use crate::commands::{finder, info, list, open, search};

#[derive(Debug, Parser)]
#[command(name = "rab")]
#[command(about = "Product Review Catalog CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// カタログを検索
    Search(search::Args),

    /// カタログ全件の一覧
    List(list::Args),

    /// レビュー概要の表示
    Info(info::Args),

    /// レビューページURLの解決
    Open(open::Args),

    /// 対話的な検索TUI
    Finder(finder::Args),
}
