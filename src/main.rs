mod catalog;
mod cli;
mod commands;
mod config;
mod error;
mod finder;
mod navigate;
mod output;
mod search;
mod view;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
