//! babylog library root.
//! Exposes the three logging widgets (feeding, sleep, diaper), the exporter,
//! the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod imaging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Session) => cli::commands::session::handle(cfg),
        Some(cmd @ Commands::Duration { .. }) => cli::commands::duration::handle(cmd, cfg),
        Some(cmd @ Commands::Compress { .. }) => cli::commands::compress::handle(cmd, cfg),
        Some(Commands::Config { .. }) => cli::commands::config::handle(cli, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta
    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load()?,
    };

    // 3️⃣ applica eventuale override della cartella di export
    if let Some(out) = &cli.out {
        cfg.output_dir = out.clone();
    }

    // 4️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg)
}
