//! readme-sync library root.
//! Exposes the CLI parser, the high-level run() function and the sync pipeline
//! (sources → render → README).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod render;
pub mod sources;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Sync { .. } => cli::commands::sync::handle(&cli.command, cfg),
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load(cli.config.as_deref())?;

    // 3️⃣ README override from the command line
    if let Some(readme) = &cli.readme {
        cfg.readme = readme.clone();
    }

    dispatch(&cli, &cfg)
}
