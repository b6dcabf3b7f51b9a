//! worktrack library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! internal modules (core session logic, store, models).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::UserAdd { .. } => cli::commands::user::handle(&cli.command, cfg),
        Commands::TaskAdd { .. } => cli::commands::task::handle(&cli.command, cfg),
        Commands::Start { .. } | Commands::Stop { .. } => {
            cli::commands::work::handle(&cli.command, cfg)
        }
        Commands::BreakStart { .. } | Commands::BreakStop { .. } => {
            cli::commands::breaks::handle(&cli.command, cfg)
        }
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Durations { .. } => cli::commands::durations::handle(&cli.command, cfg),
        Commands::Anomalies { .. } => cli::commands::anomalies::handle(&cli.command, cfg),
        Commands::Gaps { .. } => cli::commands::gaps::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load();

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
