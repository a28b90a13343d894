//! dairyledger library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use db::pool::DbPool;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // commands that do not read the ledger
    match &cli.command {
        Commands::Init => return commands::init::handle(cli),
        Commands::Config { .. } => return commands::config::handle(&cli.command, cfg),
        Commands::Catalog => return commands::catalog::handle(cfg),
        _ => {}
    }

    // schema is brought up to date once, before any ledger command runs
    let mut pool = DbPool::open_initialized(&cfg.database)?;

    match &cli.command {
        Commands::Add { .. } => commands::add::handle(&cli.command, cfg, &pool),
        Commands::List { .. } => commands::list::handle(&cli.command, cfg, &pool),
        Commands::Dues => commands::dues::handle(cfg, &pool),
        Commands::Settle { .. } => commands::settle::handle(&cli.command, cfg, &mut pool),
        Commands::Summary { .. } => commands::summary::handle(&cli.command, cfg, &pool),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg, &pool),
        Commands::Log { .. } => commands::log::handle(&cli.command, &pool),
        Commands::Backup { .. } => commands::backup::handle(&cli.command, &pool),
        Commands::Export { .. } => commands::export::handle(&cli.command, &pool),
        Commands::Init | Commands::Config { .. } | Commands::Catalog => Ok(()),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command line override of the database
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
