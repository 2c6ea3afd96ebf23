//! wheelgauge library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod audit;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use crate::core::context::AppContext;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: Config) -> AppResult<()> {
    use crate::cli::commands as c;

    match &cli.command {
        Commands::Init => return c::init::handle(cli, cfg),
        Commands::Config { .. } => return c::config::handle(&cli.command, &cfg),
        _ => {}
    }

    let ctx = AppContext::open(cfg)?;

    match &cli.command {
        Commands::Add { .. } => c::add::handle(&cli.command, &ctx),
        Commands::List { .. } => c::list::handle(&cli.command, &ctx),
        Commands::Cars { .. } => c::cars::handle(&cli.command, &ctx),
        Commands::History { .. } => c::history::handle(&cli.command, &ctx),
        Commands::Edit { .. } => c::edit::handle(&cli.command, &ctx),
        Commands::Del { .. } => c::del::handle(&cli.command, &ctx),
        Commands::Due { .. } => c::due::handle(&cli.command, &ctx),
        Commands::Export { .. } => c::export::handle(&cli.command, &ctx),
        Commands::Backup { .. } => c::backup::handle(&cli.command, &ctx),
        Commands::Log { .. } => c::log::handle(&cli.command, &ctx),
        Commands::Init | Commands::Config { .. } => Ok(()),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ record file override from the command line
    if let Some(custom_store) = &cli.store {
        cfg.store = custom_store.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, cfg)
}
