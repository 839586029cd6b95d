//! shiftreport library root.
//! Report-aggregation and validation engine for daily activity reports,
//! plus the CLI front end driving it.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

pub use crate::core::calculator::Limits;
pub use crate::core::calculator::counter_check::validate_counter;
pub use crate::core::calculator::counter_value::parse_counter_value;
pub use crate::core::calculator::duration::parse_duration_to_minutes;
pub use crate::core::calculator::totals::{compute_counter_total, compute_totals};
pub use crate::core::logic::Core;
pub use crate::core::session::{DailySession, ReportSession};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, cli.config.as_deref()),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::New { .. } => cli::commands::new::handle(&cli.command),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Set { .. } => cli::commands::set::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Daily { .. } => cli::commands::daily::handle(&cli.command, cfg),
    }
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
    if verbose > 0 {
        let level = match verbose {
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        builder.filter_level(level);
    }
    // keep an already installed logger
    let _ = builder.try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // 2️⃣ load config once, honoring --config (`init` starts from defaults)
    let cfg = match (&cli.command, &cli.config) {
        (Commands::Init { .. }, _) => Config::default(),
        (_, Some(path)) => Config::load_from(&expand_tilde(path))?,
        (_, None) => Config::load()?,
    };

    ui::messages::set_colors(
        cfg.use_colors && !cli.no_color && std::env::var_os("NO_COLOR").is_none(),
    );

    // 3️⃣ dispatch
    dispatch(&cli, &cfg)
}
