//! rbells library root.
//! Exposes the timetable model, the bell board driver, the CLI parser and
//! the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use ui::render::Renderer;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli) -> AppResult<()> {
    let config_path: Option<PathBuf> = cli.config.as_deref().map(expand_tilde);
    let target = config_path.clone().unwrap_or_else(Config::config_file);

    match &cli.command {
        // init and edit work on the file itself and must not require a valid one
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, &target, cli.preset),
        Commands::Config {
            edit_config: true, ..
        } => cli::commands::config::edit(&cli.command, &target),
        Commands::Config { .. } => {
            let (cfg, _) = load(cli, config_path.as_deref())?;
            cli::commands::config::handle(&cli.command, &cfg)
        }
        Commands::Now { .. } => {
            let (cfg, renderer) = load(cli, config_path.as_deref())?;
            cli::commands::now::handle(&cli.command, &cfg, &renderer)
        }
        Commands::Watch { .. } => {
            let (cfg, renderer) = load(cli, config_path.as_deref())?;
            cli::commands::watch::handle(&cli.command, &cfg, &renderer)
        }
        Commands::Day { .. } => {
            let (cfg, renderer) = load(cli, config_path.as_deref())?;
            cli::commands::day::handle(&cli.command, &cfg, &renderer)
        }
        Commands::Week => {
            let (cfg, renderer) = load(cli, config_path.as_deref())?;
            cli::commands::week::handle(&cfg, &renderer)
        }
    }
}

/// Load the configuration ONCE and apply the command-line overrides
fn load(cli: &Cli, config_path: Option<&Path>) -> AppResult<(Config, Renderer)> {
    let mut cfg = Config::resolve(config_path, cli.preset)?;
    if let Some(lang) = cli.lang {
        cfg.language = lang;
    }

    let color = !cli.plain && std::io::stdout().is_terminal();
    let renderer = Renderer::new(cfg.language, color);
    Ok((cfg, renderer))
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    dispatch(&cli)
}
