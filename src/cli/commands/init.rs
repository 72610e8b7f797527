use crate::cli::parser::Commands;
use crate::config::Preset;
use crate::core::week::WeekSchedule;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// Writes the chosen preset (standard by default) to the configuration
/// file. An existing file is only replaced with `--force`.
pub fn handle(cmd: &Commands, path: &Path, preset: Option<Preset>) -> AppResult<()> {
    let Commands::Init { force } = cmd else {
        return Ok(());
    };

    if path.exists() && !*force {
        return Err(AppError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let cfg = preset.unwrap_or(Preset::Standard).config();

    // The preset must build before it is written
    let week = WeekSchedule::from_config(&cfg)?;

    info("Initializing rbells…");
    cfg.save(path)?;

    success(format!("Config file: {}", path.display()));
    success(format!("{} weekday(s) with lessons", week.configured_days()));
    Ok(())
}
