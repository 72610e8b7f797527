use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::week::WeekSchedule;
use crate::errors::{AppError, AppResult};
use crate::models::weekday::WEEK;
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Handle the `config` subcommand (print / check)
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        ..
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let week = WeekSchedule::from_config(cfg)?;

            for day in WEEK {
                if let Some(d) = week.day(day)
                    && !d.is_contiguous()
                {
                    warning(format!("{}: periods are not contiguous", day));
                }
            }

            if week.configured_days() == 0 {
                warning("No weekday has lessons");
            } else {
                success(format!(
                    "Configuration OK: {} weekday(s) with lessons",
                    week.configured_days()
                ));
            }
        }
    }

    Ok(())
}

/// Handle `config --edit`
pub fn edit(cmd: &Commands, path: &Path) -> AppResult<()> {
    let Commands::Config { editor, .. } = cmd else {
        return Ok(());
    };

    // Default editor based on the platform
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());
    debug!(editor = %editor_to_use, path = %path.display(), "opening editor");

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
        }
        Ok(_) | Err(_) => {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            ));

            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using fallback '{}'",
                        default_editor
                    ));
                }
                Ok(_) | Err(_) => {
                    error(format!(
                        "Failed to edit configuration file using fallback '{}'",
                        default_editor
                    ));
                    return Err(AppError::Other(format!(
                        "no usable editor for {}",
                        path.display()
                    )));
                }
            }
        }
    }

    Ok(())
}
