use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::watch::{LocalClock, Watcher};
use crate::core::week::WeekSchedule;
use crate::errors::AppResult;
use crate::ui::render::Renderer;
use std::io::{self, Write};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const BELL: &str = "\x07";

/// Handle the `watch` command: redraw the board every second
pub fn handle(cmd: &Commands, cfg: &Config, renderer: &Renderer) -> AppResult<()> {
    let Commands::Watch { ticks } = cmd else {
        return Ok(());
    };

    // Build before the first tick; a bad config never reaches the loop
    let week = WeekSchedule::from_config(cfg)?;
    let mut watcher = Watcher::new(&week, LocalClock, cfg.notification_ms);

    watcher.run(*ticks, |frame| {
        let mut out = io::stdout().lock();

        if renderer.color {
            write!(out, "{}", CLEAR_SCREEN)?;
        }
        write!(out, "{}", renderer.board(&frame.snapshot))?;

        if let Some(toast) = &frame.toast {
            if frame.fired && renderer.color {
                write!(out, "{}", BELL)?;
            }
            writeln!(out, "\n{}", renderer.toast(toast))?;
        }
        if !renderer.color {
            writeln!(out)?;
        }

        out.flush()?;
        Ok(())
    })
}
