use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::board;
use crate::core::watch::Notifier;
use crate::core::week::WeekSchedule;
use crate::errors::AppResult;
use crate::ui::render::Renderer;
use crate::utils::date::resolve_instant;

/// Handle the `now` command: one snapshot, optionally at a given date/time
pub fn handle(cmd: &Commands, cfg: &Config, renderer: &Renderer) -> AppResult<()> {
    if let Commands::Now { at, date, json } = cmd {
        let week = WeekSchedule::from_config(cfg)?;
        let instant = resolve_instant(date.as_deref(), at.as_deref())?;
        let snap = board::snapshot(&week, &instant);

        if *json {
            println!("{}", serde_json::to_string_pretty(&snap)?);
            return Ok(());
        }

        print!("{}", renderer.board(&snap));

        let mut notifier = Notifier::new(cfg.notification_ms);
        if notifier.observe(&snap, &instant)
            && let Some(toast) = notifier.active(&instant)
        {
            println!("\n{}", renderer.toast(toast));
        }
    }
    Ok(())
}
