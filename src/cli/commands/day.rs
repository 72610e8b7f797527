use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::week::WeekSchedule;
use crate::errors::AppResult;
use crate::models::weekday::parse_weekday;
use crate::ui::render::Renderer;
use crate::utils::date::{parse_date, today};
use chrono::Datelike;

/// Handle the `day` command: period table for one weekday
pub fn handle(cmd: &Commands, cfg: &Config, renderer: &Renderer) -> AppResult<()> {
    if let Commands::Day { weekday, date } = cmd {
        let week = WeekSchedule::from_config(cfg)?;

        let day = match (weekday, date) {
            (Some(name), _) => parse_weekday(name)?,
            (None, Some(d)) => parse_date(d)?.weekday(),
            (None, None) => today().weekday(),
        };

        print!("{}", renderer.day(day, week.day(day)));
    }
    Ok(())
}
