use crate::config::Config;
use crate::core::week::WeekSchedule;
use crate::errors::AppResult;
use crate::ui::render::Renderer;

/// Handle the `week` command
pub fn handle(cfg: &Config, renderer: &Renderer) -> AppResult<()> {
    let week = WeekSchedule::from_config(cfg)?;
    print!("{}", renderer.week(&week));
    Ok(())
}
