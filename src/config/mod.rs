use crate::errors::{AppError, AppResult};
use crate::models::language::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod presets;

pub use presets::Preset;

/// Timetable configuration.
///
/// The field aliases accept the keys of the original bell page
/// `config.json` (`урок`, `звонок`, `расписание`, `начало`, `перемены`), so
/// that file can be used as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_lesson_minutes", alias = "урок")]
    pub lesson_minutes: i32,
    /// How long a boundary notification stays on screen.
    #[serde(default = "default_notification_ms", alias = "звонок")]
    pub notification_ms: u64,
    #[serde(default)]
    pub language: Language,
    #[serde(default, alias = "расписание")]
    pub schedule: BTreeMap<String, DayConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayConfig {
    /// First lesson start, `H:MM`. Defaults to 9:00.
    #[serde(default, alias = "начало", skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Break after lesson n, in minutes.
    #[serde(default, alias = "перемены")]
    pub breaks: Vec<i32>,
}

pub const DEFAULT_START: &str = "9:00";

fn default_lesson_minutes() -> i32 {
    45
}
fn default_notification_ms() -> u64 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Preset::Standard.config()
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rbells")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rbells.conf")
    }

    /// Resolve the configuration to use.
    ///
    /// An explicit path wins, then an explicit preset, then the default
    /// config file if it exists, then the standard preset.
    pub fn resolve(path: Option<&Path>, preset: Option<Preset>) -> AppResult<Self> {
        if let Some(p) = path {
            return Self::from_file(p);
        }
        if let Some(preset) = preset {
            debug!(preset = ?preset, "using built-in preset");
            return Ok(preset.config());
        }

        let default_file = Self::config_file();
        if default_file.exists() {
            Self::from_file(&default_file)
        } else {
            debug!("no config file found, using the standard preset");
            Ok(Preset::Standard.config())
        }
    }

    /// Load a YAML file, or JSON when the extension is `.json`.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;

        let cfg: Config = if is_json(path) {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        info!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let body = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            self.to_yaml()?
        };
        fs::write(path, body)?;

        info!(path = %path.display(), "configuration written");
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
