//! File logging
//!
//! The game owns the terminal while it runs, so log lines cannot go to
//! stdout or stderr. They go to the file named by `SNAKE_LOG`; without it
//! nothing is logged and no file is created.

use anyhow::{Context, Result};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

pub const LOG_FILE_VAR: &str = "SNAKE_LOG";
pub const LOG_LEVEL_VAR: &str = "SNAKE_LOG_LEVEL";

/// Where and how much to log
#[derive(Debug, Clone, PartialEq)]
pub struct LogSettings {
    pub path: Option<PathBuf>,
    pub level: LevelFilter,
}

impl LogSettings {
    /// Read the settings from `SNAKE_LOG` and `SNAKE_LOG_LEVEL`
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var(LOG_FILE_VAR).ok(),
            std::env::var(LOG_LEVEL_VAR).ok(),
        )
    }

    pub fn from_values(path: Option<String>, level: Option<String>) -> Self {
        let path = path.filter(|p| !p.is_empty()).map(PathBuf::from);
        let level = level
            .and_then(|l| LevelFilter::from_str(l.trim()).ok())
            .unwrap_or(LevelFilter::Info);
        Self { path, level }
    }
}

/// Install the global logger. Returns whether logging is enabled.
pub fn init(settings: &LogSettings) -> Result<bool> {
    let Some(path) = &settings.path else {
        return Ok(false);
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    WriteLogger::init(settings.level, Config::default(), file)
        .context("Failed to initialize logger")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_off_by_default() {
        let settings = LogSettings::from_values(None, None);
        assert_eq!(settings.path, None);
        assert_eq!(settings.level, LevelFilter::Info);
        assert!(!init(&settings).unwrap());
    }

    #[test]
    fn test_level_parsing() {
        let settings = LogSettings::from_values(Some("snake.log".into()), Some("debug".into()));
        assert_eq!(settings.path, Some(PathBuf::from("snake.log")));
        assert_eq!(settings.level, LevelFilter::Debug);

        let settings = LogSettings::from_values(Some(String::new()), Some("loud".into()));
        assert_eq!(settings.path, None);
        assert_eq!(settings.level, LevelFilter::Info);
    }
}
