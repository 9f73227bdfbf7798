/*!
# Configuration

Settings read once at startup from the environment.

| Variable | Default | |
|---|---|---|
| `CALC_WIDTH` | `80` | characters of a result shown before `...` |
| `CALC_HISTORY` | `~/.calc.history` | history file; empty disables it |
| `CALC_LOG` | `off` | `error`, `warn`, `info`, `debug` or `trace` |

*/

use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_ROUND_PLACES: i64 = 128;
const HISTORY_FILE: &str = ".calc.history";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: usize,
    pub round_places: i64,
    pub history_file: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: DEFAULT_WIDTH,
            round_places: DEFAULT_ROUND_PLACES,
            history_file: dirs::home_dir().map(|home| home.join(HISTORY_FILE)),
            log_level: LevelFilter::OFF,
        }
    }
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_vars(|name| std::env::var(name).ok())
    }

    /// Values that fail to parse leave the default in place.
    pub fn from_vars<F>(var: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(width) = var("CALC_WIDTH").and_then(|w| w.trim().parse().ok()) {
            config.width = width;
        }
        if let Some(path) = var("CALC_HISTORY") {
            config.history_file = match path.trim() {
                "" => None,
                path => Some(PathBuf::from(path)),
            };
        }
        if let Some(level) = var("CALC_LOG").and_then(|l| l.trim().parse().ok()) {
            config.log_level = level;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(|_| None);
        assert_eq!(config.width, 80);
        assert_eq!(config.round_places, 128);
        assert_eq!(config.log_level, LevelFilter::OFF);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(|name| match name {
            "CALC_WIDTH" => Some("40".to_string()),
            "CALC_HISTORY" => Some("/tmp/calc.json".to_string()),
            "CALC_LOG" => Some("debug".to_string()),
            _ => None,
        });
        assert_eq!(config.width, 40);
        assert_eq!(config.history_file, Some(PathBuf::from("/tmp/calc.json")));
        assert_eq!(config.log_level, LevelFilter::DEBUG);
    }

    #[test]
    fn test_empty_history_disables() {
        let config = Config::from_vars(|name| match name {
            "CALC_HISTORY" => Some(String::new()),
            "CALC_WIDTH" => Some("wide".to_string()),
            _ => None,
        });
        assert_eq!(config.history_file, None);
        assert_eq!(config.width, 80);
    }
}
