//! Runtime configuration.
//!
//! Everything has a sensible default; an optional TOML file can override
//! the timers, mouse capture and log location. There is no user data here
//! and nothing is ever written back.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

/// Runtime options for the terminal app.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Periodic redraw cadence in milliseconds.
    pub tick_ms: u64,
    /// Chat carousel rotation interval in milliseconds.
    pub carousel_ms: u64,
    /// Whether to capture mouse input (the meter needs it; scrolling and
    /// presets still work from the keyboard without it).
    pub mouse: bool,
    /// Directory for the log file; the system temp dir when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: 200,
            carousel_ms: 3_000,
            mouse: true,
            log_dir: None,
        }
    }
}

impl Config {
    /// Parses a TOML document; absent keys keep their defaults.
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid config file")
    }
}

/// Loads the config file if a path was given, defaults otherwise.
pub fn load(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            Config::from_toml(&text)
        }
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tick_ms, 200);
        assert_eq!(config.carousel_ms, 3_000);
        assert!(config.mouse);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml("carousel_ms = 1000\n").unwrap();
        assert_eq!(config.carousel_ms, 1_000);
        assert_eq!(config.tick_ms, 200);
        assert!(config.mouse);
    }

    #[test]
    fn test_full_toml() {
        let config = Config::from_toml(
            "tick_ms = 100\ncarousel_ms = 2000\nmouse = false\nlog_dir = \"/tmp/ww\"\n",
        )
        .unwrap();
        assert_eq!(config.tick_ms, 100);
        assert!(!config.mouse);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/ww")));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Config::from_toml("tick_ms = \"soon\"").is_err());
    }

    #[test]
    fn test_missing_path_uses_defaults() {
        let config = load(None).unwrap();
        assert_eq!(config.tick_ms, Config::default().tick_ms);
    }
}
