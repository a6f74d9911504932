use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "sparkka.toml";

/// Runtime settings, read from `sparkka.toml`. There is no locale field; every
/// launch starts in English.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Terminals narrower than this many columns get the collapsible menu.
    pub mobile_breakpoint: u16,
    /// Path the history starts at.
    pub start_path: String,
    pub log_file: PathBuf,
    pub log_level: String,
    /// A log4rs YAML file. When set it replaces `log_file`/`log_level`.
    pub log_config: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 100,
            start_path: String::from("/"),
            log_file: PathBuf::from("sparkka.log"),
            log_level: String::from("info"),
            log_config: None,
        }
    }
}

impl Settings {
    /// An explicit path must exist. Without one, `sparkka.toml` is read if
    /// present and defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::read(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::read(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("failed to parse config: {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Unrecognized level names fall back to `info`.
    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
