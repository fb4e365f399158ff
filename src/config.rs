//! Optional YAML configuration for the demo CLI.

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use braille_spinners::SpinnerName;

const CONFIG_FILE: &str = "config.yaml";

/// Demo settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Spinner played when `play` is given no name
    pub default_spinner: Option<SpinnerName>,

    /// Ticks spent on each spinner when cycling through all of them
    pub cycle_ticks: u32,

    /// Tick length in milliseconds when cycling through all spinners
    pub cycle_interval_ms: u64,

    /// Colorize output
    pub color: bool,

    /// How long the banner animates, in milliseconds
    pub banner_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_spinner: None,
            cycle_ticks: 40,
            cycle_interval_ms: 80,
            color: true,
            banner_ms: 1500,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit path the file must exist. Without one, the default
    /// location is tried and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) => Self::from_file_or_default(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Like `from_file`, but a missing file yields the defaults.
    fn from_file_or_default(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(?path, "config:missing, using defaults");
                Ok(Self::default())
            }
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read config {}", path.display()))
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        // An empty file is valid and means "all defaults".
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        config.validate()?;
        debug!(?path, ?config, "config:loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.cycle_ticks == 0 {
            return Err(anyhow!("cycle_ticks must be greater than 0"));
        }
        if self.cycle_interval_ms == 0 {
            return Err(anyhow!("cycle_interval_ms must be greater than 0"));
        }
        Ok(())
    }
}

/// `$XDG_CONFIG_HOME/braille-spinners/config.yaml`, falling back to `~/.config`.
fn default_config_path() -> Option<PathBuf> {
    config_path_from(std::env::var("XDG_CONFIG_HOME").ok(), home::home_dir())
}

fn config_path_from(xdg_config_home: Option<String>, home: Option<PathBuf>) -> Option<PathBuf> {
    let base = match xdg_config_home {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => home?.join(".config"),
    };
    Some(base.join("braille-spinners").join(CONFIG_FILE))
}
