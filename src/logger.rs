//! File logging setup.
//!
//! The terminal is busy drawing animations, so logs go to a file under the XDG
//! state directory instead of stderr.

use anyhow::{Result, anyhow};
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "BRAILLE_SPINNERS_LOG";
const LOG_FILE: &str = "braille-spinners.log";

/// Install the global subscriber.
///
/// Returns the appender guard, which must stay alive until exit so buffered
/// lines are flushed. Returns `None` when the log file cannot be set up; the
/// CLI then runs without logging.
pub fn init() -> Option<WorkerGuard> {
    let dir = log_dir().ok()?;
    fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(guard)
}

/// Checks XDG_STATE_HOME first, falls back to ~/.local/state.
fn log_dir() -> Result<PathBuf> {
    log_dir_from(std::env::var("XDG_STATE_HOME").ok(), home::home_dir())
}

fn log_dir_from(xdg_state_home: Option<String>, home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(state_home) = xdg_state_home
        && !state_home.is_empty()
    {
        return Ok(PathBuf::from(state_home).join("braille-spinners"));
    }

    home.map(|home| home.join(".local/state").join("braille-spinners"))
        .ok_or_else(|| anyhow!("Could not determine state directory"))
}
