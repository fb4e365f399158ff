//! A short showcase of the classic spinners, side by side.
//!
//! Meant to run from install hooks, so it never fails the process and stays
//! quiet in CI or without a terminal.

use anyhow::Result;
use console::style;
use std::io::{self, IsTerminal, Write};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use braille_spinners::{SpinnerName, spinner, spinners};

use super::terminal::LineGuard;
use crate::config::Config;

const TICK: Duration = Duration::from_millis(80);

const SHOWCASE: [SpinnerName; 5] = [
    SpinnerName::Braille,
    SpinnerName::Arc,
    SpinnerName::Halfmoon,
    SpinnerName::Blocks,
    SpinnerName::Line,
];

const CI_VARS: [&str; 3] = ["CI", "CONTINUOUS_INTEGRATION", "GITHUB_ACTIONS"];

fn in_ci() -> bool {
    in_ci_with(|var| std::env::var(var).ok())
}

/// A variable set to an empty string does not count.
fn in_ci_with(lookup: impl Fn(&str) -> Option<String>) -> bool {
    CI_VARS
        .iter()
        .any(|var| lookup(var).is_some_and(|value| !value.is_empty()))
}

fn showcase_line(tick: usize) -> String {
    let frames: Vec<&str> = SHOWCASE
        .iter()
        .map(|&name| spinner(name).frame(tick))
        .collect();
    format!("  {}", frames.join("  "))
}

fn done_line(color: bool) -> String {
    let count = spinners().len();
    if color {
        format!(
            "  {} {} — {count} spinners ready",
            style("✔").green().bold(),
            style("braille-spinners").bold()
        )
    } else {
        format!("  ✔ braille-spinners — {count} spinners ready")
    }
}

fn animate<W: Write>(out: W, duration: Duration, color: bool) -> Result<()> {
    let mut line = LineGuard::hide(out)?;
    let start = Instant::now();
    let mut tick = 0;
    while start.elapsed() < duration {
        line.redraw(&showcase_line(tick))?;
        tick += 1;
        thread::sleep(TICK);
    }
    line.finish(&done_line(color))
}

pub fn run(config: &Config) {
    if in_ci() {
        debug!("banner:skip ci");
        return;
    }

    let duration = Duration::from_millis(config.banner_ms);
    // Prefer stderr: install hooks often pipe stdout.
    let result = if io::stderr().is_terminal() {
        animate(io::stderr(), duration, config.color)
    } else if io::stdout().is_terminal() {
        animate(io::stdout(), duration, config.color)
    } else {
        debug!("banner:skip no terminal");
        return;
    };

    if let Err(e) = result {
        warn!(error = %e, "banner:failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| {
            vars.iter()
                .find(|(k, _)| k == var)
                .map(|(_, v)| v.clone())
        }
    }

    #[test]
    fn test_in_ci_when_ci_var_set() {
        assert!(in_ci_with(env(&[("CI", "1")])));
        assert!(in_ci_with(env(&[("GITHUB_ACTIONS", "true")])));
        assert!(in_ci_with(env(&[("CONTINUOUS_INTEGRATION", "yes")])));
    }

    #[test]
    fn test_not_in_ci_without_vars() {
        assert!(!in_ci_with(env(&[])));
        assert!(!in_ci_with(env(&[("TERM", "xterm")])));
    }

    #[test]
    fn test_empty_ci_var_is_not_ci() {
        assert!(!in_ci_with(env(&[("CI", "")])));
        assert!(in_ci_with(env(&[("CI", ""), ("GITHUB_ACTIONS", "true")])));
    }

    #[test]
    fn test_showcase_line_first_tick() {
        assert_eq!(showcase_line(0), "  ⠋  ◜  ◐  ▁  |");
    }

    #[test]
    fn test_showcase_line_wraps_each_spinner_independently() {
        // halfmoon has 4 frames, line has 4, arc has 6
        assert_eq!(showcase_line(4), "  ⠼  ◡  ◐  ▅  |");
    }

    #[test]
    fn test_done_line_plain() {
        assert_eq!(done_line(false), "  ✔ braille-spinners — 22 spinners ready");
    }

    #[test]
    fn test_animate_zero_duration_prints_done_line() {
        let mut out = Vec::new();
        animate(&mut out, Duration::ZERO, false).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("22 spinners ready"));
        assert!(written.ends_with("\x1b[?25h")); // cursor restored
    }
}
