//! Animate spinners in the terminal.

use anyhow::Result;
use console::style;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::{self, IsTerminal};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use braille_spinners::{Spinner, SpinnerName, spinner, spinners};

use super::terminal::LineGuard;
use crate::config::Config;

/// What gets drawn on each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Schedule {
    /// One spinner at its own interval.
    Single(SpinnerName),
    /// Every spinner in turn, `ticks` ticks each, at a fixed interval.
    Cycle { ticks: u32, interval_ms: u64 },
}

/// One resolved tick of a schedule.
#[derive(Debug, PartialEq, Eq)]
struct Tick {
    name: SpinnerName,
    frame: usize,
    /// `(position, total)` when cycling through all spinners
    counter: Option<(usize, usize)>,
}

impl Schedule {
    fn new(config: &Config, name: Option<SpinnerName>) -> Self {
        match name.or(config.default_spinner) {
            Some(name) => Schedule::Single(name),
            None => Schedule::Cycle {
                ticks: config.cycle_ticks.max(1),
                interval_ms: config.cycle_interval_ms,
            },
        }
    }

    fn tick_length(&self) -> Duration {
        match *self {
            Schedule::Single(name) => spinner(name).interval(),
            Schedule::Cycle { interval_ms, .. } => Duration::from_millis(interval_ms),
        }
    }

    /// Steps in one full pass: one spinner cycle, or every spinner once.
    fn pass_len(&self) -> u64 {
        match *self {
            Schedule::Single(name) => spinner(name).len() as u64,
            Schedule::Cycle { ticks, .. } => ticks as u64 * SpinnerName::ALL.len() as u64,
        }
    }

    fn at(&self, step: u64) -> Tick {
        match *self {
            Schedule::Single(name) => Tick {
                name,
                frame: (step % spinner(name).len() as u64) as usize,
                counter: None,
            },
            Schedule::Cycle { ticks, .. } => {
                let ticks = ticks as u64;
                let total = SpinnerName::ALL.len();
                let position = ((step / ticks) % total as u64) as usize;
                Tick {
                    name: SpinnerName::ALL[position],
                    // Each spinner starts again from its first frame.
                    frame: (step % ticks) as usize,
                    counter: Some((position + 1, total)),
                }
            }
        }
    }
}

fn status_line(name: SpinnerName, spinner: &Spinner, tick: &Tick, color: bool) -> String {
    let frame = spinner.frame(tick.frame);
    let interval = format!("{}ms", spinner.interval_ms());
    let counter = tick
        .counter
        .map(|(pos, total)| format!("[{pos}/{total}]"))
        .unwrap_or_default();

    let line = if color {
        format!(
            "  {}  {} {}  {}",
            style(frame).magenta(),
            style(name).bold(),
            style(interval).dim(),
            style(counter).dim()
        )
    } else {
        format!("  {frame}  {name} {interval}  {counter}")
    };
    line.trim_end().to_string()
}

/// Wait up to `timeout` for a quit key. Returns true when the user asked to stop.
fn wait_for_quit(timeout: Duration) -> Result<bool> {
    let deadline = Instant::now() + timeout;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() || !event::poll(remaining)? {
            return Ok(false);
        }
        if let Event::Key(key) = event::read()?
            && is_quit_key(&key)
        {
            return Ok(true);
        }
    }
}

/// How the animation waits between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    /// Raw mode, polling stdin for quit keys
    Keys,
    /// Plain sleep; stdin is not a terminal
    Sleep,
}

impl Input {
    fn detect(stdin_is_terminal: bool) -> Self {
        if stdin_is_terminal {
            Input::Keys
        } else {
            Input::Sleep
        }
    }

    /// Wait one tick. Returns true when the user asked to stop.
    fn wait(self, tick_length: Duration) -> Result<bool> {
        match self {
            Input::Keys => wait_for_quit(tick_length),
            Input::Sleep => {
                thread::sleep(tick_length);
                Ok(false)
            }
        }
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

pub fn run(
    config: &Config,
    name: Option<SpinnerName>,
    cycles: Option<u32>,
    color: bool,
) -> Result<()> {
    let schedule = Schedule::new(config, name);
    let color = color && config.color;
    let total_steps = cycles.map(|c| c as u64 * schedule.pass_len());
    info!(?schedule, ?total_steps, "play:start");

    let registry = spinners();
    let tick_length = schedule.tick_length();
    let input = Input::detect(io::stdin().is_terminal());
    debug!(?input, "play:input");
    let mut line = match input {
        Input::Keys => LineGuard::raw(io::stdout())?,
        Input::Sleep => LineGuard::hide(io::stdout())?,
    };

    let mut step: u64 = 0;
    let mut last = String::new();
    while total_steps.is_none_or(|total| step < total) {
        let tick = schedule.at(step);
        last = status_line(tick.name, registry.get(tick.name), &tick, color);
        line.redraw(&last)?;

        if input.wait(tick_length)? {
            info!(step, "play:quit");
            break;
        }
        step += 1;
    }

    line.finish(&last)?;
    info!(step, "play:completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle_config() -> Config {
        Config {
            cycle_ticks: 3,
            ..Config::default()
        }
    }

    #[test]
    fn test_explicit_name_wins_over_config() {
        let config = Config {
            default_spinner: Some(SpinnerName::Dna),
            ..Config::default()
        };
        assert_eq!(
            Schedule::new(&config, Some(SpinnerName::Arc)),
            Schedule::Single(SpinnerName::Arc)
        );
        assert_eq!(
            Schedule::new(&config, None),
            Schedule::Single(SpinnerName::Dna)
        );
    }

    #[test]
    fn test_no_name_cycles() {
        assert_eq!(
            Schedule::new(&cycle_config(), None),
            Schedule::Cycle {
                ticks: 3,
                interval_ms: 80
            }
        );
    }

    #[test]
    fn test_single_schedule_uses_spinner_interval() {
        let schedule = Schedule::Single(SpinnerName::Checkerboard);
        assert_eq!(schedule.tick_length(), Duration::from_millis(250));
        assert_eq!(schedule.pass_len(), 4);
        assert_eq!(schedule.at(5).frame, 1);
        assert_eq!(schedule.at(5).counter, None);
    }

    #[test]
    fn test_cycle_schedule_advances_spinners() {
        let schedule = Schedule::new(&cycle_config(), None);
        assert_eq!(schedule.tick_length(), Duration::from_millis(80));
        assert_eq!(schedule.pass_len(), 3 * 22);

        let first = schedule.at(2);
        assert_eq!(first.name, SpinnerName::Braille);
        assert_eq!(first.frame, 2);
        assert_eq!(first.counter, Some((1, 22)));

        let second = schedule.at(3);
        assert_eq!(second.name, SpinnerName::Braillewave);
        assert_eq!(second.frame, 0);
        assert_eq!(second.counter, Some((2, 22)));

        // Wraps back to the first spinner after a full pass
        assert_eq!(schedule.at(66).name, SpinnerName::Braille);
    }

    #[test]
    fn test_status_line_plain() {
        let schedule = Schedule::Single(SpinnerName::Halfmoon);
        let tick = schedule.at(1);
        let line = status_line(tick.name, spinner(tick.name), &tick, false);
        assert_eq!(line, "  ◓  halfmoon 180ms");
    }

    #[test]
    fn test_status_line_with_counter() {
        let schedule = Schedule::new(&cycle_config(), None);
        let tick = schedule.at(0);
        let line = status_line(tick.name, spinner(tick.name), &tick, false);
        assert_eq!(line, "  ⠋  braille 80ms  [1/22]");
    }

    #[test]
    fn test_input_follows_stdin_terminal() {
        assert_eq!(Input::detect(true), Input::Keys);
        assert_eq!(Input::detect(false), Input::Sleep);
    }

    #[test]
    fn test_sleep_input_never_quits() {
        assert!(!Input::Sleep.wait(Duration::ZERO).unwrap());
    }

    #[test]
    fn test_quit_keys() {
        let press = |code, modifiers| KeyEvent::new(code, modifiers);
        assert!(is_quit_key(&press(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit_key(&press(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit_key(&press(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_quit_key(&press(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_quit_key(&press(KeyCode::Char('x'), KeyModifiers::NONE)));
    }
}
