//! Spinner records and the closed set of spinner names.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One animation: the frames of a single cycle plus the intended tick length.
///
/// Frames of one spinner share the same character count so the animation does
/// not jitter horizontally while cycling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spinner {
    frames: Vec<String>,
    #[serde(rename = "interval")]
    interval_ms: u64,
}

impl Spinner {
    pub(crate) fn new(frames: Vec<String>, interval_ms: u64) -> Self {
        Self {
            frames,
            interval_ms,
        }
    }

    pub(crate) fn from_literal(frames: &[&str], interval_ms: u64) -> Self {
        Self::new(frames.iter().map(|f| f.to_string()).collect(), interval_ms)
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Tick length in milliseconds.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Frame to show on the given tick, wrapping around the cycle.
    pub fn frame(&self, tick: usize) -> &str {
        &self.frames[tick % self.frames.len()]
    }

    /// Number of frames in one cycle.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Display width in characters, taken from the first frame.
    pub fn width(&self) -> usize {
        self.frames.first().map_or(0, |f| f.chars().count())
    }
}

/// Error returned when parsing a name outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown spinner: \"{0}\"")]
pub struct UnknownSpinner(pub String);

/// Every spinner the registry knows about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum SpinnerName {
    /// Classic single-cell braille rotation
    Braille,
    /// Single dots rippling across four cells
    Braillewave,
    /// Twisting strand across four cells
    Dna,
    /// Vertical bar sweeping left to right
    Scan,
    /// Drops falling at staggered phases
    Rain,
    /// Horizontal line bouncing up and down
    Scanline,
    /// Rings expanding from the center
    Pulse,
    /// Four-dot snake on a serpentine path
    Snake,
    /// Twinkling scattered dots
    Sparkle,
    /// Diagonal band sweeping across
    Cascade,
    /// Columns filling one by one
    Columns,
    /// Comet circling a single cell
    Orbit,
    /// Single cell brightening and dimming
    Breathe,
    /// Travelling sine wave
    Waverows,
    /// Alternating checker patterns
    Checkerboard,
    /// Two crossing sine waves
    Helix,
    /// Rows filling then draining
    Fillsweep,
    /// Diagonal fill then drain
    Diagswipe,
    /// Rotating quarter arc
    Arc,
    /// Rotating half-filled circle
    Halfmoon,
    /// ASCII-style rotating line
    Line,
    /// Rising and falling block bar
    Blocks,
}

impl SpinnerName {
    /// All names in canonical registry order.
    pub const ALL: [SpinnerName; 22] = [
        SpinnerName::Braille,
        SpinnerName::Braillewave,
        SpinnerName::Dna,
        SpinnerName::Scan,
        SpinnerName::Rain,
        SpinnerName::Scanline,
        SpinnerName::Pulse,
        SpinnerName::Snake,
        SpinnerName::Sparkle,
        SpinnerName::Cascade,
        SpinnerName::Columns,
        SpinnerName::Orbit,
        SpinnerName::Breathe,
        SpinnerName::Waverows,
        SpinnerName::Checkerboard,
        SpinnerName::Helix,
        SpinnerName::Fillsweep,
        SpinnerName::Diagswipe,
        SpinnerName::Arc,
        SpinnerName::Halfmoon,
        SpinnerName::Line,
        SpinnerName::Blocks,
    ];

    /// Position in [`SpinnerName::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpinnerName::Braille => "braille",
            SpinnerName::Braillewave => "braillewave",
            SpinnerName::Dna => "dna",
            SpinnerName::Scan => "scan",
            SpinnerName::Rain => "rain",
            SpinnerName::Scanline => "scanline",
            SpinnerName::Pulse => "pulse",
            SpinnerName::Snake => "snake",
            SpinnerName::Sparkle => "sparkle",
            SpinnerName::Cascade => "cascade",
            SpinnerName::Columns => "columns",
            SpinnerName::Orbit => "orbit",
            SpinnerName::Breathe => "breathe",
            SpinnerName::Waverows => "waverows",
            SpinnerName::Checkerboard => "checkerboard",
            SpinnerName::Helix => "helix",
            SpinnerName::Fillsweep => "fillsweep",
            SpinnerName::Diagswipe => "diagswipe",
            SpinnerName::Arc => "arc",
            SpinnerName::Halfmoon => "halfmoon",
            SpinnerName::Line => "line",
            SpinnerName::Blocks => "blocks",
        }
    }
}

impl fmt::Display for SpinnerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpinnerName {
    type Err = UnknownSpinner;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == wanted)
            .ok_or_else(|| UnknownSpinner(s.to_string()))
    }
}
