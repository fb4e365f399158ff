//! The fixed spinner registry.
//!
//! Built once on first access, then shared read-only for the rest of the
//! process. Generated spinners run their generator exactly once here.

use std::sync::OnceLock;

use tracing::debug;

use crate::generators;
use crate::spinner::{Spinner, SpinnerName};

static SPINNERS: OnceLock<Spinners> = OnceLock::new();

/// Immutable mapping from every [`SpinnerName`] to its [`Spinner`].
#[derive(Debug)]
pub struct Spinners {
    // Indexed by `SpinnerName::index`.
    entries: Vec<Spinner>,
}

impl Spinners {
    fn build() -> Self {
        let entries: Vec<Spinner> = SpinnerName::ALL.into_iter().map(build_spinner).collect();
        debug!(count = entries.len(), "registry:built");
        Self { entries }
    }

    /// Look up a spinner. Total over the closed name set.
    pub fn get(&self, name: SpinnerName) -> &Spinner {
        &self.entries[name.index()]
    }

    /// Iterate `(name, spinner)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (SpinnerName, &Spinner)> {
        SpinnerName::ALL.into_iter().zip(self.entries.iter())
    }

    pub fn names(&self) -> &'static [SpinnerName] {
        &SpinnerName::ALL
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The process-wide registry.
pub fn spinners() -> &'static Spinners {
    SPINNERS.get_or_init(Spinners::build)
}

/// Shorthand for `spinners().get(name)`.
pub fn spinner(name: SpinnerName) -> &'static Spinner {
    spinners().get(name)
}

fn build_spinner(name: SpinnerName) -> Spinner {
    match name {
        // Classic single-cell braille
        SpinnerName::Braille => Spinner::from_literal(
            &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            80,
        ),
        SpinnerName::Braillewave => Spinner::from_literal(
            &[
                "⠁⠂⠄⡀", "⠂⠄⡀⢀", "⠄⡀⢀⠠", "⡀⢀⠠⠐", "⢀⠠⠐⠈", "⠠⠐⠈⠁", "⠐⠈⠁⠂", "⠈⠁⠂⠄",
            ],
            100,
        ),
        SpinnerName::Dna => Spinner::from_literal(
            &[
                "⠋⠉⠙⠚", "⠉⠙⠚⠒", "⠙⠚⠒⠂", "⠚⠒⠂⠂", "⠒⠂⠂⠒", "⠂⠂⠒⠲", "⠂⠒⠲⠴", "⠒⠲⠴⠤", "⠲⠴⠤⠄",
                "⠴⠤⠄⠋", "⠤⠄⠋⠉", "⠄⠋⠉⠙",
            ],
            80,
        ),

        // Generated from dot grids
        SpinnerName::Scan => Spinner::new(generators::scan(), 70),
        SpinnerName::Rain => Spinner::new(generators::rain(), 100),
        SpinnerName::Scanline => Spinner::new(generators::scanline(), 120),
        SpinnerName::Pulse => Spinner::new(generators::pulse(), 180),
        SpinnerName::Snake => Spinner::new(generators::snake(), 80),
        SpinnerName::Sparkle => Spinner::new(generators::sparkle(), 150),
        SpinnerName::Cascade => Spinner::new(generators::cascade(), 60),
        SpinnerName::Columns => Spinner::new(generators::columns(), 60),
        SpinnerName::Orbit => Spinner::new(generators::orbit(), 100),
        SpinnerName::Breathe => Spinner::new(generators::breathe(), 100),
        SpinnerName::Waverows => Spinner::new(generators::waverows(), 90),
        SpinnerName::Checkerboard => Spinner::new(generators::checkerboard(), 250),
        SpinnerName::Helix => Spinner::new(generators::helix(), 80),
        SpinnerName::Fillsweep => Spinner::new(generators::fillsweep(), 100),
        SpinnerName::Diagswipe => Spinner::new(generators::diagswipe(), 60),

        // Non-braille classics
        SpinnerName::Arc => Spinner::from_literal(&["◜", "◠", "◝", "◞", "◡", "◟"], 100),
        SpinnerName::Halfmoon => Spinner::from_literal(&["◐", "◓", "◑", "◒"], 180),
        SpinnerName::Line => Spinner::from_literal(&["|", "/", "—", "\\"], 100),
        SpinnerName::Blocks => Spinner::from_literal(
            &[
                "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█", "▇", "▆", "▅", "▄", "▃", "▂",
            ],
            100,
        ),
    }
}
