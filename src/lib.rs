//! Animated terminal spinners built from Unicode braille dot grids.
//!
//! Every braille character (U+2800..=U+28FF) is an independently addressable
//! 2×4 dot cell. [`grid`] packs boolean dot matrices into braille strings,
//! [`generators`] turn small simulations into frame sequences, and
//! [`registry`] exposes the fixed set of named spinners.
//!
//! Nothing here renders: a consumer picks a spinner, runs its own timer at
//! [`Spinner::interval`] and prints [`Spinner::frame`] for each tick.
//!
//! ```
//! use braille_spinners::{SpinnerName, spinner};
//!
//! let dots = spinner(SpinnerName::Helix);
//! assert_eq!(dots.frame(0).chars().count(), 4);
//! ```

pub mod generators;
pub mod grid;
pub mod registry;
pub mod spinner;

pub use grid::{Grid, grid_to_braille, make_grid};
pub use registry::{Spinners, spinner, spinners};
pub use spinner::{Spinner, SpinnerName, UnknownSpinner};
