//! Frame generators.
//!
//! Each generator is a pure, zero-argument function that builds one animation
//! cycle as a sequence of dot grids and encodes every grid with
//! [`Grid::to_braille`](crate::grid::Grid::to_braille).

mod fill;
mod pattern;
mod sweep;
mod wave;

pub use fill::*;
pub use pattern::*;
pub use sweep::*;
pub use wave::*;

use crate::grid::Grid;

/// Height shared by every generated animation (one braille cell).
pub(crate) const HEIGHT: usize = 4;

/// Build one frame by raising the dots selected by `lit`.
pub(crate) fn frame_where(rows: usize, cols: usize, lit: impl Fn(usize, usize) -> bool) -> String {
    let mut grid = Grid::new(rows, cols);
    for r in 0..rows {
        for c in 0..cols {
            if lit(r, c) {
                grid.raise(r, c);
            }
        }
    }
    grid.to_braille()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_where_selects_dots() {
        assert_eq!(frame_where(HEIGHT, 2, |_, _| false), "\u{2800}");
        assert_eq!(frame_where(HEIGHT, 2, |_, _| true), "\u{28FF}");
        assert_eq!(frame_where(HEIGHT, 2, |r, c| r == 0 && c == 1), "\u{2808}");
    }

    #[test]
    fn test_all_generators_are_deterministic() {
        let generators: [fn() -> Vec<String>; 15] = [
            scan,
            rain,
            scanline,
            pulse,
            snake,
            sparkle,
            cascade,
            columns,
            orbit,
            breathe,
            waverows,
            checkerboard,
            helix,
            fillsweep,
            diagswipe,
        ];
        for generate in generators {
            let first = generate();
            assert!(!first.is_empty());
            assert_eq!(first, generate());
        }
    }
}
