//! Fill and drain animations, plus the checkerboard flip.
//!
//! The hold and reset frames appended by these generators are part of their
//! timing: the full grid lingers before draining, and a blank frame closes the
//! cycle before it restarts.

use super::{HEIGHT, frame_where};
use crate::grid::Grid;

/// Columns filling bottom-up one after another, left to right.
///
/// Ends on one all-lit frame followed by one blank frame.
pub fn columns() -> Vec<String> {
    const WIDTH: usize = 6;

    let mut frames: Vec<String> = (0..WIDTH)
        .flat_map(|col| {
            (0..HEIGHT).rev().map(move |fill_to| {
                frame_where(HEIGHT, WIDTH, |r, c| c < col || (c == col && r >= fill_to))
            })
        })
        .collect();

    frames.push(Grid::full(HEIGHT, WIDTH).to_braille());
    frames.push(Grid::new(HEIGHT, WIDTH).to_braille());
    frames
}

/// Rows filling bottom to top, held full for two frames, then draining top to bottom.
pub fn fillsweep() -> Vec<String> {
    const WIDTH: usize = 4;

    let mut frames: Vec<String> = (0..HEIGHT)
        .rev()
        .map(|row| frame_where(HEIGHT, WIDTH, |r, _| r >= row))
        .collect();

    let full = Grid::full(HEIGHT, WIDTH).to_braille();
    frames.push(full.clone());
    frames.push(full);

    frames.extend((0..HEIGHT).map(|row| frame_where(HEIGHT, WIDTH, |r, _| r > row)));
    frames.push(Grid::new(HEIGHT, WIDTH).to_braille());
    frames
}

/// A diagonal threshold fill from the top-left corner, held full for one
/// frame, then drained along the same diagonals.
pub fn diagswipe() -> Vec<String> {
    const WIDTH: usize = 4;
    let max_diag = WIDTH + HEIGHT - 2;

    let mut frames: Vec<String> = (0..=max_diag)
        .map(|d| frame_where(HEIGHT, WIDTH, |r, c| r + c <= d))
        .collect();

    frames.push(Grid::full(HEIGHT, WIDTH).to_braille());
    frames.extend((0..=max_diag).map(|d| frame_where(HEIGHT, WIDTH, |r, c| r + c > d)));
    frames.push(Grid::new(HEIGHT, WIDTH).to_braille());
    frames
}

/// Two phases of a 2-checker followed by two phases of a sparser 3-checker.
pub fn checkerboard() -> Vec<String> {
    const WIDTH: usize = 6;

    (0..4)
        .map(|phase| {
            let modulus = if phase < 2 { 2 } else { 3 };
            frame_where(HEIGHT, WIDTH, |r, c| (r + c + phase) % modulus == 0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_frame_count_and_tail() {
        let frames = columns();
        // Six columns of four fill steps, one hold, one reset.
        assert_eq!(frames.len(), 6 * 4 + 2);
        assert_eq!(frames[0], "⡀⠀⠀");
        assert_eq!(frames[23], "⣿⣿⣿");
        assert_eq!(frames[24], "⣿⣿⣿");
        assert_eq!(frames[25], "⠀⠀⠀");
    }

    #[test]
    fn test_columns_keeps_completed_columns_lit() {
        let frames = columns();
        assert_eq!(frames[7], "⣿⠀⠀");
        assert_eq!(frames[8], "⣿⡀⠀");
    }

    #[test]
    fn test_fillsweep_holds_then_drains() {
        assert_eq!(
            fillsweep(),
            ["⣀⣀", "⣤⣤", "⣶⣶", "⣿⣿", "⣿⣿", "⣿⣿", "⣶⣶", "⣤⣤", "⣀⣀", "⠀⠀", "⠀⠀"]
        );
    }

    #[test]
    fn test_diagswipe_sweeps_both_ways() {
        let frames = diagswipe();
        assert_eq!(frames.len(), 16);
        assert_eq!(frames[0], "⠁⠀");
        assert_eq!(frames[6], "⣿⣿");
        assert_eq!(frames[7], "⣿⣿");
        assert_eq!(frames[8], "⣾⣿");
        assert_eq!(frames[14], "⠀⠀");
        assert_eq!(frames[15], "⠀⠀");
    }

    #[test]
    fn test_checkerboard_phases() {
        assert_eq!(checkerboard(), ["⢕⢕⢕", "⡪⡪⡪", "⢊⠔⡡", "⡡⢊⠔"]);
    }
}
