//! Animations replayed from hand-authored dot tables.

use super::HEIGHT;
use crate::grid::Grid;

const SPARKLE_WIDTH: usize = 8;

/// Row-major 4×8 bit patterns, one per frame.
#[rustfmt::skip]
const SPARKLE_PATTERNS: [[u8; HEIGHT * SPARKLE_WIDTH]; 6] = [
    [1,0,0,1,0,0,1,0, 0,0,1,0,0,1,0,0, 0,1,0,0,1,0,0,1, 1,0,0,0,0,1,0,0],
    [0,1,0,0,1,0,0,1, 1,0,0,1,0,0,0,1, 0,0,0,1,0,1,0,0, 0,0,1,0,1,0,1,0],
    [0,0,1,0,0,1,0,0, 0,1,0,0,0,0,1,0, 1,0,1,0,0,0,0,1, 0,1,0,1,0,0,0,1],
    [1,0,0,0,0,0,1,1, 0,0,1,0,1,0,0,0, 0,0,0,0,1,0,1,0, 1,0,0,1,0,0,1,0],
    [0,0,0,1,1,0,0,0, 0,1,0,0,0,1,0,1, 1,0,0,1,0,0,0,0, 0,1,0,0,0,1,0,1],
    [0,1,1,0,0,0,0,1, 0,0,0,1,0,0,1,0, 0,1,0,0,0,1,0,0, 0,0,1,0,1,0,0,0],
];

/// Raised dots `(row, col)` for each breathing stage, dimmest first.
const BREATHE_STAGES: [&[(usize, usize)]; 9] = [
    &[],
    &[(1, 0)],
    &[(0, 1), (2, 0)],
    &[(0, 0), (1, 1), (3, 0)],
    &[(0, 0), (1, 1), (2, 0), (3, 1)],
    &[(0, 0), (0, 1), (1, 1), (2, 0), (3, 1)],
    &[(0, 0), (0, 1), (1, 0), (2, 1), (3, 0), (3, 1)],
    &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (3, 0), (3, 1)],
    &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0), (3, 1)],
];

/// Scattered twinkling dots.
pub fn sparkle() -> Vec<String> {
    SPARKLE_PATTERNS
        .iter()
        .map(|pattern| {
            let mut grid = Grid::new(HEIGHT, SPARKLE_WIDTH);
            for (i, &bit) in pattern.iter().enumerate() {
                grid.set(i / SPARKLE_WIDTH, i % SPARKLE_WIDTH, bit != 0);
            }
            grid.to_braille()
        })
        .collect()
}

/// A single cell brightening and dimming.
///
/// The stages play forward then backward without repeating the brightest one.
pub fn breathe() -> Vec<String> {
    let forward = BREATHE_STAGES.iter();
    let backward = BREATHE_STAGES.iter().rev().skip(1);

    forward
        .chain(backward)
        .map(|dots| {
            let mut grid = Grid::new(HEIGHT, 2);
            for &(r, c) in *dots {
                grid.raise(r, c);
            }
            grid.to_braille()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparkle_frames() {
        assert_eq!(sparkle(), ["⡡⠊⢔⠡", "⠊⡰⡡⡘", "⢔⢅⠈⢢", "⡁⢂⠆⡍", "⢔⠨⢑⢐", "⠨⡑⡠⠊"]);
    }

    #[test]
    fn test_breathe_is_a_palindrome() {
        let frames = breathe();
        assert_eq!(frames.len(), 2 * BREATHE_STAGES.len() - 1);
        let reversed: Vec<String> = frames.iter().rev().cloned().collect();
        assert_eq!(frames, reversed);
        assert_eq!(frames[0], "⠀");
        assert_eq!(frames[8], "⣿");
    }

    #[test]
    fn test_breathe_stages_grow_monotonically() {
        let counts: Vec<usize> = BREATHE_STAGES.iter().map(|s| s.len()).collect();
        assert!(counts.windows(2).all(|w| w[0] < w[1]));
    }
}
