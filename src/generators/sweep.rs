//! Moving-shape animations: bars, bands and paths travelling across the grid.

use super::{HEIGHT, frame_where};
use crate::grid::Grid;

/// A 2-wide vertical bar swept left to right, entering and leaving fully.
pub fn scan() -> Vec<String> {
    const WIDTH: isize = 8;
    (-1..=WIDTH)
        .map(|pos| {
            frame_where(HEIGHT, WIDTH as usize, |_, c| {
                let c = c as isize;
                c == pos || c == pos - 1
            })
        })
        .collect()
}

/// Independent falling drops, one per column, each with its own phase.
///
/// Drops wrap through a virtual height two rows taller than the grid so they
/// spend a couple of ticks off-screen before re-entering at the top.
pub fn rain() -> Vec<String> {
    const WIDTH: usize = 8;
    const FRAMES: usize = 12;
    const OFFSETS: [usize; WIDTH] = [0, 3, 1, 5, 2, 7, 4, 6];

    (0..FRAMES)
        .map(|f| frame_where(HEIGHT, WIDTH, |r, c| (f + OFFSETS[c]) % (HEIGHT + 2) == r))
        .collect()
}

/// A horizontal line bouncing top to bottom and back, with a dotted trail above it.
pub fn scanline() -> Vec<String> {
    const WIDTH: usize = 6;
    const POSITIONS: [usize; 6] = [0, 1, 2, 3, 2, 1];

    POSITIONS
        .iter()
        .map(|&row| {
            frame_where(HEIGHT, WIDTH, |r, c| {
                r == row || (row > 0 && r == row - 1 && c % 2 == 0)
            })
        })
        .collect()
}

/// A 4-dot snake crawling a serpentine path through every cell.
pub fn snake() -> Vec<String> {
    const WIDTH: usize = 4;
    const LENGTH: usize = 4;

    let path: Vec<(usize, usize)> = (0..HEIGHT)
        .flat_map(|r| {
            let cols: Vec<usize> = if r % 2 == 0 {
                (0..WIDTH).collect()
            } else {
                (0..WIDTH).rev().collect()
            };
            cols.into_iter().map(move |c| (r, c))
        })
        .collect();

    trail_frames(&path, HEIGHT, WIDTH, LENGTH)
}

/// A diagonal band two diagonals wide sweeping across the anti-diagonals.
pub fn cascade() -> Vec<String> {
    const WIDTH: usize = 8;
    let end = (WIDTH + HEIGHT) as isize;

    (-2..end)
        .map(|offset| {
            frame_where(HEIGHT, WIDTH, |r, c| {
                let diag = (r + c) as isize;
                diag == offset || diag == offset - 1
            })
        })
        .collect()
}

/// A two-dot comet circling the perimeter of a single braille cell.
pub fn orbit() -> Vec<String> {
    const PATH: [(usize, usize); 8] = [
        (0, 0),
        (0, 1),
        (1, 1),
        (2, 1),
        (3, 1),
        (3, 0),
        (2, 0),
        (1, 0),
    ];
    trail_frames(&PATH, HEIGHT, 2, 2)
}

/// One frame per path position, lighting that position and the `length - 1`
/// positions behind it, wrapping around the path.
fn trail_frames(path: &[(usize, usize)], rows: usize, cols: usize, length: usize) -> Vec<String> {
    let n = path.len();
    (0..n)
        .map(|i| {
            let mut grid = Grid::new(rows, cols);
            for t in 0..length {
                let (r, c) = path[(i + n - (t % n)) % n];
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
    fn test_scan_enters_and_exits_blank_edges() {
        let frames = scan();
        assert_eq!(frames.len(), 10);
        assert_eq!(frames[0], "⠀⠀⠀⠀");
        assert_eq!(frames[2], "⣿⠀⠀⠀");
        assert_eq!(frames[9], "⠀⠀⠀⢸");
    }

    #[test]
    fn test_rain_repeats_after_virtual_height() {
        let frames = rain();
        assert_eq!(frames.len(), 12);
        assert_eq!(frames[..6], frames[6..]);
    }

    #[test]
    fn test_scanline_bounces() {
        let frames = scanline();
        assert_eq!(frames.len(), 6);
        assert_eq!(frames[0], "⠉⠉⠉");
        assert_eq!(frames[3], "⣄⣄⣄");
        assert_eq!(frames[1], frames[5]);
        assert_eq!(frames[2], frames[4]);
    }

    #[test]
    fn test_snake_visits_every_cell() {
        let frames = snake();
        assert_eq!(frames.len(), 16);
        assert_eq!(frames[3], "⠉⠉"); // head reached the end of the top row
        assert_eq!(frames[15], "⣀⣀");
    }

    #[test]
    fn test_cascade_starts_and_ends_mostly_blank() {
        let frames = cascade();
        assert_eq!(frames.len(), 14);
        assert_eq!(frames[0], "⠀⠀⠀⠀");
        assert_eq!(frames[1], "⠀⠀⠀⠀");
        assert_eq!(frames[2], "⠁⠀⠀⠀");
        assert_eq!(frames[13], "⠀⠀⠀⢀");
    }

    #[test]
    fn test_orbit_lights_two_dots() {
        let frames = orbit();
        assert_eq!(frames, ["⠃", "⠉", "⠘", "⠰", "⢠", "⣀", "⡄", "⠆"]);
    }
}
