//! Animations driven by continuous functions: rings and sinusoids sampled onto the grid.

use std::f64::consts::PI;

use super::{HEIGHT, frame_where};
use crate::grid::Grid;

/// Map a value in `[-1, 1]` onto a dot row, top = 0.
fn sine_row(value: f64) -> usize {
    ((value + 1.0) / 2.0 * (HEIGHT - 1) as f64).round() as usize
}

/// Concentric rings expanding out of the grid center.
pub fn pulse() -> Vec<String> {
    const WIDTH: usize = 6;
    const RADII: [f64; 5] = [0.5, 1.2, 2.0, 3.0, 3.5];
    const TOLERANCE: f64 = 0.9;

    let cx = WIDTH as f64 / 2.0 - 0.5;
    let cy = HEIGHT as f64 / 2.0 - 0.5;

    RADII
        .iter()
        .map(|&radius| {
            frame_where(HEIGHT, WIDTH, |r, c| {
                let dist = ((c as f64 - cx).powi(2) + (r as f64 - cy).powi(2)).sqrt();
                (dist - radius).abs() < TOLERANCE
            })
        })
        .collect()
}

/// A travelling sine wave, one dot per column, with a faint dot riding above
/// the crest on every third column/tick.
pub fn waverows() -> Vec<String> {
    const WIDTH: usize = 8;
    const FRAMES: usize = 16;

    (0..FRAMES)
        .map(|f| {
            let mut grid = Grid::new(HEIGHT, WIDTH);
            for c in 0..WIDTH {
                let phase = f as f64 - c as f64 * 0.5;
                let row = sine_row((phase * 0.8).sin());
                grid.raise(row, c);
                if row > 0 && (f + c) % 3 == 0 {
                    grid.raise(row - 1, c);
                }
            }
            grid.to_braille()
        })
        .collect()
}

/// Two sinusoids half a period apart, crossing like a double helix.
pub fn helix() -> Vec<String> {
    const WIDTH: usize = 8;
    const FRAMES: usize = 16;

    (0..FRAMES)
        .map(|f| {
            let mut grid = Grid::new(HEIGHT, WIDTH);
            for c in 0..WIDTH {
                let phase = (f + c) as f64 * (PI / 4.0);
                grid.raise(sine_row(phase.sin()), c);
                grid.raise(sine_row((phase + PI).sin()), c);
            }
            grid.to_braille()
        })
        .collect()
}
