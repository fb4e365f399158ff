//! Boolean dot grids and their braille encoding.
//!
//! Each braille character is a 2-column × 4-row dot cell. Dot numbering and
//! bit values within one cell:
//!
//! ```text
//! row 0:  dot1 (0x01)  dot4 (0x08)
//! row 1:  dot2 (0x02)  dot5 (0x10)
//! row 2:  dot3 (0x04)  dot6 (0x20)
//! row 3:  dot7 (0x40)  dot8 (0x80)
//! ```
//!
//! A glyph is `U+2800 | bits`, so every cell maps onto the braille block.

/// First codepoint of the Unicode braille block (the blank cell).
pub const BRAILLE_BASE: u32 = 0x2800;

/// Dot rows per braille cell.
pub const CELL_ROWS: usize = 4;

/// Dot columns per braille cell.
pub const CELL_COLS: usize = 2;

const BRAILLE_DOT_MAP: [[u8; CELL_COLS]; CELL_ROWS] = [
    [0x01, 0x08], // row 0
    [0x02, 0x10], // row 1
    [0x04, 0x20], // row 2
    [0x40, 0x80], // row 3
];

/// Bit value of the dot at `(row, col)` inside one cell, if the position exists.
pub fn dot_bit(row: usize, col: usize) -> Option<u8> {
    BRAILLE_DOT_MAP.get(row)?.get(col).copied()
}

/// Map an 8-bit dot mask to its braille character.
pub fn braille_glyph(bits: u8) -> char {
    // The whole 0x2800..=0x28FF range is assigned, so this never falls back.
    char::from_u32(BRAILLE_BASE | bits as u32).unwrap_or('\u{2800}')
}

/// A rectangular matrix of dots, row-major, indexed `[row][col]`.
///
/// `true` is a raised dot. A grid with a zero dimension holds no rows at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<bool>>,
}

impl Grid {
    /// Create a grid of `rows` × `cols` lowered dots.
    pub fn new(rows: usize, cols: usize) -> Self {
        if rows == 0 || cols == 0 {
            return Self::default();
        }
        Self {
            rows: vec![vec![false; cols]; rows],
        }
    }

    /// Create a grid with every dot raised.
    pub fn full(rows: usize, cols: usize) -> Self {
        let mut grid = Self::new(rows, cols);
        grid.fill();
        grid
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width taken from the first row (0 for an empty grid).
    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Read one dot. Positions outside the grid read as lowered.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Write one dot. Positions outside the grid are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = value;
        }
    }

    /// Raise one dot.
    pub fn raise(&mut self, row: usize, col: usize) {
        self.set(row, col, true);
    }

    /// Raise every dot.
    pub fn fill(&mut self) {
        for row in &mut self.rows {
            row.fill(true);
        }
    }

    /// Encode into one braille character per 2-column slice.
    pub fn to_braille(&self) -> String {
        grid_to_braille(&self.rows)
    }
}

impl From<Vec<Vec<bool>>> for Grid {
    fn from(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }
}

/// Create a grid from signed dimensions.
///
/// Non-positive dimensions yield the empty grid rather than an error.
pub fn make_grid(rows: i64, cols: i64) -> Grid {
    match (usize::try_from(rows), usize::try_from(cols)) {
        (Ok(rows), Ok(cols)) => Grid::new(rows, cols),
        _ => Grid::default(),
    }
}

/// Encode a dot matrix into a braille string.
///
/// The width comes from row 0 and yields `ceil(cols / 2)` characters. Rows past
/// the fourth are ignored, missing rows and missing columns (odd widths, short
/// rows) count as lowered dots. This never fails: an empty matrix encodes to
/// the empty string.
pub fn grid_to_braille(rows: &[Vec<bool>]) -> String {
    let cols = rows.first().map_or(0, Vec::len);
    let char_count = cols.div_ceil(CELL_COLS);

    (0..char_count)
        .map(|c| {
            let mut bits = 0u8;
            for (r, row) in rows.iter().take(CELL_ROWS).enumerate() {
                for d in 0..CELL_COLS {
                    let col = c * CELL_COLS + d;
                    if col < cols && row.get(col).copied().unwrap_or(false) {
                        bits |= BRAILLE_DOT_MAP[r][d];
                    }
                }
            }
            braille_glyph(bits)
        })
        .collect()
}
