//! Single-line redraw with cursor and raw-mode cleanup.

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, MoveToColumn, Show},
    execute, queue,
    style::Print,
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use std::io::Write;

/// Owns the line an animation is drawn on.
///
/// The cursor is hidden while the guard lives. Dropping it restores the
/// cursor (and cooked mode, when raw mode was enabled), also on early return
/// or panic.
pub struct LineGuard<W: Write> {
    out: W,
    raw: bool,
}

impl<W: Write> LineGuard<W> {
    /// Hide the cursor.
    pub fn hide(mut out: W) -> Result<Self> {
        execute!(out, Hide).context("Failed to hide cursor")?;
        Ok(Self { out, raw: false })
    }

    /// Hide the cursor and enable raw mode so single key presses can be read.
    pub fn raw(out: W) -> Result<Self> {
        let mut guard = Self::hide(out)?;
        enable_raw_mode().context("Failed to enable raw mode")?;
        guard.raw = true;
        Ok(guard)
    }

    /// Replace the current line with `line`.
    pub fn redraw(&mut self, line: &str) -> Result<()> {
        queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(line)
        )?;
        self.out.flush()?;
        Ok(())
    }

    /// Replace the current line with `line` and move to the next one.
    pub fn finish(&mut self, line: &str) -> Result<()> {
        self.redraw(line)?;
        // Raw mode does not translate "\n" into a carriage return.
        queue!(self.out, Print("\r\n"))?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for LineGuard<W> {
    fn drop(&mut self) {
        if self.raw {
            let _ = disable_raw_mode();
        }
        let _ = execute!(self.out, Show);
    }
}
