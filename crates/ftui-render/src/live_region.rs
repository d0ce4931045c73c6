//! The "live region": a strip of terminal rows the renderer owns and
//! rewrites in full on every render, rather than diffing cell by cell.
//!
//! Grounded in the teacher's `ftui-render` cell-diffing kernel in spirit
//! (own a rectangle, redraw it), but deliberately simpler: no per-cell
//! buffer, no diff pass. A TUI widget's live region is a handful of
//! lines, and terminals already buffer output, so a clear-and-rewrite is
//! both easy to reason about and fast enough — and it sidesteps the
//! wide-character boundary bookkeeping a cell-diff engine needs.

use std::io::{self, Write};

use ftui_text::display_width;

/// Owns the on-screen live region and knows how to redraw it.
#[derive(Debug, Default)]
pub struct LiveRegion {
    /// Rows currently occupied by the region, excluding a trailing blank.
    lines_rendered: usize,
}

impl LiveRegion {
    #[must_use]
    pub fn new() -> Self {
        Self { lines_rendered: 0 }
    }

    /// Rows the live region currently occupies.
    #[must_use]
    pub const fn lines_rendered(&self) -> usize {
        self.lines_rendered
    }

    /// Replace the live region with `content`'s rendered lines, leaving
    /// the cursor at the end of the new region.
    ///
    /// Lines wider than `cols` are truncated at `display_width(line) ==
    /// cols` (the open question the spec leaves unresolved; this module
    /// picks truncation over terminal-side wrapping so the region's row
    /// count stays exact and predictable).
    pub fn render(&mut self, w: &mut impl Write, content: &str, cols: u16) -> io::Result<()> {
        self.clear_region(w)?;

        let lines: Vec<&str> = if content.is_empty() {
            Vec::new()
        } else {
            content.lines().collect()
        };

        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                w.write_all(b"\n")?;
            }
            w.write_all(b"\r")?;
            write_truncated(w, line, cols)?;
        }
        w.flush()?;

        self.lines_rendered = lines.len();
        Ok(())
    }

    /// Remove the live region entirely, leaving the cursor at column 1 of
    /// what was its top row.
    pub fn clear(&mut self, w: &mut impl Write) -> io::Result<()> {
        self.clear_region(w)?;
        self.lines_rendered = 0;
        Ok(())
    }

    /// Forget tracked state without touching the terminal — used when the
    /// surrounding context changes underneath the renderer (e.g. entering
    /// the alternate screen).
    pub fn repaint(&mut self) {
        self.lines_rendered = 0;
    }

    fn clear_region(&self, w: &mut impl Write) -> io::Result<()> {
        if self.lines_rendered == 0 {
            return Ok(());
        }
        w.write_all(b"\r")?;
        for row in 0..self.lines_rendered {
            w.write_all(b"\x1b[2K")?;
            if row + 1 < self.lines_rendered {
                w.write_all(b"\x1b[1A")?;
            }
        }
        Ok(())
    }
}

fn write_truncated(w: &mut impl Write, line: &str, cols: u16) -> io::Result<()> {
    let cols = usize::from(cols);
    if cols == 0 || display_width(line) <= cols {
        return w.write_all(line.as_bytes());
    }
    let mut width = 0usize;
    let mut end = line.len();
    for (byte_idx, c) in line.char_indices() {
        let w = ftui_text::utf8::char_width(c);
        if width + w > cols {
            end = byte_idx;
            break;
        }
        width += w;
    }
    w.write_all(line[..end].as_bytes())
}
