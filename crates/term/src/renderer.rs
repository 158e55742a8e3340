//! TerminalRenderer: flushes a framebuffer to a real terminal.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer};

/// ASCII BEL.
const BELL: u8 = 0x07;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch to raw mode on the alternate screen with the cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo [`enter`](Self::enter). Safe to call after a failed frame.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Flush a framebuffer to the terminal.
    ///
    /// The first frame is a full redraw; later frames rewrite only the cells
    /// that differ from the previous call. A pending bell is rung after the
    /// cells are written.
    pub fn draw(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        match &self.last {
            Some(prev) => encode_diff_into(prev, fb, &mut self.buf)?,
            None => encode_full_into(fb, &mut self.buf)?,
        }
        if fb.take_bell() {
            self.buf.push(BELL);
        }
        self.flush_buf()?;

        match &mut self.last {
            Some(prev) => prev.copy_from(fb),
            None => self.last = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Tracks the attributes last sent so each run only emits real changes.
#[derive(Default)]
struct StyleCursor(Option<CellStyle>);

impl StyleCursor {
    fn print(&mut self, out: &mut Vec<u8>, cell: &Cell) -> Result<()> {
        if self.0 != Some(cell.style) {
            out.queue(SetAttribute(Attribute::Reset))?;
            if cell.style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            if cell.style.dim {
                out.queue(SetAttribute(Attribute::Dim))?;
            }
            self.0 = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out` without touching stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut style = StyleCursor::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for cell in fb.row(y) {
            style.print(out, cell)?;
        }
    }
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the runs of cells that differ between `prev` and `next`.
///
/// Falls back to a full redraw when the two surfaces differ in size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return encode_full_into(next, out);
    }

    let mut style = StyleCursor::default();
    for y in 0..next.height() {
        let row = next.row(y);
        for (start, end) in changed_runs(prev.row(y), row) {
            out.queue(cursor::MoveTo(start as u16, y))?;
            for cell in &row[start..end] {
                style.print(out, cell)?;
            }
        }
    }
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Half-open `(start, end)` column ranges where two equal-length rows differ.
fn changed_runs(before: &[Cell], after: &[Cell]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut open: Option<usize> = None;
    for (x, (a, b)) in before.iter().zip(after).enumerate() {
        match (a == b, open) {
            (false, None) => open = Some(x),
            (true, Some(start)) => {
                runs.push((start, x));
                open = None;
            }
            _ => {}
        }
    }
    if let Some(start) = open {
        runs.push((start, after.len()));
    }
    runs
}
