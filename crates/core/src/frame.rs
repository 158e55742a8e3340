//! Frame model - immutable text sprites and how they land on a canvas.
//!
//! A frame is a multi-line text block. Spaces are transparent: drawing a frame
//! never overwrites what is under its blank cells, and erasing it only blanks
//! the cells it actually covers.

use crate::canvas::Canvas;
use crate::types::Attr;

/// An immutable, sparse character grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    lines: Vec<Vec<char>>,
    width: usize,
}

impl Frame {
    /// Build a frame from a text block.
    ///
    /// ```
    /// use tui_starfield_core::Frame;
    ///
    /// let frame = Frame::from_text(" /\\\n/__\\\n");
    /// assert_eq!(frame.size(), (2, 4));
    /// assert_eq!(frame.pixel(0, 0), None);
    /// assert_eq!(frame.pixel(0, 1), Some('/'));
    /// ```
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();
        let width = lines.iter().map(Vec::len).max().unwrap_or(0);
        Self { lines, width }
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Length of the longest line.
    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`
    pub fn size(&self) -> (usize, usize) {
        (self.height(), self.width)
    }

    /// True when the frame has no visible character at all.
    pub fn is_blank(&self) -> bool {
        self.pixels().next().is_none()
    }

    /// Visible character at `(row, col)`; `None` for spaces and outside the frame.
    pub fn pixel(&self, row: usize, col: usize) -> Option<char> {
        self.lines
            .get(row)
            .and_then(|line| line.get(col))
            .copied()
            .filter(|&ch| ch != ' ')
    }

    /// Every visible `(row, col, symbol)` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.lines.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter(|(_, &ch)| ch != ' ')
                .map(move |(col, &ch)| (row, col, ch))
        })
    }
}

/// Draw (or erase) `frame` with its top-left corner at `(start_row, start_column)`.
///
/// The corner is rounded to the nearest cell. Cells outside the canvas are
/// clipped, and the canvas's bottom-right cell is never written: plotting
/// there scrolls some terminals.
pub fn blit<C: Canvas + ?Sized>(
    canvas: &mut C,
    start_row: f64,
    start_column: f64,
    frame: &Frame,
    erase: bool,
) {
    let top = start_row.round() as i64;
    let left = start_column.round() as i64;

    for (row, col, ch) in frame.pixels() {
        let symbol = if erase { ' ' } else { ch };
        put_symbol(canvas, top + row as i64, left + col as i64, symbol, Attr::Normal);
    }
}

/// Write a single line of text, with the same clipping rules as [`blit`].
pub fn draw_text<C: Canvas + ?Sized>(canvas: &mut C, row: i64, column: i64, text: &str, attr: Attr) {
    for (offset, ch) in text.chars().enumerate() {
        put_symbol(canvas, row, column + offset as i64, ch, attr);
    }
}

/// Plot one symbol, with the same clipping rules as [`blit`].
pub fn put_symbol<C: Canvas + ?Sized>(canvas: &mut C, row: i64, column: i64, symbol: char, attr: Attr) {
    let (rows, columns) = canvas.extent();
    let (rows, columns) = (i64::from(rows), i64::from(columns));

    if row < 0 || column < 0 || row >= rows || column >= columns {
        return;
    }
    if row == rows - 1 && column == columns - 1 {
        return;
    }
    canvas.plot(row as u16, column as u16, symbol, attr);
}
