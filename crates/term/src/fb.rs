//! Framebuffer and style types for terminal rendering.
//!
//! The framebuffer is a persistent surface: nothing is cleared between ticks,
//! every behavior erases what it drew itself.

use tui_starfield_core::Canvas;
use tui_starfield_types::Attr;

/// Per-cell text attributes. Colors are left to the terminal's defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub fn for_attr(attr: Attr) -> Self {
        Self {
            bold: attr == Attr::Bold,
            dim: attr == Attr::Dim,
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells, addressed as `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    bell: bool,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
            bell: false,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of cells, empty when `y` is off the surface.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = (y as usize) * (self.width as usize);
        &self.cells[start..start + self.width as usize]
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Copy cells and size from `other`, reusing the allocation.
    ///
    /// The bell flag is not copied.
    pub fn copy_from(&mut self, other: &FrameBuffer) {
        self.width = other.width;
        self.height = other.height;
        self.cells.clear();
        self.cells.extend_from_slice(&other.cells);
    }

    /// Frame the playfield with a single-line box.
    pub fn draw_border(&mut self) {
        if self.width < 2 || self.height < 2 {
            return;
        }
        let style = CellStyle::default();
        let right = self.width - 1;
        let bottom = self.height - 1;
        for x in 1..right {
            self.put_char(x, 0, '─', style);
            self.put_char(x, bottom, '─', style);
        }
        for y in 1..bottom {
            self.put_char(0, y, '│', style);
            self.put_char(right, y, '│', style);
        }
        self.put_char(0, 0, '┌', style);
        self.put_char(right, 0, '┐', style);
        self.put_char(0, bottom, '└', style);
        self.put_char(right, bottom, '┘', style);
    }

    /// Return and reset the pending bell request.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell)
    }
}

impl Canvas for FrameBuffer {
    fn extent(&self) -> (u16, u16) {
        (self.height, self.width)
    }

    fn plot(&mut self, row: u16, column: u16, symbol: char, attr: Attr) {
        self.put_char(column, row, symbol, CellStyle::for_attr(attr));
    }

    fn beep(&mut self) {
        self.bell = true;
    }
}
