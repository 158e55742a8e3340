//! Drawing surface seen by behaviors.

use crate::types::Attr;

/// A persistent character surface.
///
/// Nothing is cleared between ticks: whatever a behavior plots stays on screen
/// until something plots over it, so every sprite erases itself before moving.
pub trait Canvas {
    /// `(rows, columns)` of the surface.
    fn extent(&self) -> (u16, u16);

    /// Plot one character. Out-of-range coordinates are ignored.
    fn plot(&mut self, row: u16, column: u16, symbol: char, attr: Attr);

    /// Request the terminal bell on the next flush.
    fn beep(&mut self) {}
}
