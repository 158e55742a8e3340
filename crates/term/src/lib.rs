//! Terminal rendering for the starfield.
//!
//! Behaviors draw into a [`FrameBuffer`] through the core `Canvas` trait; the
//! [`TerminalRenderer`] flushes it to a real terminal with crossterm, writing
//! only the cells that changed since the last frame.

pub mod fb;
pub mod renderer;

pub use tui_starfield_core as core;
pub use tui_starfield_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
