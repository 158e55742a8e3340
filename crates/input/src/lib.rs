//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Control`] values and folds
//! everything typed since the previous tick into one
//! [`crate::types::Controls`].

pub mod drain;
pub mod map;

pub use tui_starfield_types as types;

pub use drain::{collect_controls, drain_controls, MAX_KEYS_PER_TICK};
pub use map::{map_key, should_quit};
