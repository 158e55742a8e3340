//! TUI Starfield (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, the
//! integration tests and the benches share a single
//! `tui_starfield::{core,engine,input,term,types}` path.

pub use tui_starfield_core as core;
pub use tui_starfield_engine as engine;
pub use tui_starfield_input as input;
pub use tui_starfield_term as term;
pub use tui_starfield_types as types;
