//! Game engine: the cooperative scheduler and the behaviors it drives.
//!
//! A [`Game`] owns a [`World`](tui_starfield_core::World) and a [`Scheduler`].
//! The binary feeds it one [`Controls`](tui_starfield_core::types::Controls)
//! value and a canvas per tick, then sleeps for whatever the [`TickPacer`]
//! says is left of the tick.

pub mod behaviors;
pub mod game;
pub mod pacer;
pub mod scheduler;

pub use tui_starfield_core as core;
pub use tui_starfield_types as types;

pub use game::Game;
pub use pacer::TickPacer;
pub use scheduler::{Behavior, Context, Pause, Scheduler, Step, TaskId, TickReport};
