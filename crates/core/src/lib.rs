//! Simulation core - sprites, obstacles, motion and the shared world
//!
//! Everything the behaviors touch lives here, with no dependency on a
//! terminal, a keyboard or a clock:
//!
//! - **Deterministic**: the same seed produces the same sky and the same debris
//! - **Testable**: every rule is a plain function or a plain struct
//! - **Portable**: drawing goes through the [`Canvas`] trait, so any back end works
//!
//! # Module Structure
//!
//! - [`frame`]: immutable text sprites and clipped drawing onto a canvas
//! - [`canvas`]: the drawing surface trait
//! - [`obstacle`]: debris bounding boxes, overlap queries and collision marks
//! - [`physics`]: spaceship velocity with inertia
//! - [`timeline`]: debris rate and milestones by year
//! - [`world`]: the state shared by all behaviors
//! - [`rng`]: seeded LCG
//! - [`assets`]: loading `{name}_frame_{n}.txt` sprites
//!
//! # Example
//!
//! ```
//! use tui_starfield_core::{ObstacleRegistry, update_velocity};
//!
//! let mut obstacles = ObstacleRegistry::new();
//! let id = obstacles.register(0.0, 10.0, 3, 5);
//! assert_eq!(obstacles.overlaps(2.0, 14.0, 1, 1), vec![id]);
//!
//! let (row_speed, col_speed) = update_velocity(0.0, 0.0, -1, 0);
//! assert!(row_speed < 0.0);
//! assert_eq!(col_speed, 0.0);
//! ```

pub mod assets;
pub mod canvas;
pub mod error;
pub mod frame;
pub mod obstacle;
pub mod physics;
pub mod rng;
pub mod timeline;
pub mod world;

pub use tui_starfield_types as types;

pub use assets::{frame_path, load_frame, load_frame_set, Sprites};
pub use canvas::Canvas;
pub use error::{Error, Result};
pub use frame::{blit, draw_text, put_symbol, Frame};
pub use obstacle::{CellRect, CollisionMarks, Obstacle, ObstacleId, ObstacleRegistry};
pub use physics::{update_velocity, MotionLimits};
pub use rng::SimpleRng;
pub use timeline::{phrase, spawn_delay};
pub use world::World;
