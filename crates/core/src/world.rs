//! Shared world state handed to every behavior step.
//!
//! | Field | Written by | Read by |
//! |-------|-----------|---------|
//! | `year` | world clock only | spawner, spaceship, status line |
//! | `fire_year` | bootstrap | spaceship |
//! | `obstacles` | each debris, for its own id | spaceship, projectiles |
//! | `hits` | projectiles (mark), debris (take) | debris |
//! | `controls` | game loop, before each tick | spaceship |
//! | `rng` | spawner | - |
//!
//! Behaviors run one at a time, so plain `&mut World` access is enough.

use crate::obstacle::{CollisionMarks, ObstacleRegistry};
use crate::rng::SimpleRng;
use crate::types::{Controls, FIRE_YEAR, START_YEAR};

#[derive(Debug)]
pub struct World {
    pub year: u32,
    pub fire_year: u32,
    pub obstacles: ObstacleRegistry,
    pub hits: CollisionMarks,
    pub controls: Controls,
    pub rng: SimpleRng,
}

impl World {
    pub fn new(start_year: u32, seed: u32) -> Self {
        Self {
            year: start_year,
            fire_year: FIRE_YEAR,
            obstacles: ObstacleRegistry::new(),
            hits: CollisionMarks::new(),
            controls: Controls::default(),
            rng: SimpleRng::new(seed),
        }
    }

    /// Has the spaceship got its gun yet?
    pub fn gun_ready(&self) -> bool {
        self.year >= self.fire_year
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(START_YEAR, 1)
    }
}
