//! Falling debris and the spawner that feeds it.

use std::rc::Rc;

use log::debug;
use tui_starfield_core::types::DEBRIS_SPEED;
use tui_starfield_core::{blit, spawn_delay, Error, Frame, ObstacleId, Result};

use super::explosion::Explosion;
use crate::scheduler::{Behavior, Context, Pause, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallPhase {
    Launch,
    Descending,
    Exploding,
    Done,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Launch,
    Descending(ObstacleId),
    Exploding(ObstacleId),
    Done,
}

/// One piece of debris falling straight down.
///
/// Owns its obstacle: the box is registered on the first step, together with
/// the first draw, moved every tick and removed exactly once, either when it
/// falls off the bottom or when a projectile has marked it.
#[derive(Debug)]
pub struct DebrisFall {
    frame: Rc<Frame>,
    row: f64,
    column: f64,
    speed: f64,
    drawn: bool,
    state: State,
}

impl DebrisFall {
    /// Debris entering at row 0. `column` is clamped into the canvas on the
    /// first step.
    pub fn new(column: f64, frame: Rc<Frame>, speed: f64) -> Self {
        Self {
            frame,
            row: 0.0,
            column,
            speed,
            drawn: false,
            state: State::Launch,
        }
    }

    /// The registered obstacle, once launched and until removed.
    pub fn obstacle(&self) -> Option<ObstacleId> {
        match self.state {
            State::Descending(id) | State::Exploding(id) => Some(id),
            State::Launch | State::Done => None,
        }
    }

    pub fn row(&self) -> f64 {
        self.row
    }

    pub fn column(&self) -> f64 {
        self.column
    }

    pub fn phase(&self) -> FallPhase {
        match self.state {
            State::Launch => FallPhase::Launch,
            State::Descending(_) => FallPhase::Descending,
            State::Exploding(_) => FallPhase::Exploding,
            State::Done => FallPhase::Done,
        }
    }

    fn center(&self) -> (f64, f64) {
        let (height, width) = self.frame.size();
        (
            self.row + height as f64 / 2.0,
            self.column + width as f64 / 2.0,
        )
    }

    fn launch(&mut self, cx: &mut Context<'_>) -> ObstacleId {
        let (_, columns) = cx.extent();
        self.column = self
            .column
            .clamp(0.0, f64::from(columns.saturating_sub(1)));
        let (height, width) = self.frame.size();
        cx.world
            .obstacles
            .register(self.row, self.column, height as u16, width as u16)
    }

    fn descend(&mut self, cx: &mut Context<'_>, id: ObstacleId) -> Step {
        if self.drawn {
            blit(cx.canvas(), self.row, self.column, &self.frame, true);
            self.drawn = false;
        }

        if cx.world.hits.take(id) {
            self.state = State::Exploding(id);
            return Step::Continue;
        }

        self.row += self.speed;
        let (rows, _) = cx.extent();
        if self.row >= f64::from(rows) {
            cx.world.obstacles.unregister(id);
            self.state = State::Done;
            return Step::Done;
        }

        blit(cx.canvas(), self.row, self.column, &self.frame, false);
        self.drawn = true;
        cx.world.obstacles.relocate(id, self.row, self.column);
        self.state = State::Descending(id);
        Step::Yield
    }
}

impl Behavior for DebrisFall {
    fn name(&self) -> &'static str {
        "debris"
    }

    fn step(&mut self, cx: &mut Context<'_>) -> Result<Step> {
        match self.state {
            State::Launch => {
                let id = self.launch(cx);
                Ok(self.descend(cx, id))
            }
            State::Descending(id) => Ok(self.descend(cx, id)),
            State::Exploding(id) => {
                cx.world.obstacles.unregister(id);
                let (row, column) = self.center();
                debug!("debris {} destroyed at row {:.1}", id.raw(), row);
                cx.spawn(Explosion::new(row, column));
                self.state = State::Done;
                Ok(Step::Continue)
            }
            State::Done => Ok(Step::Done),
        }
    }
}

/// Drops debris at a rate set by the current year.
#[derive(Debug)]
pub struct DebrisSpawner {
    frames: Vec<Rc<Frame>>,
    speed: f64,
    pause: Pause,
}

impl DebrisSpawner {
    pub fn new(frames: Vec<Rc<Frame>>) -> Self {
        Self {
            frames,
            speed: DEBRIS_SPEED,
            pause: Pause::default(),
        }
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }
}

impl Behavior for DebrisSpawner {
    fn name(&self) -> &'static str {
        "debris_spawner"
    }

    fn step(&mut self, cx: &mut Context<'_>) -> Result<Step> {
        if self.pause.pending() {
            return Ok(Step::Yield);
        }

        let Some(delay) = spawn_delay(cx.world.year) else {
            return Ok(self.pause.sleep(1));
        };

        if self.frames.is_empty() {
            return Err(Error::EmptyFrameSet {
                name: "debris".to_string(),
            });
        }

        let (_, columns) = cx.extent();
        let column = cx
            .world
            .rng
            .range_inclusive(1, u32::from(columns.saturating_sub(2)));
        let index = cx.world.rng.next_range(self.frames.len() as u32) as usize;
        let frame = Rc::clone(&self.frames[index]);

        debug!(
            "year {}: debris at column {}, next in {} ticks",
            cx.world.year, column, delay
        );
        cx.spawn(DebrisFall::new(f64::from(column), frame, self.speed));
        Ok(self.pause.sleep(delay))
    }
}
