//! The player's spaceship.

use std::rc::Rc;

use log::info;
use tui_starfield_core::types::ROCKET_FRAME_TICKS;
use tui_starfield_core::{blit, CellRect, Error, Frame, MotionLimits, Result};

use super::explosion::Explosion;
use super::game_over::GameOver;
use super::projectile::Projectile;
use crate::scheduler::{Behavior, Context, Step};

/// Where the sprite was last drawn, so it can be erased.
#[derive(Debug, Clone, Copy)]
struct Drawn {
    row: f64,
    column: f64,
    frame: usize,
}

/// Steers with inertia, fires once the gun is available, and dies on the
/// first contact with debris.
#[derive(Debug)]
pub struct Spaceship {
    frames: Rc<[Frame]>,
    game_over: Rc<Frame>,
    row: f64,
    column: f64,
    row_speed: f64,
    column_speed: f64,
    limits: MotionLimits,
    tick: u32,
    drawn: Option<Drawn>,
}

impl Spaceship {
    pub fn new(frames: Rc<[Frame]>, game_over: Rc<Frame>, row: f64, column: f64) -> Self {
        Self {
            frames,
            game_over,
            row,
            column,
            row_speed: 0.0,
            column_speed: 0.0,
            limits: MotionLimits::default(),
            tick: 0,
            drawn: None,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.column)
    }

    pub fn velocity(&self) -> (f64, f64) {
        (self.row_speed, self.column_speed)
    }

    fn current_frame(&self) -> usize {
        (self.tick / ROCKET_FRAME_TICKS) as usize % self.frames.len()
    }
}

impl Behavior for Spaceship {
    fn name(&self) -> &'static str {
        "spaceship"
    }

    fn step(&mut self, cx: &mut Context<'_>) -> Result<Step> {
        if self.frames.is_empty() {
            return Err(Error::EmptyFrameSet {
                name: "rocket".to_string(),
            });
        }

        if let Some(drawn) = self.drawn.take() {
            blit(cx.canvas(), drawn.row, drawn.column, &self.frames[drawn.frame], true);
        }

        let controls = cx.world.controls;
        let (row_speed, column_speed) = self.limits.update(
            self.row_speed,
            self.column_speed,
            controls.rows_direction,
            controls.columns_direction,
        );
        self.row_speed = row_speed;
        self.column_speed = column_speed;

        let frame_index = self.current_frame();
        let (height, width) = self.frames[frame_index].size();
        let (rows, columns) = cx.extent();
        let max_row = f64::from(rows) - height as f64 - 1.0;
        let max_column = f64::from(columns) - width as f64 - 1.0;
        self.row = (self.row + row_speed).min(max_row).max(1.0);
        self.column = (self.column + column_speed).min(max_column).max(1.0);

        let hull = CellRect::from_box(self.row, self.column, height as u16, width as u16);
        let hit = cx
            .world
            .obstacles
            .all()
            .iter()
            .find_map(|obstacle| obstacle.cells().intersection(&hull));
        if let Some(overlap) = hit {
            let (center_row, center_column) = overlap.center();
            info!(
                "spaceship destroyed in {} at ({:.1}, {:.1})",
                cx.world.year, center_row, center_column
            );
            cx.spawn(Explosion::new(center_row, center_column));
            cx.spawn(GameOver::new(Rc::clone(&self.game_over)));
            return Ok(Step::Done);
        }

        if controls.fire && cx.world.gun_ready() {
            cx.spawn(Projectile::new(self.row, self.column + (width / 2) as f64));
        }

        blit(cx.canvas(), self.row, self.column, &self.frames[frame_index], false);
        self.drawn = Some(Drawn {
            row: self.row,
            column: self.column,
            frame: frame_index,
        });
        self.tick = self.tick.wrapping_add(1);
        Ok(Step::Yield)
    }
}
