//! Projectile fired by the spaceship.

use tui_starfield_core::types::{Attr, PROJECTILE_COLUMN_SPEED, PROJECTILE_ROW_SPEED};
use tui_starfield_core::{put_symbol, Result};

use crate::scheduler::{Behavior, Context, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Spark,
    Glow,
    Flight,
}

/// A shot travelling in a straight line.
///
/// Shows a two-tick muzzle flash, then flies until it leaves the playfield or
/// touches debris. A shot credits at most one obstacle.
#[derive(Debug, Clone)]
pub struct Projectile {
    row: f64,
    column: f64,
    row_speed: f64,
    column_speed: f64,
    phase: Phase,
    drawn: bool,
}

impl Projectile {
    pub fn new(row: f64, column: f64) -> Self {
        Self::with_speed(row, column, PROJECTILE_ROW_SPEED, PROJECTILE_COLUMN_SPEED)
    }

    pub fn with_speed(row: f64, column: f64, row_speed: f64, column_speed: f64) -> Self {
        Self {
            row,
            column,
            row_speed,
            column_speed,
            phase: Phase::Spark,
            drawn: false,
        }
    }

    pub fn row(&self) -> f64 {
        self.row
    }

    pub fn column(&self) -> f64 {
        self.column
    }

    pub fn in_flight(&self) -> bool {
        self.phase == Phase::Flight
    }

    fn symbol(&self) -> char {
        if self.column_speed != 0.0 {
            '-'
        } else {
            '|'
        }
    }

    fn put(&self, cx: &mut Context<'_>, symbol: char) {
        put_symbol(
            cx.canvas(),
            self.row.round() as i64,
            self.column.round() as i64,
            symbol,
            Attr::Normal,
        );
    }
}

impl Behavior for Projectile {
    fn name(&self) -> &'static str {
        "projectile"
    }

    fn step(&mut self, cx: &mut Context<'_>) -> Result<Step> {
        match self.phase {
            Phase::Spark => {
                self.put(cx, '*');
                self.phase = Phase::Glow;
                Ok(Step::Yield)
            }
            Phase::Glow => {
                self.put(cx, 'O');
                cx.canvas().beep();
                self.drawn = true;
                self.phase = Phase::Flight;
                Ok(Step::Yield)
            }
            Phase::Flight => {
                if self.drawn {
                    self.put(cx, ' ');
                    self.drawn = false;
                }

                self.row += self.row_speed;
                self.column += self.column_speed;

                let (rows, columns) = cx.extent();
                let max_row = f64::from(rows) - 1.0;
                let max_column = f64::from(columns) - 1.0;
                let inside = 0.0 < self.row
                    && self.row < max_row
                    && 0.0 < self.column
                    && self.column < max_column;
                if !inside {
                    return Ok(Step::Done);
                }

                if let Some(id) = cx.world.obstacles.overlaps_point(self.row, self.column) {
                    cx.world.hits.mark(id);
                    return Ok(Step::Done);
                }

                self.put(cx, self.symbol());
                self.drawn = true;
                Ok(Step::Yield)
            }
        }
    }
}
