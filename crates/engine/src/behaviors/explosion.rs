//! Explosion: a short, purely cosmetic animation.

use std::sync::OnceLock;

use tui_starfield_core::{blit, Frame, Result};

use crate::scheduler::{Behavior, Context, Step};

const EXPLOSION_FRAMES: [&str; 4] = [
    "           (_)
       (  (   (  (
      () (  (  )
        ( )  ()
",
    "           (_)
       (  (   (
         (  (  )
          )  (
",
    "            (
          (   (
         (     (
          )  (
",
    "            (
              (
            (
",
];

fn frames() -> &'static [Frame] {
    static FRAMES: OnceLock<Vec<Frame>> = OnceLock::new();
    FRAMES.get_or_init(|| EXPLOSION_FRAMES.iter().map(|t| Frame::from_text(t)).collect())
}

/// Plays every explosion frame for one tick each, centered on a point.
#[derive(Debug, Clone)]
pub struct Explosion {
    corner_row: f64,
    corner_column: f64,
    next: usize,
    shown: Option<usize>,
}

impl Explosion {
    pub fn new(center_row: f64, center_column: f64) -> Self {
        let (rows, columns) = frames().first().map(Frame::size).unwrap_or((0, 0));
        Self {
            corner_row: center_row - rows as f64 / 2.0,
            corner_column: center_column - columns as f64 / 2.0,
            next: 0,
            shown: None,
        }
    }

    /// Number of ticks the explosion stays on screen.
    pub fn duration() -> usize {
        frames().len()
    }
}

impl Behavior for Explosion {
    fn name(&self) -> &'static str {
        "explosion"
    }

    fn step(&mut self, cx: &mut Context<'_>) -> Result<Step> {
        let frames = frames();

        if let Some(shown) = self.shown.take() {
            blit(cx.canvas(), self.corner_row, self.corner_column, &frames[shown], true);
        } else if self.next == 0 {
            cx.canvas().beep();
        }

        let Some(frame) = frames.get(self.next) else {
            return Ok(Step::Done);
        };
        blit(cx.canvas(), self.corner_row, self.corner_column, frame, false);
        self.shown = Some(self.next);
        self.next += 1;
        Ok(Step::Yield)
    }
}
