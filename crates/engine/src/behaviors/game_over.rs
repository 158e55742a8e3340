//! Game over banner.

use std::rc::Rc;

use tui_starfield_core::{blit, Frame, Result};

use crate::scheduler::{Behavior, Context, Step};

/// Redraws the banner in the middle of the screen every tick, forever, so
/// debris flying over it never wipes it out.
#[derive(Debug)]
pub struct GameOver {
    frame: Rc<Frame>,
    announced: bool,
}

impl GameOver {
    pub fn new(frame: Rc<Frame>) -> Self {
        Self {
            frame,
            announced: false,
        }
    }
}

impl Behavior for GameOver {
    fn name(&self) -> &'static str {
        "game_over"
    }

    fn step(&mut self, cx: &mut Context<'_>) -> Result<Step> {
        if !self.announced {
            log::info!("game over in {}", cx.world.year);
            self.announced = true;
        }

        let (rows, columns) = cx.extent();
        let (height, width) = self.frame.size();
        let row = (usize::from(rows).saturating_sub(height) / 2) as f64;
        let column = (usize::from(columns).saturating_sub(width) / 2) as f64;
        blit(cx.canvas(), row, column, &self.frame, false);
        Ok(Step::Yield)
    }
}
