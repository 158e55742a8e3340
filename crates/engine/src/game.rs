//! Game bootstrap - builds the world and the initial set of behaviors.

use std::rc::Rc;

use log::info;
use tui_starfield_core::types::{
    Controls, GameConfig, MAX_SPARKLE_OFFSET, MIN_COLS, MIN_ROWS, STAR_SYMBOLS,
};
use tui_starfield_core::{Canvas, Error, Result, Sprites, World};

use crate::behaviors::{DebrisSpawner, Sparkle, Spaceship, StatusLine, WorldClock};
use crate::scheduler::{Scheduler, TickReport};

/// A running game: the shared world plus every live behavior.
pub struct Game {
    world: World,
    scheduler: Scheduler,
}

impl Game {
    /// Populate a `rows x columns` playfield.
    ///
    /// Spawn order, which is also the draw order within a tick: stars,
    /// spaceship, debris spawner, world clock, status line.
    pub fn new(config: &GameConfig, sprites: &Sprites, rows: u16, columns: u16) -> Result<Self> {
        if rows < MIN_ROWS || columns < MIN_COLS {
            return Err(Error::CanvasTooSmall { rows, cols: columns });
        }

        let mut world = World::new(config.start_year, config.seed);
        let mut scheduler = Scheduler::new();

        for _ in 0..config.stars {
            let row = world.rng.range_inclusive(1, u32::from(rows - 3)) as u16;
            let column = world.rng.range_inclusive(1, u32::from(columns - 2)) as u16;
            let symbol = world.rng.choose(&STAR_SYMBOLS).copied().unwrap_or('*');
            let offset = world.rng.range_inclusive(0, MAX_SPARKLE_OFFSET);
            scheduler.spawn(Sparkle::new(row, column, symbol, offset));
        }

        let (height, width) = sprites
            .rocket
            .first()
            .map(|frame| frame.size())
            .unwrap_or((0, 0));
        let row = (usize::from(rows).saturating_sub(height) / 2) as f64;
        let column = (usize::from(columns).saturating_sub(width) / 2) as f64;
        scheduler.spawn(Spaceship::new(
            Rc::clone(&sprites.rocket),
            Rc::clone(&sprites.game_over),
            row,
            column,
        ));
        scheduler.spawn(DebrisSpawner::new(sprites.debris.clone()));
        scheduler.spawn(WorldClock::new());
        scheduler.spawn(StatusLine::new());

        info!(
            "game on a {}x{} field: {} stars, seed {}, starting in {}",
            rows, columns, config.stars, config.seed, config.start_year
        );
        Ok(Self { world, scheduler })
    }

    /// Publish this tick's controls and advance every behavior once.
    pub fn tick(&mut self, controls: Controls, canvas: &mut dyn Canvas) -> Result<TickReport> {
        self.world.controls = controls;
        self.scheduler.tick(&mut self.world, canvas)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn is_over(&self) -> bool {
        self.scheduler.contains("game_over")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_starfield_core::Frame;
    use tui_starfield_term::FrameBuffer;

    fn sprites() -> Sprites {
        Sprites {
            rocket: vec![Frame::from_text(" ^ \n/|\\"), Frame::from_text(" ^ \n/|\\\n ' ")].into(),
            debris: vec![Rc::new(Frame::from_text("##\n##"))],
            game_over: Rc::new(Frame::from_text("GAME OVER")),
        }
    }

    fn config(stars: usize) -> GameConfig {
        GameConfig {
            stars,
            seed: 7,
            ..GameConfig::default()
        }
    }

    #[test]
    fn rejects_tiny_terminal() {
        let err = Game::new(&config(10), &sprites(), 5, 80).err();
        assert!(matches!(err, Some(Error::CanvasTooSmall { rows: 5, cols: 80 })));
    }

    #[test]
    fn spawns_stars_then_the_rest() {
        let game = Game::new(&config(3), &sprites(), 24, 80).unwrap();
        let names: Vec<_> = game.scheduler().names().collect();
        assert_eq!(
            names,
            vec![
                "sparkle",
                "sparkle",
                "sparkle",
                "spaceship",
                "debris_spawner",
                "world_clock",
                "status_line"
            ]
        );
        assert_eq!(game.world().year, 1957);
    }

    #[test]
    fn nothing_is_drawn_on_the_border() {
        let mut game = Game::new(&config(200), &sprites(), 24, 80).unwrap();
        let mut fb = FrameBuffer::new(80, 24);
        for _ in 0..40 {
            game.tick(Controls::default(), &mut fb).unwrap();
        }
        for x in 0..80 {
            assert_eq!(fb.get(x, 0).unwrap().ch, ' ');
            assert_eq!(fb.get(x, 23).unwrap().ch, ' ');
        }
        for y in 0..24 {
            assert_eq!(fb.get(0, y).unwrap().ch, ' ');
            assert_eq!(fb.get(79, y).unwrap().ch, ' ');
        }
    }
}
