//! Terminal starfield runner (default binary).
//!
//! Reads configuration from the environment, loads the sprite assets, then
//! runs the fixed-rate loop: drain keys, advance every behavior one tick,
//! flush the framebuffer, sleep for the rest of the tick.

use std::fs::File;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use tui_starfield::core::Sprites;
use tui_starfield::engine::{Game, TickPacer};
use tui_starfield::input::drain_controls;
use tui_starfield::term::{FrameBuffer, TerminalRenderer};
use tui_starfield::types::GameConfig;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;
    log::info!("starting with {:?}", config);

    let sprites = Sprites::load(&config.assets_dir).with_context(|| {
        format!(
            "failed to load sprites from {}",
            config.assets_dir.display()
        )
    })?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &sprites);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("fatal: {:#}", err);
    }
    result
}

/// Log to the configured file only; the screen is owned by the game.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig, sprites: &Sprites) -> Result<()> {
    let (width, height) = crossterm::terminal::size()?;
    let mut fb = FrameBuffer::new(width, height);
    let mut game = Game::new(config, sprites, height, width)?;
    let mut pacer = TickPacer::new(Duration::from_millis(config.tick_ms), Instant::now());

    loop {
        let controls = drain_controls()?;
        if controls.quit {
            log::info!(
                "quit in {} after {} ticks",
                game.world().year,
                game.scheduler().ticks()
            );
            return Ok(());
        }

        game.tick(controls, &mut fb)?;
        fb.draw_border();
        term.draw(&mut fb)?;

        let wait = pacer.finish_tick(Instant::now());
        if !wait.is_zero() {
            thread::sleep(wait);
        }
    }
}
