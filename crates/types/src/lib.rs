//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the simulation (`core`, `engine`), the terminal back end (`term`) and the
//! keyboard layer (`input`) alike.
//!
//! # Timing
//!
//! The simulation advances in fixed ticks. Every duration below is measured in
//! ticks, not milliseconds, so changing `TICK_MS` only changes the real-time
//! speed of the whole game.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Default wall-clock tick duration |
//! | `YEAR_TICKS` | 15 | Ticks per in-game year |
//! | `SPARKLE_DIM_TICKS` | 20 | Star held dim |
//! | `SPARKLE_NORMAL_TICKS` | 3 | Star held normal (twice per cycle) |
//! | `SPARKLE_BOLD_TICKS` | 5 | Star held bold |
//! | `MAX_SPARKLE_OFFSET` | 10 | Upper bound of the random start offset |
//! | `ROCKET_FRAME_TICKS` | 2 | Ticks each spaceship frame is shown |
//!
//! # Timeline
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `START_YEAR` | 1957 | Year shown on the first tick |
//! | `FIRE_YEAR` | 2020 | First year the spaceship may fire |
//!
//! # Examples
//!
//! ```
//! use tui_starfield_types::{Control, Controls};
//!
//! let mut controls = Controls::default();
//! controls.apply(Control::Up);
//! controls.apply(Control::Fire);
//!
//! assert_eq!(controls.rows_direction, -1);
//! assert_eq!(controls.columns_direction, 0);
//! assert!(controls.fire);
//!
//! assert_eq!(Control::from_str("left"), Some(Control::Left));
//! ```

pub mod config;

pub use config::GameConfig;

/// Default tick duration in milliseconds (10 ticks per second)
pub const TICK_MS: u64 = 100;

/// Default number of stars sprinkled over the sky
pub const STAR_COUNT: usize = 100;

/// Symbols a star may be drawn with
pub const STAR_SYMBOLS: [char; 4] = ['+', '*', '.', ':'];

/// Smallest terminal height the game starts in
pub const MIN_ROWS: u16 = 16;

/// Smallest terminal width the game starts in
pub const MIN_COLS: u16 = 60;

/// Year shown when the game starts
pub const START_YEAR: u32 = 1957;

/// First year in which the spaceship gets its gun
pub const FIRE_YEAR: u32 = 2020;

/// Ticks per in-game year (1.5s at the default tick rate)
pub const YEAR_TICKS: u32 = 15;

/// Ticks a star is held dim
pub const SPARKLE_DIM_TICKS: u32 = 20;

/// Ticks a star is held at normal brightness (after dim and after bold)
pub const SPARKLE_NORMAL_TICKS: u32 = 3;

/// Ticks a star is held bold
pub const SPARKLE_BOLD_TICKS: u32 = 5;

/// Upper bound (inclusive) for the random start offset of a star
pub const MAX_SPARKLE_OFFSET: u32 = 10;

/// Ticks each spaceship animation frame stays on screen
pub const ROCKET_FRAME_TICKS: u32 = 2;

/// Rows per tick a piece of debris falls
pub const DEBRIS_SPEED: f64 = 0.5;

/// Rows per tick a projectile travels (negative = upward)
pub const PROJECTILE_ROW_SPEED: f64 = -0.3;

/// Columns per tick a projectile travels
pub const PROJECTILE_COLUMN_SPEED: f64 = 0.0;

/// Maximum spaceship speed on each axis (cells per tick)
pub const MAX_SPEED: f64 = 2.0;

/// Speed gained per tick while a direction is held
pub const ACCELERATION: f64 = 0.5;

/// Speed lost per tick on an axis with no direction held
pub const DECELERATION: f64 = 0.25;

/// Asset name of the spaceship animation
pub const ROCKET_ASSET: &str = "rocket";

/// Number of spaceship animation frames
pub const ROCKET_FRAMES: usize = 2;

/// Asset name of the debris sprites
pub const DEBRIS_ASSET: &str = "debris";

/// Number of debris sprites
pub const DEBRIS_FRAMES: usize = 6;

/// Asset name of the "game over" banner
pub const GAME_OVER_ASSET: &str = "game_over";

/// Display attribute of a plotted character
///
/// Terminal back ends map these onto whatever intensity styles they support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Attr {
    #[default]
    Normal,
    Dim,
    Bold,
}

impl Attr {
    pub fn as_str(&self) -> &'static str {
        match self {
            Attr::Normal => "normal",
            Attr::Dim => "dim",
            Attr::Bold => "bold",
        }
    }
}

/// A single recognised key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Up,
    Down,
    Left,
    Right,
    Fire,
    Quit,
}

impl Control {
    /// Parse control from string (case-insensitive)
    ///
    /// ```
    /// use tui_starfield_types::Control;
    ///
    /// assert_eq!(Control::from_str("UP"), Some(Control::Up));
    /// assert_eq!(Control::from_str("space"), Some(Control::Fire));
    /// assert_eq!(Control::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Control::Up),
            "down" => Some(Control::Down),
            "left" => Some(Control::Left),
            "right" => Some(Control::Right),
            "fire" | "space" => Some(Control::Fire),
            "quit" => Some(Control::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Control::Up => "up",
            Control::Down => "down",
            Control::Left => "left",
            Control::Right => "right",
            Control::Fire => "fire",
            Control::Quit => "quit",
        }
    }
}

/// Input collected for one tick
///
/// Directions are unit steps: `-1`, `0` or `1`. A tick without key events is
/// simply `Controls::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub rows_direction: i8,
    pub columns_direction: i8,
    pub fire: bool,
    pub quit: bool,
}

impl Controls {
    /// Fold a key press into this tick's controls.
    ///
    /// Later presses on the same axis win, matching a terminal that reports
    /// every buffered key since the previous tick.
    pub fn apply(&mut self, control: Control) {
        match control {
            Control::Up => self.rows_direction = -1,
            Control::Down => self.rows_direction = 1,
            Control::Left => self.columns_direction = -1,
            Control::Right => self.columns_direction = 1,
            Control::Fire => self.fire = true,
            Control::Quit => self.quit = true,
        }
    }

    pub fn is_idle(&self) -> bool {
        *self == Controls::default()
    }
}
