//! Runtime configuration read from the environment.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{START_YEAR, STAR_COUNT, TICK_MS};

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Wall-clock duration of one tick
    pub tick_ms: u64,
    /// Number of blinking stars
    pub stars: usize,
    /// Directory holding `{name}_frame_{n}.txt` assets
    pub assets_dir: PathBuf,
    /// RNG seed for star placement and debris
    pub seed: u32,
    /// Log file; logging is disabled when unset
    pub log_path: Option<PathBuf>,
    /// Year shown on the first tick
    pub start_year: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            stars: STAR_COUNT,
            assets_dir: PathBuf::from("assets"),
            seed: 1,
            log_path: None,
            start_year: START_YEAR,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// - `STARFIELD_TICK_MS`: tick duration (default 100)
    /// - `STARFIELD_STARS`: star count (default 100)
    /// - `STARFIELD_ASSETS_DIR`: asset directory (default `assets`)
    /// - `STARFIELD_SEED`: RNG seed (default derived from the clock)
    /// - `STARFIELD_LOG_PATH`: log file (default none)
    /// - `STARFIELD_START_YEAR`: first year (default 1957)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tick_ms = lookup("STARFIELD_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(defaults.tick_ms);

        let stars = lookup("STARFIELD_STARS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.stars);

        let assets_dir = lookup("STARFIELD_ASSETS_DIR")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.assets_dir);

        let seed = lookup("STARFIELD_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = lookup("STARFIELD_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let start_year = lookup("STARFIELD_START_YEAR")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.start_year);

        Self {
            tick_ms,
            stars,
            assets_dir,
            seed,
            log_path,
            start_year,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
