//! World clock and the status line that shows it.

use log::info;
use tui_starfield_core::timeline::is_milestone;
use tui_starfield_core::types::{Attr, YEAR_TICKS};
use tui_starfield_core::{draw_text, phrase, Result};

use crate::scheduler::{Behavior, Context, Pause, Step};

/// The only writer of `World::year`: one year every `ticks_per_year` ticks.
#[derive(Debug, Clone)]
pub struct WorldClock {
    ticks_per_year: u32,
    started: bool,
    pause: Pause,
}

impl WorldClock {
    pub fn new() -> Self {
        Self::with_ticks_per_year(YEAR_TICKS)
    }

    pub fn with_ticks_per_year(ticks_per_year: u32) -> Self {
        Self {
            ticks_per_year: ticks_per_year.max(1),
            started: false,
            pause: Pause::default(),
        }
    }
}

impl Default for WorldClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for WorldClock {
    fn name(&self) -> &'static str {
        "world_clock"
    }

    fn step(&mut self, cx: &mut Context<'_>) -> Result<Step> {
        if self.pause.pending() {
            return Ok(Step::Yield);
        }

        if self.started {
            cx.world.year += 1;
            if is_milestone(cx.world.year) {
                info!(
                    "year {}: {}",
                    cx.world.year,
                    phrase(cx.world.year).unwrap_or_default()
                );
            }
        }
        self.started = true;
        Ok(self.pause.sleep(self.ticks_per_year))
    }
}

/// `Year 1969: Armstrong got on the moon!` just above the bottom border.
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    previous_len: usize,
}

/// Left margin of the status text.
const STATUS_COLUMN: i64 = 2;

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(year: u32) -> String {
        match phrase(year) {
            Some(phrase) => format!("Year {year}: {phrase}"),
            None => format!("Year {year}"),
        }
    }
}

impl Behavior for StatusLine {
    fn name(&self) -> &'static str {
        "status_line"
    }

    fn step(&mut self, cx: &mut Context<'_>) -> Result<Step> {
        let (rows, _) = cx.extent();
        let row = i64::from(rows) - 2;

        let blank = " ".repeat(self.previous_len);
        draw_text(cx.canvas(), row, STATUS_COLUMN, &blank, Attr::Normal);

        let text = Self::text(cx.world.year);
        draw_text(cx.canvas(), row, STATUS_COLUMN, &text, Attr::Normal);
        self.previous_len = text.chars().count();
        Ok(Step::Yield)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_starfield_core::World;
    use tui_starfield_term::FrameBuffer;

    #[test]
    fn year_advances_every_period() {
        let mut world = World::new(1957, 1);
        let mut fb = FrameBuffer::new(40, 10);
        let mut spawned = Vec::new();
        let mut cx = Context::new(&mut world, &mut fb, &mut spawned);
        let mut clock = WorldClock::with_ticks_per_year(3);

        let mut years = Vec::new();
        for _ in 0..10 {
            clock.step(&mut cx).unwrap();
            years.push(cx.world.year);
        }
        assert_eq!(
            years,
            vec![1957, 1957, 1957, 1958, 1958, 1958, 1959, 1959, 1959, 1960]
        );
    }

    #[test]
    fn status_line_replaces_previous_text() {
        let mut world = World::new(1969, 1);
        let mut fb = FrameBuffer::new(60, 10);
        let mut spawned = Vec::new();
        let mut status = StatusLine::new();

        {
            let mut cx = Context::new(&mut world, &mut fb, &mut spawned);
            status.step(&mut cx).unwrap();
        }
        world.year = 1998;
        {
            let mut cx = Context::new(&mut world, &mut fb, &mut spawned);
            status.step(&mut cx).unwrap();
        }

        let line: String = (0..60).map(|x| fb.get(x, 8).unwrap().ch).collect();
        assert_eq!(line.trim(), "Year 1998: ISS start building");
    }

    #[test]
    fn text_without_phrase() {
        assert_eq!(StatusLine::text(1900), "Year 1900");
    }
}
