//! Sparkle: a star that endlessly cycles its brightness.

use tui_starfield_core::types::{
    Attr, SPARKLE_BOLD_TICKS, SPARKLE_DIM_TICKS, SPARKLE_NORMAL_TICKS,
};
use tui_starfield_core::{put_symbol, Result};

use crate::scheduler::{Behavior, Context, Pause, Step};

/// Brightness held for how many ticks, in cycle order.
const CYCLE: [(Attr, u32); 4] = [
    (Attr::Dim, SPARKLE_DIM_TICKS),
    (Attr::Normal, SPARKLE_NORMAL_TICKS),
    (Attr::Bold, SPARKLE_BOLD_TICKS),
    (Attr::Normal, SPARKLE_NORMAL_TICKS),
];

#[derive(Debug, Clone)]
pub struct Sparkle {
    row: u16,
    column: u16,
    symbol: char,
    offset: Option<u32>,
    cursor: usize,
    pause: Pause,
}

impl Sparkle {
    /// A star that waits `offset` ticks before its first cycle, so that
    /// neighbouring stars do not blink in unison.
    pub fn new(row: u16, column: u16, symbol: char, offset: u32) -> Self {
        Self {
            row,
            column,
            symbol,
            offset: Some(offset),
            cursor: 0,
            pause: Pause::default(),
        }
    }

    /// Length of one full brightness cycle in ticks.
    pub fn period() -> u32 {
        CYCLE.iter().map(|&(_, ticks)| ticks).sum()
    }
}

impl Behavior for Sparkle {
    fn name(&self) -> &'static str {
        "sparkle"
    }

    fn step(&mut self, cx: &mut Context<'_>) -> Result<Step> {
        if self.pause.pending() {
            return Ok(Step::Yield);
        }
        if let Some(offset) = self.offset.take() {
            return Ok(self.pause.sleep(offset));
        }

        let (attr, ticks) = CYCLE[self.cursor];
        put_symbol(
            cx.canvas(),
            i64::from(self.row),
            i64::from(self.column),
            self.symbol,
            attr,
        );
        self.cursor = (self.cursor + 1) % CYCLE.len();
        Ok(self.pause.sleep(ticks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_starfield_core::World;
    use tui_starfield_term::FrameBuffer;

    fn attr_of(fb: &FrameBuffer) -> Attr {
        let style = fb.get(3, 2).unwrap().style;
        match (style.dim, style.bold) {
            (true, _) => Attr::Dim,
            (_, true) => Attr::Bold,
            _ => Attr::Normal,
        }
    }

    #[test]
    fn cycles_dim_normal_bold_normal() {
        let mut world = World::default();
        let mut fb = FrameBuffer::new(10, 5);
        let mut spawned = Vec::new();
        let mut star = Sparkle::new(2, 3, '*', 0);

        // Zero offset costs no tick.
        {
            let mut cx = Context::new(&mut world, &mut fb, &mut spawned);
            assert_eq!(star.step(&mut cx).unwrap(), Step::Continue);
        }

        let mut changes = Vec::new();
        let mut last = None;
        for tick in 1..=32 {
            {
                let mut cx = Context::new(&mut world, &mut fb, &mut spawned);
                assert_eq!(star.step(&mut cx).unwrap(), Step::Yield);
            }
            let attr = attr_of(&fb);
            if last != Some(attr) {
                changes.push((tick, attr));
                last = Some(attr);
            }
        }

        assert_eq!(fb.get(3, 2).unwrap().ch, '*');
        assert_eq!(
            changes,
            vec![
                (1, Attr::Dim),
                (21, Attr::Normal),
                (24, Attr::Bold),
                (29, Attr::Normal),
                (32, Attr::Dim),
            ]
        );
        assert_eq!(Sparkle::period(), 31);
    }

    #[test]
    fn offset_delays_the_first_draw() {
        let mut world = World::default();
        let mut fb = FrameBuffer::new(10, 5);
        let mut spawned = Vec::new();
        let mut cx = Context::new(&mut world, &mut fb, &mut spawned);
        let mut star = Sparkle::new(2, 3, '+', 3);

        for _ in 0..3 {
            assert_eq!(star.step(&mut cx).unwrap(), Step::Yield);
        }
        drop(cx);
        assert_eq!(fb.get(3, 2).unwrap().ch, ' ');

        let mut cx = Context::new(&mut world, &mut fb, &mut spawned);
        star.step(&mut cx).unwrap();
        drop(cx);
        assert_eq!(fb.get(3, 2).unwrap().ch, '+');
    }
}
