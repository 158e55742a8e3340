//! Per-tick key collection.
//!
//! Terminals only report presses (and auto-repeat), so a tick's controls are
//! whatever keys arrived since the previous tick. Every pending event is read
//! each tick. Nothing is carried over.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::map_key;
use crate::types::Controls;

/// Key presses folded per tick at most. A longer burst is still read in full,
/// but only its most recent presses count.
pub const MAX_KEYS_PER_TICK: usize = 32;

/// Fold a batch of terminal events into one tick's controls.
///
/// The whole batch is consumed. Key releases and non-key events are ignored;
/// of the remaining presses only the last [`MAX_KEYS_PER_TICK`] are applied.
pub fn collect_controls<I>(events: I) -> Controls
where
    I: IntoIterator<Item = Event>,
{
    let mut keys: ArrayVec<KeyEvent, MAX_KEYS_PER_TICK> = ArrayVec::new();
    for event in events {
        let Event::Key(key) = event else { continue };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        if keys.is_full() {
            keys.remove(0);
        }
        keys.push(key);
    }

    let mut controls = Controls::default();
    for key in keys {
        apply_key(&mut controls, key);
    }
    controls
}

/// Read every pending event without blocking and fold it into controls.
pub fn drain_controls() -> io::Result<Controls> {
    let mut failure = None;
    let pending = std::iter::from_fn(|| match next_pending() {
        Ok(event) => event,
        Err(err) => {
            failure = Some(err);
            None
        }
    });
    let controls = collect_controls(pending);
    match failure {
        Some(err) => Err(err),
        None => Ok(controls),
    }
}

fn next_pending() -> io::Result<Option<Event>> {
    if event::poll(Duration::ZERO)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

fn apply_key(controls: &mut Controls, key: KeyEvent) {
    if let Some(control) = map_key(key) {
        controls.apply(control);
    }
}
