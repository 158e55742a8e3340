//! Property tests for the motion, difficulty and collision model.

use proptest::prelude::*;

use tui_starfield::core::types::MAX_SPEED;
use tui_starfield::core::{spawn_delay, update_velocity, ObstacleRegistry};

proptest! {
    #[test]
    fn held_direction_never_exceeds_max_speed(
        start in -MAX_SPEED..=MAX_SPEED,
        direction in prop_oneof![Just(-1i8), Just(1i8)],
        ticks in 1usize..40,
    ) {
        let mut speed = start;
        for _ in 0..ticks {
            let (next, _) = update_velocity(speed, 0.0, direction, 0);
            prop_assert!(next.abs() <= MAX_SPEED);
            speed = next;
        }
        if ticks >= 8 {
            prop_assert_eq!(speed, MAX_SPEED * f64::from(direction));
        }
    }

    #[test]
    fn released_axis_stops_without_overshoot(start in -MAX_SPEED..=MAX_SPEED) {
        let mut speed = start;
        for _ in 0..8 {
            let (_, next) = update_velocity(0.0, speed, 0, 0);
            prop_assert!(next * start >= 0.0, "crossed zero: {} -> {}", start, next);
            prop_assert!(next.abs() <= speed.abs());
            speed = next;
        }
        prop_assert_eq!(speed, 0.0);
    }

    #[test]
    fn spawn_delay_never_grows(a in 1900u32..2200, b in 1900u32..2200) {
        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        match (spawn_delay(early), spawn_delay(late)) {
            (Some(x), Some(y)) => prop_assert!(y <= x),
            (None, _) => prop_assert!(early < 1961),
            (Some(_), None) => prop_assert!(false, "delay disappeared after {}", early),
        }
    }

    #[test]
    fn boxes_sharing_an_edge_cell_collide(
        row in 0i32..50,
        column in 0i32..50,
        height in 1u16..8,
        width in 1u16..8,
        gap in 1i32..5,
    ) {
        let mut registry = ObstacleRegistry::new();
        let id = registry.register(f64::from(row), f64::from(column), height, width);
        let bottom = row + i32::from(height) - 1;
        let right = column + i32::from(width) - 1;

        prop_assert_eq!(registry.overlaps(f64::from(bottom), f64::from(column), 2, 2), vec![id]);
        prop_assert_eq!(registry.overlaps(f64::from(row), f64::from(right), 1, 3), vec![id]);
        prop_assert!(registry.overlaps(f64::from(bottom + gap), f64::from(column), 2, 2).is_empty());
        prop_assert!(registry.overlaps(f64::from(row), f64::from(right + gap), 1, 3).is_empty());
    }
}

#[test]
fn no_debris_before_gagarin() {
    for year in 0..1961 {
        assert_eq!(spawn_delay(year), None);
    }
    assert!(spawn_delay(1961).is_some());
}
