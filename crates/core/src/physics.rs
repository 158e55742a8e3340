//! Spaceship motion with inertia.
//!
//! Holding a direction accelerates by a fixed step per tick; releasing it lets
//! the speed bleed off toward zero by a smaller step. Both axes are
//! independent and clamped to the same maximum magnitude.

use crate::types::{ACCELERATION, DECELERATION, MAX_SPEED};

/// Tunables for [`MotionLimits::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionLimits {
    pub acceleration: f64,
    pub deceleration: f64,
    pub max_speed: f64,
}

impl Default for MotionLimits {
    fn default() -> Self {
        Self {
            acceleration: ACCELERATION,
            deceleration: DECELERATION,
            max_speed: MAX_SPEED,
        }
    }
}

impl MotionLimits {
    /// New `(row_speed, column_speed)` after one tick of input.
    ///
    /// Directions are `-1`, `0` or `1`; any other value is treated by sign.
    pub fn update(
        &self,
        row_speed: f64,
        column_speed: f64,
        rows_direction: i8,
        columns_direction: i8,
    ) -> (f64, f64) {
        (
            self.axis(row_speed, rows_direction),
            self.axis(column_speed, columns_direction),
        )
    }

    fn axis(&self, speed: f64, direction: i8) -> f64 {
        let next = match direction.signum() {
            0 => self.decay(speed),
            d => speed + self.acceleration * f64::from(d),
        };
        next.clamp(-self.max_speed, self.max_speed)
    }

    // Never crosses zero.
    fn decay(&self, speed: f64) -> f64 {
        if speed > 0.0 {
            (speed - self.deceleration).max(0.0)
        } else if speed < 0.0 {
            (speed + self.deceleration).min(0.0)
        } else {
            0.0
        }
    }
}

/// [`MotionLimits::update`] with the default limits.
pub fn update_velocity(
    row_speed: f64,
    column_speed: f64,
    rows_direction: i8,
    columns_direction: i8,
) -> (f64, f64) {
    MotionLimits::default().update(row_speed, column_speed, rows_direction, columns_direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_direction_saturates() {
        let mut speed = (0.0, 0.0);
        for _ in 0..20 {
            speed = update_velocity(speed.0, speed.1, 1, -1);
            assert!(speed.0.abs() <= MAX_SPEED);
            assert!(speed.1.abs() <= MAX_SPEED);
        }
        assert_eq!(speed, (MAX_SPEED, -MAX_SPEED));
    }

    #[test]
    fn release_decays_to_exact_zero() {
        let mut speed = (MAX_SPEED, -1.1);
        for _ in 0..20 {
            let next = update_velocity(speed.0, speed.1, 0, 0);
            assert!(next.0 >= 0.0 && next.0 <= speed.0);
            assert!(next.1 <= 0.0 && next.1 >= speed.1);
            speed = next;
        }
        assert_eq!(speed, (0.0, 0.0));
    }

    #[test]
    fn reversing_direction_brakes_first() {
        let (row, _) = update_velocity(1.0, 0.0, -1, 0);
        assert_eq!(row, 0.5);
    }
}
