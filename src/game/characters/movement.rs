// Player movement and facing
//
// Pure functions of (direction keys) -> (velocity split, facing). The
// split goes through atan/cos/sin so diagonal and straight movement have
// the same overall speed.

use super::character::FacingDirection;
use crate::engine::input::{Action, InputSnapshot};
use glam::DVec2;

/// Pixels per second at full speed
pub const BASE_SPEED: f64 = 150.0;

/// Stand-in for an infinite |dy|/|dx| when there is no horizontal intent
const VERTICAL_RATIO: f64 = 1e6;

/// Speed components closer than this count as equal when picking a facing
const FACING_TIE_EPSILON: f64 = 1e-12;

/// One axis of intent: -1, 0 or 1; opposing presses cancel out
pub fn axis(negative: bool, positive: bool) -> i32 {
    match (negative, positive) {
        (false, true) => 1,
        (true, false) => -1,
        _ => 0,
    }
}

/// Raw (dx, dy) intent from the held movement actions; +y points down
pub fn intent(input: &InputSnapshot) -> (i32, i32) {
    (
        axis(input.is_held(Action::MoveLeft), input.is_held(Action::MoveRight)),
        axis(input.is_held(Action::MoveUp), input.is_held(Action::MoveDown)),
    )
}

/// Unsigned (x, y) speed split for a non-idle intent
pub fn speed_split(dx: i32, dy: i32) -> (f64, f64) {
    let ratio = if dx != 0 {
        (dy.abs() as f64) / (dx.abs() as f64)
    } else {
        VERTICAL_RATIO
    };
    let angle = ratio.atan();
    (angle.cos(), angle.sin())
}

/// A planned movement for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Signed velocity split, before scaling by speed and delta
    pub velocity: DVec2,
    /// Facing the mover turns to
    pub facing: FacingDirection,
}

impl Step {
    /// Position after applying this step for `delta` seconds
    pub fn target(&self, from: DVec2, delta: f64) -> DVec2 {
        from + self.velocity * (delta * BASE_SPEED)
    }
}

/// Plan a step from raw intent, `None` when idle
///
/// Horizontal facing wins only when the x component is strictly larger;
/// a pure diagonal faces up or down.
pub fn plan_step(dx: i32, dy: i32) -> Option<Step> {
    if dx == 0 && dy == 0 {
        return None;
    }

    let (x_speed, y_speed) = speed_split(dx, dy);

    let facing = if x_speed - y_speed > FACING_TIE_EPSILON {
        if dx > 0 {
            FacingDirection::Right
        } else {
            FacingDirection::Left
        }
    } else if dy > 0 {
        FacingDirection::Down
    } else {
        FacingDirection::Up
    };

    let velocity = DVec2::new(
        if dx < 0 { -x_speed } else { x_speed },
        if dy < 0 { -y_speed } else { y_speed },
    );

    Some(Step { velocity, facing })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_axis() {
        assert_eq!(axis(false, false), 0);
        assert_eq!(axis(true, true), 0);
        assert_eq!(axis(false, true), 1);
        assert_eq!(axis(true, false), -1);
    }

    #[test]
    fn test_intent_from_snapshot() {
        let input = InputSnapshot::new()
            .with_action(Action::MoveLeft)
            .with_action(Action::MoveRight)
            .with_action(Action::MoveUp);
        assert_eq!(intent(&input), (0, -1));
    }

    #[test]
    fn test_idle_has_no_step() {
        assert!(plan_step(0, 0).is_none());
    }

    #[test]
    fn test_right() {
        let step = plan_step(1, 0).unwrap();
        assert_relative_eq!(step.velocity.x, 1.0);
        assert_relative_eq!(step.velocity.y, 0.0);
        assert_eq!(step.facing, FacingDirection::Right);
    }

    #[test]
    fn test_left() {
        let step = plan_step(-1, 0).unwrap();
        assert_relative_eq!(step.velocity.x, -1.0);
        assert_eq!(step.facing, FacingDirection::Left);
    }

    #[test]
    fn test_down_uses_large_ratio_fallback() {
        let (x_speed, y_speed) = speed_split(0, 1);
        // atan(1e6) is just short of pi/2
        assert!(x_speed > 0.0);
        assert_relative_eq!(x_speed, 0.0, epsilon = 1e-5);
        assert_relative_eq!(y_speed, 1.0, epsilon = 1e-9);

        let step = plan_step(0, 1).unwrap();
        assert_eq!(step.facing, FacingDirection::Down);
        assert_relative_eq!(step.velocity.y, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_up() {
        let step = plan_step(0, -1).unwrap();
        assert_eq!(step.facing, FacingDirection::Up);
        assert_relative_eq!(step.velocity.y, -1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_diagonal_split_and_vertical_facing() {
        let step = plan_step(1, 1).unwrap();
        assert_relative_eq!(step.velocity.x, FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(step.velocity.y, FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_eq!(step.facing, FacingDirection::Down);

        let step = plan_step(-1, -1).unwrap();
        assert!(step.velocity.x < 0.0 && step.velocity.y < 0.0);
        assert_eq!(step.facing, FacingDirection::Up);
    }

    #[test]
    fn test_constant_speed_in_every_direction() {
        for dx in -1..=1 {
            for dy in -1..=1 {
                if let Some(step) = plan_step(dx, dy) {
                    assert_relative_eq!(step.velocity.length(), 1.0, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_target_scales_by_delta_and_base_speed() {
        let step = plan_step(1, 0).unwrap();
        let target = step.target(DVec2::new(160.0, 64.0), 1.0 / 60.0);
        assert_relative_eq!(target.x, 162.5, epsilon = 1e-9);
        assert_relative_eq!(target.y, 64.0);
    }
}
