//! Trajectory math shared by enemy steering and projectile launches.

use glam::Vec2;

/// Split `max_v` across both axes toward `to` using the slope-ratio rule:
/// with `n = |dx/dy|`, the axis speeds are `max_v * n/(n+1)` and
/// `max_v * 1/(n+1)`, each signed by its delta. The two fractions always sum
/// to `max_v`, so speed is constant in the L1 sense regardless of direction.
///
/// `dy == 0` would make the slope infinite; fall back to full speed along
/// the dominant axis instead of propagating NaN. A zero delta yields zero
/// velocity.
pub fn aim_velocity(from: Vec2, to: Vec2, max_v: f32) -> Vec2 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx == 0.0 && dy == 0.0 {
        return Vec2::ZERO;
    }
    if dy == 0.0 {
        return Vec2::new(max_v.copysign(dx), 0.0);
    }
    if dx == 0.0 {
        return Vec2::new(0.0, max_v.copysign(dy));
    }
    let slope = (dx / dy).abs();
    let vx = max_v * (slope / (slope + 1.0));
    let vy = max_v * (1.0 / (slope + 1.0));
    Vec2::new(vx.copysign(dx), vy.copysign(dy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_fractions_sum_to_max() {
        let v = aim_velocity(Vec2::ZERO, Vec2::new(3.0, 4.0), 60.0);
        assert!(v.x > 0.0 && v.y > 0.0);
        assert!((v.x.abs() + v.y.abs() - 60.0).abs() < 1e-4);
    }

    #[test]
    fn direction_is_colinear_with_delta() {
        let v = aim_velocity(Vec2::ZERO, Vec2::new(3.0, 4.0), 60.0);
        // vx/vy = |dx/dy|
        assert!((v.x / v.y - 3.0 / 4.0).abs() < 1e-4);
    }

    #[test]
    fn horizontal_target_does_not_produce_nan() {
        let v = aim_velocity(Vec2::new(5.0, 2.0), Vec2::new(-1.0, 2.0), 60.0);
        assert_eq!(v, Vec2::new(-60.0, 0.0));
    }

    #[test]
    fn vertical_target_keeps_pure_vertical_motion() {
        let v = aim_velocity(Vec2::ZERO, Vec2::new(0.0, -7.0), 60.0);
        assert_eq!(v, Vec2::new(0.0, -60.0));
    }

    #[test]
    fn zero_delta_is_zero_velocity() {
        assert_eq!(aim_velocity(Vec2::ONE, Vec2::ONE, 60.0), Vec2::ZERO);
    }
}
