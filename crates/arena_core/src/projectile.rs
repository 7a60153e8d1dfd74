//! Projectile lifecycle: launch, drag, TTL aging, deferred deletion.

use glam::Vec2;

use crate::actor::{EntityId, ProjId, Side};
use crate::steer::aim_velocity;

pub const PROJECTILE_RADIUS: f32 = 0.5;

/// Per-tick deceleration opposing each velocity axis.
const DRAG: f32 = 0.3;

#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: ProjId,
    pub side: Side,
    /// Enemy that fired this shot, if any; its death purges the shot.
    pub shooter: Option<EntityId>,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub damage: f32,
    pub age: f32,
    pub despawn_after: f32,
    pub deletable: bool,
}

impl Projectile {
    pub fn launch(
        id: ProjId,
        side: Side,
        shooter: Option<EntityId>,
        from: Vec2,
        target: Vec2,
        speed: f32,
        damage: f32,
        despawn_after: f32,
    ) -> Self {
        Self {
            id,
            side,
            shooter,
            pos: from,
            vel: aim_velocity(from, target, speed),
            radius: PROJECTILE_RADIUS,
            damage,
            age: 0.0,
            despawn_after,
            deletable: false,
        }
    }

    /// Age by `dt`; marks the shot deletable on the tick where cumulative
    /// time first reaches the despawn threshold. Removal itself is deferred
    /// to the cleanup phase.
    pub fn tick_age(&mut self, dt: f32) {
        self.age += dt;
        if self.age >= self.despawn_after {
            self.deletable = true;
        }
    }

    /// Mild drag so long-lived shots slow down instead of coasting forever.
    pub fn apply_drag(&mut self, dt: f32) {
        if self.vel.x > 0.0 {
            self.vel.x = (self.vel.x - DRAG * dt).max(0.0);
        } else if self.vel.x < 0.0 {
            self.vel.x = (self.vel.x + DRAG * dt).min(0.0);
        }
        if self.vel.y > 0.0 {
            self.vel.y = (self.vel.y - DRAG * dt).max(0.0);
        } else if self.vel.y < 0.0 {
            self.vel.y = (self.vel.y + DRAG * dt).min(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shot(despawn_after: f32) -> Projectile {
        Projectile::launch(
            ProjId(0),
            Side::Player,
            None,
            Vec2::ZERO,
            Vec2::new(10.0, 0.0),
            150.0,
            10.0,
            despawn_after,
        )
    }

    #[test]
    fn deletable_on_the_tick_ttl_is_reached() {
        let mut p = shot(2.0);
        p.tick_age(1.0);
        assert!(!p.deletable);
        p.tick_age(1.0);
        assert!(p.deletable, "exactly 2.0s elapsed must trip the TTL");
    }

    #[test]
    fn launch_speed_matches_side_tuning() {
        let p = shot(2.0);
        assert_eq!(p.vel, Vec2::new(150.0, 0.0));
    }

    #[test]
    fn drag_never_reverses_a_shot() {
        let mut p = shot(2.0);
        p.vel = Vec2::new(0.01, -0.01);
        p.apply_drag(1.0);
        assert_eq!(p.vel, Vec2::ZERO);
    }
}
