//! Player state: movement, weapons, health, and difficulty scaling.

use data_runtime::configs::tuning::PlayerCfg;
use glam::Vec2;

/// Held movement/aim state for one tick, polled by the embedding layer.
#[derive(Copy, Clone, Debug, Default)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Aim point for the basic shot while the trigger is held.
    pub fire_at: Option<Vec2>,
    /// Aim point for the shotgun volley.
    pub shotgun_at: Option<Vec2>,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub health: f32,
    pub max_velocity: f32,
    pub acceleration: f32,
    pub bullet_damage: f32,
    /// Seconds between basic shots; shrinks as difficulty rises.
    pub shot_time: f32,
    pub shotgun_time: f32,
    pub kill_count: u32,
    pub score: u32,
    drag: f32,
    full_health: f32,
    shot_accumulator: f32,
    shotgun_accumulator: f32,
}

impl Player {
    pub fn new(cfg: &PlayerCfg, pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: cfg.radius,
            health: cfg.health,
            max_velocity: cfg.max_velocity,
            acceleration: cfg.acceleration,
            bullet_damage: cfg.bullet_damage,
            shot_time: cfg.shot_time,
            shotgun_time: cfg.shotgun_time,
            kill_count: 0,
            score: 0,
            drag: cfg.drag,
            full_health: cfg.health,
            shot_accumulator: 0.0,
            shotgun_accumulator: 0.0,
        }
    }

    #[inline]
    pub fn alive(&self) -> bool {
        self.health > 0.0
    }

    /// Subtract damage without clamping; negative health is the overkill
    /// signal read by the frame loop.
    pub fn take_damage(&mut self, damage: f32) {
        self.health -= damage;
    }

    /// Credit a kill: count, score, and a 1-point heal when below full.
    pub fn award_kill(&mut self) {
        self.kill_count += 1;
        self.score += 1;
        if self.health != self.full_health {
            self.health += 1.0;
        }
    }

    /// Boss-slain difficulty bump: faster movement, faster trigger.
    pub fn apply_multiplier(&mut self, mult: f32) {
        self.max_velocity *= mult;
        self.acceleration *= mult;
        if self.shot_time > 0.05 {
            self.shot_time -= mult * 0.01;
            self.shotgun_time -= mult * 0.02;
        }
    }

    /// Apply held input as acceleration; released axes decelerate toward
    /// zero instead of coasting.
    pub fn apply_movement(&mut self, input: &PlayerInput, dt: f32) {
        if input.left {
            self.vel.x -= self.acceleration * dt;
        } else if self.vel.x < 0.0 {
            self.vel.x = (self.vel.x + self.drag * dt).min(0.0);
        }
        if input.right {
            self.vel.x += self.acceleration * dt;
        } else if self.vel.x > 0.0 {
            self.vel.x = (self.vel.x - self.drag * dt).max(0.0);
        }
        if input.up {
            self.vel.y += self.acceleration * dt;
        } else if self.vel.y > 0.0 {
            self.vel.y = (self.vel.y - self.drag * dt).max(0.0);
        }
        if input.down {
            self.vel.y -= self.acceleration * dt;
        } else if self.vel.y < 0.0 {
            self.vel.y = (self.vel.y + self.drag * dt).min(0.0);
        }
        self.velocity_cap();
    }

    /// Per-axis clamp to the current max velocity.
    fn velocity_cap(&mut self) {
        self.vel.x = self.vel.x.clamp(-self.max_velocity, self.max_velocity);
        self.vel.y = self.vel.y.clamp(-self.max_velocity, self.max_velocity);
    }

    /// Advance weapon timers and report which aim points fire this tick.
    /// The basic shot is gated by `shot_time`, the volley by `shotgun_time`.
    pub fn update_weapons(&mut self, input: &PlayerInput, dt: f32) -> (Option<Vec2>, Option<Vec2>) {
        self.shot_accumulator += dt;
        self.shotgun_accumulator += dt;
        let mut shot = None;
        let mut shotgun = None;
        if self.shot_accumulator >= self.shot_time {
            if let Some(at) = input.fire_at {
                shot = Some(at);
                self.shot_accumulator = 0.0;
            }
        }
        if self.shotgun_accumulator >= self.shotgun_time {
            if let Some(at) = input.shotgun_at {
                shotgun = Some(at);
                self.shotgun_accumulator = 0.0;
            }
        }
        (shot, shotgun)
    }
}
