//! Enemy variants and their per-tick state machines.
//!
//! Swarmers chase, spitters hold position and fire, and the demon boss runs
//! a nested volley/charge state machine keyed off health thresholds.

use data_runtime::configs::tuning::{DemonCfg, SpitterCfg, SwarmerCfg, TuningCfg};
use glam::Vec2;

use crate::actor::{EntityId, Tag};
use crate::steer::aim_velocity;

/// Knockback burst applied per axis when an enemy rams the player.
const PUSH_BURST: f32 = 90.0;

/// An enemy asking the frame loop to spawn a shot. Projectile ids are
/// allocated by the arena state, not here.
#[derive(Copy, Clone, Debug)]
pub struct ShotRequest {
    pub shooter: EntityId,
    pub from: Vec2,
    pub target: Vec2,
    pub damage: f32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    Swarmer,
    Spitter,
    Demon,
}

/// Boss sub-state: volleys while idle, and a pre-charge -> charge -> reset
/// dash once low enough on health.
#[derive(Debug, Clone)]
pub struct DemonState {
    pub initial_health: f32,
    pub spit_interval: f32,
    pub spit_accumulator: f32,
    /// Cooldown clock; a charge may begin once this reaches the configured
    /// threshold, and it resets when the charge ends.
    pub charge_accumulator: f32,
    pub pre_charge_accumulator: f32,
    pub charging: bool,
    pub charged: bool,
    pub multiplier: f32,
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: EntityId,
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub health: f32,
    pub max_velocity: f32,
    pub body_damage: f32,
    pub deletable: bool,
    /// Gates re-steering; zeroed by knockback so the burst is not
    /// immediately overwritten, refills over one second.
    steer_accumulator: f32,
    pub state: KindState,
}

#[derive(Debug, Clone)]
pub enum KindState {
    Swarmer,
    Spitter { spit_accumulator: f32 },
    Demon(DemonState),
}

impl Enemy {
    pub fn swarmer(id: EntityId, pos: Vec2, cfg: &SwarmerCfg, multiplier: f32) -> Self {
        Self {
            id,
            kind: EnemyKind::Swarmer,
            pos,
            vel: Vec2::ZERO,
            radius: cfg.radius,
            health: cfg.health,
            max_velocity: cfg.max_velocity * multiplier,
            body_damage: cfg.body_damage,
            deletable: false,
            steer_accumulator: 1.0,
            state: KindState::Swarmer,
        }
    }

    pub fn spitter(id: EntityId, pos: Vec2, cfg: &SpitterCfg) -> Self {
        Self {
            id,
            kind: EnemyKind::Spitter,
            pos,
            vel: Vec2::ZERO,
            radius: cfg.radius,
            health: cfg.health,
            max_velocity: 0.0,
            body_damage: cfg.body_damage,
            deletable: false,
            steer_accumulator: 1.0,
            state: KindState::Spitter {
                spit_accumulator: 0.0,
            },
        }
    }

    /// Difficulty multiplier scales boss health and speed at spawn.
    pub fn demon(id: EntityId, pos: Vec2, cfg: &DemonCfg, multiplier: f32) -> Self {
        let health = cfg.health * multiplier;
        Self {
            id,
            kind: EnemyKind::Demon,
            pos,
            vel: Vec2::ZERO,
            radius: cfg.radius,
            health,
            max_velocity: cfg.max_velocity * multiplier,
            body_damage: cfg.body_damage,
            deletable: false,
            steer_accumulator: 1.0,
            state: KindState::Demon(DemonState {
                initial_health: health,
                spit_interval: cfg.spit_interval,
                spit_accumulator: 0.0,
                charge_accumulator: 0.0,
                pre_charge_accumulator: 0.0,
                charging: false,
                charged: false,
                multiplier,
            }),
        }
    }

    #[inline]
    pub fn tag(&self) -> Tag {
        match self.kind {
            EnemyKind::Swarmer => Tag::Swarmer,
            EnemyKind::Spitter => Tag::Spitter,
            EnemyKind::Demon => Tag::Demon,
        }
    }

    /// Subtract damage and report the death transition. Health is not
    /// clamped; how far below zero it lands is the overkill signal.
    pub fn take_damage(&mut self, damage: f32) -> bool {
        self.health -= damage;
        self.health <= 0.0
    }

    /// Knockback on ramming the player: a fixed burst per axis, reversed in
    /// sign against current velocity. Positive velocity pushes negative;
    /// zero counts as negative, so an idle enemy is shoved up-right. Also
    /// resets the steering gate so the shove isn't instantly overwritten.
    pub fn push_away(&mut self) {
        let x = if self.vel.x > 0.0 {
            -PUSH_BURST
        } else {
            PUSH_BURST
        };
        let y = if self.vel.y > 0.0 {
            -PUSH_BURST
        } else {
            PUSH_BURST
        };
        self.steer_accumulator = 0.0;
        self.vel = Vec2::new(x, y);
    }

    /// Re-aim at the target if the steering gate is open.
    fn steer(&mut self, target: Vec2) {
        if self.steer_accumulator > 1.0 {
            self.vel = aim_velocity(self.pos, target, self.max_velocity);
        }
    }

    /// Per-tick behavior. May push shot requests for the frame loop to
    /// materialize as projectiles.
    pub fn update(&mut self, player_pos: Vec2, dt: f32, cfg: &TuningCfg, shots: &mut Vec<ShotRequest>) {
        self.steer_accumulator += dt;
        match &mut self.state {
            KindState::Swarmer => {
                self.steer(player_pos);
            }
            KindState::Spitter { spit_accumulator } => {
                *spit_accumulator += dt;
                if *spit_accumulator >= cfg.spitter.spit_interval {
                    shots.push(ShotRequest {
                        shooter: self.id,
                        from: self.pos,
                        target: player_pos,
                        damage: cfg.spitter.bullet_damage,
                    });
                    *spit_accumulator = 0.0;
                }
            }
            KindState::Demon(_) => self.update_demon(player_pos, dt, &cfg.demon, shots),
        }
    }

    fn update_demon(&mut self, player_pos: Vec2, dt: f32, cfg: &DemonCfg, shots: &mut Vec<ShotRequest>) {
        let KindState::Demon(ref mut d) = self.state else {
            return;
        };
        d.spit_accumulator += dt;
        d.charge_accumulator += dt;

        // Health-threshold phases.
        if self.health <= d.initial_health * 0.6 {
            d.spit_interval = cfg.enraged_spit_interval;
        }
        let chase = self.health <= d.initial_health * 0.5 && !d.charging;
        let start_charge =
            self.health <= d.initial_health * 0.35 && d.charge_accumulator >= cfg.charge_cooldown;

        if start_charge {
            d.charging = true;
            // Charge sub-state: halt, wind up, then dash at boosted speed
            // until the window closes.
            if !d.charged {
                self.vel = Vec2::ZERO;
            }
            d.pre_charge_accumulator += dt;
            if d.pre_charge_accumulator >= cfg.pre_charge_time - d.multiplier * 0.1 {
                self.max_velocity = cfg.charge_velocity * (d.multiplier + d.multiplier * 0.4);
                let gate_open = self.steer_accumulator > 1.0;
                // High-difficulty bosses keep tracking mid-dash; otherwise
                // the dash direction locks in once.
                if gate_open && (!d.charged || d.multiplier >= 1.4) {
                    self.vel = aim_velocity(self.pos, player_pos, self.max_velocity);
                }
                d.charged = true;
            }
            if d.pre_charge_accumulator >= cfg.end_charge_time {
                self.vel = Vec2::ZERO;
                self.max_velocity = cfg.max_velocity * d.multiplier;
                d.pre_charge_accumulator = 0.0;
                d.charge_accumulator = 0.0;
                d.charging = false;
                d.charged = false;
            }
        } else if chase && self.steer_accumulator > 1.0 {
            self.vel = aim_velocity(self.pos, player_pos, self.max_velocity);
        }

        // Volleys pause while charging.
        if d.spit_accumulator >= d.spit_interval && !d.charging {
            for target in [
                Vec2::new(player_pos.x, player_pos.y + 20.0),
                player_pos,
                Vec2::new(player_pos.x - 20.0, player_pos.y),
            ] {
                shots.push(ShotRequest {
                    shooter: self.id,
                    from: self.pos,
                    target,
                    damage: cfg.bullet_damage,
                });
            }
            d.spit_accumulator = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swarmer_at(pos: Vec2) -> Enemy {
        Enemy::swarmer(EntityId(1), pos, &SwarmerCfg::default(), 1.0)
    }

    #[test]
    fn overkill_health_goes_negative() {
        let mut e = swarmer_at(Vec2::ZERO);
        assert!(e.take_damage(20.0));
        assert_eq!(e.health, -10.0);
    }

    #[test]
    fn healing_damage_is_possible() {
        // Negative damage heals; the original never guarded this either.
        let mut e = swarmer_at(Vec2::ZERO);
        assert!(!e.take_damage(-10.0));
        assert_eq!(e.health, 20.0);
    }

    #[test]
    fn knockback_suppresses_steering_for_a_second() {
        let mut e = swarmer_at(Vec2::new(10.0, 10.0));
        e.vel = Vec2::new(5.0, -5.0);
        e.push_away();
        let burst = e.vel;
        let mut shots = Vec::new();
        e.update(Vec2::ZERO, 0.5, &TuningCfg::default(), &mut shots);
        assert_eq!(e.vel, burst, "steering must stay gated while refilling");
        e.update(Vec2::ZERO, 0.6, &TuningCfg::default(), &mut shots);
        assert_ne!(e.vel, burst, "gate reopens after one second");
    }
}
