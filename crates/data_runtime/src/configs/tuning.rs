//! Combat/spawn tuning configuration.
//!
//! Parses `data/config/tuning.toml`. Every field has a default matching the
//! shipped balance so a missing or partial file still yields a playable
//! setup; callers that want hard failures can inspect the `Result`.

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TuningCfg {
    pub arena: ArenaCfg,
    pub player: PlayerCfg,
    pub swarmer: SwarmerCfg,
    pub spitter: SpitterCfg,
    pub demon: DemonCfg,
    pub spawner: SpawnerCfg,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArenaCfg {
    /// Width in world units (a 1920x1080 window over the 6:1 view scale).
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaCfg {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 180.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerCfg {
    pub health: f32,
    pub max_velocity: f32,
    pub acceleration: f32,
    pub radius: f32,
    pub bullet_damage: f32,
    /// Seconds between shots while the trigger is held.
    pub shot_time: f32,
    /// Seconds between shotgun volleys.
    pub shotgun_time: f32,
    pub projectile_speed: f32,
    pub projectile_despawn: f32,
    /// Deceleration applied to a movement axis with no input.
    pub drag: f32,
}

impl Default for PlayerCfg {
    fn default() -> Self {
        Self {
            health: 100.0,
            max_velocity: 80.0,
            acceleration: 30.0,
            radius: 1.0,
            bullet_damage: 10.0,
            shot_time: 0.2,
            shotgun_time: 1.0,
            projectile_speed: 150.0,
            projectile_despawn: 2.0,
            drag: 8.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SwarmerCfg {
    pub health: f32,
    pub max_velocity: f32,
    pub body_damage: f32,
    pub radius: f32,
}

impl Default for SwarmerCfg {
    fn default() -> Self {
        Self {
            health: 10.0,
            max_velocity: 60.0,
            body_damage: 10.0,
            radius: 1.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpitterCfg {
    pub health: f32,
    pub body_damage: f32,
    pub bullet_damage: f32,
    pub radius: f32,
    /// Seconds between shots at the player.
    pub spit_interval: f32,
    pub projectile_speed: f32,
    pub projectile_despawn: f32,
}

impl Default for SpitterCfg {
    fn default() -> Self {
        Self {
            health: 30.0,
            body_damage: 15.0,
            bullet_damage: 15.0,
            radius: 1.5,
            spit_interval: 3.0,
            projectile_speed: 170.0,
            projectile_despawn: 3.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemonCfg {
    pub health: f32,
    pub max_velocity: f32,
    pub body_damage: f32,
    pub bullet_damage: f32,
    pub radius: f32,
    pub spit_interval: f32,
    /// Volley interval once health drops to 60% of initial.
    pub enraged_spit_interval: f32,
    /// Seconds of cooldown before a charge may begin.
    pub charge_cooldown: f32,
    pub pre_charge_time: f32,
    /// Total seconds from pre-charge start until the charge ends.
    pub end_charge_time: f32,
    pub charge_velocity: f32,
}

impl Default for DemonCfg {
    fn default() -> Self {
        Self {
            health: 1000.0,
            max_velocity: 50.0,
            body_damage: 25.0,
            bullet_damage: 15.0,
            radius: 3.0,
            spit_interval: 1.0,
            enraged_spit_interval: 0.5,
            charge_cooldown: 5.0,
            pre_charge_time: 0.6,
            end_charge_time: 2.1,
            charge_velocity: 200.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpawnerCfg {
    pub swarmer_interval: f32,
    pub spitter_interval: f32,
    /// Boss timer; accumulates only while no boss is alive.
    pub demon_interval: f32,
    /// Candidate positions with |sum - player sum| at or below this are rejected.
    pub min_sum_gap: f32,
    /// Retry cap per spawn decision; exhaustion skips the spawn this tick.
    pub max_attempts: u32,
    pub group_rows: u32,
    pub group_cols: u32,
    pub group_spacing: f32,
    /// Difficulty multiplier increase per boss kill.
    pub difficulty_step: f32,
}

impl Default for SpawnerCfg {
    fn default() -> Self {
        Self {
            swarmer_interval: 2.0,
            spitter_interval: 10.0,
            demon_interval: 90.0,
            min_sum_gap: 120.0,
            max_attempts: 100,
            group_rows: 3,
            group_cols: 6,
            group_spacing: 3.0,
            difficulty_step: 0.15,
        }
    }
}

impl TuningCfg {
    /// Load the default tuning from `data/config/tuning.toml`.
    pub fn load_default() -> Result<Self> {
        let txt = crate::loader::read_text("config/tuning.toml")?;
        let cfg: TuningCfg = toml::from_str(&txt).context("parse tuning.toml")?;
        Ok(cfg)
    }
}
