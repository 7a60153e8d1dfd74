//! Authoritative arena-combat simulation.
//!
//! Owns the player, the live enemy set, in-flight projectiles, and the spawn
//! controller, and advances them with a fixed-order tick: input, entity
//! updates, spawning, integration, contact resolution, then deferred
//! cleanup. Rendering and input polling live in the embedding layer; the
//! only outward surfaces are the flash/kill buses.

use std::collections::HashSet;

use data_runtime::configs::tuning::TuningCfg;
use glam::Vec2;

pub mod actor;
pub mod enemy;
pub mod events;
pub mod player;
pub mod projectile;
pub mod schedule;
pub mod spawner;
pub mod steer;

pub use actor::{BodyId, EntityId, ProjId, Side, Tag};
pub use enemy::{Enemy, EnemyKind, KindState, ShotRequest};
pub use events::{ContactEvent, FlashFx, KillEvent};
pub use player::{Player, PlayerInput};
pub use projectile::Projectile;
pub use spawner::{SpawnCmd, SpawnController};

/// Playfield bounds in world units.
#[derive(Copy, Clone, Debug)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

/// Outer run state branched on by the frame loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Run,
    Pause,
    Dead,
}

pub struct ArenaState {
    pub cfg: TuningCfg,
    pub arena: Arena,
    pub state: GameState,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub spawner: SpawnController,
    /// Player-hit feedback for the embedding layer; drain per frame.
    pub fx_flashes: Vec<FlashFx>,
    /// Enemy deaths credited to the player this run; drain per frame.
    pub kills: Vec<KillEvent>,
    pub tick: u64,
    pub(crate) contacts_prev: HashSet<(BodyId, BodyId)>,
    next_enemy_id: u32,
    next_proj_id: u32,
}

impl ArenaState {
    /// Build from `data/config/tuning.toml`, falling back to compiled-in
    /// defaults when the file is missing or malformed.
    pub fn new(seed: u64) -> Self {
        let cfg = match TuningCfg::load_default() {
            Ok(c) => c,
            Err(e) => {
                log::warn!("arena: failed to load tuning config, using defaults: {e:#}");
                TuningCfg::default()
            }
        };
        Self::with_cfg(cfg, seed)
    }

    pub fn with_cfg(cfg: TuningCfg, seed: u64) -> Self {
        let arena = Arena {
            width: cfg.arena.width,
            height: cfg.arena.height,
        };
        let player = Player::new(&cfg.player, Vec2::new(arena.width / 2.0, arena.height / 2.0));
        let spawner = SpawnController::new(cfg.spawner.clone(), seed);
        Self {
            cfg,
            arena,
            state: GameState::Run,
            player,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            spawner,
            fx_flashes: Vec::new(),
            kills: Vec::new(),
            tick: 0,
            contacts_prev: HashSet::new(),
            next_enemy_id: 1,
            next_proj_id: 1,
        }
    }

    /// Advance one frame. `Pause` and `Dead` freeze the simulation.
    pub fn step_frame(&mut self, input: &PlayerInput, dt: f32) {
        if self.state != GameState::Run {
            return;
        }
        schedule::run(self, input, dt);
    }

    pub fn spawn_enemy(&mut self, kind: EnemyKind, pos: Vec2) -> EntityId {
        let id = EntityId(self.next_enemy_id);
        self.next_enemy_id = self.next_enemy_id.wrapping_add(1);
        let mult = self.spawner.multiplier();
        let enemy = match kind {
            EnemyKind::Swarmer => Enemy::swarmer(id, pos, &self.cfg.swarmer, mult),
            EnemyKind::Spitter => Enemy::spitter(id, pos, &self.cfg.spitter),
            EnemyKind::Demon => {
                log::info!("arena: demon spawned at {pos} with multiplier {mult:.2}");
                Enemy::demon(id, pos, &self.cfg.demon, mult)
            }
        };
        self.enemies.push(enemy);
        metrics::counter!("arena.spawns_total").increment(1);
        id
    }

    pub fn fire_player_projectile(&mut self, target: Vec2) {
        let id = ProjId(self.next_proj_id);
        self.next_proj_id = self.next_proj_id.wrapping_add(1);
        self.projectiles.push(Projectile::launch(
            id,
            Side::Player,
            None,
            self.player.pos,
            target,
            self.cfg.player.projectile_speed,
            self.player.bullet_damage,
            self.cfg.player.projectile_despawn,
        ));
    }

    pub fn fire_enemy_projectile(&mut self, shot: ShotRequest) {
        let id = ProjId(self.next_proj_id);
        self.next_proj_id = self.next_proj_id.wrapping_add(1);
        self.projectiles.push(Projectile::launch(
            id,
            Side::Enemy,
            Some(shot.shooter),
            shot.from,
            shot.target,
            self.cfg.spitter.projectile_speed,
            shot.damage,
            self.cfg.spitter.projectile_despawn,
        ));
    }

    /// Fail-closed lookups: a body removed earlier in the tick is `None`.
    pub fn enemy(&self, id: EntityId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn enemy_mut(&mut self, id: EntityId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.id == id)
    }

    pub fn projectile(&self, id: ProjId) -> Option<&Projectile> {
        self.projectiles.iter().find(|p| p.id == id)
    }

    pub fn projectile_mut(&mut self, id: ProjId) -> Option<&mut Projectile> {
        self.projectiles.iter_mut().find(|p| p.id == id)
    }

    /// The unique boss, if one is alive.
    pub fn boss(&self) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.kind == EnemyKind::Demon)
    }

    pub fn drain_flashes(&mut self) -> Vec<FlashFx> {
        std::mem::take(&mut self.fx_flashes)
    }

    pub fn drain_kills(&mut self) -> Vec<KillEvent> {
        std::mem::take(&mut self.kills)
    }
}
