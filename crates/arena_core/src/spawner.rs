//! Time-driven spawn and difficulty controller.
//!
//! Three independent accumulators (swarmer, spitter, demon) plus a ten-second
//! group-burst window decide what enters the arena each tick. All placement
//! retries are bounded; running out of attempts skips the spawn for the tick
//! instead of stalling the frame loop.

use data_runtime::configs::tuning::SpawnerCfg;
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::enemy::EnemyKind;
use crate::Arena;

/// A placement decision for the frame loop to materialize.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpawnCmd {
    pub kind: EnemyKind,
    pub pos: Vec2,
}

#[derive(Debug)]
pub struct SpawnController {
    cfg: SpawnerCfg,
    rng: ChaCha8Rng,
    swarmer_accumulator: f32,
    spitter_accumulator: f32,
    /// Frozen while a boss is alive.
    demon_accumulator: f32,
    /// Elapsed game time driving the group-burst window.
    time: f32,
    /// One burst per ten-second window; rearms at second one of the next.
    group_spawned: bool,
    boss_alive: bool,
    demons_slain: u32,
    multiplier: f32,
}

impl SpawnController {
    pub fn new(cfg: SpawnerCfg, seed: u64) -> Self {
        Self {
            cfg,
            rng: ChaCha8Rng::seed_from_u64(seed),
            swarmer_accumulator: 0.0,
            spitter_accumulator: 0.0,
            demon_accumulator: 0.0,
            time: 0.0,
            group_spawned: false,
            boss_alive: false,
            demons_slain: 0,
            multiplier: 1.0,
        }
    }

    #[inline]
    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    #[inline]
    pub fn boss_alive(&self) -> bool {
        self.boss_alive
    }

    #[inline]
    pub fn demons_slain(&self) -> u32 {
        self.demons_slain
    }

    /// Advance all timers and decide this tick's spawns. `bodies` are the
    /// footprints of everything currently occupying the arena (player,
    /// enemies, projectiles), used for overlap rejection.
    pub fn update(
        &mut self,
        dt: f32,
        arena: &Arena,
        player_pos: Vec2,
        bodies: &[Vec2],
    ) -> Vec<SpawnCmd> {
        self.swarmer_accumulator += dt;
        self.spitter_accumulator += dt;
        if !self.boss_alive {
            self.demon_accumulator += dt;
        }
        self.time += dt;

        let mut out = Vec::new();
        self.group_window(arena, player_pos, bodies, &mut out);
        self.demon_gate(arena, &mut out);
        self.ordinary_spawns(arena, player_pos, bodies, &mut out);
        out
    }

    /// Spitter (slow timer) and swarmer (fast timer) singles. A candidate
    /// cell is rejected when its coordinate sum is within `min_sum_gap` of
    /// the player's, and swarmers additionally reject occupied footprints.
    fn ordinary_spawns(
        &mut self,
        arena: &Arena,
        player_pos: Vec2,
        bodies: &[Vec2],
        out: &mut Vec<SpawnCmd>,
    ) {
        if self.spitter_accumulator >= self.cfg.spitter_interval && !self.boss_alive {
            match self.pick_cell(arena, player_pos, None) {
                Some(pos) => {
                    out.push(SpawnCmd {
                        kind: EnemyKind::Spitter,
                        pos,
                    });
                    self.spitter_accumulator = 0.0;
                }
                None => log::warn!("spawner: no valid spitter cell this tick"),
            }
        }
        if self.swarmer_accumulator >= self.cfg.swarmer_interval && !self.boss_alive {
            match self.pick_cell(arena, player_pos, Some(bodies)) {
                Some(pos) => {
                    out.push(SpawnCmd {
                        kind: EnemyKind::Swarmer,
                        pos,
                    });
                    self.swarmer_accumulator = 0.0;
                }
                None => log::warn!("spawner: no valid swarmer cell this tick"),
            }
        }
    }

    /// Bounded rejection sampling over whole-unit cells inside the arena.
    fn pick_cell(&mut self, arena: &Arena, player_pos: Vec2, avoid: Option<&[Vec2]>) -> Option<Vec2> {
        if arena.width < 3.0 || arena.height < 3.0 {
            return None;
        }
        let player_sum = player_pos.x + player_pos.y;
        for _ in 0..self.cfg.max_attempts {
            let x = self.rng.gen_range(1..arena.width as i32 - 1) as f32;
            let y = self.rng.gen_range(1..arena.height as i32 - 1) as f32;
            if (x + y - player_sum).abs() <= self.cfg.min_sum_gap {
                continue;
            }
            if let Some(bodies) = avoid {
                if overlaps_any(x, y, bodies) {
                    continue;
                }
            }
            return Some(Vec2::new(x, y));
        }
        None
    }

    /// Every ten whole seconds of game time, anchor a rows x cols grid of
    /// swarmers far from the player, skipping occupied cells. The guard flag
    /// keeps it to one burst per window.
    fn group_window(
        &mut self,
        arena: &Arena,
        player_pos: Vec2,
        bodies: &[Vec2],
        out: &mut Vec<SpawnCmd>,
    ) {
        if self.boss_alive {
            return;
        }
        let whole = self.time as i32;
        if whole % 10 == 0 && !self.group_spawned && self.time >= 10.0 {
            self.spawn_group(arena, player_pos, bodies, out);
            self.group_spawned = true;
        } else if whole % 10 == 1 {
            self.group_spawned = false;
        }
    }

    fn spawn_group(
        &mut self,
        arena: &Arena,
        player_pos: Vec2,
        bodies: &[Vec2],
        out: &mut Vec<SpawnCmd>,
    ) {
        if arena.width < 52.0 || arena.height < 52.0 {
            log::warn!("spawner: arena too small for a group burst");
            return;
        }
        let player_sum = player_pos.x + player_pos.y;
        let min_gap = arena.width / 2.0 - 25.0;
        for _ in 0..self.cfg.max_attempts {
            let ax = (self.rng.gen_range(0..arena.width as i32 - 50) + 25) as f32;
            let ay = (self.rng.gen_range(0..arena.height as i32 - 50) + 25) as f32;
            if (ax + ay - player_sum).abs() <= min_gap {
                continue;
            }
            for row in 0..self.cfg.group_rows {
                for col in 0..self.cfg.group_cols {
                    let x = ax + col as f32 * self.cfg.group_spacing;
                    let y = ay + row as f32 * self.cfg.group_spacing;
                    if !overlaps_any(x, y, bodies) {
                        out.push(SpawnCmd {
                            kind: EnemyKind::Swarmer,
                            pos: Vec2::new(x, y),
                        });
                    }
                }
            }
            return;
        }
        log::warn!("spawner: no valid group anchor this tick");
    }

    /// One boss at a time: the timer only runs while no boss is alive, and
    /// the spawn lands at the arena center.
    fn demon_gate(&mut self, arena: &Arena, out: &mut Vec<SpawnCmd>) {
        if self.demon_accumulator >= self.cfg.demon_interval && !self.boss_alive {
            out.push(SpawnCmd {
                kind: EnemyKind::Demon,
                pos: Vec2::new(arena.width / 2.0, arena.height / 2.0),
            });
            self.boss_alive = true;
            self.demon_accumulator = 0.0;
            metrics::counter!("arena.boss_spawns_total").increment(1);
        }
    }

    /// Boss death: bump the difficulty multiplier and restart the boss
    /// timer. The caller applies the new multiplier to the player.
    pub fn boss_slain(&mut self) -> f32 {
        self.boss_alive = false;
        self.demon_accumulator = 0.0;
        self.demons_slain += 1;
        self.multiplier += self.cfg.difficulty_step;
        log::info!(
            "spawner: boss slain ({} total), difficulty multiplier now {:.2}",
            self.demons_slain,
            self.multiplier
        );
        self.multiplier
    }
}

/// The original AABB pre-spawn query: occupied means within the unit box
/// around any existing body center.
fn overlaps_any(x: f32, y: f32, bodies: &[Vec2]) -> bool {
    bodies
        .iter()
        .any(|b| x > b.x - 1.0 && x < b.x + 1.0 && y > b.y - 1.0 && y < b.y + 1.0)
}
