use std::collections::HashSet;

use arena_core::{ArenaState, EntityId, PlayerInput};
use data_runtime::configs::tuning::TuningCfg;

#[test]
fn singles_spawn_far_from_the_player_and_inside_the_walls() {
    let mut cfg = TuningCfg::default();
    cfg.spawner.swarmer_interval = 0.5;
    cfg.spawner.spitter_interval = 0.5;
    let mut state = ArenaState::with_cfg(cfg, 3);
    state.player.health = 1.0e9;
    let player_sum = state.player.pos.x + state.player.pos.y;

    let mut seen: HashSet<EntityId> = HashSet::new();
    let mut spawned = 0;
    // Stay under the ten-second mark so no group burst muddies the sample.
    for _ in 0..16 {
        state.step_frame(&PlayerInput::default(), 0.5);
        for e in &state.enemies {
            if !seen.insert(e.id) {
                continue;
            }
            spawned += 1;
            // Fresh spawns have not moved yet this tick.
            assert!(
                (e.pos.x + e.pos.y - player_sum).abs() > 120.0,
                "spawn at {} too close to the player diagonal",
                e.pos
            );
            assert!(e.pos.x >= 1.0 && e.pos.x <= state.arena.width - 2.0);
            assert!(e.pos.y >= 1.0 && e.pos.y <= state.arena.height - 2.0);
        }
    }
    assert!(spawned >= 10, "expected a steady spawn stream, got {spawned}");
}

#[test]
fn exhausted_placement_skips_the_spawn_instead_of_stalling() {
    // Every cell of a 60x40 arena is within the rejection band of a
    // centered player, so placement must give up each tick.
    let mut cfg = TuningCfg::default();
    cfg.arena.width = 60.0;
    cfg.arena.height = 40.0;
    cfg.spawner.swarmer_interval = 0.5;
    cfg.spawner.spitter_interval = 0.5;
    let mut state = ArenaState::with_cfg(cfg, 5);

    for _ in 0..10 {
        state.step_frame(&PlayerInput::default(), 0.5);
    }
    assert!(state.enemies.is_empty());
}

#[test]
fn group_burst_fires_once_per_ten_second_window() {
    let mut state = ArenaState::with_cfg(TuningCfg::default(), 9);
    state.player.health = 1.0e9;

    let mut bursts = 0;
    for _ in 0..30 {
        let before = state.enemies.len();
        state.step_frame(&PlayerInput::default(), 1.0);
        // Singles add at most two enemies a tick; a jump means the grid.
        if state.enemies.len() - before >= 10 {
            bursts += 1;
        }
    }
    assert_eq!(bursts, 3, "one burst each at t=10, 20, 30");
}
