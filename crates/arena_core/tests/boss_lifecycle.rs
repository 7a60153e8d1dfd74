use arena_core::{ArenaState, EnemyKind, PlayerInput};
use data_runtime::configs::tuning::TuningCfg;
use glam::Vec2;

/// Shrunken arena (no ordinary spawns possible) with a one-second boss
/// timer so the lifecycle fits in a handful of steps.
fn boss_state() -> ArenaState {
    let mut cfg = TuningCfg::default();
    cfg.arena.width = 50.0;
    cfg.arena.height = 50.0;
    cfg.spawner.demon_interval = 1.0;
    let mut state = ArenaState::with_cfg(cfg, 11);
    // Out of the spawn point, and tough enough to ignore the volleys.
    state.player.pos = Vec2::new(5.0, 5.0);
    state.player.health = 1.0e9;
    state
}

#[test]
fn demon_spawns_at_center_once_the_timer_fills() {
    let mut state = boss_state();
    state.step_frame(&PlayerInput::default(), 0.5);
    assert!(state.boss().is_none());
    state.step_frame(&PlayerInput::default(), 0.5);

    let boss = state.boss().expect("boss due at one second");
    assert_eq!(boss.pos, Vec2::new(25.0, 25.0));
    assert_eq!(boss.health, 1000.0);
    assert_eq!(boss.max_velocity, 50.0);
    assert!(state.spawner.boss_alive());
}

#[test]
fn at_most_one_boss_at_a_time() {
    let mut state = boss_state();
    // Well past several would-be boss intervals.
    for _ in 0..12 {
        state.step_frame(&PlayerInput::default(), 0.5);
    }
    let demons = state
        .enemies
        .iter()
        .filter(|e| e.kind == EnemyKind::Demon)
        .count();
    assert_eq!(demons, 1, "boss timer must freeze while one is alive");
    assert_eq!(state.enemies.len(), 1);
}

#[test]
fn slaying_the_boss_raises_difficulty_and_rearms_the_timer() {
    let mut state = boss_state();
    state.step_frame(&PlayerInput::default(), 0.5);
    state.step_frame(&PlayerInput::default(), 0.5);
    let id = state.boss().expect("first boss").id;

    state.enemy_mut(id).expect("boss lookup").health = -5.0;
    state.step_frame(&PlayerInput::default(), 0.5);

    assert!(state.boss().is_none());
    assert!(!state.spawner.boss_alive());
    assert_eq!(state.spawner.demons_slain(), 1);
    assert!((state.spawner.multiplier() - 1.15).abs() < 1e-3);
    assert!(
        state.projectiles.is_empty(),
        "in-flight boss shots die with it"
    );
    assert_eq!(state.player.kill_count, 0, "no shot, no kill credit");
    assert!((state.player.max_velocity - 92.0).abs() < 1e-2);

    // Timer restarts from zero and the replacement inherits the multiplier.
    state.step_frame(&PlayerInput::default(), 0.5);
    state.step_frame(&PlayerInput::default(), 0.5);
    let next = state.boss().expect("second boss");
    assert!((next.health - 1150.0).abs() < 0.1);
    assert!((next.max_velocity - 57.5).abs() < 1e-2);
}
