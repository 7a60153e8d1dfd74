use arena_core::{Enemy, EntityId, KindState, ShotRequest};
use data_runtime::configs::tuning::TuningCfg;
use glam::Vec2;

fn demon_at(pos: Vec2) -> Enemy {
    Enemy::demon(EntityId(1), pos, &TuningCfg::default().demon, 1.0)
}

fn demon_state(e: &Enemy) -> &arena_core::enemy::DemonState {
    match &e.state {
        KindState::Demon(d) => d,
        other => panic!("expected demon state, got {other:?}"),
    }
}

#[test]
fn volley_is_three_shots_bracketing_the_player() {
    let cfg = TuningCfg::default();
    let mut e = demon_at(Vec2::ZERO);
    let player = Vec2::new(100.0, 0.0);
    let mut shots: Vec<ShotRequest> = Vec::new();
    e.update(player, 1.0, &cfg, &mut shots);

    let targets: Vec<Vec2> = shots.iter().map(|s| s.target).collect();
    assert_eq!(
        targets,
        vec![
            Vec2::new(100.0, 20.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(80.0, 0.0),
        ]
    );
    assert!(shots.iter().all(|s| s.damage == 15.0));
}

#[test]
fn volleys_double_in_rate_at_sixty_percent_health() {
    let cfg = TuningCfg::default();
    let mut e = demon_at(Vec2::ZERO);
    e.health = 600.0;
    let player = Vec2::new(100.0, 100.0);

    let mut shots = Vec::new();
    e.update(player, 0.25, &cfg, &mut shots);
    assert!(shots.is_empty());
    assert_eq!(demon_state(&e).spit_interval, 0.5);

    e.update(player, 0.25, &cfg, &mut shots);
    assert_eq!(shots.len(), 3, "half-second volley once enraged");
}

#[test]
fn charge_cycle_halts_dashes_then_resets() {
    let cfg = TuningCfg::default();
    let mut e = demon_at(Vec2::ZERO);
    e.health = 350.0;
    let player = Vec2::new(100.0, 0.0);

    let mut halted = false;
    let mut dashed = false;
    for _ in 0..200 {
        let mut shots = Vec::new();
        e.update(player, 0.1, &cfg, &mut shots);
        let d = demon_state(&e);
        if d.charging && !d.charged {
            // Wind-up: rooted in place, volleys paused.
            halted = true;
            assert_eq!(e.vel, Vec2::ZERO);
            assert!(shots.is_empty());
        }
        if d.charged {
            dashed = true;
            assert_eq!(e.max_velocity, 280.0);
            let speed = e.vel.x.abs() + e.vel.y.abs();
            assert!((speed - 280.0).abs() < 1e-2, "dash at full burst, got {speed}");
        }
        if halted && dashed && !d.charging {
            assert_eq!(e.vel, Vec2::ZERO);
            assert_eq!(e.max_velocity, 50.0);
            assert_eq!(d.charge_accumulator, 0.0);
            return;
        }
    }
    panic!("charge cycle never completed");
}

#[test]
fn below_half_health_the_demon_chases() {
    let cfg = TuningCfg::default();
    let mut e = demon_at(Vec2::ZERO);
    e.health = 450.0;
    let mut shots = Vec::new();
    e.update(Vec2::new(100.0, 50.0), 0.1, &cfg, &mut shots);
    assert!(e.vel.x > 0.0 && e.vel.y > 0.0);
    assert!((e.vel.x.abs() + e.vel.y.abs() - 50.0).abs() < 1e-3);
}
