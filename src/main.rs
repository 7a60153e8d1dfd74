//! Headless demo run: a scripted player survives as long as it can while
//! the spawn controller ramps difficulty. Useful for balance smoke-checks
//! and as an embedding example; rendering belongs to a host engine.

use arena_core::{ArenaState, GameState, PlayerInput};
use glam::Vec2;

const TICK: f32 = 1.0 / 60.0;
/// Safety cap, five minutes of simulated time.
const MAX_TICKS: u64 = 5 * 60 * 60;

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42u64);
    log::info!("starting headless run (seed={seed})");

    let mut state = ArenaState::new(seed);
    let mut flashes = 0usize;
    for t in 0..MAX_TICKS {
        let input = scripted_input(&state);
        state.step_frame(&input, TICK);
        flashes += state.drain_flashes().len();
        for k in state.drain_kills() {
            log::debug!("kill at {} (enemy {:?})", k.pos, k.enemy);
        }
        if state.state == GameState::Dead {
            log::info!("run over at t={:.1}s", t as f32 * TICK);
            break;
        }
    }

    log::info!(
        "result: kills={} score={} hits_taken={} bosses_slain={} multiplier={:.2}",
        state.player.kill_count,
        state.player.score,
        flashes,
        state.spawner.demons_slain(),
        state.spawner.multiplier()
    );
}

/// Kite toward the arena center and hold fire on the nearest enemy.
fn scripted_input(state: &ArenaState) -> PlayerInput {
    let mut input = PlayerInput::default();
    let center = Vec2::new(state.arena.width / 2.0, state.arena.height / 2.0);
    let p = state.player.pos;
    input.left = p.x > center.x + 20.0;
    input.right = p.x < center.x - 20.0;
    input.up = p.y < center.y - 20.0;
    input.down = p.y > center.y + 20.0;

    let nearest = state
        .enemies
        .iter()
        .min_by(|a, b| {
            a.pos
                .distance_squared(p)
                .total_cmp(&b.pos.distance_squared(p))
        })
        .map(|e| e.pos);
    input.fire_at = nearest;
    input
}
