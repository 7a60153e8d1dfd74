//! Fixed-order per-tick systems over the arena state.
//!
//! Ordering is load-bearing: entity updates may schedule projectile
//! creation, the integrate step moves every body exactly once, contact
//! resolution consumes the begin events that step produced, and body removal
//! is deferred to the cleanup phase at the end of the tick.

use std::collections::HashSet;

use glam::Vec2;

use crate::actor::{BodyId, Side, Tag};
use crate::enemy::EnemyKind;
use crate::events::{ContactEvent, FlashFx, KillEvent};
use crate::player::PlayerInput;
use crate::ArenaState;

/// Per-tick scratch buses shared by the systems.
#[derive(Default)]
pub struct Ctx {
    pub dt: f32,
    pub contacts: Vec<ContactEvent>,
}

pub fn run(state: &mut ArenaState, input: &PlayerInput, dt: f32) {
    let mut ctx = Ctx {
        dt,
        contacts: Vec::new(),
    };
    player_input(state, input, &ctx);
    enemy_update(state, &ctx);
    spawn_enemies(state, &ctx);
    integrate(state, &ctx);
    detect_contacts(state, &mut ctx);
    resolve_contacts(state, &mut ctx);
    apply_deaths(state);
    cleanup(state);
    state.tick = state.tick.wrapping_add(1);
}

fn player_input(state: &mut ArenaState, input: &PlayerInput, ctx: &Ctx) {
    state.player.apply_movement(input, ctx.dt);
    let (shot, shotgun) = state.player.update_weapons(input, ctx.dt);
    if let Some(at) = shot {
        state.fire_player_projectile(at);
    }
    if let Some(at) = shotgun {
        // Three-shot spread around the aim point.
        state.fire_player_projectile(at);
        state.fire_player_projectile(at + Vec2::splat(10.0));
        state.fire_player_projectile(at - Vec2::splat(10.0));
    }
}

fn enemy_update(state: &mut ArenaState, ctx: &Ctx) {
    let player_pos = state.player.pos;
    let mut shots = Vec::new();
    let cfg = &state.cfg;
    for e in &mut state.enemies {
        e.update(player_pos, ctx.dt, cfg, &mut shots);
    }
    for s in shots {
        state.fire_enemy_projectile(s);
    }
}

fn spawn_enemies(state: &mut ArenaState, ctx: &Ctx) {
    let bodies: Vec<Vec2> = std::iter::once(state.player.pos)
        .chain(state.enemies.iter().map(|e| e.pos))
        .chain(state.projectiles.iter().map(|p| p.pos))
        .collect();
    let cmds = state
        .spawner
        .update(ctx.dt, &state.arena, state.player.pos, &bodies);
    for cmd in cmds {
        state.spawn_enemy(cmd.kind, cmd.pos);
    }
}

fn integrate(state: &mut ArenaState, ctx: &Ctx) {
    let dt = ctx.dt;
    let arena = state.arena;

    let p = &mut state.player;
    p.pos += p.vel * dt;
    // Border walls: stop the player dead.
    if p.pos.x < p.radius || p.pos.x > arena.width - p.radius {
        p.pos.x = p.pos.x.clamp(p.radius, arena.width - p.radius);
        p.vel.x = 0.0;
    }
    if p.pos.y < p.radius || p.pos.y > arena.height - p.radius {
        p.pos.y = p.pos.y.clamp(p.radius, arena.height - p.radius);
        p.vel.y = 0.0;
    }

    for e in &mut state.enemies {
        e.pos += e.vel * dt;
        bounce(&mut e.pos, &mut e.vel, e.radius, arena);
    }

    for proj in &mut state.projectiles {
        proj.apply_drag(dt);
        proj.pos += proj.vel * dt;
        bounce(&mut proj.pos, &mut proj.vel, proj.radius, arena);
        proj.tick_age(dt);
    }
}

/// Reflect a body off the border walls (the original's restitution bounce).
fn bounce(pos: &mut Vec2, vel: &mut Vec2, radius: f32, arena: crate::Arena) {
    if pos.x < radius || pos.x > arena.width - radius {
        pos.x = pos.x.clamp(radius, arena.width - radius);
        vel.x = -vel.x;
    }
    if pos.y < radius || pos.y > arena.height - radius {
        pos.y = pos.y.clamp(radius, arena.height - radius);
        vel.y = -vel.y;
    }
}

/// Circle-overlap broad pass producing one event per contact-begin. The
/// pair set is diffed against the previous tick, so an overlap that persists
/// across frames fires exactly once until the pair separates.
fn detect_contacts(state: &mut ArenaState, ctx: &mut Ctx) {
    let mut current: HashSet<(BodyId, BodyId)> = HashSet::new();
    let player = (BodyId::Player, Tag::Player, state.player.pos, state.player.radius);

    for e in &state.enemies {
        let eb = (BodyId::Enemy(e.id), e.tag(), e.pos, e.radius);
        consider(player, eb, &mut current, &mut ctx.contacts, &state.contacts_prev);
        for p in &state.projectiles {
            if p.deletable || p.side != Side::Player {
                continue;
            }
            let pb = (BodyId::Projectile(p.id), Tag::PlayerProj, p.pos, p.radius);
            consider(eb, pb, &mut current, &mut ctx.contacts, &state.contacts_prev);
        }
    }
    for p in &state.projectiles {
        if p.deletable || p.side != Side::Enemy {
            continue;
        }
        let pb = (BodyId::Projectile(p.id), Tag::EnemyProj, p.pos, p.radius);
        consider(player, pb, &mut current, &mut ctx.contacts, &state.contacts_prev);
    }

    state.contacts_prev = current;
}

type BodyRef = (BodyId, Tag, Vec2, f32);

fn consider(
    a: BodyRef,
    b: BodyRef,
    current: &mut HashSet<(BodyId, BodyId)>,
    out: &mut Vec<ContactEvent>,
    prev: &HashSet<(BodyId, BodyId)>,
) {
    let r = a.3 + b.3;
    if a.2.distance_squared(b.2) > r * r {
        return;
    }
    let key = if a.0 <= b.0 { (a.0, b.0) } else { (b.0, a.0) };
    current.insert(key);
    if !prev.contains(&key) {
        out.push(ContactEvent {
            a: (a.0, a.1),
            b: (b.0, b.1),
        });
    }
}

/// Gameplay effects per contact-begin. Order-independent: the pair is
/// normalized before dispatch, so which body was A or B never matters.
/// Lookups fail closed; a body deleted earlier in the tick is a no-op.
fn resolve_contacts(state: &mut ArenaState, ctx: &mut Ctx) {
    for ev in ctx.contacts.drain(..) {
        let pair = [ev.a, ev.b];
        let enemy = pair.iter().copied().find_map(enemy_of);
        let player_proj = pair.iter().copied().find_map(|x| proj_of(x, Tag::PlayerProj));
        let enemy_proj = pair.iter().copied().find_map(|x| proj_of(x, Tag::EnemyProj));
        let with_player = pair.iter().any(|(_, t)| *t == Tag::Player);

        if let (Some(eid), Some(pid)) = (enemy, player_proj) {
            // Enemy hit by a player shot: damage, kill credit on the death
            // transition, shot spent.
            let Some(damage) = state.projectile(pid).map(|p| p.damage) else {
                continue;
            };
            let mut killed_at = None;
            if let Some(e) = state.enemy_mut(eid) {
                let was_alive = e.health > 0.0;
                if e.take_damage(damage) && was_alive {
                    killed_at = Some(e.pos);
                }
            }
            if let Some(pos) = killed_at {
                state.player.award_kill();
                state.kills.push(KillEvent { enemy: eid, pos });
                metrics::counter!("arena.kills_total").increment(1);
            }
            if let Some(p) = state.projectile_mut(pid) {
                p.deletable = true;
            }
        } else if let (Some(eid), true) = (enemy, with_player) {
            // Enemy rams the player: knockback, body damage, screen flash.
            let Some(e) = state.enemy_mut(eid) else {
                continue;
            };
            let damage = e.body_damage;
            e.push_away();
            state.player.take_damage(damage);
            state.fx_flashes.push(FlashFx {
                pos: state.player.pos,
                damage,
            });
        } else if let (Some(pid), true) = (enemy_proj, with_player) {
            // Enemy shot lands on the player.
            let Some(damage) = state.projectile(pid).map(|p| p.damage) else {
                continue;
            };
            state.player.take_damage(damage);
            if let Some(p) = state.projectile_mut(pid) {
                p.deletable = true;
            }
            state.fx_flashes.push(FlashFx {
                pos: state.player.pos,
                damage,
            });
        }
    }
}

#[inline]
fn enemy_of((id, tag): (BodyId, Tag)) -> Option<crate::EntityId> {
    match (id, tag) {
        (BodyId::Enemy(eid), Tag::Swarmer | Tag::Spitter | Tag::Demon) => Some(eid),
        _ => None,
    }
}

#[inline]
fn proj_of((id, tag): (BodyId, Tag), want: Tag) -> Option<crate::ProjId> {
    match id {
        BodyId::Projectile(pid) if tag == want => Some(pid),
        _ => None,
    }
}

/// Mark dead enemies deletable, purge their in-flight shots, and route boss
/// deaths into the difficulty controller.
fn apply_deaths(state: &mut ArenaState) {
    let mut slain_boss = false;
    let mut purge: Vec<crate::EntityId> = Vec::new();
    for e in &mut state.enemies {
        if e.health <= 0.0 && !e.deletable {
            e.deletable = true;
            purge.push(e.id);
            if e.kind == EnemyKind::Demon {
                slain_boss = true;
            }
        }
    }
    for p in &mut state.projectiles {
        if let Some(shooter) = p.shooter {
            if purge.contains(&shooter) {
                p.deletable = true;
            }
        }
    }
    if slain_boss {
        let mult = state.spawner.boss_slain();
        state.player.apply_multiplier(mult);
    }
}

/// Deferred removal; never runs mid-step. Flips to `Dead` when the player
/// is out of health.
fn cleanup(state: &mut ArenaState) {
    state.projectiles.retain(|p| !p.deletable);
    state.enemies.retain(|e| !e.deletable);
    if !state.player.alive() {
        log::info!(
            "player down: kills={} score={}",
            state.player.kill_count,
            state.player.score
        );
        state.state = crate::GameState::Dead;
    }
}
