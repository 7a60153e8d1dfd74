//! Event types flowing between the physics-facing detection pass and the
//! gameplay resolver, plus the feedback buses the embedding layer drains.

use glam::Vec2;

use crate::actor::{BodyId, EntityId, Tag};

/// One contact-begin between two bodies. Emitted at most once per overlap
/// episode; a pair must separate before it can fire again.
#[derive(Copy, Clone, Debug)]
pub struct ContactEvent {
    pub a: (BodyId, Tag),
    pub b: (BodyId, Tag),
}

/// Screen-flash feedback raised when the player takes a hit. Rendering is
/// out of scope; tests and the demo runner observe this bus.
#[derive(Copy, Clone, Debug)]
pub struct FlashFx {
    pub pos: Vec2,
    pub damage: f32,
}

/// An enemy died to a player projectile this tick.
#[derive(Copy, Clone, Debug)]
pub struct KillEvent {
    pub enemy: EntityId,
    pub pos: Vec2,
}
