//! Identity and tagging types shared across the simulation.

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjId(pub u32);

/// Which side owns a projectile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    Player,
    Enemy,
}

/// Per-body tag consumed by the contact resolver.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tag {
    Player,
    Swarmer,
    Spitter,
    Demon,
    PlayerProj,
    EnemyProj,
}

/// Stable key for one body in a contact pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BodyId {
    Player,
    Enemy(EntityId),
    Projectile(ProjId),
}
