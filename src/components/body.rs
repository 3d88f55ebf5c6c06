//! Collision body tags.
//!
//! The physics engine owns the real shapes; this crate only needs to know who
//! a body belongs to when the engine reports a contact. Every body entity the
//! host creates carries a [`CollisionBody`] with:
//!
//! - a [`Category`] – the kind of the composite the body belongs to
//!   (player shot, boss, enemy, ...)
//! - an optional [`PartId`] – which sub-component of that composite the body
//!   is (e.g. the boss' left engine); `None` means the main hull
//! - an optional owner – the entity holding the composite's
//!   [`DamageModel`](super::damage::DamageModel); `None` means the body entity
//!   is its own owner (single-body projectiles and enemies)
//!
//! The [`CollisionRules`](crate::resources::collisionrules::CollisionRules)
//! resource decides which category pairs resolve to a hit.

use bevy_ecs::prelude::{Component, Entity};
use serde::Serialize;

/// Kind of composite a physics body belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    PlayerShot,
    EnemyShot,
    Player,
    Enemy,
    Boss,
    Scenery,
}

impl Category {
    pub fn is_projectile(self) -> bool {
        matches!(self, Category::PlayerShot | Category::EnemyShot)
    }
}

/// Label of an independently damageable part of a composite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PartId(pub &'static str);

pub const LEFT_ENGINE: PartId = PartId("left_engine");
pub const RIGHT_ENGINE: PartId = PartId("right_engine");

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct CollisionBody {
    pub category: Category,
    pub part: Option<PartId>,
    pub owner: Option<Entity>,
}

impl CollisionBody {
    /// A body that is its own owner.
    pub fn new(category: Category) -> Self {
        CollisionBody {
            category,
            part: None,
            owner: None,
        }
    }

    /// A body that is part of the composite `owner`.
    pub fn part_of(category: Category, owner: Entity) -> Self {
        CollisionBody {
            category,
            part: None,
            owner: Some(owner),
        }
    }

    pub fn with_part(mut self, part: PartId) -> Self {
        self.part = Some(part);
        self
    }

    /// Entity holding the composite's state, given the body's own entity.
    pub fn owner_or(&self, body: Entity) -> Entity {
        self.owner.unwrap_or(body)
    }
}

/// Damage dealt to a primary hull by one projectile.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Projectile {
    pub damage: i32,
}

impl Default for Projectile {
    fn default() -> Self {
        Projectile { damage: 1 }
    }
}
