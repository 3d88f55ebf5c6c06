//! Collision notifications coming from the physics engine.
//!
//! The host writes one [`CollisionStarted`] message per body pair that began
//! touching, in the order the physics engine reported them, before it runs
//! the frame. [`collision_resolver`](crate::systems::collision::collision_resolver)
//! consumes them at the start of the simulation schedule.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;

/// Two physics bodies started touching.
///
/// `a` and `b` are the entities carrying the bodies'
/// [`CollisionBody`](crate::components::body::CollisionBody) tags. No ordering
/// guarantees are provided.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct CollisionStarted {
    pub a: Entity,
    pub b: Entity,
    /// World-space contact point, when the engine reports one.
    pub contact: Option<MapPosition>,
}

impl CollisionStarted {
    pub fn new(a: Entity, b: Entity) -> Self {
        CollisionStarted {
            a,
            b,
            contact: None,
        }
    }

    pub fn at(mut self, contact: MapPosition) -> Self {
        self.contact = Some(contact);
        self
    }
}
