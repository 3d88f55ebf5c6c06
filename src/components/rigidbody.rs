//! Kinematic body component.
//!
//! The [`RigidBody`] component stores the velocity of an entity in pixels per
//! second. Projectiles are the only bodies moved by this crate; everything
//! else is driven by tweens and flight paths.
//!
//! The `frozen` flag temporarily disables movement, for bodies whose position
//! is controlled externally.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct RigidBody {
    /// Horizontal velocity in pixels per second.
    pub vx: f32,
    /// Vertical velocity in pixels per second.
    pub vy: f32,
    pub frozen: bool,
}

impl RigidBody {
    pub fn new(vx: f32, vy: f32) -> Self {
        RigidBody {
            vx,
            vy,
            frozen: false,
        }
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }
}
