//! Projectile launchers.
//!
//! A [`Weapon`] fires one projectile per muzzle whenever its cooldown allows
//! and it is told to shoot (`trigger_held`) or set to `auto_fire`. Muzzle
//! offsets are relative to the owner's [`MapPosition`].
//!
//! See [`crate::systems::weapon::weapon_system`].

use arrayvec::ArrayVec;
use bevy_ecs::prelude::Component;
use log::warn;

use crate::components::body::Category;
use crate::components::mapposition::MapPosition;

pub const MAX_MUZZLES: usize = 4;

#[derive(Component, Clone, Debug, PartialEq)]
pub struct Weapon {
    /// Minimum seconds between two volleys.
    pub cooldown: f32,
    pub since_last: f32,
    pub muzzles: ArrayVec<MapPosition, MAX_MUZZLES>,
    /// Vertical speed of spawned projectiles, pixels per second. Negative goes up.
    pub projectile_speed: f32,
    pub category: Category,
    pub trigger_held: bool,
    pub auto_fire: bool,
    pub enabled: bool,
}

impl Weapon {
    pub fn new(category: Category, cooldown: f32, projectile_speed: f32) -> Self {
        Weapon {
            cooldown,
            // ready on the first frame
            since_last: cooldown,
            muzzles: ArrayVec::new(),
            projectile_speed,
            category,
            trigger_held: false,
            auto_fire: false,
            enabled: true,
        }
    }

    /// Two forward guns, 10 px either side of the nose.
    pub fn player_twin(cooldown: f32, speed: f32) -> Self {
        Weapon::new(Category::PlayerShot, cooldown, -speed.abs())
            .with_muzzle(MapPosition::new(-10.0, -20.0))
            .with_muzzle(MapPosition::new(10.0, -20.0))
    }

    /// Single downward gun; starts disabled until the enemy enters.
    pub fn enemy_gun(reload: f32, speed: f32) -> Self {
        let mut weapon = Weapon::new(Category::EnemyShot, reload, speed.abs())
            .with_muzzle(MapPosition::new(-10.0, 20.0));
        weapon.auto_fire = true;
        weapon.enabled = false;
        weapon
    }

    /// Extra muzzles past [`MAX_MUZZLES`] are dropped with a warning.
    pub fn with_muzzle(mut self, offset: MapPosition) -> Self {
        if let Err(e) = self.muzzles.try_push(offset) {
            let dropped = e.element();
            warn!(
                "Weapon already has {} muzzles, dropping ({}, {})",
                MAX_MUZZLES, dropped.x, dropped.y
            );
        }
        self
    }

    pub fn wants_to_fire(&self) -> bool {
        self.enabled && (self.trigger_held || self.auto_fire)
    }

    /// Advance the cooldown by `dt`; returns `true` if a volley goes out now.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.since_last += dt;
        if self.wants_to_fire() && self.since_last >= self.cooldown {
            self.since_last = 0.0;
            return true;
        }
        false
    }
}
