//! Which body categories damage which.
//!
//! [`CollisionRules`] is a set of `(projectile, target)` category pairs. A
//! collision pair is resolved only if one of its orderings is in the set;
//! everything else (shot against shot, ship against scenery, ...) is ignored.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashSet;

use crate::components::body::Category;

#[derive(Resource, Clone, Debug, PartialEq)]
pub struct CollisionRules {
    pairs: FxHashSet<(Category, Category)>,
}

impl Default for CollisionRules {
    /// Player shots hurt the boss and the enemies.
    fn default() -> Self {
        CollisionRules::empty()
            .with(Category::PlayerShot, Category::Boss)
            .with(Category::PlayerShot, Category::Enemy)
    }
}

impl CollisionRules {
    pub fn empty() -> Self {
        CollisionRules {
            pairs: FxHashSet::default(),
        }
    }

    /// Allow `projectile` bodies to damage `target` bodies.
    pub fn with(mut self, projectile: Category, target: Category) -> Self {
        self.pairs.insert((projectile, target));
        self
    }

    /// `projectile` hitting `target` is a hit, in this order.
    pub fn allows(&self, projectile: Category, target: Category) -> bool {
        self.pairs.contains(&(projectile, target))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
