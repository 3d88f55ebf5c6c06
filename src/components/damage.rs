//! Layered hit-point ledger for combat entities.
//!
//! A [`DamageModel`] tracks the primary hit points of a composite entity and
//! any number of armored sub-components (the boss' engines, for instance).
//!
//! # Rules
//!
//! - Primary damage is subtracted as-is; `primary_hp` has no floor.
//! - A sub-component loses exactly 1 HP per hit and stops at 0.
//! - The first hit landing on a sub-component that is already at 0 destroys
//!   it: the `destroyed` flag flips once and `explosion_amount` is taken from
//!   `primary_hp` once.
//! - Hits on a destroyed sub-component are absorbed with no effect.
//! - The entity is dead as soon as `primary_hp <= 0`.
//!
//! Destruction is tied to the hit *after* the one that zeroed the part, so the
//! large explosion never coincides with a regular impact.

use bevy_ecs::prelude::Component;
use log::info;
use serde::Serialize;
use smallvec::SmallVec;

use crate::components::body::PartId;

/// Penalty applied to the primary hull when a sub-component blows up.
pub const DEFAULT_EXPLOSION_AMOUNT: i32 = 10_000;

/// What a single hit did, and which effect the caller should play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum HitOutcome {
    /// Ordinary damage; play a small impact.
    Hit,
    /// A sub-component was destroyed; play a large explosion instead.
    Destroyed,
    /// The sub-component was already gone; nothing to show.
    Absorbed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubComponent {
    pub id: PartId,
    pub hp: i32,
    pub destroyed: bool,
}

#[derive(Component, Clone, Debug, PartialEq)]
pub struct DamageModel {
    pub primary_hp: i32,
    pub explosion_amount: i32,
    parts: SmallVec<[SubComponent; 2]>,
}

impl DamageModel {
    pub fn new(primary_hp: i32) -> Self {
        DamageModel {
            primary_hp,
            explosion_amount: DEFAULT_EXPLOSION_AMOUNT,
            parts: SmallVec::new(),
        }
    }

    /// Add an armored sub-component (builder pattern).
    pub fn with_part(mut self, id: PartId, hp: i32) -> Self {
        self.parts.push(SubComponent {
            id,
            hp: hp.max(0),
            destroyed: false,
        });
        self
    }

    pub fn with_explosion_amount(mut self, amount: i32) -> Self {
        self.explosion_amount = amount;
        self
    }

    pub fn is_dead(&self) -> bool {
        self.primary_hp <= 0
    }

    pub fn has_part(&self, id: PartId) -> bool {
        self.parts.iter().any(|p| p.id == id)
    }

    pub fn part(&self, id: PartId) -> Option<&SubComponent> {
        self.parts.iter().find(|p| p.id == id)
    }

    pub fn parts(&self) -> &[SubComponent] {
        &self.parts
    }

    /// Remove `amount` from the primary hull. Always a [`HitOutcome::Hit`].
    pub fn apply_primary_damage(&mut self, amount: i32) -> HitOutcome {
        self.primary_hp -= amount;
        HitOutcome::Hit
    }

    /// Register one hit against the sub-component `id`.
    ///
    /// Returns `None` if the model has no such part.
    pub fn apply_sub_component_hit(&mut self, id: PartId) -> Option<HitOutcome> {
        let explosion_amount = self.explosion_amount;
        let part = self.parts.iter_mut().find(|p| p.id == id)?;

        if part.hp > 0 {
            part.hp -= 1;
            return Some(HitOutcome::Hit);
        }
        if part.destroyed {
            return Some(HitOutcome::Absorbed);
        }

        part.destroyed = true;
        self.primary_hp -= explosion_amount;
        info!(
            "Sub-component '{}' destroyed, primary hp now {}",
            id.0, self.primary_hp
        );
        Some(HitOutcome::Destroyed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENGINE: PartId = PartId("engine");

    #[test]
    fn test_sub_component_zero_then_destroy() {
        let mut model = DamageModel::new(100).with_part(ENGINE, 2);

        assert_eq!(model.apply_sub_component_hit(ENGINE), Some(HitOutcome::Hit));
        assert_eq!(model.part(ENGINE).unwrap().hp, 1);

        assert_eq!(model.apply_sub_component_hit(ENGINE), Some(HitOutcome::Hit));
        assert_eq!(model.part(ENGINE).unwrap().hp, 0);
        assert!(!model.part(ENGINE).unwrap().destroyed);
        assert_eq!(model.primary_hp, 100);

        assert_eq!(
            model.apply_sub_component_hit(ENGINE),
            Some(HitOutcome::Destroyed)
        );
        assert!(model.part(ENGINE).unwrap().destroyed);
        assert_eq!(model.primary_hp, 100 - DEFAULT_EXPLOSION_AMOUNT);

        assert_eq!(
            model.apply_sub_component_hit(ENGINE),
            Some(HitOutcome::Absorbed)
        );
        assert!(model.part(ENGINE).unwrap().destroyed);
        assert_eq!(model.part(ENGINE).unwrap().hp, 0);
        assert_eq!(model.primary_hp, 100 - DEFAULT_EXPLOSION_AMOUNT);
    }

    #[test]
    fn test_primary_hits_then_explosion_kill() {
        let mut model = DamageModel::new(5)
            .with_part(ENGINE, 0)
            .with_explosion_amount(10_000);

        for _ in 0..3 {
            assert_eq!(model.apply_primary_damage(1), HitOutcome::Hit);
        }
        assert_eq!(model.primary_hp, 2);
        assert!(!model.is_dead());

        assert_eq!(
            model.apply_sub_component_hit(ENGINE),
            Some(HitOutcome::Destroyed)
        );
        assert_eq!(model.primary_hp, -9998);
        assert!(model.is_dead());
    }

    #[test]
    fn test_primary_hp_has_no_floor() {
        let mut model = DamageModel::new(1);
        model.apply_primary_damage(5);
        assert_eq!(model.primary_hp, -4);
        assert!(model.is_dead());
    }

    #[test]
    fn test_zero_hp_is_dead() {
        let mut model = DamageModel::new(2);
        model.apply_primary_damage(2);
        assert!(model.is_dead());
    }

    #[test]
    fn test_unknown_part_is_reported() {
        let mut model = DamageModel::new(10).with_part(ENGINE, 1);
        assert_eq!(model.apply_sub_component_hit(PartId("turret")), None);
        assert_eq!(model.primary_hp, 10);
        assert!(model.has_part(ENGINE));
        assert!(!model.has_part(PartId("turret")));
    }

    #[test]
    fn test_parts_are_independent() {
        let left = PartId("left");
        let right = PartId("right");
        let mut model = DamageModel::new(50)
            .with_part(left, 0)
            .with_part(right, 3)
            .with_explosion_amount(20);

        assert_eq!(model.apply_sub_component_hit(left), Some(HitOutcome::Destroyed));
        assert_eq!(model.apply_sub_component_hit(right), Some(HitOutcome::Hit));
        assert_eq!(model.part(right).unwrap().hp, 2);
        assert!(!model.part(right).unwrap().destroyed);
        assert_eq!(model.primary_hp, 30);
        assert_eq!(model.parts().len(), 2);
    }
}
