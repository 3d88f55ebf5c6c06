//! Hit notifications and the combat log observer.
//!
//! [`collision_resolver`](crate::systems::collision::collision_resolver)
//! triggers a [`HitEvent`] for every resolved projectile hit.
//! [`observe_hit_event`] folds them into the
//! [`CombatLog`](crate::resources::combatlog::CombatLog) resource.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::body::PartId;
use crate::components::damage::HitOutcome;
use crate::resources::combatlog::CombatLog;

/// A projectile hit `target`, the entity owning the damage model.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct HitEvent {
    pub target: Entity,
    /// Sub-component that took the hit, `None` for the primary hull.
    pub part: Option<PartId>,
    pub outcome: HitOutcome,
}

pub fn observe_hit_event(trigger: On<HitEvent>, log: Option<ResMut<CombatLog>>) {
    let hit = trigger.event();
    debug!("Hit on {:?} ({:?}): {:?}", hit.target, hit.part, hit.outcome);
    if let Some(mut log) = log {
        log.record(hit);
    }
}
