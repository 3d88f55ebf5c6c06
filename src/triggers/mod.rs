//! Scene triggers.
//!
//! Concrete [`Trigger`](crate::components::trigger::Trigger)s run by
//! [`SceneSequencer`](crate::components::sequencer::SceneSequencer)s against
//! the whole [`World`]. They hold entity handles, never references, and
//! report a missing entity or component as a
//! [`HookError`](crate::components::trigger::HookError).
//!
//! - [`boss`] – boss entry and death
//! - [`enemy`] – staggered enemy waves
//! - [`intro`] – warning overlay and scripted text reveal

pub mod boss;
pub mod enemy;
pub mod intro;

use bevy_ecs::prelude::*;

use crate::components::trigger::{HookError, HookResult};
use crate::components::tween::{Tween, Tweens};
use crate::resources::worldtime::WorldTime;

/// Current simulation time, 0 if the clock is not set up.
pub(crate) fn now(world: &World) -> f32 {
    world.get_resource::<WorldTime>().map_or(0.0, |t| t.elapsed)
}

/// Start `tween` on `entity`, adding a [`Tweens`] component if needed.
pub(crate) fn schedule_tween(world: &mut World, entity: Entity, tween: Tween) -> HookResult {
    let mut target = world
        .get_entity_mut(entity)
        .map_err(|_| HookError::new(format!("entity {entity:?} does not exist")))?;
    match target.get_mut::<Tweens>() {
        Some(mut tweens) => tweens.schedule(tween),
        None => {
            target.insert(Tweens::default().with(tween));
        }
    }
    Ok(())
}
