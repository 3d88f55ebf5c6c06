//! Per-frame sequencer driver.
//!
//! Scene sequencers live on entities as
//! [`SceneSequencer`](crate::components::sequencer::SceneSequencer)
//! components. Their triggers need the whole [`World`] as hook context, so
//! [`run_sequencers`] is an exclusive step rather than a system: each
//! sequencer is taken out of its entity, updated against the world and put
//! back.

use bevy_ecs::prelude::*;

use crate::components::sequencer::{SceneSequencer, SequencerError};

/// Update every scene sequencer once.
///
/// Stops at the first hook failure and returns it. The failing sequencer is
/// put back first, so its pools stay consistent.
pub fn run_sequencers(world: &mut World) -> Result<(), SequencerError> {
    let owners: Vec<Entity> = world
        .query_filtered::<Entity, With<SceneSequencer>>()
        .iter(world)
        .collect();

    for owner in owners {
        let Some(mut sequencer) = world
            .get_entity_mut(owner)
            .ok()
            .and_then(|mut e| e.take::<SceneSequencer>())
        else {
            continue;
        };

        let result = sequencer.0.update(world);

        // a trigger may have despawned the owner
        if let Ok(mut e) = world.get_entity_mut(owner) {
            e.insert(sequencer);
        }
        result?;
    }
    Ok(())
}

/// No scene sequencer has work left.
pub fn sequencers_idle(world: &mut World) -> bool {
    world
        .query::<&SceneSequencer>()
        .iter(world)
        .all(|s| s.0.is_idle())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::trigger::{HookError, HookTrigger};

    #[derive(Resource, Default)]
    struct Counter(u32);

    #[test]
    fn test_sequencer_sees_world() {
        let mut world = World::new();
        world.init_resource::<Counter>();
        world.spawn(SceneSequencer::new(vec![Box::new(
            HookTrigger::<World>::new("count").on_execute(|w: &mut World| {
                w.resource_mut::<Counter>().0 += 1;
                Ok(())
            }),
        )]));

        run_sequencers(&mut world).unwrap();
        run_sequencers(&mut world).unwrap();
        assert_eq!(world.resource::<Counter>().0, 2);
        assert!(!sequencers_idle(&mut world));
    }

    #[test]
    fn test_failure_puts_sequencer_back() {
        let mut world = World::new();
        let owner = world
            .spawn(SceneSequencer::new(vec![Box::new(
                HookTrigger::<World>::new("broken").on_init(|_| Err(HookError::new("boom"))),
            )]))
            .id();

        let err = run_sequencers(&mut world).unwrap_err();
        assert!(err.to_string().contains("broken"));
        let seq = world.get::<SceneSequencer>(owner).unwrap();
        assert_eq!(seq.0.active_len(), 1);
        assert_eq!(seq.0.pending_len(), 0);
    }

    #[test]
    fn test_despawned_owner_drops_sequencer() {
        let mut world = World::new();
        let owner = world.spawn_empty().id();
        world.entity_mut(owner).insert(SceneSequencer::new(vec![Box::new(
            HookTrigger::<World>::new("self-destruct").on_init(move |w: &mut World| {
                w.despawn(owner);
                Ok(())
            }),
        )]));

        run_sequencers(&mut world).unwrap();
        assert!(world.get_entity(owner).is_err());
        assert!(sequencers_idle(&mut world));
    }
}
