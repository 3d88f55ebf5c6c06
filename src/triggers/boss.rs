//! The boss fight trigger.
//!
//! [`BossTrigger`] starts the boss' entry as soon as it is activated and
//! retires once the boss' [`DamageModel`] says it is dead. Retiring only asks
//! the boss to start dying: the shake, explosion and despawn play out in
//! [`boss_phase_system`](crate::systems::boss::boss_phase_system) after the
//! trigger has left the sequencer.

use bevy_ecs::prelude::*;

use crate::components::boss::{BossBehavior, BossPhase};
use crate::components::damage::DamageModel;
use crate::components::trigger::{HookError, HookResult, Trigger};

#[derive(Debug, Clone, Copy)]
pub struct BossTrigger {
    pub boss: Entity,
}

impl BossTrigger {
    pub fn new(boss: Entity) -> Self {
        BossTrigger { boss }
    }

    fn behavior<'w>(&self, world: &'w mut World) -> Result<Mut<'w, BossBehavior>, HookError> {
        world
            .get_mut::<BossBehavior>(self.boss)
            .ok_or_else(|| HookError::missing("BossBehavior"))
    }
}

impl Trigger<World> for BossTrigger {
    fn name(&self) -> &str {
        "boss"
    }

    fn should_activate(&self, _world: &World) -> bool {
        true
    }

    fn should_remove(&self, world: &World) -> bool {
        world
            .get::<DamageModel>(self.boss)
            .is_none_or(DamageModel::is_dead)
    }

    fn init(&mut self, world: &mut World) -> HookResult {
        self.behavior(world)?.transition_to(BossPhase::Entering);
        Ok(())
    }

    fn remove(&mut self, world: &mut World) -> HookResult {
        if world.get_entity(self.boss).is_err() {
            return Ok(());
        }
        self.behavior(world)?.transition_to(BossPhase::Dying);
        Ok(())
    }
}
