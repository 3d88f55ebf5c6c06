//! Enemy wave trigger.
//!
//! One [`EnemyTrigger`] per enemy. Giving each a later `activate_after` makes
//! the wave enter one ship at a time.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::damage::DamageModel;
use crate::components::enemy::{EnemyBehavior, EnemyPhase};
use crate::components::mapposition::MapPosition;
use crate::components::trigger::{HookError, HookResult, Trigger};
use crate::components::weapon::Weapon;
use crate::events::engine::{EffectKind, EngineCmd};
use crate::triggers::now;

pub const ENEMY_EXPLOSION_SCALE: f32 = 0.65;

#[derive(Debug, Clone, Copy)]
pub struct EnemyTrigger {
    pub enemy: Entity,
    /// Simulation time at which the enemy enters.
    pub activate_after: f32,
}

impl EnemyTrigger {
    pub fn new(enemy: Entity, activate_after: f32) -> Self {
        EnemyTrigger {
            enemy,
            activate_after,
        }
    }
}

impl Trigger<World> for EnemyTrigger {
    fn name(&self) -> &str {
        "enemy"
    }

    fn should_activate(&self, world: &World) -> bool {
        now(world) >= self.activate_after
    }

    fn should_remove(&self, world: &World) -> bool {
        world
            .get::<DamageModel>(self.enemy)
            .is_none_or(DamageModel::is_dead)
    }

    fn init(&mut self, world: &mut World) -> HookResult {
        world
            .get_mut::<EnemyBehavior>(self.enemy)
            .ok_or_else(|| HookError::missing("EnemyBehavior"))?
            .transition_to(EnemyPhase::Diving);
        // first volley one full reload after entering, once the dive is under way
        if let Some(mut weapon) = world.get_mut::<Weapon>(self.enemy) {
            weapon.enabled = true;
            weapon.since_last = 0.0;
        }
        Ok(())
    }

    fn remove(&mut self, world: &mut World) -> HookResult {
        if world.get_entity(self.enemy).is_err() {
            return Ok(());
        }
        let at = *world
            .get::<MapPosition>(self.enemy)
            .ok_or_else(|| HookError::missing("MapPosition"))?;
        info!("Enemy {:?} destroyed", self.enemy);
        world.write_message(EngineCmd::SpawnEffect {
            kind: EffectKind::ShipExplosion,
            at,
            scale: ENEMY_EXPLOSION_SCALE,
        });
        world.write_message(EngineCmd::remove(self.enemy));
        world.despawn(self.enemy);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::enemy::{EnemyPlan, FlightPattern};
    use crate::components::sequencer::Sequencer;
    use crate::resources::worldtime::WorldTime;

    fn make_world() -> World {
        let mut world = World::new();
        world.init_resource::<WorldTime>();
        world.init_resource::<Messages<EngineCmd>>();
        world
    }

    fn spawn_enemy(world: &mut World) -> Entity {
        world
            .spawn((
                EnemyBehavior::new(EnemyPlan::new(FlightPattern::Orbit)),
                DamageModel::new(2),
                MapPosition::new(50.0, 60.0),
                Weapon::enemy_gun(5.0, 600.0),
            ))
            .id()
    }

    #[test]
    fn test_waits_for_its_turn() {
        let mut world = make_world();
        let enemy = spawn_enemy(&mut world);
        let mut seq = Sequencer::<World>::default().with(EnemyTrigger::new(enemy, 1.5));

        seq.update(&mut world).unwrap();
        assert_eq!(seq.pending_len(), 1);
        assert!(!world.get::<Weapon>(enemy).unwrap().enabled);

        world.resource_mut::<WorldTime>().elapsed = 1.5;
        seq.update(&mut world).unwrap();
        assert_eq!(seq.active_len(), 1);
        let weapon = world.get::<Weapon>(enemy).unwrap();
        assert!(weapon.enabled);
        assert_eq!(weapon.since_last, 0.0);
        assert_eq!(
            world.get::<EnemyBehavior>(enemy).unwrap().next,
            Some(EnemyPhase::Diving)
        );
    }

    #[test]
    fn test_gun_holds_fire_until_a_full_reload() {
        let mut world = make_world();
        let enemy = spawn_enemy(&mut world);
        let mut seq = Sequencer::<World>::default().with(EnemyTrigger::new(enemy, 0.0));
        seq.update(&mut world).unwrap();

        let mut weapon = world.get_mut::<Weapon>(enemy).unwrap();
        assert!(!weapon.tick(0.0));
        assert!(!weapon.tick(4.75));
        assert!(weapon.tick(0.25));
    }

    #[test]
    fn test_death_explodes_and_despawns() {
        let mut world = make_world();
        let enemy = spawn_enemy(&mut world);
        let mut seq = Sequencer::<World>::default().with(EnemyTrigger::new(enemy, 0.0));
        seq.update(&mut world).unwrap();

        world.get_mut::<DamageModel>(enemy).unwrap().apply_primary_damage(2);
        seq.update(&mut world).unwrap();
        assert!(seq.is_idle());
        assert!(world.get_entity(enemy).is_err());

        let cmds: Vec<EngineCmd> = world
            .resource_mut::<Messages<EngineCmd>>()
            .drain()
            .collect();
        assert_eq!(
            cmds,
            vec![
                EngineCmd::SpawnEffect {
                    kind: EffectKind::ShipExplosion,
                    at: MapPosition::new(50.0, 60.0),
                    scale: ENEMY_EXPLOSION_SCALE,
                },
                EngineCmd::remove(enemy),
            ]
        );
    }
}
