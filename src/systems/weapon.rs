//! Weapon firing system.
//!
//! Each frame, [`weapon_system`] advances every [`Weapon`]'s cooldown. When a
//! volley goes out it spawns one projectile entity per muzzle and emits
//! [`EngineCmd::SpawnProjectile`] so the engine creates the matching body.

use bevy_ecs::prelude::*;

use crate::components::body::{CollisionBody, Projectile};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::weapon::Weapon;
use crate::events::engine::EngineCmd;
use crate::resources::worldtime::WorldTime;

pub fn weapon_system(
    mut query: Query<(&mut Weapon, &MapPosition)>,
    time: Res<WorldTime>,
    mut commands: Commands,
    mut engine: MessageWriter<EngineCmd>,
) {
    for (mut weapon, position) in query.iter_mut() {
        if !weapon.tick(time.delta) {
            continue;
        }
        let velocity = (0.0, weapon.projectile_speed);
        for muzzle in weapon.muzzles.iter() {
            let at = position.offset(muzzle.x, muzzle.y);
            let entity = commands
                .spawn((
                    at,
                    RigidBody::new(velocity.0, velocity.1),
                    CollisionBody::new(weapon.category),
                    Projectile::default(),
                ))
                .id();
            engine.write(EngineCmd::SpawnProjectile {
                entity,
                category: weapon.category,
                at,
                velocity,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::body::Category;

    #[test]
    fn test_twin_guns_spawn_two_projectiles() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta: 0.25,
            ..Default::default()
        });
        world.init_resource::<Messages<EngineCmd>>();
        let mut gun = Weapon::player_twin(0.5, 600.0);
        gun.trigger_held = true;
        world.spawn((gun, MapPosition::new(200.0, 650.0)));

        let mut schedule = Schedule::default();
        schedule.add_systems(weapon_system);
        // fires on frames 1 and 3
        for _ in 0..3 {
            schedule.run(&mut world);
        }

        let shots: Vec<MapPosition> = world
            .query_filtered::<&MapPosition, With<Projectile>>()
            .iter(&world)
            .copied()
            .collect();
        assert_eq!(shots.len(), 4);
        assert!(shots.contains(&MapPosition::new(190.0, 630.0)));
        assert!(shots.contains(&MapPosition::new(210.0, 630.0)));

        let cmds: Vec<EngineCmd> = world
            .resource_mut::<Messages<EngineCmd>>()
            .drain()
            .collect();
        assert_eq!(cmds.len(), 4);
        assert!(cmds.iter().all(|c| matches!(
            c,
            EngineCmd::SpawnProjectile { category: Category::PlayerShot, velocity, .. } if velocity.1 < 0.0
        )));
    }
}
