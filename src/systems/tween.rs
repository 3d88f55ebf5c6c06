//! Tween animation system.
//!
//! [`tween_system`] advances every running [`Tween`](crate::components::tween::Tween)
//! by the frame delta and writes its value to the animated property:
//! - `X` / `Y` – [`MapPosition`](crate::components::mapposition::MapPosition)
//! - `Alpha` – [`Opacity`](crate::components::opacity::Opacity)
//!
//! Finished tweens are dropped after writing their final value. A finished
//! tween marked [`TweenFinish::Despawn`] despawns its entity and tells the
//! engine to remove it.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::opacity::Opacity;
use crate::components::tween::{TweenFinish, TweenProperty, Tweens};
use crate::events::engine::EngineCmd;
use crate::resources::worldtime::WorldTime;

pub fn tween_system(
    mut query: Query<(
        Entity,
        &mut Tweens,
        Option<&mut MapPosition>,
        Option<&mut Opacity>,
    )>,
    time: Res<WorldTime>,
    mut commands: Commands,
    mut engine: MessageWriter<EngineCmd>,
) {
    for (entity, mut tweens, mut position, mut opacity) in query.iter_mut() {
        if tweens.is_idle() {
            continue;
        }
        let mut despawn = false;
        for tween in tweens.running.iter_mut() {
            tween.elapsed += time.delta;
            let Some(value) = tween.value() else {
                continue;
            };
            match tween.property {
                TweenProperty::X => {
                    if let Some(pos) = position.as_deref_mut() {
                        pos.x = value;
                    }
                }
                TweenProperty::Y => {
                    if let Some(pos) = position.as_deref_mut() {
                        pos.y = value;
                    }
                }
                TweenProperty::Alpha => {
                    if let Some(alpha) = opacity.as_deref_mut() {
                        alpha.set(value);
                    }
                }
            }
            if tween.is_finished() && tween.on_finish == TweenFinish::Despawn {
                despawn = true;
            }
        }
        tweens.running.retain(|t| !t.is_finished());

        if despawn {
            commands.entity(entity).try_despawn();
            engine.write(EngineCmd::remove(entity));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::tween::Tween;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn make_world(delta: f32) -> World {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta,
            ..Default::default()
        });
        world.init_resource::<Messages<EngineCmd>>();
        world
    }

    fn tick(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(tween_system);
        schedule.run(world);
    }

    #[test]
    fn test_writes_position_and_opacity() {
        let mut world = make_world(0.5);
        let entity = world
            .spawn((
                MapPosition::new(0.0, 0.0),
                Opacity::default(),
                Tweens::default()
                    .with(Tween::new(TweenProperty::X, 0.0, 100.0, 1.0))
                    .with(Tween::new(TweenProperty::Y, 0.0, 10.0, 1.0).with_delay(0.5))
                    .with(Tween::new(TweenProperty::Alpha, 1.0, 0.0, 2.0)),
            ))
            .id();

        tick(&mut world);
        let pos = *world.get::<MapPosition>(entity).unwrap();
        assert!(approx_eq(pos.x, 50.0));
        assert!(approx_eq(pos.y, 0.0));
        assert!(approx_eq(world.get::<Opacity>(entity).unwrap().0, 0.75));

        tick(&mut world);
        let pos = *world.get::<MapPosition>(entity).unwrap();
        assert!(approx_eq(pos.x, 100.0));
        assert!(approx_eq(pos.y, 5.0));
        assert!(approx_eq(world.get::<Opacity>(entity).unwrap().0, 0.5));

        let tweens = world.get::<Tweens>(entity).unwrap();
        assert!(tweens.get(TweenProperty::X).is_none());
        assert!(tweens.get(TweenProperty::Y).is_some());
    }

    #[test]
    fn test_despawn_on_finish_notifies_engine() {
        let mut world = make_world(0.5);
        let entity = world
            .spawn((
                Opacity::default(),
                Tweens::default().with(
                    Tween::new(TweenProperty::Alpha, 1.0, 0.0, 1.0).despawn_on_finish(),
                ),
            ))
            .id();

        tick(&mut world);
        assert!(world.get_entity(entity).is_ok());
        tick(&mut world);
        assert!(world.get_entity(entity).is_err());

        let cmds: Vec<EngineCmd> = world
            .resource_mut::<Messages<EngineCmd>>()
            .drain()
            .collect();
        assert_eq!(cmds, vec![EngineCmd::remove(entity)]);
    }

    #[test]
    fn test_finished_tween_without_despawn_keeps_entity() {
        let mut world = make_world(1.0);
        let entity = world
            .spawn((
                MapPosition::new(0.0, 0.0),
                Tweens::default().with(Tween::new(TweenProperty::Y, 0.0, 40.0, 1.0)),
            ))
            .id();

        tick(&mut world);
        assert!(world.get_entity(entity).is_ok());
        assert!(approx_eq(world.get::<MapPosition>(entity).unwrap().y, 40.0));
        assert!(world.get::<Tweens>(entity).unwrap().is_idle());
    }
}
