//! Enemy choreography systems.
//!
//! - [`enemy_phase_system`] applies transitions: entering `Diving` schedules
//!   the dive tween, entering `Cruising` attaches a
//!   [`FlightPath`] anchored where the dive ended.
//! - [`flight_path_system`] moves entities along their flight paths.
//!
//! Like the boss, run the phase system after
//! [`tween_system`](crate::systems::tween::tween_system).

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::enemy::{EnemyBehavior, EnemyPhase};
use crate::components::flightpath::FlightPath;
use crate::components::mapposition::MapPosition;
use crate::components::tween::{Tween, TweenProperty, Tweens};
use crate::resources::worldtime::WorldTime;

pub fn enemy_phase_system(
    mut query: Query<(Entity, &mut EnemyBehavior, &mut Tweens, &MapPosition)>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    for (entity, mut enemy, mut tweens, position) in query.iter_mut() {
        enemy.time_in_phase += time.delta;
        if enemy.next.is_none() {
            enemy.next = enemy.automatic_next();
        }
        let Some(next) = enemy.next.take() else {
            continue;
        };
        if next == enemy.current {
            continue;
        }

        debug!("Enemy {:?}: {:?} -> {:?}", entity, enemy.current, next);
        enemy.current = next;
        enemy.time_in_phase = 0.0;

        match next {
            EnemyPhase::Dormant => tweens.clear(),
            EnemyPhase::Diving => {
                let plan = &enemy.plan;
                tweens.schedule(
                    Tween::new(
                        TweenProperty::Y,
                        position.y,
                        position.y + plan.dive_distance,
                        plan.dive_duration,
                    )
                    .with_delay(plan.dive_delay),
                );
            }
            EnemyPhase::Cruising => {
                tweens.cancel(TweenProperty::Y);
                commands
                    .entity(entity)
                    .insert(enemy.plan.flight_path(*position));
            }
        }
    }
}

pub fn flight_path_system(
    mut query: Query<(&mut FlightPath, &mut MapPosition)>,
    time: Res<WorldTime>,
) {
    for (mut path, mut position) in query.iter_mut() {
        path.elapsed += time.delta;
        *position = path.position();
    }
}
