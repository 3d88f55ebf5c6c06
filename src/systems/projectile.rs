//! Off-screen projectile culling.
//!
//! Projectiles that leave the playfield vertically are despawned and the
//! engine is told to drop their bodies.

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::body::Projectile;
use crate::components::mapposition::MapPosition;
use crate::events::engine::EngineCmd;
use crate::resources::screensize::ScreenSize;

pub fn projectile_culling_system(
    query: Query<(Entity, &MapPosition), With<Projectile>>,
    screen: Res<ScreenSize>,
    mut commands: Commands,
    mut engine: MessageWriter<EngineCmd>,
) {
    for (entity, position) in query.iter() {
        if screen.contains_y(position.y) {
            continue;
        }
        trace!("Culling projectile {:?} at y={}", entity, position.y);
        commands.entity(entity).try_despawn();
        engine.write(EngineCmd::remove(entity));
    }
}
