//! Side-effect requests sent to the external engine.
//!
//! Gameplay code never renders, plays sounds or owns physics bodies. It writes
//! [`EngineCmd`] messages instead; the flush schedule forwards them to the
//! [`EngineBridge`](crate::resources::enginebridge::EngineBridge) channel and
//! the host executes them.

use bevy_ecs::prelude::*;
use serde::{Serialize, Serializer};

use crate::components::body::Category;
use crate::components::mapposition::MapPosition;

/// Visual effects the engine knows how to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EffectKind {
    /// Small spark where a projectile hit.
    BulletImpact,
    /// Large blast when a sub-component is destroyed.
    PartExplosion,
    /// Whole-ship explosion.
    ShipExplosion,
}

#[derive(Message, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum EngineCmd {
    SpawnEffect {
        kind: EffectKind,
        at: MapPosition,
        scale: f32,
    },
    /// A projectile entity was spawned; the engine must create its body.
    SpawnProjectile {
        #[serde(serialize_with = "entity_bits")]
        entity: Entity,
        category: Category,
        at: MapPosition,
        velocity: (f32, f32),
    },
    RemoveEntity {
        #[serde(serialize_with = "entity_bits")]
        entity: Entity,
    },
}

impl EngineCmd {
    pub fn effect(kind: EffectKind, at: MapPosition) -> Self {
        EngineCmd::SpawnEffect {
            kind,
            at,
            scale: 1.0,
        }
    }

    pub fn remove(entity: Entity) -> Self {
        EngineCmd::RemoveEntity { entity }
    }
}

fn entity_bits<S: Serializer>(entity: &Entity, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(entity.to_bits())
}
