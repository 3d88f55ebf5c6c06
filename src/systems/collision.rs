//! Collision resolution.
//!
//! [`collision_resolver`] turns the raw [`CollisionStarted`] pairs reported by
//! the physics engine into damage:
//!
//! 1. Both bodies are looked up and [`resolve_pair`] asks the
//!    [`CollisionRules`] which side is the projectile. Pairs no rule covers
//!    are ignored.
//! 2. If the target body is a part the owner's [`DamageModel`] knows, the hit
//!    goes to that sub-component. Otherwise the projectile's damage goes to
//!    the primary hull.
//! 3. The matching effect is requested at the contact point (or at the
//!    projectile if the engine gave none), the projectile is consumed and a
//!    [`HitEvent`] is triggered.
//!
//! Pairs are handled in the order they were written. There is no
//! deduplication: a projectile reported against two bodies in the same frame
//! hits twice.

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::body::{CollisionBody, PartId, Projectile};
use crate::components::damage::{DamageModel, HitOutcome};
use crate::components::mapposition::MapPosition;
use crate::events::collision::CollisionStarted;
use crate::events::damage::HitEvent;
use crate::events::engine::{EffectKind, EngineCmd};
use crate::resources::collisionrules::CollisionRules;

/// Roles of a resolved collision pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engagement {
    pub projectile: Entity,
    /// Entity owning the damage model.
    pub target: Entity,
    /// Part label of the body that was touched.
    pub part: Option<PartId>,
}

/// Work out which body is the projectile, regardless of pair order.
pub fn resolve_pair(
    rules: &CollisionRules,
    a: (Entity, &CollisionBody),
    b: (Entity, &CollisionBody),
) -> Option<Engagement> {
    let (shot, target) = if rules.allows(a.1.category, b.1.category) {
        (a, b)
    } else if rules.allows(b.1.category, a.1.category) {
        (b, a)
    } else {
        return None;
    };
    Some(Engagement {
        projectile: shot.0,
        target: target.1.owner_or(target.0),
        part: target.1.part,
    })
}

/// Effect the engine should play for a hit outcome.
pub fn effect_for(outcome: HitOutcome) -> Option<EffectKind> {
    match outcome {
        HitOutcome::Hit => Some(EffectKind::BulletImpact),
        HitOutcome::Destroyed => Some(EffectKind::PartExplosion),
        HitOutcome::Absorbed => None,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn collision_resolver(
    mut reader: MessageReader<CollisionStarted>,
    rules: Res<CollisionRules>,
    bodies: Query<&CollisionBody>,
    projectiles: Query<&Projectile>,
    positions: Query<&MapPosition>,
    mut models: Query<&mut DamageModel>,
    mut engine: MessageWriter<EngineCmd>,
    mut commands: Commands,
) {
    for pair in reader.read() {
        let (Ok(body_a), Ok(body_b)) = (bodies.get(pair.a), bodies.get(pair.b)) else {
            trace!("Ignoring pair {:?}/{:?}: unknown body", pair.a, pair.b);
            continue;
        };
        let Some(hit) = resolve_pair(&rules, (pair.a, body_a), (pair.b, body_b)) else {
            trace!(
                "Ignoring pair {:?}/{:?}: {:?} vs {:?}",
                pair.a, pair.b, body_a.category, body_b.category
            );
            continue;
        };
        let Ok(mut model) = models.get_mut(hit.target) else {
            trace!("Ignoring hit on {:?}: no damage model", hit.target);
            continue;
        };

        let part = hit.part.filter(|p| model.has_part(*p));
        let outcome = match part {
            Some(p) => model
                .apply_sub_component_hit(p)
                .unwrap_or(HitOutcome::Absorbed),
            None => {
                let damage = projectiles
                    .get(hit.projectile)
                    .map(|p| p.damage)
                    .unwrap_or(Projectile::default().damage);
                model.apply_primary_damage(damage)
            }
        };

        let at = pair
            .contact
            .or_else(|| positions.get(hit.projectile).ok().copied());
        if let (Some(kind), Some(at)) = (effect_for(outcome), at) {
            engine.write(EngineCmd::effect(kind, at));
        }

        commands.entity(hit.projectile).try_despawn();
        engine.write(EngineCmd::remove(hit.projectile));
        commands.trigger(HitEvent {
            target: hit.target,
            part,
            outcome,
        });
    }
}
