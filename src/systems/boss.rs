//! Boss phase machine system.
//!
//! [`boss_phase_system`] ticks every [`BossBehavior`], applies the requested
//! or automatic transition and schedules the tweens of the phase it enters.
//!
//! # System Ordering
//!
//! Run after [`tween_system`](crate::systems::tween::tween_system), so a tween
//! scheduled on frame N is first advanced on frame N+1, in step with
//! `time_in_phase`.
//!
//! # Related
//!
//! - [`BossBehavior`] – phase state and plan
//! - [`BossTrigger`](crate::triggers::boss::BossTrigger) – requests `Entering` and `Dying`

use bevy_ecs::prelude::*;
use log::info;

use crate::components::boss::{BossBehavior, BossPhase, BossPlan};
use crate::components::mapposition::MapPosition;
use crate::components::tween::{Repeat, Tween, TweenProperty, Tweens};
use crate::events::engine::{EffectKind, EngineCmd};
use crate::resources::worldtime::WorldTime;

pub fn boss_phase_system(
    mut query: Query<(Entity, &mut BossBehavior, &mut Tweens, &MapPosition)>,
    time: Res<WorldTime>,
    mut commands: Commands,
    mut engine: MessageWriter<EngineCmd>,
) {
    for (entity, mut boss, mut tweens, position) in query.iter_mut() {
        boss.time_in_phase += time.delta;
        if boss.next.is_none() {
            boss.next = boss.automatic_next();
        }
        let Some(next) = boss.next.take() else {
            continue;
        };
        if next == boss.current || boss.current == BossPhase::Gone {
            continue;
        }

        info!("Boss {:?}: {} -> {}", entity, boss.current, next);
        boss.previous = Some(boss.current);
        boss.current = next;
        boss.time_in_phase = 0.0;

        match next {
            BossPhase::Dormant => tweens.clear(),
            BossPhase::Entering => enter_tweens(&boss.plan, position, &mut tweens),
            BossPhase::Patrolling => patrol_tweens(&boss.plan, &mut tweens),
            BossPhase::Dying => shake_tweens(&boss.plan, &mut tweens),
            BossPhase::Gone => {
                tweens.clear();
                engine.write(EngineCmd::SpawnEffect {
                    kind: EffectKind::ShipExplosion,
                    at: *position,
                    scale: boss.plan.explosion_scale,
                });
                engine.write(EngineCmd::remove(entity));
                commands.entity(entity).try_despawn();
            }
        }
    }
}

/// Sway around the center while descending to the hover line.
fn enter_tweens(plan: &BossPlan, position: &MapPosition, tweens: &mut Tweens) {
    tweens.clear();
    tweens.schedule(
        Tween::new(
            TweenProperty::X,
            plan.center_x + plan.sway,
            plan.center_x - plan.sway,
            plan.sway_duration,
        )
        .with_easing(plan.easing)
        .with_yoyo()
        .with_repeat(Repeat::Forever),
    );
    tweens.schedule(
        Tween::new(TweenProperty::Y, position.y, plan.hover_y, plan.entry_duration)
            .with_easing(plan.easing)
            .with_delay(plan.entry_delay),
    );
}

/// Bob between the hover line and a little above it. The sway keeps going.
fn patrol_tweens(plan: &BossPlan, tweens: &mut Tweens) {
    tweens.schedule(
        Tween::new(TweenProperty::Y, plan.hover_y, plan.bob_y, plan.bob_duration)
            .with_easing(plan.easing)
            .with_yoyo()
            .with_repeat(Repeat::Forever),
    );
}

fn shake_tweens(plan: &BossPlan, tweens: &mut Tweens) {
    tweens.clear();
    tweens.schedule(
        Tween::new(
            TweenProperty::X,
            plan.center_x - plan.shake,
            plan.center_x + plan.shake,
            plan.shake_duration,
        )
        .with_easing(plan.easing)
        .with_yoyo()
        .with_repeat(Repeat::Times(plan.shake_repeat)),
    );
}
