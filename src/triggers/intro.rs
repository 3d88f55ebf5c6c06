//! Intro scene triggers.
//!
//! Two triggers run side by side while the warning text is typed out:
//!
//! - [`OverlayTrigger`] pulses a red full-screen overlay.
//! - [`RevealTrigger`] types the [`TextReveal`] script into a
//!   [`DynamicText`] inside a framed box.
//!
//! Both retire when the reveal is done (the script is out and its end pause
//! has elapsed). On retirement everything they own fades out over a second
//! and is despawned.

use bevy_ecs::prelude::*;
use smallvec::SmallVec;

use crate::components::dialogue::TextReveal;
use crate::components::dynamictext::DynamicText;
use crate::components::opacity::Opacity;
use crate::components::trigger::{HookError, HookResult, Trigger};
use crate::components::tween::{Easing, Repeat, Tween, TweenProperty};
use crate::triggers::{now, schedule_tween};

pub const PULSE_LOW: f32 = 0.2;
pub const PULSE_HIGH: f32 = 0.5;
pub const PULSE_DURATION: f32 = 1.0;
pub const FADE_DURATION: f32 = 1.0;

/// The reveal on `entity` is over, or the entity is gone.
fn reveal_done(world: &World, entity: Entity) -> bool {
    world
        .get::<TextReveal>(entity)
        .is_none_or(|reveal| reveal.is_done(now(world)))
}

/// Fade `entity` from its current opacity to 0, then despawn it.
fn fade_out(world: &mut World, entity: Entity) -> HookResult {
    if world.get_entity(entity).is_err() {
        return Ok(());
    }
    let from = world.get::<Opacity>(entity).map_or(1.0, |o| o.0);
    if world.get::<Opacity>(entity).is_none() {
        world.entity_mut(entity).insert(Opacity(from));
    }
    schedule_tween(
        world,
        entity,
        Tween::new(TweenProperty::Alpha, from, 0.0, FADE_DURATION)
            .with_easing(Easing::CubicOut)
            .despawn_on_finish(),
    )
}

#[derive(Debug, Clone, Copy)]
pub struct OverlayTrigger {
    pub overlay: Entity,
    /// Entity carrying the [`TextReveal`] that decides when the overlay goes.
    pub reveal: Entity,
}

impl Trigger<World> for OverlayTrigger {
    fn name(&self) -> &str {
        "overlay"
    }

    fn should_activate(&self, _world: &World) -> bool {
        true
    }

    fn should_remove(&self, world: &World) -> bool {
        reveal_done(world, self.reveal)
    }

    fn init(&mut self, world: &mut World) -> HookResult {
        world
            .get_mut::<Opacity>(self.overlay)
            .ok_or_else(|| HookError::missing("Opacity"))?
            .set(PULSE_LOW);
        schedule_tween(
            world,
            self.overlay,
            Tween::new(TweenProperty::Alpha, PULSE_LOW, PULSE_HIGH, PULSE_DURATION)
                .with_easing(Easing::CubicOut)
                .with_yoyo()
                .with_repeat(Repeat::Forever),
        )
    }

    fn remove(&mut self, world: &mut World) -> HookResult {
        fade_out(world, self.overlay)
    }
}

#[derive(Debug, Clone)]
pub struct RevealTrigger {
    /// Entity with both [`TextReveal`] and [`DynamicText`].
    pub text: Entity,
    /// Decorations that fade out together with the text.
    pub frames: SmallVec<[Entity; 2]>,
}

impl RevealTrigger {
    pub fn new(text: Entity) -> Self {
        RevealTrigger {
            text,
            frames: SmallVec::new(),
        }
    }

    pub fn with_frame(mut self, frame: Entity) -> Self {
        self.frames.push(frame);
        self
    }
}

impl Trigger<World> for RevealTrigger {
    fn name(&self) -> &str {
        "reveal"
    }

    fn should_activate(&self, _world: &World) -> bool {
        true
    }

    fn should_remove(&self, world: &World) -> bool {
        reveal_done(world, self.text)
    }

    fn init(&mut self, world: &mut World) -> HookResult {
        world
            .get_mut::<DynamicText>(self.text)
            .ok_or_else(|| HookError::missing("DynamicText"))?
            .set_content("");
        Ok(())
    }

    fn execute(&mut self, world: &mut World) -> HookResult {
        let t = now(world);
        let Ok(mut text) = world.get_entity_mut(self.text) else {
            return Ok(());
        };
        let shown = {
            let mut reveal = text
                .get_mut::<TextReveal>()
                .ok_or_else(|| HookError::missing("TextReveal"))?;
            if !reveal.advance(t) {
                return Ok(());
            }
            reveal.shown().to_string()
        };
        text.get_mut::<DynamicText>()
            .ok_or_else(|| HookError::missing("DynamicText"))?
            .set_content(shown);
        Ok(())
    }

    fn remove(&mut self, world: &mut World) -> HookResult {
        fade_out(world, self.text)?;
        for frame in self.frames.iter() {
            fade_out(world, *frame)?;
        }
        Ok(())
    }
}
