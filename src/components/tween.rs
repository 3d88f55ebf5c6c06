//! Tween components for animated interpolation.
//!
//! A [`Tween`] animates one scalar property of an entity:
//! - [`TweenProperty::X`] / [`TweenProperty::Y`] – the entity's
//!   [`MapPosition`](super::mapposition::MapPosition)
//! - [`TweenProperty::Alpha`] – the entity's [`Opacity`](super::opacity::Opacity)
//!
//! An entity may run several tweens at once (sway on X while descending on Y),
//! so they are grouped in a [`Tweens`] component. See
//! [`crate::systems::tween`] for the update system.
//!
//! # Timing model
//!
//! - `delay` seconds pass before the first play.
//! - One play goes `from -> to` in `duration` seconds; with `yoyo` it comes
//!   back `to -> from` in another `duration`.
//! - [`Repeat::Times(n)`](Repeat::Times) plays `n + 1` times in total,
//!   [`Repeat::Forever`] never ends.
//! - When a finite tween ends, [`TweenFinish`] says what happens to the entity.

use bevy_ecs::prelude::Component;
use smallvec::SmallVec;

/// Easing functions for smooth interpolation.
///
/// These functions transform a linear `t` value (0.0 to 1.0) to create
/// different acceleration/deceleration curves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed (no easing).
    Linear,
    /// Starts slow, accelerates (quadratic).
    QuadIn,
    /// Starts fast, decelerates (quadratic).
    QuadOut,
    /// Slow start and end (quadratic).
    QuadInOut,
    /// Starts slow, accelerates (cubic).
    CubicIn,
    /// Starts fast, decelerates (cubic).
    CubicOut,
    /// Slow start and end (cubic).
    CubicInOut,
}

/// How many times a tween plays after the first one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Repeat {
    Times(u32),
    Forever,
}

/// Property written by a tween.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TweenProperty {
    X,
    Y,
    Alpha,
}

/// What to do with the entity once a finite tween completes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TweenFinish {
    /// Leave the property at its final value.
    Stay,
    /// Despawn the entity.
    Despawn,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub property: TweenProperty,
    /// Starting value.
    pub from: f32,
    /// Ending value.
    pub to: f32,
    /// Duration of one leg, in seconds.
    pub duration: f32,
    /// Wait before the first play, in seconds.
    pub delay: f32,
    pub easing: Easing,
    pub repeat: Repeat,
    /// Play back to `from` after reaching `to`.
    pub yoyo: bool,
    pub on_finish: TweenFinish,
    /// Seconds since the tween was scheduled.
    pub elapsed: f32,
}

impl Tween {
    pub fn new(property: TweenProperty, from: f32, to: f32, duration: f32) -> Self {
        Tween {
            property,
            from,
            to,
            duration,
            delay: 0.0,
            easing: Easing::Linear,
            repeat: Repeat::Times(0),
            yoyo: false,
            on_finish: TweenFinish::Stay,
            elapsed: 0.0,
        }
    }
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }
    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }
    pub fn with_yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }
    pub fn despawn_on_finish(mut self) -> Self {
        self.on_finish = TweenFinish::Despawn;
        self
    }

    /// Length of one play (one leg, or two with yoyo).
    pub fn cycle_len(&self) -> f32 {
        if self.yoyo {
            self.duration * 2.0
        } else {
            self.duration
        }
    }

    /// Time from scheduling to completion, `None` when it loops forever.
    pub fn total_duration(&self) -> Option<f32> {
        match self.repeat {
            Repeat::Times(n) => Some(self.delay + self.cycle_len() * (n as f32 + 1.0)),
            Repeat::Forever => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.total_duration()
            .is_some_and(|total| self.elapsed >= total)
    }

    /// Linear progress within the current leg, before easing.
    ///
    /// `None` while the tween is still waiting for its delay.
    pub fn progress(&self) -> Option<f32> {
        let local = self.elapsed - self.delay;
        if local < 0.0 {
            return None;
        }
        if self.duration <= 0.0 || self.is_finished() {
            return Some(if self.yoyo { 0.0 } else { 1.0 });
        }
        let cycle = self.cycle_len();
        let phase = local % cycle;
        if self.yoyo && phase > self.duration {
            Some(1.0 - (phase - self.duration) / self.duration)
        } else {
            Some(phase / self.duration)
        }
    }

    /// Current property value, `None` while delayed.
    pub fn value(&self) -> Option<f32> {
        self.progress()
            .map(|t| lerp_f32(self.from, self.to, ease(self.easing, t)))
    }
}

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve.
pub fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadIn => t * t,
        Easing::QuadOut => t * (2.0 - t),
        Easing::QuadInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                -1.0 + (4.0 - 2.0 * t) * t
            }
        }
        Easing::CubicIn => t * t * t,
        Easing::CubicOut => {
            let p = t - 1.0;
            p * p * p + 1.0
        }
        Easing::CubicInOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                let p = 2.0 * t - 2.0;
                0.5 * p * p * p + 1.0
            }
        }
    }
}

/// Linearly interpolate between two floats.
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// All tweens currently running on an entity.
#[derive(Component, Clone, Debug, Default)]
pub struct Tweens {
    pub running: SmallVec<[Tween; 4]>,
}

impl Tweens {
    pub fn with(mut self, tween: Tween) -> Self {
        self.schedule(tween);
        self
    }

    /// Start a tween. Replaces any running tween on the same property.
    pub fn schedule(&mut self, tween: Tween) {
        self.cancel(tween.property);
        self.running.push(tween);
    }

    pub fn cancel(&mut self, property: TweenProperty) {
        self.running.retain(|t| t.property != property);
    }

    pub fn clear(&mut self) {
        self.running.clear();
    }

    pub fn get(&self, property: TweenProperty) -> Option<&Tween> {
        self.running.iter().find(|t| t.property == property)
    }

    pub fn is_idle(&self) -> bool {
        self.running.is_empty()
    }
}
