//! Boss choreography as an explicit phase machine.
//!
//! The boss moves through a fixed sequence of [`BossPhase`]s:
//!
//! ```text
//! Dormant -> Entering -> Patrolling -> Dying -> Gone
//! ```
//!
//! - **Entering** – sways horizontally around the screen center while it
//!   descends to its hover line
//! - **Patrolling** – bobs up and down around the hover line
//! - **Dying** – shakes horizontally for a short while
//! - **Gone** – explodes and is despawned
//!
//! `Entering -> Patrolling` and `Dying -> Gone` happen on their own once the
//! phase's tweens are over. `Dormant -> Entering` and `-> Dying` are requested
//! from outside (usually by [`BossTrigger`](crate::triggers::boss::BossTrigger))
//! with [`BossBehavior::transition_to`].
//!
//! All durations, distances and easings live in a [`BossPlan`].
//!
//! # Related
//!
//! - [`crate::systems::boss::boss_phase_system`] – applies transitions and schedules tweens

use bevy_ecs::prelude::Component;
use serde::Serialize;
use std::fmt;

use crate::components::tween::Easing;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum BossPhase {
    Dormant,
    Entering,
    Patrolling,
    Dying,
    Gone,
}

impl fmt::Display for BossPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BossPhase::Dormant => "dormant",
            BossPhase::Entering => "entering",
            BossPhase::Patrolling => "patrolling",
            BossPhase::Dying => "dying",
            BossPhase::Gone => "gone",
        };
        f.write_str(label)
    }
}

/// Timings and distances of the boss choreography. Times in seconds,
/// distances in pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct BossPlan {
    /// Horizontal center of the sway and shake.
    pub center_x: f32,
    pub entry_delay: f32,
    pub entry_duration: f32,
    /// Y reached at the end of the entry.
    pub hover_y: f32,
    /// Upper end of the patrol bob.
    pub bob_y: f32,
    pub bob_duration: f32,
    pub sway: f32,
    pub sway_duration: f32,
    pub shake: f32,
    pub shake_duration: f32,
    pub shake_repeat: u32,
    pub explosion_scale: f32,
    pub easing: Easing,
}

impl BossPlan {
    pub fn new(center_x: f32) -> Self {
        BossPlan {
            center_x,
            entry_delay: 3.0,
            entry_duration: 8.0,
            hover_y: 140.0,
            bob_y: 120.0,
            bob_duration: 6.0,
            sway: 20.0,
            sway_duration: 5.0,
            shake: 10.0,
            shake_duration: 0.15,
            shake_repeat: 10,
            explosion_scale: 1.2,
            easing: Easing::Linear,
        }
    }

    /// Time spent in `Entering` before the boss starts patrolling.
    pub fn entering_len(&self) -> f32 {
        self.entry_delay + self.entry_duration
    }

    /// Time spent in `Dying` before the boss is gone.
    pub fn dying_len(&self) -> f32 {
        self.shake_duration * 2.0 * (self.shake_repeat as f32 + 1.0)
    }
}

#[derive(Component, Clone, Debug)]
pub struct BossBehavior {
    pub current: BossPhase,
    pub previous: Option<BossPhase>,
    /// Requested transition, applied on the next frame.
    pub next: Option<BossPhase>,
    pub time_in_phase: f32,
    pub plan: BossPlan,
}

impl BossBehavior {
    pub fn new(plan: BossPlan) -> Self {
        BossBehavior {
            current: BossPhase::Dormant,
            previous: None,
            next: None,
            time_in_phase: 0.0,
            plan,
        }
    }

    pub fn transition_to(&mut self, phase: BossPhase) {
        self.next = Some(phase);
    }

    /// Dying or already gone, or about to be.
    pub fn is_dying(&self) -> bool {
        matches!(self.current, BossPhase::Dying | BossPhase::Gone)
            || matches!(self.next, Some(BossPhase::Dying | BossPhase::Gone))
    }

    /// Transition the phase machine takes by itself once the current phase
    /// has run its course.
    pub fn automatic_next(&self) -> Option<BossPhase> {
        match self.current {
            BossPhase::Entering if self.time_in_phase >= self.plan.entering_len() => {
                Some(BossPhase::Patrolling)
            }
            BossPhase::Dying if self.time_in_phase >= self.plan.dying_len() => Some(BossPhase::Gone),
            _ => None,
        }
    }
}
