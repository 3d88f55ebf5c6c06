//! Enemy choreography.
//!
//! Enemies wait, dive into the screen and then cruise along a looping
//! [`FlightPath`](super::flightpath::FlightPath):
//!
//! ```text
//! Dormant -> Diving -> Cruising
//! ```
//!
//! `Dormant -> Diving` is requested by [`EnemyTrigger`](crate::triggers::enemy::EnemyTrigger);
//! `Diving -> Cruising` happens once the dive is over.

use bevy_ecs::prelude::Component;
use serde::Serialize;

use crate::components::flightpath::{Curve, FlightPath};
use crate::components::mapposition::MapPosition;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum EnemyPhase {
    Dormant,
    Diving,
    Cruising,
}

/// Shape of the cruise loop, anchored at the point where the dive ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum FlightPattern {
    /// Small circle around the anchor.
    Orbit,
    /// S-shaped weave below the anchor, played back and forth.
    Weave,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnemyPlan {
    pub dive_delay: f32,
    pub dive_distance: f32,
    pub dive_duration: f32,
    /// Seconds for one pass over the flight path.
    pub cruise_period: f32,
    pub orbit_radius: f32,
    pub pattern: FlightPattern,
}

impl EnemyPlan {
    pub fn new(pattern: FlightPattern) -> Self {
        EnemyPlan {
            dive_delay: 3.0,
            dive_distance: 500.0,
            dive_duration: 2.0,
            cruise_period: 3.0,
            orbit_radius: 20.0,
            pattern,
        }
    }

    pub fn diving_len(&self) -> f32 {
        self.dive_delay + self.dive_duration
    }

    /// Flight path starting from `anchor`.
    pub fn flight_path(&self, anchor: MapPosition) -> FlightPath {
        match self.pattern {
            FlightPattern::Orbit => FlightPath::new(
                Curve::circle(anchor, self.orbit_radius),
                self.cruise_period,
            ),
            FlightPattern::Weave => FlightPath::new(
                Curve::CubicBezier {
                    p0: anchor,
                    p1: anchor.offset(100.0, 20.0),
                    p2: anchor.offset(-100.0, 80.0),
                    p3: anchor.offset(0.0, 100.0),
                },
                self.cruise_period,
            )
            .with_yoyo(),
        }
    }
}

#[derive(Component, Clone, Debug)]
pub struct EnemyBehavior {
    pub current: EnemyPhase,
    pub next: Option<EnemyPhase>,
    pub time_in_phase: f32,
    pub plan: EnemyPlan,
}

impl EnemyBehavior {
    pub fn new(plan: EnemyPlan) -> Self {
        EnemyBehavior {
            current: EnemyPhase::Dormant,
            next: None,
            time_in_phase: 0.0,
            plan,
        }
    }

    pub fn transition_to(&mut self, phase: EnemyPhase) {
        self.next = Some(phase);
    }

    pub fn automatic_next(&self) -> Option<EnemyPhase> {
        match self.current {
            EnemyPhase::Diving if self.time_in_phase >= self.plan.diving_len() => {
                Some(EnemyPhase::Cruising)
            }
            _ => None,
        }
    }
}
