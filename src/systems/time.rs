//! Simulation clock.
//!
//! [`update_world_time`] is the first step of every
//! [`Frame`](crate::game::Frame). Trigger predicates and tweens read the
//! scaled time it writes.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Advance [`WorldTime`] by the unscaled frame delta `dt` and count the frame.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut time = world.resource_mut::<WorldTime>();
    let delta = dt * time.time_scale;
    time.elapsed += delta;
    time.delta = delta;
    time.frame_count += 1;
}
