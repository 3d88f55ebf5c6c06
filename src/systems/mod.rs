//! Gameplay systems.
//!
//! This module groups the ECS systems (and exclusive world steps) that
//! advance the simulation each frame.
//!
//! Submodules overview
//! - [`boss`] – boss phase transitions and their tweens
//! - [`collision`] – resolve collision pairs into damage and effects
//! - [`enemy`] – enemy dive and cruise, flight path following
//! - [`engine`] – forward engine commands and advance message queues
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`projectile`] – cull projectiles that leave the playfield
//! - [`sequencer`] – update scene sequencers against the world
//! - [`time`] – update simulation time and delta
//! - [`tween`] – animate position and opacity over time
//! - [`weapon`] – fire projectiles from weapons off cooldown

pub mod boss;
pub mod collision;
pub mod enemy;
pub mod engine;
pub mod movement;
pub mod projectile;
pub mod sequencer;
pub mod time;
pub mod tween;
pub mod weapon;
