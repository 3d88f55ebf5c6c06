//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world. Components hold the data that systems and triggers act on:
//! positions, hit points, choreography state, tweens and the sequencers
//! themselves.
//!
//! Submodules overview:
//! - [`body`] – collision body tags (category, part, owner) and projectile damage
//! - [`boss`] – boss phase machine and its choreography plan
//! - [`damage`] – layered hit-point ledger with armored sub-components
//! - [`dialogue`] – character-by-character text reveal
//! - [`dynamictext`] – text component for variable strings
//! - [`enemy`] – enemy phase machine and flight patterns
//! - [`flightpath`] – looping curves followed by cruising enemies
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`opacity`] – alpha channel animated by tweens
//! - [`panel`] – flat rectangle drawn behind UI text
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`sequencer`] – trigger sequencer and its per-scene component
//! - [`trigger`] – trigger lifecycle trait and closure-built triggers
//! - [`tween`] – animated interpolation of position and opacity
//! - [`weapon`] – cooldown-driven projectile launchers

pub mod body;
pub mod boss;
pub mod damage;
pub mod dialogue;
pub mod dynamictext;
pub mod enemy;
pub mod flightpath;
pub mod mapposition;
pub mod opacity;
pub mod panel;
pub mod rigidbody;
pub mod sequencer;
pub mod trigger;
pub mod tween;
pub mod weapon;
