//! Starlance gameplay core.
//!
//! The trigger sequencer, layered damage model, collision resolver and scene
//! choreography of a top-down shooter, built on `bevy_ecs`. Rendering,
//! physics, input and audio belong to an external engine, which feeds
//! collision pairs in as messages and receives
//! [`EngineCmd`](events::engine::EngineCmd)s back through a channel.
//!
//! This module exposes the components, resources, systems, triggers and
//! events for use in integration tests and as a reusable library.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
pub mod triggers;
