//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems and triggers during execution.
//!
//! Overview
//! - `collisionrules` – which body categories damage which
//! - `combatlog` – running tally of resolved hits
//! - `enginebridge` – channel carrying engine commands to the host
//! - `gameconfig` – gameplay tunables loaded from an INI file
//! - `screensize` – playfield dimensions in pixels
//! - `worldtime` – simulation time and delta
pub mod collisionrules;
pub mod combatlog;
pub mod enginebridge;
pub mod gameconfig;
pub mod screensize;
pub mod worldtime;
