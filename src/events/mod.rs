//! Event and message types exchanged across systems.
//!
//! Messages are buffered per frame and read by systems; events are triggered
//! and handled immediately by observers.
//!
//! Submodules:
//! - [`collision`] – contact notifications written by the host
//! - [`damage`] – hit notifications and the combat log observer
//! - [`engine`] – side-effect requests forwarded to the external engine
pub mod collision;
pub mod damage;
pub mod engine;
