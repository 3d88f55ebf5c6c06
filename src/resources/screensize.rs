//! Screen size resource.
//!
//! Stores the playfield dimensions in pixels. Projectiles leaving
//! `[0, h]` vertically are culled, and the boss sways around `w / 2`.

use bevy_ecs::prelude::Resource;

/// Playfield size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    pub fn center_x(&self) -> f32 {
        self.w as f32 / 2.0
    }

    pub fn contains_y(&self, y: f32) -> bool {
        y >= 0.0 && y <= self.h as f32
    }
}
