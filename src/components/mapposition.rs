use bevy_ecs::prelude::Component;
use serde::Serialize;

/// World-space pivot of an entity, in pixels. Y grows downwards.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct MapPosition {
    pub x: f32,
    pub y: f32,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        MapPosition { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        MapPosition {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}
