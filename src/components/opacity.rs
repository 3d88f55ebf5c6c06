use bevy_ecs::prelude::Component;

/// Alpha multiplier applied by the renderer, 0.0 (invisible) to 1.0.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Opacity(pub f32);

impl Default for Opacity {
    fn default() -> Self {
        Opacity(1.0)
    }
}

impl Opacity {
    pub fn hidden() -> Self {
        Opacity(0.0)
    }

    pub fn set(&mut self, alpha: f32) {
        self.0 = alpha.clamp(0.0, 1.0);
    }
}
