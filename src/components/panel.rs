//! Flat screen-space shapes used by overlays and dialogue frames.

use bevy_ecs::prelude::Component;

/// How a [`Panel`] is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanelStyle {
    /// Solid fill.
    Fill,
    /// Rounded outline with the given line width and corner radius.
    Stroke { width: f32, radius: f32 },
}

/// Axis-aligned rectangle anchored at the entity's top-left
/// [`MapPosition`](super::mapposition::MapPosition).
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Panel {
    pub width: f32,
    pub height: f32,
    /// Packed 0xRRGGBB color.
    pub rgb: u32,
    pub style: PanelStyle,
}

impl Panel {
    pub fn filled(width: f32, height: f32, rgb: u32) -> Self {
        Panel {
            width,
            height,
            rgb,
            style: PanelStyle::Fill,
        }
    }

    pub fn outlined(width: f32, height: f32, rgb: u32, line: f32, radius: f32) -> Self {
        Panel {
            width,
            height,
            rgb,
            style: PanelStyle::Stroke {
                width: line,
                radius,
            },
        }
    }
}
