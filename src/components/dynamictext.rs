//! Text whose content changes at runtime, such as the intro line being typed out.
//!
//! The host engine owns fonts and layout; this only carries what to draw.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug, Default, PartialEq)]
pub struct DynamicText {
    pub content: String,
    /// Font key known to the host engine.
    pub font: String,
    pub font_size: f32,
}

impl DynamicText {
    pub fn new(content: impl Into<String>, font: impl Into<String>, font_size: f32) -> Self {
        DynamicText {
            content: content.into(),
            font: font.into(),
            font_size,
        }
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}
