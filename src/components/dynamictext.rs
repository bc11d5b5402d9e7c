use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

#[derive(Component, Clone, Debug)]
/// Dynamic text component for rendering variable strings with the default font.
pub struct DynamicText {
    /// The text content to render.
    pub content: String,
    /// Font size in world units.
    pub font_size: f32,
    /// Color of the text.
    pub color: Color,
}

impl DynamicText {
    /// Creates a new DynamicText component.
    pub fn new(content: impl Into<String>, font_size: f32, color: Color) -> Self {
        Self {
            content: content.into(),
            font_size,
            color,
        }
    }
    /// Updates the text content.
    pub fn set_content(&mut self, new_content: impl Into<String>) {
        self.content = new_content.into();
    }
}
