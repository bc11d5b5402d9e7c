//! World-space position component.
//!
//! [`MapPosition`] is the bottom-left corner of an entity in world units.
//! The world y axis grows upward; the renderer flips it when mapping to
//! raylib's screen space.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    pub fn from_vec(pos: Vector2) -> Self {
        Self { pos }
    }
}
