//! Input-controlled movement component.
//!
//! The [`player_movement`](crate::systems::movement::player_movement) system
//! moves every entity carrying [`InputControlled`] according to the held
//! directions, dragging the game camera along with it.

use bevy_ecs::prelude::Component;

/// Marks the entity steered by the directional keys.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct InputControlled {
    /// World units travelled per second along each held direction.
    pub speed: f32,
}

impl InputControlled {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}
