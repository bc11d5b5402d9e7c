//! Game screen camera resource.
//!
//! [`GameCamera`] describes which part of the world is visible: a center
//! position, a viewport in world units and a zoom factor. The width of the
//! viewport is fixed; its height follows the window aspect ratio. The render
//! system turns it into a raylib [`Camera2D`] each frame.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

use crate::resources::windowsize::WindowSize;
use crate::resources::worldbounds::WorldBounds;

/// Clamp one axis of the camera center so the view stays inside the world.
/// When the view is larger than the world the bounds invert and the camera is
/// pinned to the world center on that axis.
fn clamp_axis(value: f32, visible: f32, world: f32) -> f32 {
    let min = visible / 2.0;
    let max = world - visible / 2.0;
    if min > max {
        world / 2.0
    } else {
        value.clamp(min, max)
    }
}

/// ECS resource that holds the active game camera.
///
/// Inserted when the game screen is entered and removed when it exits.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct GameCamera {
    /// Center of the view in world units.
    pub position: Vector2,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub zoom: f32,
}

impl GameCamera {
    /// Create a camera whose viewport height matches the window's aspect
    /// ratio. A degenerate window yields a square viewport.
    pub fn new(viewport_width: f32, window: &WindowSize, zoom: f32) -> Self {
        let mut camera = Self {
            position: Vector2::zero(),
            viewport_width,
            viewport_height: viewport_width,
            zoom,
        };
        camera.resize(window);
        camera
    }

    pub fn with_position(mut self, position: Vector2) -> Self {
        self.position = position;
        self
    }

    /// Width of the visible region in world units: `viewport_width * zoom`.
    ///
    /// Clamping and the movement dead-zone work on this size, so with a zoom
    /// other than 1 they differ from the plain `viewport_width`.
    pub fn visible_width(&self) -> f32 {
        self.viewport_width * self.zoom
    }

    /// Height of the visible region in world units: `viewport_height * zoom`.
    pub fn visible_height(&self) -> f32 {
        self.viewport_height * self.zoom
    }

    /// Recompute the viewport height for a new window size.
    ///
    /// Returns `false` and leaves the camera untouched when the window is
    /// [degenerate](WindowSize::is_degenerate).
    pub fn resize(&mut self, window: &WindowSize) -> bool {
        if window.is_degenerate() {
            return false;
        }
        self.viewport_height = self.viewport_width * (window.h as f32 / window.w as f32);
        true
    }

    pub fn translate(&mut self, delta: Vector2) {
        self.position = self.position + delta;
    }

    /// Keep the whole visible region inside the world.
    pub fn clamp_to_world(&mut self, bounds: &WorldBounds) {
        self.position.x = clamp_axis(self.position.x, self.visible_width(), bounds.width);
        self.position.y = clamp_axis(self.position.y, self.visible_height(), bounds.height);
    }

    /// Bottom-left corner of the visible region in world units.
    pub fn bottom_left(&self) -> Vector2 {
        Vector2 {
            x: self.position.x - self.visible_width() / 2.0,
            y: self.position.y - self.visible_height() / 2.0,
        }
    }

    /// Build the raylib camera for a screen of `screen_w × screen_h` pixels.
    ///
    /// World y grows upward while raylib's grows downward, so the target is
    /// mirrored against `world_height`; draw calls must mirror the same way
    /// (see [`WorldBounds::to_screen_rect`]).
    pub fn to_raylib(&self, screen_w: i32, screen_h: i32, world_height: f32) -> Camera2D {
        Camera2D {
            offset: Vector2 {
                x: screen_w as f32 * 0.5,
                y: screen_h as f32 * 0.5,
            },
            target: Vector2 {
                x: self.position.x,
                y: world_height - self.position.y,
            },
            rotation: 0.0,
            zoom: screen_w as f32 / self.visible_width(),
        }
    }
}
