//! Camera maintenance.

use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::camera2d::GameCamera;
use crate::resources::windowsize::WindowSize;

/// Recompute the camera viewport when the window is resized.
///
/// Degenerate sizes (minimized window) are ignored.
pub fn camera_resize(window: Res<WindowSize>, camera: Option<ResMut<GameCamera>>) {
    let Some(mut camera) = camera else {
        return;
    };
    if !window.is_changed() {
        return;
    }
    if camera.resize(&window) {
        debug!(
            "Camera viewport resized to {:.2}x{:.2}",
            camera.viewport_width, camera.viewport_height
        );
    }
}
