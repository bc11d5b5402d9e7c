//! Window size resource.
//!
//! Tracks the actual window dimensions in pixels. Refreshed each frame by the
//! main loop, only written when the size actually changes so change detection
//! can drive the camera resize.

use bevy_ecs::prelude::Resource;
use raylib::prelude::*;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl WindowSize {
    /// A minimized window reports zero (or negative) dimensions.
    pub fn is_degenerate(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Destination rectangle, in pixels, of a `world_w × world_h` region
    /// fitted into the window.
    ///
    /// - Preserves the region's aspect ratio
    /// - Fits within the window bounds
    /// - Centers the content (letterbox/pillarbox as needed)
    pub fn fit_rect(&self, world_w: f32, world_h: f32) -> Rectangle {
        let window_w = self.w.max(1) as f32;
        let window_h = self.h.max(1) as f32;

        let world_aspect = world_w / world_h;
        let window_aspect = window_w / window_h;

        if window_aspect > world_aspect {
            // Window is wider - pillarbox (bars on sides)
            let scaled_w = world_w * (window_h / world_h);
            Rectangle {
                x: (window_w - scaled_w) / 2.0,
                y: 0.0,
                width: scaled_w,
                height: window_h,
            }
        } else {
            // Window is taller - letterbox (bars top/bottom)
            let scaled_h = world_h * (window_w / world_w);
            Rectangle {
                x: 0.0,
                y: (window_h - scaled_h) / 2.0,
                width: window_w,
                height: scaled_h,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_rect_pillarbox() {
        let ws = WindowSize { w: 1000, h: 300 };
        let r = ws.fit_rect(5.0, 3.0);
        assert_eq!(r.width, 500.0);
        assert_eq!(r.height, 300.0);
        assert_eq!(r.x, 250.0);
        assert_eq!(r.y, 0.0);
    }

    #[test]
    fn test_fit_rect_letterbox() {
        let ws = WindowSize { w: 500, h: 1000 };
        let r = ws.fit_rect(5.0, 3.0);
        assert_eq!(r.width, 500.0);
        assert_eq!(r.height, 300.0);
        assert_eq!(r.y, 350.0);
    }

    #[test]
    fn test_degenerate() {
        assert!(WindowSize { w: 0, h: 10 }.is_degenerate());
        assert!(WindowSize { w: 10, h: -1 }.is_degenerate());
        assert!(!WindowSize { w: 10, h: 10 }.is_degenerate());
    }
}
