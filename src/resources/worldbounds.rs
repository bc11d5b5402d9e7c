//! Fixed world rectangle.
//!
//! Every entity lives inside `[0, width - w] × [0, height - h]` where `w × h`
//! is the entity's own size. Positions are bottom-left anchored with y
//! growing upward.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Rectangle, Vector2};

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Largest valid bottom-left position for an entity of `size`.
    fn max_position(&self, size: Vector2) -> Vector2 {
        Vector2 {
            x: (self.width - size.x).max(0.0),
            y: (self.height - size.y).max(0.0),
        }
    }

    /// Clamp `pos` so an entity of `size` stays inside the world.
    pub fn clamp_position(&self, pos: Vector2, size: Vector2) -> Vector2 {
        let max = self.max_position(size);
        Vector2 {
            x: pos.x.clamp(0.0, max.x),
            y: pos.y.clamp(0.0, max.y),
        }
    }

    /// Whether an entity of `size` at `pos` lies fully inside the world.
    pub fn contains(&self, pos: Vector2, size: Vector2) -> bool {
        let max = self.max_position(size);
        (0.0..=max.x).contains(&pos.x) && (0.0..=max.y).contains(&pos.y)
    }

    /// Bottom-left position that centers an entity of `size` in the world.
    pub fn centered(&self, size: Vector2) -> Vector2 {
        Vector2 {
            x: self.width / 2.0 - size.x / 2.0,
            y: self.height / 2.0 - size.y / 2.0,
        }
    }

    /// Uniformly random in-bounds position for an entity of `size`.
    pub fn random_position(&self, size: Vector2, rng: &mut fastrand::Rng) -> Vector2 {
        let max = self.max_position(size);
        Vector2 {
            x: rng.f32() * max.x,
            y: rng.f32() * max.y,
        }
    }

    /// Map a y-up world box to raylib's y-down drawing space.
    pub fn to_screen_rect(&self, pos: Vector2, size: Vector2) -> Rectangle {
        Rectangle {
            x: pos.x,
            y: self.height - pos.y - size.y,
            width: size.x,
            height: size.y,
        }
    }

    /// Map a y-up world point to raylib's y-down drawing space.
    pub fn to_screen_point(&self, pos: Vector2) -> Vector2 {
        Vector2 {
            x: pos.x,
            y: self.height - pos.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> WorldBounds {
        WorldBounds::new(25.0, 25.0)
    }

    #[test]
    fn test_clamp_position_keeps_entity_inside() {
        let size = Vector2::new(1.0, 1.0);
        let w = world();
        assert_eq!(
            w.clamp_position(Vector2::new(-3.0, 30.0), size),
            Vector2::new(0.0, 24.0)
        );
        assert_eq!(
            w.clamp_position(Vector2::new(12.0, 12.0), size),
            Vector2::new(12.0, 12.0)
        );
    }

    #[test]
    fn test_clamp_position_oversized_entity_pins_to_origin() {
        let w = WorldBounds::new(2.0, 2.0);
        let pos = w.clamp_position(Vector2::new(1.0, 1.0), Vector2::new(5.0, 5.0));
        assert_eq!(pos, Vector2::zero());
    }

    #[test]
    fn test_centered() {
        let w = world();
        assert_eq!(w.centered(Vector2::new(1.0, 1.0)), Vector2::new(12.0, 12.0));
    }

    #[test]
    fn test_random_position_in_bounds() {
        let w = world();
        let size = Vector2::new(1.0, 1.0);
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..500 {
            let p = w.random_position(size, &mut rng);
            assert!(w.contains(p, size), "{:?} out of bounds", p);
        }
    }

    #[test]
    fn test_to_screen_rect_flips_y() {
        let w = world();
        let r = w.to_screen_rect(Vector2::new(2.0, 0.0), Vector2::new(1.0, 1.0));
        assert_eq!(r.x, 2.0);
        assert_eq!(r.y, 24.0);
        let bg = w.to_screen_rect(Vector2::zero(), Vector2::new(25.0, 25.0));
        assert_eq!((bg.x, bg.y, bg.width, bg.height), (0.0, 0.0, 25.0, 25.0));
        assert_eq!(w.to_screen_point(Vector2::new(1.0, 5.0)), Vector2::new(1.0, 20.0));
    }
}
