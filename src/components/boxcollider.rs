use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Axis-aligned box anchored at the entity's [`MapPosition`].
///
/// [`MapPosition`]: crate::components::mapposition::MapPosition
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
        }
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let p0 = position;
        let p1 = p0 + self.size;
        let min = Vector2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vector2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    pub fn get_aabb(&self, position: Vector2) -> (f32, f32, f32, f32) {
        let (min, max) = self.aabb(position);
        (min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    ///
    /// Strict comparisons: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_boxes_overlap() {
        let a = BoxCollider::new(1.0, 1.0);
        let p = Vector2::new(3.0, 4.0);
        assert!(a.overlaps(p, &a, p));
    }

    #[test]
    fn test_edge_touching_does_not_overlap() {
        let a = BoxCollider::new(1.0, 1.0);
        let origin = Vector2::new(0.0, 0.0);
        assert!(!a.overlaps(origin, &a, Vector2::new(1.0, 0.0)));
        assert!(!a.overlaps(origin, &a, Vector2::new(0.0, 1.0)));
        assert!(!a.overlaps(origin, &a, Vector2::new(1.0, 1.0)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = BoxCollider::new(1.0, 1.0);
        let b = BoxCollider::new(2.0, 0.5);
        let pa = Vector2::new(0.0, 0.0);
        let pb = Vector2::new(0.5, 0.75);
        assert!(a.overlaps(pa, &b, pb));
        assert!(b.overlaps(pb, &a, pa));

        let far = Vector2::new(5.0, 5.0);
        assert!(!a.overlaps(pa, &b, far));
        assert!(!b.overlaps(far, &a, pa));
    }

    #[test]
    fn test_aabb_normalizes_negative_size() {
        let c = BoxCollider::new(-2.0, 1.0);
        let (min, max) = c.aabb(Vector2::new(5.0, 0.0));
        assert_eq!(min, Vector2::new(3.0, 0.0));
        assert_eq!(max, Vector2::new(5.0, 1.0));
    }
}
