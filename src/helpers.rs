//! Utility functions for jumpgame

use bevy::prelude::*;

use crate::constants::{WORLD_HEIGHT, WORLD_WIDTH};

/// Axis-aligned overlap test between two centered boxes
pub fn aabb_overlap(pos_a: Vec2, size_a: Vec2, pos_b: Vec2, size_b: Vec2) -> bool {
    let half_a = size_a / 2.0;
    let half_b = size_b / 2.0;
    let diff = pos_a - pos_b;
    let overlap_x = half_a.x + half_b.x - diff.x.abs();
    let overlap_y = half_a.y + half_b.y - diff.y.abs();
    overlap_x > 0.0 && overlap_y > 0.0
}

/// Check if a world-space point lies inside a centered rect
pub fn point_in_rect(point: Vec2, center: Vec2, size: Vec2) -> bool {
    let half = size / 2.0;
    point.x >= center.x - half.x
        && point.x <= center.x + half.x
        && point.y >= center.y - half.y
        && point.y <= center.y + half.y
}

/// Map window coordinates (origin top-left, y down) to world coordinates.
/// Valid because the window is fixed at the world resolution with scale 1.0.
pub fn window_to_world(window_pos: Vec2) -> Vec2 {
    Vec2::new(
        window_pos.x - WORLD_WIDTH / 2.0,
        WORLD_HEIGHT / 2.0 - window_pos.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_overlap_detects_contact() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(30.0, 0.0);
        assert!(aabb_overlap(a, Vec2::splat(32.0), b, Vec2::splat(32.0)));
        // Touching edges (zero overlap) does not count
        let c = Vec2::new(32.0, 0.0);
        assert!(!aabb_overlap(a, Vec2::splat(32.0), c, Vec2::splat(32.0)));
    }

    #[test]
    fn test_aabb_overlap_separated_on_y() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(0.0, 100.0);
        assert!(!aabb_overlap(a, Vec2::splat(32.0), b, Vec2::splat(32.0)));
    }

    #[test]
    fn test_window_to_world_corners() {
        assert_eq!(window_to_world(Vec2::new(0.0, 0.0)), Vec2::new(-400.0, 300.0));
        assert_eq!(window_to_world(Vec2::new(800.0, 600.0)), Vec2::new(400.0, -300.0));
        assert_eq!(window_to_world(Vec2::new(400.0, 300.0)), Vec2::ZERO);
    }

    #[test]
    fn test_point_in_rect() {
        let center = Vec2::new(-330.0, -250.0);
        let size = Vec2::new(100.0, 100.0);
        assert!(point_in_rect(Vec2::new(-330.0, -250.0), center, size));
        assert!(point_in_rect(Vec2::new(-380.0, -300.0), center, size));
        assert!(!point_in_rect(Vec2::new(-381.0, -250.0), center, size));
    }
}
