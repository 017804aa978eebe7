//! Collision predicates for circles
//!
//! Everything in the game is a circle, so contact reduces to the gap between
//! two edges. Contact starts once that gap drops below `CONTACT_GAP`.

use glam::DVec2;

use crate::consts::CONTACT_GAP;
use crate::distance;

/// Distance between the edges of two circles (negative when overlapping)
#[inline]
pub fn edge_gap(a_pos: DVec2, a_radius: f64, b_pos: DVec2, b_radius: f64) -> f64 {
    distance(a_pos, b_pos) - a_radius - b_radius
}

/// True when the edge gap is strictly below `CONTACT_GAP`
#[inline]
pub fn circles_touch(a_pos: DVec2, a_radius: f64, b_pos: DVec2, b_radius: f64) -> bool {
    edge_gap(a_pos, a_radius, b_pos, b_radius) < CONTACT_GAP
}

/// True when the circle lies entirely beyond one of the canvas edges
pub fn outside_canvas(pos: DVec2, radius: f64, width: f64, height: f64) -> bool {
    pos.x + radius < 0.0
        || pos.x - radius > width
        || pos.y + radius < 0.0
        || pos.y - radius > height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_gap() {
        let gap = edge_gap(DVec2::ZERO, 15.0, DVec2::new(40.0, 0.0), 10.0);
        assert_eq!(gap, 15.0);

        let gap = edge_gap(DVec2::ZERO, 15.0, DVec2::new(20.0, 0.0), 10.0);
        assert_eq!(gap, -5.0);
    }

    #[test]
    fn test_contact_boundary() {
        // Gap exactly 1: not touching
        assert!(!circles_touch(DVec2::ZERO, 15.0, DVec2::new(26.0, 0.0), 10.0));
        // Gap 0.999: touching
        assert!(circles_touch(DVec2::ZERO, 15.0, DVec2::new(25.999, 0.0), 10.0));
        // Overlapping
        assert!(circles_touch(DVec2::ZERO, 15.0, DVec2::new(5.0, 0.0), 10.0));
    }

    #[test]
    fn test_outside_canvas_each_side() {
        let (w, h) = (800.0, 600.0);
        assert!(!outside_canvas(DVec2::new(400.0, 300.0), 5.0, w, h));

        // Still partly visible
        assert!(!outside_canvas(DVec2::new(-4.0, 300.0), 5.0, w, h));
        assert!(!outside_canvas(DVec2::new(804.0, 300.0), 5.0, w, h));

        assert!(outside_canvas(DVec2::new(-5.1, 300.0), 5.0, w, h));
        assert!(outside_canvas(DVec2::new(805.1, 300.0), 5.0, w, h));
        assert!(outside_canvas(DVec2::new(400.0, -5.1), 5.0, w, h));
        assert!(outside_canvas(DVec2::new(400.0, 605.1), 5.0, w, h));
    }

    #[test]
    fn test_touching_edge_is_not_outside() {
        // Circle tangent to the left edge from outside stays in play
        assert!(!outside_canvas(DVec2::new(-5.0, 300.0), 5.0, 800.0, 600.0));
    }
}
