//! Joint-angle geometry
//!
//! Pure point arithmetic; no state, no error conditions. Coincident points
//! produce a finite but meaningless angle (atan2 of a zero vector is
//! implementation-defined) and callers tolerate that rather than this
//! module guarding against it.

use crate::types::Point;

/// Interior angle at vertex `b` formed by rays `b→a` and `b→c`, in degrees
///
/// Always in `[0, 180]`: the raw atan2 difference is folded so that
/// reflex results map back into the interior range.
pub fn angle_at(a: Point, b: Point, c: Point) -> f64 {
    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let mut angle = radians.to_degrees().abs();

    if angle > 180.0 {
        angle = 360.0 - angle;
    }
    angle
}

/// Arithmetic mean of two points
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_limb() {
        // Collinear points, vertex in the middle
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.5, 0.0);
        let c = Point::new(1.0, 0.0);
        assert!((angle_at(a, b, c) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_right_angle() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.5, 0.0);
        let c = Point::new(0.5, 0.5);
        assert!((angle_at(a, b, c) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_symmetry() {
        let triples = [
            (Point::new(0.0, 0.0), Point::new(1.0, 0.3), Point::new(2.0, 2.0)),
            (Point::new(-1.0, 4.0), Point::new(0.0, 0.0), Point::new(3.0, -2.0)),
            (Point::new(5.0, 5.0), Point::new(4.0, 1.0), Point::new(0.0, 2.0)),
        ];
        for (a, b, c) in triples {
            assert!((angle_at(a, b, c) - angle_at(c, b, a)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_range_folded_to_interior() {
        // Sweep c around the vertex; result must always stay in [0, 180]
        let a = Point::new(1.0, 0.0);
        let b = Point::new(0.0, 0.0);
        for i in 0..360 {
            let theta = (i as f64).to_radians();
            let c = Point::new(theta.cos(), theta.sin());
            let angle = angle_at(a, b, c);
            assert!((0.0..=180.0).contains(&angle), "angle {} out of range", angle);
        }
    }

    #[test]
    fn test_reflection_invariance() {
        // Mirroring the frame flips x; the angle must not change
        let a = Point::new(0.2, 0.1);
        let b = Point::new(0.5, 0.6);
        let c = Point::new(0.9, 0.3);
        let mirrored = |p: Point| Point::new(1.0 - p.x, p.y);
        let original = angle_at(a, b, c);
        let flipped = angle_at(mirrored(a), mirrored(b), mirrored(c));
        assert!((original - flipped).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_is_finite() {
        let p = Point::new(0.5, 0.5);
        let angle = angle_at(p, p, p);
        assert!(angle.is_finite());
    }

    #[test]
    fn test_midpoint() {
        let m = midpoint(Point::new(0.0, 2.0), Point::new(4.0, 0.0));
        assert_eq!(m, Point::new(2.0, 1.0));
    }
}
