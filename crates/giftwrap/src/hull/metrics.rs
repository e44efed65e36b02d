//! Area and sanity checks for ordered hulls.
//!
//! - `polygon_area`: fan triangulation from the first vertex with absolute
//!   triangle areas, so either winding gives the same value for a convex hull.
//! - `signed_area`: shoelace, positive for counterclockwise order.
//! - `is_counter_clockwise`, `contains`, `contains_eps`: convexity and
//!   membership checks for CCW hulls.

use crate::geom2::{cross, orient, Point};

/// Area enclosed by an ordered hull.
///
/// Sums `|(p1 - p0) × (p2 - p0)| / 2` over consecutive pairs `(p1, p2)` after
/// the first vertex `p0`. Fewer than 3 vertices enclose nothing: `0.0`.
/// The fan is only valid for vertices in hull order (either direction).
pub fn polygon_area(hull: &[Point]) -> f64 {
    let Some((&p0, rest)) = hull.split_first() else {
        return 0.0;
    };
    rest.windows(2)
        .map(|w| triangle_area(p0, w[0], w[1]))
        .sum()
}

#[inline]
fn triangle_area(p0: Point, p1: Point, p2: Point) -> f64 {
    cross(p1 - p0, p2 - p0).abs() / 2.0
}

/// Shoelace area; positive for CCW order, `0.0` for fewer than 3 vertices.
pub fn signed_area(poly: &[Point]) -> f64 {
    if poly.len() < 3 {
        return 0.0;
    }
    let twice: f64 = edges(poly).map(|(a, b)| a.x * b.y - b.x * a.y).sum();
    twice / 2.0
}

/// Every wrapped consecutive triple `(a, b, c)` turns left or goes straight,
/// and the polygon winds counterclockwise overall.
pub fn is_counter_clockwise(hull: &[Point]) -> bool {
    let n = hull.len();
    if n < 3 {
        return false;
    }
    let turns_left = (0..n).all(|i| {
        let a = hull[i];
        let b = hull[(i + 1) % n];
        let c = hull[(i + 2) % n];
        cross(b - a, c - b) >= 0.0
    });
    turns_left && signed_area(hull) > 0.0
}

/// `p` lies inside or on the CCW convex polygon `hull` (exact predicate).
#[inline]
pub fn contains(hull: &[Point], p: Point) -> bool {
    contains_eps(hull, p, 0.0)
}

/// Membership with slack: `eps > 0` accepts points up to distance `eps`
/// outside each edge line, `eps < 0` requires that much clearance inside.
pub fn contains_eps(hull: &[Point], p: Point, eps: f64) -> bool {
    if hull.len() < 3 {
        return false;
    }
    edges(hull).all(|(a, b)| {
        let len = (b - a).norm();
        len > 0.0 && orient(a, b, p) / len >= -eps
    })
}

/// Wrapped edge iterator `(v[i], v[i+1 mod n])`.
fn edges(poly: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    poly.iter()
        .copied()
        .zip(poly.iter().copied().cycle().skip(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn square_and_triangle_areas() {
        let square = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        assert_eq!(polygon_area(&square), 16.0);
        let tri = pts(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]);
        assert_eq!(polygon_area(&tri), 8.0);
    }

    #[test]
    fn area_ignores_winding() {
        let mut square = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        square.reverse();
        assert_eq!(polygon_area(&square), 16.0);
        assert_eq!(signed_area(&square), -16.0);
    }

    #[test]
    fn collinear_vertices_add_nothing() {
        let hull = pts(&[(0.0, 0.0), (2.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        assert_eq!(polygon_area(&hull), 16.0);
        assert_eq!(signed_area(&hull), 16.0);
    }

    #[test]
    fn short_sequences_enclose_nothing() {
        assert_eq!(polygon_area(&[]), 0.0);
        assert_eq!(polygon_area(&pts(&[(1.0, 1.0)])), 0.0);
        assert_eq!(polygon_area(&pts(&[(1.0, 1.0), (2.0, 3.0)])), 0.0);
        assert_eq!(signed_area(&pts(&[(1.0, 1.0), (2.0, 3.0)])), 0.0);
    }

    #[test]
    fn ccw_check() {
        let square = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        assert!(is_counter_clockwise(&square));
        let mut cw = square.clone();
        cw.reverse();
        assert!(!is_counter_clockwise(&cw));
        // reflex vertex at (2,1)
        let dent = pts(&[(0.0, 0.0), (2.0, 1.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        assert!(!is_counter_clockwise(&dent));
        assert!(!is_counter_clockwise(&square[..2]));
    }

    #[test]
    fn membership_inside_boundary_outside() {
        let square = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        assert!(contains(&square, Point::new(2.0, 2.0)));
        assert!(contains(&square, Point::new(4.0, 1.0)));
        assert!(contains(&square, Point::new(0.0, 0.0)));
        assert!(!contains(&square, Point::new(4.5, 1.0)));
        assert!(contains_eps(&square, Point::new(4.0 + 1e-10, 1.0), 1e-9));
        assert!(!contains_eps(&square, Point::new(3.9, 1.0), -0.2));
    }
}
