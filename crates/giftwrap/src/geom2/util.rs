use nalgebra::Vector2;

use super::types::Point;

/// z-component of `a × b`. Positive when `b` is counterclockwise of `a`.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Cosine of the angle between `a` and `b`. NaN if either is zero.
#[inline]
pub fn cosine(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.dot(&b) / (a.norm() * b.norm())
}

#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (b - a).norm()
}

/// Orientation of `c` relative to the directed line `a → b`
/// (>0 left turn, <0 right turn, 0 collinear).
#[inline]
pub fn orient(a: Point, b: Point, c: Point) -> f64 {
    cross(b - a, c - a)
}

/// `a` and `b` point along the same ray: exactly parallel and not opposite.
#[inline]
pub fn same_ray(a: Vector2<f64>, b: Vector2<f64>) -> bool {
    cross(a, b) == 0.0 && a.dot(&b) > 0.0
}
