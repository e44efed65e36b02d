//! `Point`: a finite 2D coordinate pair.
//!
//! - Equality is exact on both coordinates (`-0.0 == 0.0`), no tolerance.
//!   Tolerant identity lives in `hull::Dedup::Within`.
//! - Ordering is lexicographic by `y`, then `x`. Only used to choose the
//!   starting vertex of a hull, which is always extreme.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

use nalgebra::Vector2;

/// A point in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Total (y, x) ordering for sorting; incomparable coordinates (NaN) compare equal.
    #[inline]
    pub fn cmp_yx(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

// Callers reject non-finite coordinates before points reach a hash set.
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        bits(self.x).hash(state);
        bits(self.y).hash(state);
    }
}

/// Bit pattern with both zeros folded together so `Hash` agrees with `==`.
#[inline]
fn bits(v: f64) -> u64 {
    if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.y.partial_cmp(&other.y)? {
            Ordering::Equal => self.x.partial_cmp(&other.x),
            ord => Some(ord),
        }
    }
}

impl Sub for Point {
    type Output = Vector2<f64>;
    #[inline]
    fn sub(self, rhs: Point) -> Self::Output {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vector2<f64>> for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Vector2<f64>) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vec2()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
