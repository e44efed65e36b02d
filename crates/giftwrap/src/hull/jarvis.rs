//! Gift wrapping (Jarvis march) over a sorted snapshot of distinct points.
//!
//! Model
//! - Anchor: the first point in (y, x) order. Nothing lies below it, and
//!   among the lowest points nothing lies left of it, so it is a hull vertex.
//! - Each step looks at the tail window `(p2, p1)` of the chain built so far
//!   and picks the point making the smallest counterclockwise turn from the
//!   heading `p1 - p2`. The first step has no previous edge and uses the
//!   heading `+x`.
//! - The chain is append-only; the scan stops when the pick is the anchor,
//!   which is not appended (open hull).

use nalgebra::Vector2;

use super::cfg::HullCfg;
use super::dedup::dedup;
use super::error::HullError;
use crate::geom2::{cosine, cross, orient, same_ray, Point};

/// One-shot hull search over a fixed point set.
#[derive(Clone, Debug)]
pub struct HullFinder {
    /// Sorted by `Point::cmp_yx`.
    points: Vec<Point>,
}

impl HullFinder {
    /// Snapshot and sort `points`.
    ///
    /// Pre: points are distinct (see `hull::dedup`). Duplicates are not
    /// detected here and make the angle search pick degenerate vertices.
    pub fn new(points: impl Into<Vec<Point>>) -> Self {
        let mut points = points.into();
        points.sort_by(Point::cmp_yx);
        Self { points }
    }

    /// Reject non-finite input, deduplicate per `cfg.dedup`, and snapshot.
    ///
    /// `NonFinite::index` refers to `points` as given.
    pub fn from_points(points: &[Point], cfg: HullCfg) -> Result<Self, HullError> {
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(HullError::NonFinite { index });
        }
        let distinct = dedup(points, cfg.dedup);
        tracing::debug!(
            input = points.len(),
            distinct = distinct.len(),
            policy = ?cfg.dedup,
            "dedup"
        );
        Ok(Self::new(distinct))
    }

    /// Points in (y, x) order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Starting vertex of the hull, if any points were given.
    #[inline]
    pub fn anchor(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Walk the hull counterclockwise from the anchor.
    ///
    /// Post: every input point lies inside or on the returned polygon, up to
    /// floating-point orientation error; points on a hull edge are kept as
    /// vertices. Predicates are plain `f64` (no exact arithmetic): a point a
    /// few ulps right of an edge line is discarded, which can cut a corner or
    /// keep the march from closing (`NonConvergent`).
    pub fn scan(&self) -> Result<Vec<Point>, HullError> {
        let n = self.points.len();
        if let Some(index) = self.points.iter().position(|p| !p.is_finite()) {
            return Err(HullError::NonFinite { index });
        }
        if n < 3 {
            return Err(HullError::InsufficientPoints { found: n });
        }
        let anchor = self.points[0];
        let second = self.points[1];
        if self.points[2..]
            .iter()
            .all(|&p| orient(anchor, second, p) == 0.0)
        {
            return Err(HullError::DegenerateInput);
        }
        tracing::debug!(n, anchor = %anchor, "gift wrapping");

        let mut chain: Vec<Point> = vec![anchor];
        loop {
            let p1 = chain[chain.len() - 1];
            let next = select_next(&self.points, p1, heading(&chain))
                .ok_or(HullError::NonConvergent { steps: chain.len() })?;
            if next == anchor {
                break;
            }
            // A hull has at most n vertices; more means the march is cycling.
            if chain.len() >= n {
                return Err(HullError::NonConvergent { steps: chain.len() });
            }
            tracing::trace!(vertex = %next, "hull vertex");
            chain.push(next);
        }
        tracing::debug!(vertices = chain.len(), "hull closed");
        Ok(chain)
    }
}

/// Direction of the last hull edge `p1 - p2`, or `+x` for a one-point chain.
fn heading(chain: &[Point]) -> Vector2<f64> {
    match chain {
        [.., p2, p1] => *p1 - *p2,
        _ => Vector2::new(1.0, 0.0),
    }
}

/// Next hull vertex after `from`, turning counterclockwise from `heading`.
///
/// Rules, over all candidates `c != from` with `d = c - from`:
/// - Discard `c` strictly right of the heading (`d × heading > 0`).
/// - If `d` lies on the heading ray itself (collinear mode), the nearest such
///   `c` wins over everything else.
/// - Otherwise the largest `cos(heading, d)` wins; candidates sharing one ray
///   from `from` are resolved by distance, nearest first.
pub(crate) fn select_next(points: &[Point], from: Point, heading: Vector2<f64>) -> Option<Point> {
    let mut collinear: Option<(Point, f64)> = None;
    let mut best: Option<(Point, f64)> = None;
    for &c in points {
        if c == from {
            continue;
        }
        let d = c - from;
        if cross(d, heading) > 0.0 {
            continue;
        }
        if same_ray(heading, d) {
            let dist = d.norm();
            if collinear.map_or(true, |(_, nearest)| dist < nearest) {
                collinear = Some((c, dist));
            }
            continue;
        }
        let cos = cosine(heading, d);
        best = match best {
            None => Some((c, cos)),
            Some((b, best_cos)) => {
                let db = b - from;
                let take = if same_ray(db, d) {
                    d.norm() < db.norm()
                } else {
                    cos > best_cos
                };
                if take {
                    Some((c, cos))
                } else {
                    best
                }
            }
        };
    }
    collinear.or(best).map(|(p, _)| p)
}
