//! Convex hulls by gift wrapping (Jarvis march), plus hull metrics.
//!
//! Purpose
//! - `HullFinder`: sorted snapshot of distinct points; `scan` walks the hull
//!   counterclockwise from the (y, x)-minimal point, one vertex per pass over
//!   the input (O(h·n)).
//! - `dedup`: explicit caller-side deduplication with a documented equality
//!   policy (`Dedup`), run by `find_hull_with` before construction.
//! - `metrics`: fan-triangulated area and checks used by tests and the CLI.
//!
//! Collinear policy
//! - Boundary points on a hull edge are kept: among candidates on one ray
//!   from the current vertex, the nearest wins, so a run is walked point by
//!   point. See `jarvis::select_next`.
//!
//! Hardening
//! - Too few points, all-collinear input, non-finite coordinates and a march
//!   that fails to close are reported as `HullError` instead of looping or
//!   indexing out of bounds.

mod cfg;
mod dedup;
mod error;
mod jarvis;
mod metrics;

pub use cfg::{Dedup, HullCfg};
pub use dedup::dedup;
pub use error::HullError;
pub use jarvis::HullFinder;
pub use metrics::{contains, contains_eps, is_counter_clockwise, polygon_area, signed_area};

use crate::geom2::Point;

/// Hull of `points` with exact deduplication.
///
/// Post: open CCW vertex sequence starting at the (y, x)-minimal input point;
/// the anchor is not repeated at the end.
pub fn find_hull(points: &[Point]) -> Result<Vec<Point>, HullError> {
    find_hull_with(points, HullCfg::default())
}

/// Hull of `points` after deduplicating per `cfg.dedup`.
pub fn find_hull_with(points: &[Point], cfg: HullCfg) -> Result<Vec<Point>, HullError> {
    HullFinder::from_points(points, cfg)?.scan()
}
