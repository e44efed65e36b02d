//! Curated API surface for callers (CLI, benches, downstream experiments).
//!
//! - `find_hull` / `find_hull_with`: dedup + gift-wrapping scan.
//! - `polygon_area`: fan-triangulated area of an ordered hull.

pub use crate::geom2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
pub use crate::geom2::Point;
pub use crate::hull::{
    contains, dedup, find_hull, find_hull_with, is_counter_clockwise, polygon_area, signed_area,
    Dedup, HullCfg, HullError, HullFinder,
};

/// Hull and area in one call.
///
/// Pre: `points` may contain duplicates (removed per `HullCfg::default()`).
/// Post: returns the open CCW hull starting at the (y, x)-minimal point and
/// the area it encloses.
pub fn hull_and_area(points: &[Point]) -> Result<(Vec<Point>, f64), HullError> {
    let hull = find_hull(points)?;
    let area = polygon_area(&hull);
    Ok((hull, area))
}
