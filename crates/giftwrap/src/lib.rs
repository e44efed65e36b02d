//! Planar convex hulls by gift wrapping (Jarvis march) and hull area.
//!
//! Layout
//! - `geom2`: the `Point` value type, vector helpers over `nalgebra::Vector2`,
//!   and a reproducible point-cloud sampler.
//! - `hull`: `HullFinder`, deduplication, area/verification metrics, errors.
//! - `api`: curated surface (`find_hull`, `polygon_area`, ...).
//!
//! API Policy
//! - The crate is consumed by the workspace CLI and tests. Breaking changes
//!   are fine when they improve clarity.

pub mod api;
pub mod geom2;
pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::Point;
pub use hull::{find_hull, find_hull_with, polygon_area, Dedup, HullCfg, HullError, HullFinder};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
    pub use crate::geom2::Point;
    pub use crate::hull::{
        contains, dedup, find_hull, find_hull_with, is_counter_clockwise, polygon_area,
        signed_area, Dedup, HullCfg, HullError, HullFinder,
    };
    pub use nalgebra::Vector2 as Vec2;
}
