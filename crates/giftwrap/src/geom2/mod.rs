//! 2D point type and vector helpers used by the hull search.
//!
//! Purpose
//! - `Point`: immutable value with exact-equality identity and a (y, x)
//!   lexicographic ordering that picks the hull anchor.
//! - Helpers (`cross`, `cosine`, `orient`, `same_ray`) over
//!   `nalgebra::Vector2<f64>`; plain floating-point, no robust predicates.
//! - `rand`: reproducible point clouds for tests, benches, and the CLI.

pub mod rand;
mod types;
mod util;

pub use types::Point;
pub use util::{cosine, cross, distance, orient, same_ray};

#[cfg(test)]
mod tests;
