//! Caller-side deduplication pass run before `HullFinder::new`.
//!
//! Duplicates break the angle search (a zero-length candidate has no
//! direction), so they must go before the scan. Output is sorted by the (y, x)
//! point ordering in both modes, which also makes `Within` independent of input
//! order.

use std::collections::HashSet;

use super::cfg::Dedup;
use crate::geom2::{distance, Point};

/// Remove duplicate points under `policy`; result sorted by (y, x).
pub fn dedup(points: &[Point], policy: Dedup) -> Vec<Point> {
    match policy {
        Dedup::Exact => {
            let mut seen: HashSet<Point> = HashSet::with_capacity(points.len());
            let mut out: Vec<Point> = points.iter().copied().filter(|p| seen.insert(*p)).collect();
            out.sort_by(Point::cmp_yx);
            out
        }
        Dedup::Within { eps } => {
            // f64::max drops NaN, so eps is a non-negative number here.
            let eps = eps.max(0.0);
            let mut sorted = points.to_vec();
            sorted.sort_by(Point::cmp_yx);
            let mut kept: Vec<Point> = Vec::with_capacity(sorted.len());
            for p in sorted {
                // kept is y-sorted: only the tail within eps in y can collide.
                let clash = kept
                    .iter()
                    .rev()
                    .take_while(|q| p.y - q.y <= eps)
                    .any(|q| distance(*q, p) <= eps);
                if !clash {
                    kept.push(p);
                }
            }
            kept
        }
    }
}
