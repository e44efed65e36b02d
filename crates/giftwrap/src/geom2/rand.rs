//! Random planar point clouds (box, disk, integer grid) with replay tokens.
//!
//! Purpose
//! - Deterministic inputs for hull tests, benches, and the CLI `gen` command.
//! - `CloudShape::Grid` snaps to an integer lattice so collinear runs and
//!   duplicate points show up often, which is what stresses the collinear
//!   policy and the dedup pass.
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::types::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sampling region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudShape {
    /// Uniform in `[-h, h]²`.
    Box,
    /// Uniform in the disk of radius `h`.
    Disk,
    /// Uniform over integer lattice points in `[-h, h]²` (`h` rounded down, min 1).
    Grid,
}

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub shape: CloudShape,
    /// Half side length (box, grid) or radius (disk).
    pub half_extent: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 64,
            shape: CloudShape::Box,
            half_extent: 1.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points. Duplicates are possible (always likely for `Grid`).
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let h = if cfg.half_extent.is_finite() && cfg.half_extent > 0.0 {
        cfg.half_extent
    } else {
        1.0
    };
    (0..cfg.count)
        .map(|_| match cfg.shape {
            CloudShape::Box => Point::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h)),
            CloudShape::Disk => {
                // sqrt for uniform area density
                let r = h * rng.gen::<f64>().sqrt();
                let theta = rng.gen::<f64>() * std::f64::consts::TAU;
                Point::new(r * theta.cos(), r * theta.sin())
            }
            CloudShape::Grid => {
                let k = (h.floor() as i64).max(1);
                Point::new(rng.gen_range(-k..=k) as f64, rng.gen_range(-k..=k) as f64)
            }
        })
        .collect()
}
