//! Hull configuration.
//!
//! Policy
//! - Defaults reproduce exact point identity. Tolerant identity is opt-in and
//!   only affects the dedup pass; the hull scan itself never uses an epsilon.

/// Point identity used by the dedup pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Dedup {
    /// Bitwise-equal coordinates (`-0.0` and `0.0` are the same point).
    #[default]
    Exact,
    /// Points within Euclidean distance `eps` of an already kept point are
    /// dropped. Negative or NaN `eps` behaves like `Exact`.
    Within { eps: f64 },
}

/// Hull search configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HullCfg {
    pub dedup: Dedup,
}

impl HullCfg {
    #[inline]
    pub fn with_eps(eps: f64) -> Self {
        Self {
            dedup: Dedup::Within { eps },
        }
    }
}
