use std::fmt;

/// Errors surfaced by the hull search.
///
/// The gift-wrapping march is undefined on these inputs; reporting them is a
/// hardening step, the bare algorithm would loop or index out of bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    /// Fewer than 3 distinct points.
    InsufficientPoints { found: usize },
    /// All distinct points lie on one line; the "hull" is a segment.
    DegenerateInput,
    /// Point `index` has a NaN or infinite coordinate.
    NonFinite { index: usize },
    /// The march did not return to the anchor within `steps` vertices.
    NonConvergent { steps: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::InsufficientPoints { found } => write!(
                f,
                "need at least 3 distinct points for a hull, found {}",
                found
            ),
            HullError::DegenerateInput => {
                write!(f, "all points are collinear (hull degenerates to a segment)")
            }
            HullError::NonFinite { index } => {
                write!(f, "point {} has a non-finite coordinate", index)
            }
            HullError::NonConvergent { steps } => write!(
                f,
                "gift wrapping did not close after {} vertices",
                steps
            ),
        }
    }
}

impl std::error::Error for HullError {}
