// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use lumen_math::MathError;
use thiserror::Error;

/// Precondition and invariant violations reported by the checked geometry
/// entry points (`try_*` and [`crate::Validate`]).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeomError {
    /// `expand`/`shrink` was given a negative amount.
    #[error("expand/shrink delta must be non-negative")]
    NegativeDelta,
    /// Corner index past the last corner of the box.
    #[error("corner index {index} out of range (box has {count} corners)")]
    CornerOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of corners (4 in 2D, 8 in 3D).
        count: usize,
    },
    /// `pmin > pmax` on an axis of a box that is not the empty box.
    #[error("bounds are inverted on axis {axis}")]
    DegenerateBounds {
        /// First offending axis.
        axis: usize,
    },
    /// Cone aperture cosine outside `[-1, 1]` for a non-empty cone.
    #[error("cone cos_theta {cos_theta} is outside [-1, 1]")]
    InvalidConeAngle {
        /// Offending value, widened to `f64`.
        cos_theta: f64,
    },
    /// A vector inside the value failed its own validation.
    #[error(transparent)]
    Math(#[from] MathError),
}
