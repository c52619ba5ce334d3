// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Invariant violations detected at a math construction boundary.
///
/// The fast constructors only `debug_assert!` these; the fallible
/// constructors and `validate` passes report them in every build.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// A vector or point component is NaN.
    #[error("component {index} is NaN")]
    NanComponent {
        /// Zero-based component index.
        index: usize,
    },
    /// A direction expected to be unit length is not.
    #[error("expected a unit vector, squared length is {length_squared}")]
    NotUnitLength {
        /// Observed squared length, widened to `f64`.
        length_squared: f64,
    },
}
