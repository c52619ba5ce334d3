// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Release-mode invariant checks.
//!
//! The fast constructors only `debug_assert!` their preconditions. This pass
//! re-checks a value's invariants in any build and names the first one that
//! fails, so test suites and debug tooling can audit values that came from
//! the fast path.

use lumen_math::{Float, Scalar};

use crate::bounds::{Bounds2, Bounds3};
use crate::cone::DirectionCone;
use crate::error::GeomError;

/// Unit-length tolerance on the squared axis length of a cone.
const UNIT_TOLERANCE: f32 = 1e-4;

/// A value whose invariants can be checked after construction.
pub trait Validate {
    /// Returns the first violated invariant, if any.
    fn validate(&self) -> Result<(), GeomError>;
}

impl<T: Scalar> Validate for Bounds3<T> {
    fn validate(&self) -> Result<(), GeomError> {
        self.pmin().validate()?;
        self.pmax().validate()?;
        if self.is_empty_sentinel() {
            return Ok(());
        }
        match (0..3).find(|&i| self.pmin()[i] > self.pmax()[i]) {
            Some(axis) => {
                tracing::debug!(axis, "Bounds3 failed validation: inverted axis");
                Err(GeomError::DegenerateBounds { axis })
            }
            None => Ok(()),
        }
    }
}

impl<T: Scalar> Validate for Bounds2<T> {
    fn validate(&self) -> Result<(), GeomError> {
        self.pmin().validate()?;
        self.pmax().validate()?;
        if self.is_empty_sentinel() {
            return Ok(());
        }
        match (0..2).find(|&i| self.pmin()[i] > self.pmax()[i]) {
            Some(axis) => {
                tracing::debug!(axis, "Bounds2 failed validation: inverted axis");
                Err(GeomError::DegenerateBounds { axis })
            }
            None => Ok(()),
        }
    }
}

impl<T: Float> Validate for DirectionCone<T> {
    fn validate(&self) -> Result<(), GeomError> {
        let Self::Cone { axis, cos_theta } = self else {
            return Ok(());
        };
        if !(*cos_theta >= -T::one() && *cos_theta <= T::one()) {
            tracing::debug!(cos_theta = cos_theta.to_f64(), "DirectionCone failed validation");
            return Err(GeomError::InvalidConeAngle { cos_theta: cos_theta.to_f64() });
        }
        axis.validate_unit(T::from_f32(UNIT_TOLERANCE))?;
        Ok(())
    }
}
