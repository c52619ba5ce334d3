// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use lumen_math::trig::{clamp_acos, safe_sqrt};
use lumen_math::{rotate_about_axis, Float, Point3, Vec3};

use crate::bounds::Bounds3;
use crate::spherical::angle_between;

/// A set of unit directions within a half-angle of an axis.
///
/// The two degenerate sets are their own variants, so an empty cone can
/// never be mistaken for a cone with some aperture.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirectionCone<T> {
    /// Bounds no direction. Identity for [`DirectionCone::merge`].
    #[default]
    Empty,
    /// Bounds every direction.
    EntireSphere,
    /// Directions `w` with `axis · w >= cos_theta`.
    Cone {
        /// Unit axis.
        axis: Vec3<T>,
        /// Cosine of the half-angle, in `(-1, 1]`.
        cos_theta: T,
    },
}

impl<T: Float> DirectionCone<T> {
    /// Cone around `axis` (normalized here) with half-angle cosine
    /// `cos_theta`.
    ///
    /// `cos_theta == +∞` yields [`DirectionCone::Empty`] and
    /// `cos_theta == -1` yields [`DirectionCone::EntireSphere`], matching the
    /// values [`DirectionCone::cos_theta`] reports for them.
    pub fn new(axis: Vec3<T>, cos_theta: T) -> Self {
        if cos_theta == T::INFINITY {
            return Self::Empty;
        }
        debug_assert!(
            cos_theta >= -T::one() && cos_theta <= T::one(),
            "cone cos_theta out of range: {cos_theta:?}"
        );
        if cos_theta == -T::one() {
            return Self::EntireSphere;
        }
        Self::Cone { axis: axis.normalize(), cos_theta }
    }

    /// Zero-aperture cone containing only `direction`.
    pub fn from_direction(direction: Vec3<T>) -> Self {
        Self::new(direction, T::one())
    }

    /// The empty cone.
    pub fn empty() -> Self {
        Self::Empty
    }

    /// The cone covering the whole sphere.
    pub fn entire_sphere() -> Self {
        Self::EntireSphere
    }

    /// Returns `true` for [`DirectionCone::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` for [`DirectionCone::EntireSphere`].
    pub fn is_entire_sphere(&self) -> bool {
        matches!(self, Self::EntireSphere)
    }

    /// Cone axis; zero for the two sentinel variants.
    pub fn axis(&self) -> Vec3<T> {
        match self {
            Self::Cone { axis, .. } => *axis,
            Self::Empty | Self::EntireSphere => Vec3::zero(),
        }
    }

    /// Half-angle cosine; `+∞` for the empty cone and `-1` for the entire
    /// sphere.
    pub fn cos_theta(&self) -> T {
        match self {
            Self::Empty => T::INFINITY,
            Self::EntireSphere => -T::one(),
            Self::Cone { cos_theta, .. } => *cos_theta,
        }
    }

    /// Returns `true` if unit direction `v` lies in the cone.
    pub fn contains(&self, v: &Vec3<T>) -> bool {
        match self {
            Self::Empty => false,
            Self::EntireSphere => true,
            Self::Cone { axis, cos_theta } => axis.dot(v) >= *cos_theta,
        }
    }

    /// Cone of directions from `p` toward any point of `bounds`.
    ///
    /// Bounds the box by its bounding sphere. From inside that sphere, or
    /// from its centre when the sphere is a point, every direction is
    /// possible.
    pub fn bound_subtended_directions(bounds: &Bounds3<T>, p: &Point3<T>) -> Self {
        let (center, radius) = bounds.bounding_sphere();
        let dist_sq = p.distance_squared(&center);
        let r_sq = radius * radius;
        if dist_sq < r_sq || dist_sq == T::zero() {
            return Self::EntireSphere;
        }
        let w = (center - *p).normalize();
        Self::new(w, safe_sqrt(T::one() - r_sq / dist_sq))
    }

    /// Smallest cone containing both cones.
    ///
    /// When one cone already holds the other it is returned unchanged.
    /// Otherwise the merged axis is `a`'s axis rotated toward `b`'s about
    /// their common normal.
    pub fn merge(a: &Self, b: &Self) -> Self {
        let ((axis_a, cos_a), (axis_b, cos_b)) = match (a, b) {
            (Self::Empty, _) => return *b,
            (_, Self::Empty) => return *a,
            (Self::EntireSphere, _) | (_, Self::EntireSphere) => return Self::EntireSphere,
            (
                Self::Cone { axis: axis_a, cos_theta: cos_a },
                Self::Cone { axis: axis_b, cos_theta: cos_b },
            ) => ((*axis_a, *cos_a), (*axis_b, *cos_b)),
        };

        let theta_a = clamp_acos(cos_a);
        let theta_b = clamp_acos(cos_b);
        let theta_d = angle_between(&axis_a, &axis_b);

        if (theta_d + theta_b).min_of(T::PI) <= theta_a {
            return *a;
        }
        if (theta_d + theta_a).min_of(T::PI) <= theta_b {
            return *b;
        }

        let theta_o = (theta_a + theta_b + theta_d) / T::two();
        if theta_o >= T::PI {
            return Self::EntireSphere;
        }

        let theta_r = theta_o - theta_a;
        let wr = axis_a.cross(&axis_b);
        // Nearly parallel or antipodal axes give a tiny but exact normal.
        // Rescale before normalizing so its direction survives underflow.
        let scale = wr.x().abs().max_of(wr.y().abs()).max_of(wr.z().abs());
        if scale == T::zero() {
            return Self::EntireSphere;
        }
        let normal = (wr / scale).normalize();
        let w = rotate_about_axis(&axis_a, &normal, theta_r);
        Self::new(w, theta_o.cos())
    }

    /// Same variant, and for two cones axes and cosines within `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        match (self, other) {
            (Self::Empty, Self::Empty) | (Self::EntireSphere, Self::EntireSphere) => true,
            (
                Self::Cone { axis: a, cos_theta: ca },
                Self::Cone { axis: b, cos_theta: cb },
            ) => a.approx_eq(b, epsilon) && (*ca - *cb).abs() < epsilon,
            _ => false,
        }
    }
}
