// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Orthonormal frames and axis rotation.

use crate::scalar::Float;
use crate::vec3::Vec3;
use crate::EPSILON;

/// Builds two unit vectors that complete `v` to a right-handed orthonormal
/// basis.
///
/// `v` must be unit length. The construction is branch-free apart from the
/// sign pick, so it stays stable as `v.z` approaches `-1`.
pub fn coordinate_system<T: Float>(v: &Vec3<T>) -> (Vec3<T>, Vec3<T>) {
    let (x, y, z) = (v.x(), v.y(), v.z());
    let sign = T::one().copysign(z);
    let a = -T::one() / (sign + z);
    let b = x * y * a;
    (
        Vec3::new(T::one() + sign * x * x * a, sign * b, -sign * x),
        Vec3::new(b, sign + y * y * a, -y),
    )
}

/// Rotates `v` about `axis` by `theta` radians (Rodrigues' formula).
///
/// `axis` need not be unit length. An axis of length ≤ `EPSILON` leaves `v`
/// unchanged.
pub fn rotate_about_axis<T: Float>(v: &Vec3<T>, axis: &Vec3<T>, theta: T) -> Vec3<T> {
    let len_sq = axis.length_squared();
    let eps = T::from_f32(EPSILON);
    if len_sq <= eps * eps {
        return *v;
    }
    let k = *axis / len_sq.sqrt();
    let (sin_t, cos_t) = (theta.sin(), theta.cos());
    *v * cos_t + k.cross(v) * sin_t + k * (k.dot(v) * (T::one() - cos_t))
}

/// An orthonormal basis `{x, y, z}`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame<T> {
    /// First basis vector.
    pub x: Vec3<T>,
    /// Second basis vector.
    pub y: Vec3<T>,
    /// Third basis vector.
    pub z: Vec3<T>,
}

impl<T: Float> Frame<T> {
    /// Frame from three basis vectors, which must be orthonormal.
    pub fn new(x: Vec3<T>, y: Vec3<T>, z: Vec3<T>) -> Self {
        debug_assert!(
            (x.dot(&y).abs() < T::from_f32(1e-4))
                && (y.dot(&z).abs() < T::from_f32(1e-4))
                && (z.dot(&x).abs() < T::from_f32(1e-4)),
            "frame axes are not orthogonal"
        );
        Self { x, y, z }
    }

    /// Frame with `x` and `z` given; `y = z × x`.
    pub fn from_xz(x: Vec3<T>, z: Vec3<T>) -> Self {
        Self::new(x, z.cross(&x), z)
    }

    /// Frame with `x` and `y` given; `z = x × y`.
    pub fn from_xy(x: Vec3<T>, y: Vec3<T>) -> Self {
        Self::new(x, y, x.cross(&y))
    }

    /// Frame with `y` and `z` given; `x = y × z`.
    pub fn from_yz(y: Vec3<T>, z: Vec3<T>) -> Self {
        Self::new(y.cross(&z), y, z)
    }

    /// Frame whose `z` axis is `z`.
    pub fn from_z(z: Vec3<T>) -> Self {
        let (x, y) = coordinate_system(&z);
        Self::new(x, y, z)
    }

    /// Frame whose `x` axis is `x`.
    pub fn from_x(x: Vec3<T>) -> Self {
        let (y, z) = coordinate_system(&x);
        Self::new(x, y, z)
    }

    /// Frame whose `y` axis is `y`.
    pub fn from_y(y: Vec3<T>) -> Self {
        let (z, x) = coordinate_system(&y);
        Self::new(x, y, z)
    }

    /// Expresses world-space `v` in this frame.
    pub fn to_local(&self, v: &Vec3<T>) -> Vec3<T> {
        Vec3::new(v.dot(&self.x), v.dot(&self.y), v.dot(&self.z))
    }

    /// Expresses frame-local `v` in world space.
    pub fn to_world(&self, v: &Vec3<T>) -> Vec3<T> {
        self.x * v.x() + self.y * v.y() + self.z * v.z()
    }
}
