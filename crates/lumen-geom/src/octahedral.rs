// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};
use lumen_math::trig::clamp;
use lumen_math::{Float, Vec3};

const QUANT_MAX: f32 = 65535.0;

/// A unit direction packed into two 16-bit integers.
///
/// The sphere is projected onto the octahedron `|x| + |y| + |z| = 1`, whose
/// lower half is folded over the upper half's diamond to fill the square
/// `[-1, 1]²`. Each axis of that square is quantized uniformly to 16 bits,
/// giving a worst-case angular error well under a thousandth of a radian.
///
/// `#[repr(C)]` and [`Pod`] so encoded normals can be uploaded as raw bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct OctahedralVec {
    x: u16,
    y: u16,
}

impl OctahedralVec {
    /// Encodes a unit vector.
    pub fn encode<T: Float>(v: &Vec3<T>) -> Self {
        debug_assert!(
            (v.length_squared() - T::one()).abs() < T::from_f32(1e-4),
            "octahedral encoding expects a unit vector: {v:?}"
        );
        let p = *v / v.l1_norm();
        if p.z() >= T::zero() {
            Self { x: quantize(p.x()), y: quantize(p.y()) }
        } else {
            Self {
                x: quantize((T::one() - p.y().abs()) * sign(p.x())),
                y: quantize((T::one() - p.x().abs()) * sign(p.y())),
            }
        }
    }

    /// Decodes to a unit vector.
    pub fn decode<T: Float>(&self) -> Vec3<T> {
        let mut x = dequantize::<T>(self.x);
        let mut y = dequantize::<T>(self.y);
        let z = T::one() - x.abs() - y.abs();
        if z < T::zero() {
            let xo = x;
            x = (T::one() - y.abs()) * sign(xo);
            y = (T::one() - xo.abs()) * sign(y);
        }
        Vec3::new(x, y, z).normalize()
    }

    /// The two quantized coordinates, for storage.
    pub fn raw(&self) -> [u16; 2] {
        [self.x, self.y]
    }

    /// Rebuilds an encoded vector from [`OctahedralVec::raw`] output.
    pub fn from_raw(raw: [u16; 2]) -> Self {
        Self { x: raw[0], y: raw[1] }
    }
}

#[inline]
fn sign<T: Float>(f: T) -> T {
    T::one().copysign(f)
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn quantize<T: Float>(f: T) -> u16 {
    let unit = clamp((f + T::one()) / T::two(), T::zero(), T::one());
    // In [0, 65535] after the clamp and round.
    (unit * T::from_f32(QUANT_MAX)).round().to_f64() as u16
}

#[inline]
fn dequantize<T: Float>(q: u16) -> T {
    -T::one() + T::two() * (T::from_f32(f32::from(q)) / T::from_f32(QUANT_MAX))
}
