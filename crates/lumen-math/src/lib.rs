// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![cfg_attr(not(test), no_std)]
#![doc = r"Numeric core for Lumen.

This crate provides:
- Scalar capability traits (`Scalar`, `Float`) over `f32`, `f64`, `i32`, `i64`.
- Error-free transformations and compensated inner products (`eft`).
- Cross-product strategies selected at build time (`robust`).
- Small fixed-size vectors and points (`Vec2`, `Vec3`).
- Orthonormal frames and axis rotation (`frame`).

Design notes:
- `no_std`: every transcendental goes through `Float`, which is backed by the
  pure-Rust `libm` crate. The same code runs on a host thread or a target
  without a platform math library.
- Invariants are `debug_assert!`ed on the fast path; the `try_*` constructors
  and `validate` methods report them as [`MathError`] in every build.
"]

pub mod eft;
mod error;
pub mod frame;
pub mod robust;
mod scalar;
pub mod trig;
mod vec2;
mod vec3;

pub use eft::{
    difference_of_products, inner_product, inner_product_value, sum_of_products, two_product,
    two_sum, CompensatedFloat,
};
pub use error::MathError;
pub use frame::{coordinate_system, rotate_about_axis, Frame};
pub use robust::{Compensated, CrossProduct, DefaultCross, Naive};
pub use scalar::{Float, Scalar};
pub use vec2::{Point2, Vec2};
pub use vec3::{Point3, Vec3};

/// Default absolute tolerance for approximate comparisons.
pub const EPSILON: f32 = 1e-5;
