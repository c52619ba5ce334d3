// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

use lumen_math::{rotate_about_axis, Compensated, Frame, Naive, Vec3};

fn unit_vec3() -> impl Strategy<Value = Vec3<f64>> {
    prop::array::uniform3(-1.0_f64..1.0)
        .prop_filter("not near zero", |a| a[0] * a[0] + a[1] * a[1] + a[2] * a[2] > 1.0e-4)
        .prop_map(|a| Vec3::from(a).normalize())
}

#[test]
fn default_cross_follows_build_feature() {
    let a = Vec3::new(1.0_f32 + f32::EPSILON, 1.0, 0.0);
    let b = Vec3::new(1.0_f32, 1.0 - f32::EPSILON / 2.0, 0.0);
    #[cfg(feature = "minimize-fp-error")]
    assert_eq!(a.cross(&b), a.cross_with::<Compensated>(&b));
    #[cfg(not(feature = "minimize-fp-error"))]
    assert_eq!(a.cross(&b), a.cross_with::<Naive>(&b));
    assert_ne!(a.cross_with::<Compensated>(&b), a.cross_with::<Naive>(&b));
}

#[test]
fn scalar_on_the_left_scales() {
    let v = Vec3::new(1.0_f32, -2.0, 0.5);
    assert_eq!((2.0 * v).to_array(), [2.0, -4.0, 1.0]);
    assert_eq!((3_i32 * Vec3::new(1, 2, 3)).to_array(), [3, 6, 9]);
}

#[test]
fn proptest_seed_pinned_frames_are_orthonormal() {
    // Fixed seed so a failing direction reproduces on every machine.
    const SEED_BYTES: [u8; 32] = [
        0x1f, 0x2e, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0,
    ];
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    let mut runner = TestRunner::new_with_rng(PropConfig::default(), rng);

    runner
        .run(&unit_vec3(), |z| {
            let f = Frame::from_z(z);
            prop_assert!(f.x.dot(&f.y).abs() < 1.0e-12);
            prop_assert!(f.y.dot(&f.z).abs() < 1.0e-12);
            prop_assert!(f.z.dot(&f.x).abs() < 1.0e-12);
            prop_assert!((f.x.length() - 1.0).abs() < 1.0e-12);
            prop_assert!((f.y.length() - 1.0).abs() < 1.0e-12);
            let v = Vec3::new(0.5, -0.25, 2.0);
            prop_assert!(f.to_world(&f.to_local(&v)).approx_eq(&v, 1.0e-12));
            Ok(())
        })
        .unwrap_or_else(|e| panic!("{e}"));
}

proptest! {
    #[test]
    fn rotation_preserves_length_and_axis_component(
        v in unit_vec3(),
        axis in unit_vec3(),
        theta in -3.0_f64..3.0,
    ) {
        let r = rotate_about_axis(&v, &axis, theta);
        prop_assert!((r.length() - 1.0).abs() < 1.0e-12);
        prop_assert!((r.dot(&axis) - v.dot(&axis)).abs() < 1.0e-12);
    }

    #[test]
    fn cross_is_perpendicular(a in unit_vec3(), b in unit_vec3()) {
        let c = a.cross(&b);
        prop_assert!(c.dot(&a).abs() < 1.0e-12);
        prop_assert!(c.dot(&b).abs() < 1.0e-12);
    }
}
