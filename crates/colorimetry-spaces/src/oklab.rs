//! OKLAB perceptual space (Ottosson 2020).
//!
//! ```text
//! lms  = M1 * xyz
//! lms' = cbrt(lms)          (sign-preserving)
//! lab  = M2 * lms'
//! ```
//!
//! and back with the inverse matrices and a cube. `M1` expects XYZ relative
//! to a D65-like white.

use colorimetry_math::{Mat3, Vec3};

use crate::algebra::{cartesian_ops, impl_color_space, impl_display, Cartesian};
use crate::convert::RgbContext;
use crate::{Rgb, Xyz};

/// XYZ to the OKLAB cone-like space.
pub const M1: Mat3 = Mat3::from_rows([
    [0.8189330101, 0.3618667424, -0.1288597137],
    [0.0329845436, 0.9293118715, 0.0361456387],
    [0.0482003018, 0.2643662691, 0.6338517070],
]);

/// Inverse of [`M1`].
pub const M1_INV: Mat3 = Mat3::from_rows([
    [1.2270138511035211, -0.5577999806518222, 0.28125614896646783],
    [-0.04058017842328059, 1.11225686961683, -0.0716766786656012],
    [-0.07638128450570689, -0.4214819784180127, 1.5861632204407947],
]);

/// Compressed cone response to Lab.
pub const M2: Mat3 = Mat3::from_rows([
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
]);

/// Inverse of [`M2`].
pub const M2_INV: Mat3 = Mat3::from_rows([
    [0.9999999984505198, 0.39633779217376786, 0.2158037580607588],
    [1.0000000088817609, -0.10556134232365635, -0.06385417477170591],
    [1.0000000546724108, -0.08948418209496575, -1.2914855378640917],
]);

/// OKLAB: lightness `L` and the opponent axes `a`, `b`.
///
/// # Example
///
/// ```rust
/// use colorimetry_spaces::prelude::*;
///
/// let white = Xyz::new(0.95047, 1.0, 1.08883).to_oklab();
/// assert!((white.l() - 1.0).abs() < 1e-3);
/// assert!(white.a().abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Oklab {
    values: [f64; 3],
}

impl_color_space!(Oklab, f64, ::colorimetry_core::SpaceKind::Oklab);
cartesian_ops!(Oklab);
impl_display!(Oklab);

impl Oklab {
    /// Creates a value from `L`, `a`, `b`.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { values: [l, a, b] }
    }

    /// Perceived lightness.
    #[inline]
    pub const fn l(&self) -> f64 {
        self.values[0]
    }

    /// Green/red axis.
    #[inline]
    pub const fn a(&self) -> f64 {
        self.values[1]
    }

    /// Blue/yellow axis.
    #[inline]
    pub const fn b(&self) -> f64 {
        self.values[2]
    }

    /// From XYZ.
    pub fn from_xyz(xyz: Xyz) -> Self {
        let lms = M1 * xyz.to_vec3();
        // f64::cbrt keeps the sign of negative responses
        let lms_ = lms.map(f64::cbrt);
        Self::from_vec3(M2 * lms_)
    }

    /// To XYZ.
    pub fn to_xyz(self) -> Xyz {
        let lms_: Vec3 = M2_INV * self.to_vec3();
        let lms = lms_.map(|v| v * v * v);
        Xyz::from_vec3(M1_INV * lms)
    }

    /// To linear RGB, through XYZ.
    #[inline]
    pub fn to_rgb(self, ctx: &RgbContext) -> Rgb {
        self.to_xyz().to_rgb(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_inverse_constants() {
        assert!((M1_INV * M1).approx_eq(&Mat3::IDENTITY, 1e-12));
        assert!((M2_INV * M2).approx_eq(&Mat3::IDENTITY, 1e-12));
    }

    #[test]
    fn test_black() {
        assert_eq!(Oklab::from_xyz(Xyz::new(0.0, 0.0, 0.0)), Oklab::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_reference_value() {
        // Published pair: XYZ (1, 0, 0) -> OKLAB (0.450, 1.236, -0.019)
        let lab = Oklab::from_xyz(Xyz::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(lab.l(), 0.450, epsilon = 1e-3);
        assert_abs_diff_eq!(lab.a(), 1.236, epsilon = 1e-3);
        assert_abs_diff_eq!(lab.b(), -0.019, epsilon = 1e-3);
    }

    #[test]
    fn test_negative_components_roundtrip() {
        let xyz = Xyz::new(-0.05, 0.02, 0.4);
        let back = Oklab::from_xyz(xyz).to_xyz();
        assert_abs_diff_eq!(back.x(), -0.05, epsilon = 1e-12);
        assert_abs_diff_eq!(back.y(), 0.02, epsilon = 1e-12);
        assert_abs_diff_eq!(back.z(), 0.4, epsilon = 1e-12);
    }
}
