//! LMS cone response.

use colorimetry_math::Mat3;

use crate::algebra::{cartesian_ops, impl_color_space, impl_display, Cartesian};
use crate::convert::RgbContext;
use crate::{Rgb, Xyz};

/// XYZ to LMS, Hunt-Pointer-Estevez normalised to illuminant E.
pub const XYZ_TO_LMS: Mat3 = Mat3::from_rows([
    [0.38971, 0.68898, -0.07868],
    [-0.22981, 1.18640, 0.04641],
    [0.0, 0.0, 1.0],
]);

/// Inverse of [`XYZ_TO_LMS`].
pub const LMS_TO_XYZ: Mat3 = Mat3::from_rows([
    [1.9114321302156216, -1.1100290872184415, 0.201907929943173],
    [0.3702513636588436, 0.6278693656998735, -8.039969453316771e-06],
    [0.0, 0.0, 1.0],
]);

/// Long/medium/short cone response.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lms {
    values: [f64; 3],
}

impl_color_space!(Lms, f64, ::colorimetry_core::SpaceKind::Lms);
cartesian_ops!(Lms);
impl_display!(Lms);

impl Lms {
    /// Creates a value from its cone responses.
    #[inline]
    pub const fn new(l: f64, m: f64, s: f64) -> Self {
        Self { values: [l, m, s] }
    }

    /// Long.
    #[inline]
    pub const fn l(&self) -> f64 {
        self.values[0]
    }

    /// Medium.
    #[inline]
    pub const fn m(&self) -> f64 {
        self.values[1]
    }

    /// Short.
    #[inline]
    pub const fn s(&self) -> f64 {
        self.values[2]
    }

    /// From XYZ.
    #[inline]
    pub fn from_xyz(xyz: Xyz) -> Self {
        Self::from_vec3(XYZ_TO_LMS * xyz.to_vec3())
    }

    /// To XYZ.
    #[inline]
    pub fn to_xyz(self) -> Xyz {
        Xyz::from_vec3(LMS_TO_XYZ * self.to_vec3())
    }

    /// To linear RGB, through XYZ.
    #[inline]
    pub fn to_rgb(self, ctx: &RgbContext) -> Rgb {
        self.to_xyz().to_rgb(ctx)
    }
}
