//! CIE 1931 XYZ tristimulus values.

use crate::algebra::{cartesian_ops, impl_color_space, impl_display};
use crate::convert::RgbContext;
use crate::{Lms, Oklab, Rgb};

/// CIE XYZ, Y normalised so the reference white has Y = 1.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    values: [f64; 3],
}

impl_color_space!(Xyz, f64, ::colorimetry_core::SpaceKind::Xyz);
cartesian_ops!(Xyz);
impl_display!(Xyz);

impl Xyz {
    /// Creates a value from its tristimulus components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { values: [x, y, z] }
    }

    /// X.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.values[0]
    }

    /// Y (luminance).
    #[inline]
    pub const fn y(&self) -> f64 {
        self.values[1]
    }

    /// Z.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.values[2]
    }

    /// To linear RGB through the inverse working-space matrix.
    #[inline]
    pub fn to_rgb(self, ctx: &RgbContext) -> Rgb {
        ctx.xyz_to_rgb(self)
    }

    /// To LMS cone response.
    #[inline]
    pub fn to_lms(self) -> Lms {
        Lms::from_xyz(self)
    }

    /// To OKLAB.
    #[inline]
    pub fn to_oklab(self) -> Oklab {
        Oklab::from_xyz(self)
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(values: [f64; 3]) -> Self {
        Self { values }
    }
}
