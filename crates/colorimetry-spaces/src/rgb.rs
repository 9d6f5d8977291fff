//! Linear device RGB, the hub of the conversion graph.

use crate::algebra::{cartesian_ops, impl_color_space, impl_display};
use crate::convert::RgbContext;
use crate::{Hex, Hsl, HslStd, Hsv, HsvStd, Lms, Oklab, Rgb255, Xyz};

/// Linear RGB in some working space, nominally [0, 1] per channel.
///
/// Which working space is decided by the [`RgbContext`] passed to the XYZ
/// family of conversions; the hue-based and 8-bit conversions do not depend
/// on it.
///
/// # Example
///
/// ```rust
/// use colorimetry_spaces::prelude::*;
///
/// let red = Rgb::new(1.0, 0.0, 0.0);
/// assert_eq!(red.to_rgb255(), Rgb255::new(255, 0, 0));
/// assert_eq!(red.to_hex().to_string(), "#FF0000");
/// assert_eq!(red.to_hsv(), Hsv::new(0.0, 1.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    values: [f64; 3],
}

impl_color_space!(Rgb, f64, ::colorimetry_core::SpaceKind::Rgb);
cartesian_ops!(Rgb);
impl_display!(Rgb);

impl Rgb {
    /// Creates a value from its channels.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { values: [r, g, b] }
    }

    /// Red.
    #[inline]
    pub const fn r(&self) -> f64 {
        self.values[0]
    }

    /// Green.
    #[inline]
    pub const fn g(&self) -> f64 {
        self.values[1]
    }

    /// Blue.
    #[inline]
    pub const fn b(&self) -> f64 {
        self.values[2]
    }

    /// Channels clipped to [0, 1].
    #[inline]
    pub fn clamp01(self) -> Self {
        Self { values: self.values.map(|v| v.clamp(0.0, 1.0)) }
    }

    /// Largest channel.
    #[inline]
    pub(crate) fn max_channel(&self) -> f64 {
        self.values[0].max(self.values[1]).max(self.values[2])
    }

    /// Smallest channel.
    #[inline]
    pub(crate) fn min_channel(&self) -> f64 {
        self.values[0].min(self.values[1]).min(self.values[2])
    }

    /// To CIE XYZ through the context's working-space matrix.
    #[inline]
    pub fn to_xyz(self, ctx: &RgbContext) -> Xyz {
        ctx.rgb_to_xyz(self)
    }

    /// To LMS, through XYZ.
    #[inline]
    pub fn to_lms(self, ctx: &RgbContext) -> Lms {
        self.to_xyz(ctx).to_lms()
    }

    /// To OKLAB, through XYZ.
    #[inline]
    pub fn to_oklab(self, ctx: &RgbContext) -> Oklab {
        self.to_xyz(ctx).to_oklab()
    }

    /// To HSL, closed-form derivation.
    #[inline]
    pub fn to_hsl(self) -> Hsl {
        Hsl::from_rgb(self)
    }

    /// To HSL, library-equivalent derivation.
    #[inline]
    pub fn to_hsl_std(self) -> HslStd {
        HslStd::from_rgb(self)
    }

    /// To HSV, closed-form derivation.
    #[inline]
    pub fn to_hsv(self) -> Hsv {
        Hsv::from_rgb(self)
    }

    /// To HSV, library-equivalent derivation.
    #[inline]
    pub fn to_hsv_std(self) -> HsvStd {
        HsvStd::from_rgb(self)
    }

    /// To 8-bit RGB (clip, scale, round).
    #[inline]
    pub fn to_rgb255(self) -> Rgb255 {
        Rgb255::from_rgb(self)
    }

    /// To hex text, through RGB255.
    #[inline]
    pub fn to_hex(self) -> Hex {
        self.to_rgb255().to_hex()
    }
}

impl From<[f64; 3]> for Rgb {
    fn from(values: [f64; 3]) -> Self {
        Self { values }
    }
}
