//! The conversion engine.
//!
//! Two pieces:
//!
//! - [`RgbContext`]: which working space (and whether D50-adapted) linear
//!   RGB is read in. It carries the derived RGB/XYZ matrix pair, so every
//!   conversion through XYZ is a plain matrix product.
//! - [`Converter`]: reference data plus a default context, converting
//!   [`AnyColor`] values between any two [`SpaceKind`]s.
//!
//! # Routing
//!
//! ```text
//!            LMS     OKLAB
//!              \     /
//!               XYZ                 HSL  HSLstd  HSV  HSVstd
//!                |                    \     |     |    /
//!                +-------------------- RGB ---------+
//!                                       |
//!                                    RGB255 -- HEX
//! ```
//!
//! XYZ, LMS and OKLAB convert among themselves through XYZ. Every other
//! route goes through RGB, except RGB255/HEX which map directly.

use std::sync::Arc;

use colorimetry_core::{Illuminant, RgbSpaceId, SpaceKind};
use colorimetry_data::{ReferenceData, RgbXyzTransform};
use colorimetry_math::{AdaptationMethod, Mat3};
use tracing::trace;

use crate::algebra::Cartesian;
use crate::any::AnyColor;
use crate::error::ColorResult;
use crate::{Hsl, HslStd, Hsv, HsvStd, Lms, Oklab, Rgb, Rgb255, Xyz};

/// Working space for linear RGB.
///
/// # Example
///
/// ```rust
/// use colorimetry_spaces::prelude::*;
///
/// let ctx = RgbContext::builtin().unwrap();
/// let rgb = Rgb::new(0.2, 0.5, 0.8);
/// let back = rgb.to_xyz(&ctx).to_rgb(&ctx);
/// assert!((back.g() - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbContext {
    transform: RgbXyzTransform,
}

impl RgbContext {
    /// Derives the context for `space` from the reference tables.
    ///
    /// Fails with a lookup error for a space missing from the tables and with
    /// a fatal error when its primaries matrix is singular.
    pub fn new(data: &ReferenceData, space: RgbSpaceId, adapt_to_d50: bool) -> ColorResult<Self> {
        let transform = RgbXyzTransform::new(data, space, adapt_to_d50)?;
        Ok(Self { transform })
    }

    /// sRGB, Bradford-adapted to D50, from the built-in tables.
    pub fn builtin() -> ColorResult<Self> {
        Self::new(&ReferenceData::builtin()?, RgbSpaceId::Srgb, true)
    }

    /// Working space.
    #[inline]
    pub fn space(&self) -> RgbSpaceId {
        self.transform.space
    }

    /// Whether XYZ is referenced to D50.
    #[inline]
    pub fn adapt_to_d50(&self) -> bool {
        self.transform.adapt_to_d50
    }

    /// The derived matrix pair.
    #[inline]
    pub fn transform(&self) -> &RgbXyzTransform {
        &self.transform
    }

    pub(crate) fn rgb_to_xyz(&self, rgb: Rgb) -> Xyz {
        Xyz::from_vec3(self.transform.to_xyz(rgb.to_vec3()))
    }

    pub(crate) fn xyz_to_rgb(&self, xyz: Xyz) -> Rgb {
        Rgb::from_vec3(self.transform.to_rgb(xyz.to_vec3()))
    }
}

/// Reference data plus a working-space context.
///
/// Cloning is cheap; the tables are shared.
///
/// # Example
///
/// ```rust
/// use colorimetry_spaces::prelude::*;
///
/// let conv = Converter::builtin().unwrap();
/// let hex: Hex = "#FF0000".parse().unwrap();
/// let hsv = conv.convert(&AnyColor::Hex(hex), SpaceKind::Hsv);
/// assert_eq!(hsv, AnyColor::Hsv(Hsv::new(0.0, 1.0, 1.0)));
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    data: Arc<ReferenceData>,
    ctx: RgbContext,
}

impl Converter {
    /// Builds a converter over `data` for one working space.
    pub fn new(data: ReferenceData, space: RgbSpaceId, adapt_to_d50: bool) -> ColorResult<Self> {
        let ctx = RgbContext::new(&data, space, adapt_to_d50)?;
        Ok(Self { data: Arc::new(data), ctx })
    }

    /// Built-in tables, sRGB adapted to D50.
    pub fn builtin() -> ColorResult<Self> {
        Self::new(ReferenceData::builtin()?, RgbSpaceId::Srgb, true)
    }

    /// Same tables, another working space.
    pub fn with_space(&self, space: RgbSpaceId, adapt_to_d50: bool) -> ColorResult<Self> {
        let ctx = RgbContext::new(&self.data, space, adapt_to_d50)?;
        Ok(Self { data: Arc::clone(&self.data), ctx })
    }

    /// Reference tables.
    #[inline]
    pub fn data(&self) -> &ReferenceData {
        &self.data
    }

    /// Working-space context.
    #[inline]
    pub fn context(&self) -> &RgbContext {
        &self.ctx
    }

    /// Chromatic adaptation matrix between two illuminants.
    pub fn adapt(
        &self,
        src: Illuminant,
        dst: Illuminant,
        method: AdaptationMethod,
    ) -> ColorResult<Mat3> {
        Ok(self.data.adapt(src, dst, method)?)
    }

    /// RGB to XYZ matrix of `space`, relative to its own white.
    pub fn rgb_to_xyz_matrix(&self, space: RgbSpaceId) -> ColorResult<Mat3> {
        Ok(self.data.rgb_to_xyz_matrix(space)?)
    }

    /// Any value to linear RGB in the working space.
    pub fn to_rgb(&self, color: &AnyColor) -> Rgb {
        let ctx = &self.ctx;
        match *color {
            AnyColor::Rgb(c) => c,
            AnyColor::Xyz(c) => c.to_rgb(ctx),
            AnyColor::Lms(c) => c.to_rgb(ctx),
            AnyColor::Oklab(c) => c.to_rgb(ctx),
            AnyColor::Hsl(c) => c.to_rgb(),
            AnyColor::HslStd(c) => c.to_rgb(),
            AnyColor::Hsv(c) => c.to_rgb(),
            AnyColor::HsvStd(c) => c.to_rgb(),
            AnyColor::Rgb255(c) => c.to_rgb(),
            AnyColor::Hex(c) => c.to_rgb(),
        }
    }

    /// Linear RGB in the working space to any kind.
    pub fn from_rgb(&self, rgb: Rgb, kind: SpaceKind) -> AnyColor {
        let ctx = &self.ctx;
        match kind {
            SpaceKind::Rgb => AnyColor::Rgb(rgb),
            SpaceKind::Xyz => AnyColor::Xyz(rgb.to_xyz(ctx)),
            SpaceKind::Lms => AnyColor::Lms(rgb.to_lms(ctx)),
            SpaceKind::Oklab => AnyColor::Oklab(rgb.to_oklab(ctx)),
            SpaceKind::Hsl => AnyColor::Hsl(Hsl::from_rgb(rgb)),
            SpaceKind::HslStd => AnyColor::HslStd(HslStd::from_rgb(rgb)),
            SpaceKind::Hsv => AnyColor::Hsv(Hsv::from_rgb(rgb)),
            SpaceKind::HsvStd => AnyColor::HsvStd(HsvStd::from_rgb(rgb)),
            SpaceKind::Rgb255 => AnyColor::Rgb255(Rgb255::from_rgb(rgb)),
            SpaceKind::Hex => AnyColor::Hex(rgb.to_hex()),
        }
    }

    /// Any value to XYZ.
    pub fn to_xyz(&self, color: &AnyColor) -> Xyz {
        match *color {
            AnyColor::Xyz(c) => c,
            AnyColor::Lms(c) => c.to_xyz(),
            AnyColor::Oklab(c) => c.to_xyz(),
            _ => self.to_rgb(color).to_xyz(&self.ctx),
        }
    }

    /// Converts `color` to `to`.
    ///
    /// Same-kind conversion returns the value unchanged.
    pub fn convert(&self, color: &AnyColor, to: SpaceKind) -> AnyColor {
        let from = color.kind();
        if from == to {
            return *color;
        }
        trace!(%from, %to, "convert");

        match (color, to) {
            (AnyColor::Hex(h), SpaceKind::Rgb255) => AnyColor::Rgb255(h.to_rgb255()),
            (AnyColor::Rgb255(c), SpaceKind::Hex) => AnyColor::Hex(c.to_hex()),
            _ if from.is_tristimulus() && to.is_tristimulus() => {
                let xyz = self.to_xyz(color);
                match to {
                    SpaceKind::Lms => AnyColor::Lms(Lms::from_xyz(xyz)),
                    SpaceKind::Oklab => AnyColor::Oklab(Oklab::from_xyz(xyz)),
                    _ => AnyColor::Xyz(xyz),
                }
            }
            _ => self.from_rgb(self.to_rgb(color), to),
        }
    }

    /// Converts a batch of values of one kind.
    pub fn convert_all<'a>(
        &self,
        colors: impl IntoIterator<Item = &'a AnyColor>,
        to: SpaceKind,
    ) -> Vec<AnyColor> {
        colors.into_iter().map(|c| self.convert(c, to)).collect()
    }
}
