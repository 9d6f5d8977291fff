//! Tag for the closed set of value spaces.
//!
//! Every concrete color value type in `colorimetry-spaces` carries one
//! [`SpaceKind`]. Runtime dispatch (mixed-kind arithmetic, multi-hop
//! conversion) is decided on this tag alone.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Which algebra a space follows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Geometry {
    /// Elementwise vector arithmetic.
    Cartesian,
    /// (radius, angle, height) arithmetic through a Cartesian embedding.
    Cylindrical,
    /// No arithmetic (textual encodings).
    Opaque,
}

/// A color value space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpaceKind {
    /// Linear device RGB, nominally [0, 1].
    Rgb,
    /// CIE 1931 XYZ tristimulus.
    Xyz,
    /// Cone response.
    Lms,
    /// OKLAB perceptual space.
    Oklab,
    /// Hue/saturation/lightness.
    Hsl,
    /// Hue/saturation/lightness, library-equivalent derivation.
    HslStd,
    /// Hue/saturation/value.
    Hsv,
    /// Hue/saturation/value, library-equivalent derivation.
    HsvStd,
    /// Quantized 8-bit RGB.
    Rgb255,
    /// `#RRGGBB` text.
    Hex,
}

impl SpaceKind {
    /// Every kind.
    pub const ALL: [SpaceKind; 10] = [
        Self::Rgb,
        Self::Xyz,
        Self::Lms,
        Self::Oklab,
        Self::Hsl,
        Self::HslStd,
        Self::Hsv,
        Self::HsvStd,
        Self::Rgb255,
        Self::Hex,
    ];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Xyz => "XYZ",
            Self::Lms => "LMS",
            Self::Oklab => "OKLAB",
            Self::Hsl => "HSL",
            Self::HslStd => "HSLstd",
            Self::Hsv => "HSV",
            Self::HsvStd => "HSVstd",
            Self::Rgb255 => "RGB255",
            Self::Hex => "HEX",
        }
    }

    /// Algebra the space follows.
    pub const fn geometry(self) -> Geometry {
        match self {
            Self::Rgb | Self::Xyz | Self::Lms | Self::Oklab | Self::Rgb255 => Geometry::Cartesian,
            Self::Hsl | Self::HslStd | Self::Hsv | Self::HsvStd => Geometry::Cylindrical,
            Self::Hex => Geometry::Opaque,
        }
    }

    /// True for the spaces reached from RGB through XYZ.
    pub const fn is_tristimulus(self) -> bool {
        matches!(self, Self::Xyz | Self::Lms | Self::Oklab)
    }
}

impl fmt::Display for SpaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for SpaceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(&key))
            .ok_or_else(|| CoreError::UnknownSpaceKind { name: s.trim().to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!("rgb".parse::<SpaceKind>().unwrap(), SpaceKind::Rgb);
        assert_eq!("OKLAB".parse::<SpaceKind>().unwrap(), SpaceKind::Oklab);
        assert_eq!("hsl-std".parse::<SpaceKind>().unwrap(), SpaceKind::HslStd);
        assert_eq!("rgb_255".parse::<SpaceKind>().unwrap(), SpaceKind::Rgb255);
        assert!("lab".parse::<SpaceKind>().is_err());
    }

    #[test]
    fn test_kind_roundtrip() {
        for kind in SpaceKind::ALL {
            assert_eq!(kind.name().parse::<SpaceKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_geometry() {
        assert_eq!(SpaceKind::Rgb255.geometry(), Geometry::Cartesian);
        assert_eq!(SpaceKind::HsvStd.geometry(), Geometry::Cylindrical);
        assert_eq!(SpaceKind::Hex.geometry(), Geometry::Opaque);
        assert!(SpaceKind::Lms.is_tristimulus());
        assert!(!SpaceKind::Rgb.is_tristimulus());
    }
}
