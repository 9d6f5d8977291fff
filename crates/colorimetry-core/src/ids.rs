//! Reference illuminants and RGB working spaces.
//!
//! These are the keys of the reference tables. The tables themselves (white
//! point tristimulus values, primaries chromaticities) live in
//! `colorimetry-data` and are loaded at runtime; this module only fixes which
//! names are legal.
//!
//! # Usage
//!
//! ```
//! use colorimetry_core::{Illuminant, RgbSpaceId};
//!
//! let d65: Illuminant = "D65".parse().unwrap();
//! assert_eq!(d65, Illuminant::D65);
//!
//! let srgb: RgbSpaceId = "sRGB".parse().unwrap();
//! assert_eq!(srgb.name(), "sRGB");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

// ============================================================================
// Illuminants
// ============================================================================

/// CIE standard illuminant.
///
/// The daylight series (D50..D75), the incandescent/tungsten source A, the
/// historical sources B and C, the equal-energy illuminant E, and three
/// fluorescent sources.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Illuminant {
    /// Incandescent / tungsten, ~2856K.
    A,
    /// Direct noon sunlight (obsolete).
    B,
    /// Average daylight (obsolete), used by NTSC.
    C,
    /// Horizon light, ~5000K. ICC profile connection space.
    D50,
    /// Mid-morning daylight, ~5500K.
    D55,
    /// Noon daylight, ~6500K.
    D65,
    /// North sky daylight, ~7500K.
    D75,
    /// Equal energy.
    E,
    /// Cool white fluorescent.
    F2,
    /// Broadband daylight fluorescent.
    F7,
    /// Narrowband fluorescent.
    F11,
}

impl Illuminant {
    /// Number of illuminants.
    pub const COUNT: usize = 11;

    /// Every illuminant, in table order.
    pub const ALL: [Illuminant; Self::COUNT] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D50,
        Self::D55,
        Self::D65,
        Self::D75,
        Self::E,
        Self::F2,
        Self::F7,
        Self::F11,
    ];

    /// Table name of the illuminant.
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D50 => "D50",
            Self::D55 => "D55",
            Self::D65 => "D65",
            Self::D75 => "D75",
            Self::E => "E",
            Self::F2 => "F2",
            Self::F7 => "F7",
            Self::F11 => "F11",
        }
    }

    /// Position in [`Illuminant::ALL`]; used as a dense table index.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Illuminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Illuminant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|ill| ill.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownIlluminant { name: s.to_string() })
    }
}

// ============================================================================
// RGB working spaces
// ============================================================================

/// Named RGB working space.
///
/// Each one is defined by the chromaticities of its three primaries and a
/// reference white illuminant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RgbSpaceId {
    /// Adobe RGB (1998), D65.
    AdobeRgb1998,
    /// Apple RGB, D65.
    AppleRgb,
    /// Best RGB, D50.
    BestRgb,
    /// Beta RGB, D50.
    BetaRgb,
    /// Bruce RGB, D65.
    BruceRgb,
    /// CIE RGB, E.
    CieRgb,
    /// ColorMatch RGB, D50.
    ColorMatchRgb,
    /// Don RGB 4, D50.
    DonRgb4,
    /// ECI RGB v2, D50.
    EciRgbV2,
    /// Ekta Space PS5, D50.
    EktaSpacePs5,
    /// NTSC RGB, C.
    NtscRgb,
    /// PAL/SECAM RGB, D65.
    PalSecamRgb,
    /// ProPhoto RGB, D50.
    ProPhotoRgb,
    /// SMPTE-C RGB, D65.
    SmpteCRgb,
    /// sRGB, D65.
    Srgb,
    /// Wide Gamut RGB, D50.
    WideGamutRgb,
}

impl RgbSpaceId {
    /// Number of working spaces.
    pub const COUNT: usize = 16;

    /// Every working space, in table order.
    pub const ALL: [RgbSpaceId; Self::COUNT] = [
        Self::AdobeRgb1998,
        Self::AppleRgb,
        Self::BestRgb,
        Self::BetaRgb,
        Self::BruceRgb,
        Self::CieRgb,
        Self::ColorMatchRgb,
        Self::DonRgb4,
        Self::EciRgbV2,
        Self::EktaSpacePs5,
        Self::NtscRgb,
        Self::PalSecamRgb,
        Self::ProPhotoRgb,
        Self::SmpteCRgb,
        Self::Srgb,
        Self::WideGamutRgb,
    ];

    /// Table name of the working space.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AdobeRgb1998 => "Adobe RGB (1998)",
            Self::AppleRgb => "Apple RGB",
            Self::BestRgb => "Best RGB",
            Self::BetaRgb => "Beta RGB",
            Self::BruceRgb => "Bruce RGB",
            Self::CieRgb => "CIE RGB",
            Self::ColorMatchRgb => "ColorMatch RGB",
            Self::DonRgb4 => "Don RGB 4",
            Self::EciRgbV2 => "ECI RGB v2",
            Self::EktaSpacePs5 => "Ekta Space PS5",
            Self::NtscRgb => "NTSC RGB",
            Self::PalSecamRgb => "PAL/SECAM RGB",
            Self::ProPhotoRgb => "ProPhoto RGB",
            Self::SmpteCRgb => "SMPTE-C RGB",
            Self::Srgb => "sRGB",
            Self::WideGamutRgb => "Wide Gamut RGB",
        }
    }

    /// Position in [`RgbSpaceId::ALL`]; used as a dense table index.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Default for RgbSpaceId {
    fn default() -> Self {
        Self::Srgb
    }
}

impl fmt::Display for RgbSpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for RgbSpaceId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|space| space.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownRgbSpace { name: s.to_string() })
    }
}
