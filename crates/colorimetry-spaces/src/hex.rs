//! `#RRGGBB` text encoding.

use std::fmt;
use std::str::FromStr;

use colorimetry_core::SpaceKind;

use crate::algebra::impl_color_space;
use crate::error::ColorError;
use crate::{Rgb, Rgb255};

/// A hex color: three 8-bit channels written as two hex digits each.
///
/// Digits are kept lowercase ([`digits`](Hex::digits)); [`Display`](fmt::Display)
/// prints the `#RRGGBB` upper-case form. Parsing accepts either case, with
/// or without the leading `#`. Hex values have no arithmetic.
///
/// # Example
///
/// ```rust
/// use colorimetry_spaces::prelude::*;
///
/// let hex: Hex = "#ff8800".parse().unwrap();
/// assert_eq!(hex.to_rgb255(), Rgb255::new(255, 136, 0));
/// assert_eq!(hex.to_string(), "#FF8800");
/// assert_eq!(hex.digits(), ["ff", "88", "00"]);
/// assert!("#ff88".parse::<Hex>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hex {
    values: [u8; 3],
}

impl_color_space!(Hex, u8, SpaceKind::Hex);

impl Hex {
    /// Creates a value from its channels.
    #[inline]
    pub const fn from_channels(channels: [u8; 3]) -> Self {
        Self { values: channels }
    }

    /// The three channels.
    #[inline]
    pub const fn channels(&self) -> [u8; 3] {
        self.values
    }

    /// Lowercase two-digit groups, one per channel.
    pub fn digits(&self) -> [String; 3] {
        self.values.map(|v| format!("{:02x}", v))
    }

    /// To 8-bit RGB.
    #[inline]
    pub fn to_rgb255(self) -> Rgb255 {
        let [r, g, b] = self.values.map(i32::from);
        Rgb255::new(r, g, b)
    }

    /// To linear RGB, through RGB255.
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        self.to_rgb255().to_rgb()
    }
}

impl From<Rgb255> for Hex {
    fn from(c: Rgb255) -> Self {
        c.to_hex()
    }
}

impl From<Rgb> for Hex {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hex()
    }
}

impl From<Hex> for Rgb255 {
    fn from(h: Hex) -> Self {
        h.to_rgb255()
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.values;
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

impl FromStr for Hex {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidHex { value: s.to_string() };
        let t = s.trim();
        let digits = t.strip_prefix('#').unwrap_or(t);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::from_channels([channel(0)?, channel(2)?, channel(4)?]))
    }
}
