//! Hue/saturation/value.
//!
//! [`Hsv`] is the closed-form derivation, [`HsvStd`] mirrors the library
//! `rgb_to_hsv`/`hsv_to_rgb` routines. Both store `[H, S, V]`.

use crate::algebra::{cylindrical_ops, impl_color_space, impl_display, wrap_hue};
use crate::hsl::std_hue;
use crate::Rgb;

/// HSV, closed-form derivation.
///
/// # Example
///
/// ```rust
/// use colorimetry_spaces::prelude::*;
///
/// let grey = Rgb::new(0.5, 0.5, 0.5);
/// assert_eq!(grey.to_hsv(), Hsv::new(0.0, 0.0, 0.5));
/// assert_eq!(Hsv::new(0.0, 0.0, 0.5).to_rgb(), grey);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    values: [f64; 3],
}

impl_color_space!(Hsv, f64, ::colorimetry_core::SpaceKind::Hsv);
cylindrical_ops!(Hsv);
impl_display!(Hsv);

impl Hsv {
    /// Creates a value from hue (turns), saturation and value.
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { values: [h, s, v] }
    }

    /// Hue in [0, 1).
    #[inline]
    pub const fn h(&self) -> f64 {
        self.values[0]
    }

    /// Saturation.
    #[inline]
    pub const fn s(&self) -> f64 {
        self.values[1]
    }

    /// Value.
    #[inline]
    pub const fn v(&self) -> f64 {
        self.values[2]
    }

    /// From RGB.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let (r, g, b) = (rgb.r(), rgb.g(), rgb.b());
        let max = rgb.max_channel();
        let c = max - rgb.min_channel();

        let h = if c == 0.0 {
            0.0
        } else if max == r {
            (g - b) / c + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / c + 2.0
        } else {
            (r - g) / c + 4.0
        };

        let s = if max == 0.0 { 0.0 } else { c / max };
        Self::new(wrap_hue(h / 6.0), s, max)
    }

    /// To RGB.
    pub fn to_rgb(self) -> Rgb {
        let [h, s, v] = self.values;
        let sector = (h * 6.0).floor();
        let f = h * 6.0 - sector;
        sextant_rgb(sector, f, s, v)
    }
}

/// Picks RGB from the six hue sectors; `sector` is reduced modulo 6.
fn sextant_rgb(sector: f64, f: f64, s: f64, v: f64) -> Rgb {
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    match sector.rem_euclid(6.0) as u8 {
        0 => Rgb::new(v, t, p),
        1 => Rgb::new(q, v, p),
        2 => Rgb::new(p, v, t),
        3 => Rgb::new(p, q, v),
        4 => Rgb::new(t, p, v),
        _ => Rgb::new(v, p, q),
    }
}

/// HSV, library-equivalent derivation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HsvStd {
    values: [f64; 3],
}

impl_color_space!(HsvStd, f64, ::colorimetry_core::SpaceKind::HsvStd);
cylindrical_ops!(HsvStd);
impl_display!(HsvStd);

impl HsvStd {
    /// Creates a value from hue (turns), saturation and value.
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { values: [h, s, v] }
    }

    /// Hue in [0, 1).
    #[inline]
    pub const fn h(&self) -> f64 {
        self.values[0]
    }

    /// Saturation.
    #[inline]
    pub const fn s(&self) -> f64 {
        self.values[1]
    }

    /// Value.
    #[inline]
    pub const fn v(&self) -> f64 {
        self.values[2]
    }

    /// From RGB.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let (r, g, b) = (rgb.r(), rgb.g(), rgb.b());
        let maxc = rgb.max_channel();
        let minc = rgb.min_channel();
        if minc == maxc {
            return Self::new(0.0, 0.0, maxc);
        }
        let rangec = maxc - minc;
        Self::new(std_hue(r, g, b, maxc, rangec), rangec / maxc, maxc)
    }

    /// To RGB.
    pub fn to_rgb(self) -> Rgb {
        let [h, s, v] = self.values;
        if s == 0.0 {
            return Rgb::new(v, v, v);
        }
        // Truncation toward zero, then a floored modulo on the sector
        let sector = (h * 6.0).trunc();
        let f = h * 6.0 - sector;
        sextant_rgb(sector, f, s, v)
    }
}
