//! Hue/saturation/lightness.
//!
//! Two independent derivations of the same space: [`Hsl`] follows the
//! closed-form max/min/chroma formulas, [`HslStd`] mirrors the widely used
//! `rgb_to_hls`/`hls_to_rgb` library routines. Both store `[H, S, L]` with
//! the hue in turns, and they agree to rounding error on [0, 1] RGB.

use crate::algebra::{cylindrical_ops, impl_color_space, impl_display, wrap_hue};
use crate::Rgb;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// HSL, closed-form derivation.
///
/// # Example
///
/// ```rust
/// use colorimetry_spaces::prelude::*;
///
/// assert_eq!(Rgb::new(1.0, 1.0, 1.0).to_hsl(), Hsl::new(0.0, 0.0, 1.0));
/// assert_eq!(Hsl::new(0.0, 0.0, 1.0).to_rgb(), Rgb::new(1.0, 1.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    values: [f64; 3],
}

impl_color_space!(Hsl, f64, ::colorimetry_core::SpaceKind::Hsl);
cylindrical_ops!(Hsl);
impl_display!(Hsl);

impl Hsl {
    /// Creates a value from hue (turns), saturation and lightness.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { values: [h, s, l] }
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

    /// Lightness.
    #[inline]
    pub const fn l(&self) -> f64 {
        self.values[2]
    }

    /// From RGB.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let (r, g, b) = (rgb.r(), rgb.g(), rgb.b());
        let max = rgb.max_channel();
        let min = rgb.min_channel();
        let c = max - min;

        let h = hue_sextant(r, g, b, max, c);
        let l = (max + min) / 2.0;
        let s = if l == 0.0 || l == 1.0 { 0.0 } else { c / (1.0 - (2.0 * l - 1.0).abs()) };

        Self::new(h, s, l)
    }

    /// To RGB.
    pub fn to_rgb(self) -> Rgb {
        let [h, s, l] = self.values;
        if s == 0.0 {
            // Achromatic
            return Rgb::new(l, l, l);
        }
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        Rgb::new(
            hue_to_rgb(p, q, h + ONE_THIRD),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - ONE_THIRD),
        )
    }
}

/// Hue of an RGB triple with max `max` and chroma `c`, in turns.
///
/// Zero chroma yields hue 0.
pub(crate) fn hue_sextant(r: f64, g: f64, b: f64, max: f64, c: f64) -> f64 {
    if c == 0.0 {
        return 0.0;
    }
    let h = if max == r {
        ((g - b) / c).rem_euclid(6.0)
    } else if max == g {
        (b - r) / c + 2.0
    } else {
        (r - g) / c + 4.0
    };
    wrap_hue(h / 6.0)
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = wrap_hue(t);
    if t < ONE_SIXTH {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < TWO_THIRDS {
        p + (q - p) * (TWO_THIRDS - t) * 6.0
    } else {
        p
    }
}

/// HSL, library-equivalent derivation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HslStd {
    values: [f64; 3],
}

impl_color_space!(HslStd, f64, ::colorimetry_core::SpaceKind::HslStd);
cylindrical_ops!(HslStd);
impl_display!(HslStd);

impl HslStd {
    /// Creates a value from hue (turns), saturation and lightness.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { values: [h, s, l] }
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

    /// Lightness.
    #[inline]
    pub const fn l(&self) -> f64 {
        self.values[2]
    }

    /// From RGB.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let (r, g, b) = (rgb.r(), rgb.g(), rgb.b());
        let maxc = rgb.max_channel();
        let minc = rgb.min_channel();
        let sumc = maxc + minc;
        let rangec = maxc - minc;
        let l = sumc / 2.0;
        if minc == maxc {
            return Self::new(0.0, 0.0, l);
        }
        let s = if l <= 0.5 { rangec / sumc } else { rangec / (2.0 - maxc - minc) };
        Self::new(std_hue(r, g, b, maxc, rangec), s, l)
    }

    /// To RGB.
    pub fn to_rgb(self) -> Rgb {
        let [h, s, l] = self.values;
        if s == 0.0 {
            return Rgb::new(l, l, l);
        }
        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;
        Rgb::new(v(m1, m2, h + ONE_THIRD), v(m1, m2, h), v(m1, m2, h - ONE_THIRD))
    }
}

/// Library hue: channel distances from the max, in turns.
pub(crate) fn std_hue(r: f64, g: f64, b: f64, maxc: f64, rangec: f64) -> f64 {
    let rc = (maxc - r) / rangec;
    let gc = (maxc - g) / rangec;
    let bc = (maxc - b) / rangec;
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    wrap_hue(h / 6.0)
}

fn v(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = wrap_hue(hue);
    if hue < ONE_SIXTH {
        return m1 + (m2 - m1) * hue * 6.0;
    }
    if hue < 0.5 {
        return m2;
    }
    if hue < TWO_THIRDS {
        return m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0;
    }
    m1
}
