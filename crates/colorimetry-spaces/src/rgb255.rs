//! Quantized 8-bit RGB.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use colorimetry_core::SpaceKind;

use crate::algebra::impl_color_space;
use crate::error::{ColorError, ColorResult};
use crate::{Hex, Rgb};

/// RGB with integer channels, nominally 0..=255.
///
/// Channels are `i32` so the integer algebra (differences, negation) stays
/// representable; conversions out of this space clip back into 0..=255.
///
/// # Example
///
/// ```rust
/// use colorimetry_spaces::prelude::*;
///
/// let c = Rgb255::from_rgb(Rgb::new(1.0, 0.0, 0.0));
/// assert_eq!(c, Rgb255::new(255, 0, 0));
/// assert_eq!(c.to_string(), "(255, 0, 0)");
/// assert_eq!(c.to_hex().to_string(), "#FF0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb255 {
    values: [i32; 3],
}

impl_color_space!(Rgb255, i32, SpaceKind::Rgb255);

impl Rgb255 {
    /// Creates a value from its channels.
    #[inline]
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { values: [r, g, b] }
    }

    /// Red.
    #[inline]
    pub const fn r(&self) -> i32 {
        self.values[0]
    }

    /// Green.
    #[inline]
    pub const fn g(&self) -> i32 {
        self.values[1]
    }

    /// Blue.
    #[inline]
    pub const fn b(&self) -> i32 {
        self.values[2]
    }

    /// From linear RGB: clip to [0, 1], scale by 255, round half to even.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let q = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round_ties_even() as i32;
        Self::new(q(rgb.r()), q(rgb.g()), q(rgb.b()))
    }

    /// To linear RGB, each channel divided by 255.
    pub fn to_rgb(self) -> Rgb {
        Rgb::from(self.values.map(|v| f64::from(v) / 255.0))
    }

    /// To hex text; channels outside 0..=255 are clipped.
    pub fn to_hex(self) -> Hex {
        Hex::from_channels(self.values.map(clip_u8))
    }

    /// Elementwise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self { values: self.values.map(i32::saturating_abs) }
    }

    /// Elementwise integer power, saturating.
    #[inline]
    pub fn pow(self, exp: u32) -> Self {
        Self { values: self.values.map(|v| v.saturating_pow(exp)) }
    }

    /// Elementwise integer division, truncating toward zero.
    pub fn checked_div(self, rhs: Self) -> ColorResult<Self> {
        let mut out = [0; 3];
        for (slot, (a, b)) in out.iter_mut().zip(self.values.into_iter().zip(rhs.values)) {
            *slot = a
                .checked_div(b)
                .ok_or(ColorError::DivisionByZero { kind: SpaceKind::Rgb255 })?;
        }
        Ok(Self { values: out })
    }

    /// Division of every channel by one scalar.
    pub fn checked_div_scalar(self, rhs: i32) -> ColorResult<Self> {
        self.checked_div(Self::new(rhs, rhs, rhs))
    }
}

pub(crate) fn clip_u8(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

macro_rules! saturating_op {
    ($trait:ident, $method:ident, $sat:ident) => {
        impl $trait for Rgb255 {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                let [a, b, c] = self.values;
                let [x, y, z] = rhs.values;
                Self::new(a.$sat(x), b.$sat(y), c.$sat(z))
            }
        }

        impl $trait<i32> for Rgb255 {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: i32) -> Self {
                Self { values: self.values.map(|v| v.$sat(rhs)) }
            }
        }
    };
}

saturating_op!(Add, add, saturating_add);
saturating_op!(Sub, sub, saturating_sub);
saturating_op!(Mul, mul, saturating_mul);

impl Neg for Rgb255 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self { values: self.values.map(i32::saturating_neg) }
    }
}

impl fmt::Display for Rgb255 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.values;
        write!(f, "({}, {}, {})", r, g, b)
    }
}
