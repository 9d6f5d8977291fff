//! Runtime-tagged color values.
//!
//! [`AnyColor`] closes the set of concrete spaces into one sum type so values
//! of a kind chosen at runtime (a config file, a command line) can be stored,
//! combined and converted. Binary operators check the tags and report
//! [`ColorError::TypeMismatch`] instead of failing to compile.

use std::fmt;

use colorimetry_core::SpaceKind;
use colorimetry_math::Vec3;

use crate::algebra::{Cartesian, ColorSpace, Cylindrical};
use crate::error::{ColorError, ColorResult};
use crate::rgb255::clip_u8;
use crate::{Hex, Hsl, HslStd, Hsv, HsvStd, Lms, Oklab, Rgb, Rgb255, Xyz};

/// A color value of any space.
///
/// # Example
///
/// ```rust
/// use colorimetry_spaces::prelude::*;
///
/// let a = AnyColor::from(Rgb::new(0.1, 0.2, 0.3));
/// let b = AnyColor::from(Rgb::new(0.1, 0.1, 0.1));
/// assert_eq!(a.try_sub(&b).unwrap().kind(), SpaceKind::Rgb);
///
/// let x = AnyColor::from(Xyz::new(0.1, 0.2, 0.3));
/// assert!(matches!(a.try_add(&x), Err(ColorError::TypeMismatch { .. })));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyColor {
    /// Linear RGB.
    Rgb(Rgb),
    /// CIE XYZ.
    Xyz(Xyz),
    /// Cone response.
    Lms(Lms),
    /// OKLAB.
    Oklab(Oklab),
    /// HSL, closed form.
    Hsl(Hsl),
    /// HSL, library form.
    HslStd(HslStd),
    /// HSV, closed form.
    Hsv(Hsv),
    /// HSV, library form.
    HsvStd(HsvStd),
    /// 8-bit RGB.
    Rgb255(Rgb255),
    /// Hex text.
    Hex(Hex),
}

#[derive(Debug, Clone, Copy)]
enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    fn name(self) -> &'static str {
        match self {
            Self::Add => "addition",
            Self::Sub => "subtraction",
            Self::Mul => "multiplication",
            Self::Div => "division",
        }
    }

    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Mul => a * b,
            Self::Div => a / b,
        }
    }

    fn cartesian<T: Cartesian>(self, a: T, b: T) -> T {
        a.zip_with(b, |x, y| self.apply(x, y))
    }

    fn cylindrical<T: Cylindrical>(self, a: T, b: T) -> ColorResult<T> {
        let (ea, eb): (Vec3, Vec3) = (a.embed(), b.embed());
        match self {
            Self::Add => Ok(T::from_embedding(ea + eb)),
            Self::Sub => Ok(T::from_embedding(ea - eb)),
            _ => Err(ColorError::UnsupportedOperation { op: self.name(), kind: T::KIND }),
        }
    }

    fn scalar_name(self) -> &'static str {
        match self {
            Self::Add => "scalar addition",
            Self::Sub => "scalar subtraction",
            Self::Mul => "scalar multiplication",
            Self::Div => "scalar division",
        }
    }

    fn integer_scalar(self, a: Rgb255, k: i32) -> ColorResult<Rgb255> {
        Ok(match self {
            Self::Add => a + k,
            Self::Sub => a - k,
            Self::Mul => a * k,
            Self::Div => a.checked_div_scalar(k)?,
        })
    }

    fn integer(self, a: Rgb255, b: Rgb255) -> ColorResult<Rgb255> {
        Ok(match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Mul => a * b,
            Self::Div => a.checked_div(b)?,
        })
    }
}

impl AnyColor {
    /// Space tag.
    pub fn kind(&self) -> SpaceKind {
        match self {
            Self::Rgb(c) => c.kind(),
            Self::Xyz(c) => c.kind(),
            Self::Lms(c) => c.kind(),
            Self::Oklab(c) => c.kind(),
            Self::Hsl(c) => c.kind(),
            Self::HslStd(c) => c.kind(),
            Self::Hsv(c) => c.kind(),
            Self::HsvStd(c) => c.kind(),
            Self::Rgb255(c) => c.kind(),
            Self::Hex(c) => c.kind(),
        }
    }

    /// Components widened to `f64` (integer channels for RGB255 and HEX).
    pub fn components(&self) -> [f64; 3] {
        match self {
            Self::Rgb(c) => c.components(),
            Self::Xyz(c) => c.components(),
            Self::Lms(c) => c.components(),
            Self::Oklab(c) => c.components(),
            Self::Hsl(c) => c.components(),
            Self::HslStd(c) => c.components(),
            Self::Hsv(c) => c.components(),
            Self::HsvStd(c) => c.components(),
            Self::Rgb255(c) => c.components().map(f64::from),
            Self::Hex(c) => c.components().map(f64::from),
        }
    }

    /// Builds a value of `kind` from three numbers.
    ///
    /// RGB255 rounds half to even, as [`Rgb255::from_rgb`] does; HEX
    /// additionally clips to 0..=255.
    pub fn from_components(kind: SpaceKind, c: [f64; 3]) -> Self {
        match kind {
            SpaceKind::Rgb => Self::Rgb(Rgb::from_components(c)),
            SpaceKind::Xyz => Self::Xyz(Xyz::from_components(c)),
            SpaceKind::Lms => Self::Lms(Lms::from_components(c)),
            SpaceKind::Oklab => Self::Oklab(Oklab::from_components(c)),
            SpaceKind::Hsl => Self::Hsl(Hsl::from_components(c)),
            SpaceKind::HslStd => Self::HslStd(HslStd::from_components(c)),
            SpaceKind::Hsv => Self::Hsv(Hsv::from_components(c)),
            SpaceKind::HsvStd => Self::HsvStd(HsvStd::from_components(c)),
            SpaceKind::Rgb255 => Self::Rgb255(Rgb255::from_components(c.map(round_i32))),
            SpaceKind::Hex => Self::Hex(Hex::from_channels(c.map(|v| clip_u8(round_i32(v))))),
        }
    }

    /// Component by index, widened to `f64`.
    pub fn get(&self, index: usize) -> ColorResult<f64> {
        self.components()
            .get(index)
            .copied()
            .ok_or(ColorError::IndexOutOfRange { index, len: 3 })
    }

    /// Replaces the component at `index`, rounding and clipping integer
    /// channels the way [`from_components`](Self::from_components) does.
    pub fn set(&mut self, index: usize, value: f64) -> ColorResult<()> {
        match self {
            Self::Rgb(c) => c.set(index, value),
            Self::Xyz(c) => c.set(index, value),
            Self::Lms(c) => c.set(index, value),
            Self::Oklab(c) => c.set(index, value),
            Self::Hsl(c) => c.set(index, value),
            Self::HslStd(c) => c.set(index, value),
            Self::Hsv(c) => c.set(index, value),
            Self::HsvStd(c) => c.set(index, value),
            Self::Rgb255(c) => c.set(index, round_i32(value)),
            Self::Hex(c) => c.set(index, clip_u8(round_i32(value))),
        }
    }

    /// `self + other`.
    pub fn try_add(&self, other: &Self) -> ColorResult<Self> {
        self.binary(other, BinaryOp::Add)
    }

    /// `self - other`.
    pub fn try_sub(&self, other: &Self) -> ColorResult<Self> {
        self.binary(other, BinaryOp::Sub)
    }

    /// `self * other`, Cartesian spaces only.
    pub fn try_mul(&self, other: &Self) -> ColorResult<Self> {
        self.binary(other, BinaryOp::Mul)
    }

    /// `self / other`, Cartesian spaces only.
    pub fn try_div(&self, other: &Self) -> ColorResult<Self> {
        self.binary(other, BinaryOp::Div)
    }

    /// Negation of every stored component.
    pub fn try_neg(&self) -> ColorResult<Self> {
        Ok(match *self {
            Self::Rgb(c) => Self::Rgb(-c),
            Self::Xyz(c) => Self::Xyz(-c),
            Self::Lms(c) => Self::Lms(-c),
            Self::Oklab(c) => Self::Oklab(-c),
            Self::Hsl(c) => Self::Hsl(-c),
            Self::HslStd(c) => Self::HslStd(-c),
            Self::Hsv(c) => Self::Hsv(-c),
            Self::HsvStd(c) => Self::HsvStd(-c),
            Self::Rgb255(c) => Self::Rgb255(-c),
            Self::Hex(_) => return Err(self.unsupported("negation")),
        })
    }

    /// Absolute value of every stored component.
    pub fn try_abs(&self) -> ColorResult<Self> {
        Ok(match *self {
            Self::Rgb(c) => Self::Rgb(Cartesian::abs(c)),
            Self::Xyz(c) => Self::Xyz(Cartesian::abs(c)),
            Self::Lms(c) => Self::Lms(Cartesian::abs(c)),
            Self::Oklab(c) => Self::Oklab(Cartesian::abs(c)),
            Self::Hsl(c) => Self::Hsl(Cylindrical::abs(c)),
            Self::HslStd(c) => Self::HslStd(Cylindrical::abs(c)),
            Self::Hsv(c) => Self::Hsv(Cylindrical::abs(c)),
            Self::HsvStd(c) => Self::HsvStd(Cylindrical::abs(c)),
            Self::Rgb255(c) => Self::Rgb255(c.abs()),
            Self::Hex(_) => return Err(self.unsupported("absolute value")),
        })
    }

    /// `self + k` on every component.
    pub fn try_add_scalar(&self, k: f64) -> ColorResult<Self> {
        self.scalar(k, BinaryOp::Add)
    }

    /// `self - k` on every component.
    pub fn try_sub_scalar(&self, k: f64) -> ColorResult<Self> {
        self.scalar(k, BinaryOp::Sub)
    }

    /// `self * k` on every component.
    pub fn try_mul_scalar(&self, k: f64) -> ColorResult<Self> {
        self.scalar(k, BinaryOp::Mul)
    }

    /// `self / k` on every component.
    pub fn try_div_scalar(&self, k: f64) -> ColorResult<Self> {
        self.scalar(k, BinaryOp::Div)
    }

    fn unsupported(&self, op: &'static str) -> ColorError {
        ColorError::UnsupportedOperation { op, kind: self.kind() }
    }

    // Cartesian spaces only; RGB255 takes integral scalars
    fn scalar(&self, k: f64, op: BinaryOp) -> ColorResult<Self> {
        let f = |v: f64| op.apply(v, k);
        Ok(match *self {
            Self::Rgb(c) => Self::Rgb(Cartesian::map(c, f)),
            Self::Xyz(c) => Self::Xyz(Cartesian::map(c, f)),
            Self::Lms(c) => Self::Lms(Cartesian::map(c, f)),
            Self::Oklab(c) => Self::Oklab(Cartesian::map(c, f)),
            Self::Rgb255(c) => match integral(k) {
                Some(k) => Self::Rgb255(op.integer_scalar(c, k)?),
                None => return Err(self.unsupported("non-integer scalar")),
            },
            _ => return Err(self.unsupported(op.scalar_name())),
        })
    }

    fn binary(&self, other: &Self, op: BinaryOp) -> ColorResult<Self> {
        Ok(match (*self, *other) {
            (Self::Rgb(a), Self::Rgb(b)) => Self::Rgb(op.cartesian(a, b)),
            (Self::Xyz(a), Self::Xyz(b)) => Self::Xyz(op.cartesian(a, b)),
            (Self::Lms(a), Self::Lms(b)) => Self::Lms(op.cartesian(a, b)),
            (Self::Oklab(a), Self::Oklab(b)) => Self::Oklab(op.cartesian(a, b)),
            (Self::Hsl(a), Self::Hsl(b)) => Self::Hsl(op.cylindrical(a, b)?),
            (Self::HslStd(a), Self::HslStd(b)) => Self::HslStd(op.cylindrical(a, b)?),
            (Self::Hsv(a), Self::Hsv(b)) => Self::Hsv(op.cylindrical(a, b)?),
            (Self::HsvStd(a), Self::HsvStd(b)) => Self::HsvStd(op.cylindrical(a, b)?),
            (Self::Rgb255(a), Self::Rgb255(b)) => Self::Rgb255(op.integer(a, b)?),
            (Self::Hex(_), Self::Hex(_)) => return Err(self.unsupported(op.name())),
            (a, b) => {
                return Err(ColorError::TypeMismatch { left: a.kind(), right: b.kind() });
            }
        })
    }
}

fn round_i32(v: f64) -> i32 {
    v.round_ties_even() as i32
}

fn integral(k: f64) -> Option<i32> {
    let in_range = k >= f64::from(i32::MIN) && k <= f64::from(i32::MAX);
    (k.fract() == 0.0 && in_range).then_some(k as i32)
}

macro_rules! impl_from_variant {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for AnyColor {
                #[inline]
                fn from(c: $variant) -> Self {
                    Self::$variant(c)
                }
            }
        )+
    };
}

impl_from_variant!(Rgb, Xyz, Lms, Oklab, Hsl, HslStd, Hsv, HsvStd, Rgb255, Hex);

impl fmt::Display for AnyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(c) => fmt::Display::fmt(c, f),
            Self::Xyz(c) => fmt::Display::fmt(c, f),
            Self::Lms(c) => fmt::Display::fmt(c, f),
            Self::Oklab(c) => fmt::Display::fmt(c, f),
            Self::Hsl(c) => fmt::Display::fmt(c, f),
            Self::HslStd(c) => fmt::Display::fmt(c, f),
            Self::Hsv(c) => fmt::Display::fmt(c, f),
            Self::HsvStd(c) => fmt::Display::fmt(c, f),
            Self::Rgb255(c) => fmt::Display::fmt(c, f),
            Self::Hex(c) => fmt::Display::fmt(c, f),
        }
    }
}
