//! The arithmetic contract shared by every color value.
//!
//! Every value is three components of a fixed [`SpaceKind`]. On top of the
//! bounds-checked component access of [`ColorSpace`] there are two algebras:
//!
//! - [`Cartesian`]: elementwise `+ - * /` against the same space or a scalar,
//!   plus negation, [`powf`](Cartesian::powf) and [`abs`](Cartesian::abs).
//! - [`Cylindrical`]: values are (angle, radius, height). `+` and `-` go
//!   through the Cartesian embedding
//!
//! ```text
//! x = r * cos(theta)    r     = sqrt(x^2 + y^2)
//! y = r * sin(theta)    theta = atan2(y, x)
//! z = h                 h     = z
//! ```
//!
//!   where `theta = 2 * pi * H` for a hue `H` in [0, 1). Negation and `abs`
//!   act on the stored components directly.
//!
//! Mixing two different spaces does not compile for the concrete types; the
//! runtime [`AnyColor`](crate::AnyColor) reports it as
//! [`ColorError::TypeMismatch`].
//!
//! ```rust
//! use colorimetry_spaces::prelude::*;
//!
//! let a = Rgb::new(0.2, 0.4, 0.6);
//! let b = Rgb::new(0.1, 0.1, 0.1);
//! let c = (a + b) * 2.0;
//! assert!((c.g() - 1.0).abs() < 1e-12);
//! assert!(c.get(3).is_err());
//! ```

use std::f64::consts::TAU;
use std::fmt::Debug;

use colorimetry_core::SpaceKind;
use colorimetry_math::Vec3;

use crate::error::{ColorError, ColorResult};

/// Number of components in every space.
pub const COMPONENTS: usize = 3;

/// A color value of one fixed space.
pub trait ColorSpace: Copy + Debug + PartialEq {
    /// Component scalar type.
    type Component: Copy + Debug + PartialEq;

    /// Space tag.
    const KIND: SpaceKind;

    /// Builds a value from its components.
    fn from_components(components: [Self::Component; COMPONENTS]) -> Self;

    /// Copies out the components.
    fn components(&self) -> [Self::Component; COMPONENTS];

    /// Mutable view of the components.
    fn components_mut(&mut self) -> &mut [Self::Component; COMPONENTS];

    /// Space tag of this value.
    #[inline]
    fn kind(&self) -> SpaceKind {
        Self::KIND
    }

    /// Component count (always [`COMPONENTS`]).
    #[inline]
    fn len(&self) -> usize {
        COMPONENTS
    }

    /// Component by index.
    fn get(&self, index: usize) -> ColorResult<Self::Component> {
        self.components()
            .get(index)
            .copied()
            .ok_or(ColorError::IndexOutOfRange { index, len: COMPONENTS })
    }

    /// Replaces the component at `index`.
    fn set(&mut self, index: usize, value: Self::Component) -> ColorResult<()> {
        let slot = self
            .components_mut()
            .get_mut(index)
            .ok_or(ColorError::IndexOutOfRange { index, len: COMPONENTS })?;
        *slot = value;
        Ok(())
    }
}

/// Floating-point spaces with elementwise arithmetic.
///
/// The operators themselves are implemented per type (`Add`, `Sub`, `Mul`,
/// `Div` against `Self` and `f64`, and `Neg`).
pub trait Cartesian: ColorSpace<Component = f64> {
    /// Applies `f` to every component.
    #[inline]
    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::from_components(self.components().map(f))
    }

    /// Combines two values component by component.
    #[inline]
    fn zip_with(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let a = self.components();
        let b = other.components();
        Self::from_components([f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2])])
    }

    /// Raises every component to `exp`.
    #[inline]
    fn powf(self, exp: f64) -> Self {
        self.map(|v| v.powf(exp))
    }

    /// Absolute value of every component.
    #[inline]
    fn abs(self) -> Self {
        self.map(f64::abs)
    }

    /// Components as a vector, for matrix transforms.
    #[inline]
    fn to_vec3(self) -> Vec3 {
        Vec3::from_array(self.components())
    }

    /// Value from a transformed vector.
    #[inline]
    fn from_vec3(v: Vec3) -> Self {
        Self::from_components(v.to_array())
    }
}

/// Hue-based spaces stored as `[H, S, third]` with `H` in [0, 1).
///
/// `S` is the radius and `H` the angle (in turns) of the embedding; the
/// third component (lightness or value) is the height.
pub trait Cylindrical: ColorSpace<Component = f64> {
    /// Cartesian embedding `(S cos 2piH, S sin 2piH, third)`.
    fn embed(self) -> Vec3 {
        let [h, s, z] = self.components();
        let theta = h * TAU;
        Vec3::new(s * theta.cos(), s * theta.sin(), z)
    }

    /// Inverse of [`embed`](Self::embed); the hue comes back wrapped to [0, 1).
    fn from_embedding(v: Vec3) -> Self {
        let r = v.x.hypot(v.y);
        let h = wrap_hue(v.y.atan2(v.x) / TAU);
        Self::from_components([h, r, v.z])
    }

    /// Absolute value of every stored component.
    fn abs(self) -> Self {
        Self::from_components(self.components().map(f64::abs))
    }
}

/// Wraps a hue in turns into [0, 1).
#[inline]
pub(crate) fn wrap_hue(h: f64) -> f64 {
    let h = h.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if h >= 1.0 { 0.0 } else { h }
}

/// Implements [`ColorSpace`] for a struct with a `values` array field.
macro_rules! impl_color_space {
    ($ty:ident, $comp:ty, $kind:expr) => {
        impl $crate::algebra::ColorSpace for $ty {
            type Component = $comp;
            const KIND: ::colorimetry_core::SpaceKind = $kind;

            #[inline]
            fn from_components(components: [$comp; 3]) -> Self {
                Self { values: components }
            }

            #[inline]
            fn components(&self) -> [$comp; 3] {
                self.values
            }

            #[inline]
            fn components_mut(&mut self) -> &mut [$comp; 3] {
                &mut self.values
            }
        }
    };
}

/// Elementwise operators for a floating-point space.
macro_rules! cartesian_ops {
    ($ty:ident) => {
        impl $crate::algebra::Cartesian for $ty {}

        $crate::algebra::cartesian_ops!(@binary $ty, Add, add, +);
        $crate::algebra::cartesian_ops!(@binary $ty, Sub, sub, -);
        $crate::algebra::cartesian_ops!(@binary $ty, Mul, mul, *);
        $crate::algebra::cartesian_ops!(@binary $ty, Div, div, /);

        impl ::std::ops::Neg for $ty {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                $crate::algebra::Cartesian::map(self, |v| -v)
            }
        }
    };
    (@binary $ty:ident, $trait:ident, $method:ident, $op:tt) => {
        impl ::std::ops::$trait for $ty {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                $crate::algebra::Cartesian::zip_with(self, rhs, |a, b| a $op b)
            }
        }

        impl ::std::ops::$trait<f64> for $ty {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: f64) -> Self {
                $crate::algebra::Cartesian::map(self, |a| a $op rhs)
            }
        }
    };
}

/// Embedding-based `+`/`-` and elementwise negation for a hue-based space.
macro_rules! cylindrical_ops {
    ($ty:ident) => {
        impl $crate::algebra::Cylindrical for $ty {}

        impl ::std::ops::Add for $ty {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                use $crate::algebra::Cylindrical;
                Self::from_embedding(self.embed() + rhs.embed())
            }
        }

        impl ::std::ops::Sub for $ty {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                use $crate::algebra::Cylindrical;
                Self::from_embedding(self.embed() - rhs.embed())
            }
        }

        impl ::std::ops::Neg for $ty {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { values: self.values.map(|v| -v) }
            }
        }
    };
}

/// `KIND(a, b, c)` display.
macro_rules! impl_display {
    ($ty:ident) => {
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let [a, b, c] = self.values;
                write!(
                    f,
                    "{}({}, {}, {})",
                    <Self as $crate::algebra::ColorSpace>::KIND,
                    a,
                    b,
                    c
                )
            }
        }
    };
}

pub(crate) use cartesian_ops;
pub(crate) use cylindrical_ops;
pub(crate) use impl_color_space;
pub(crate) use impl_display;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Hsl, Rgb, Xyz};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_wrap_hue() {
        assert_eq!(wrap_hue(0.25), 0.25);
        assert_eq!(wrap_hue(1.0), 0.0);
        assert_abs_diff_eq!(wrap_hue(-0.25), 0.75, epsilon = 1e-15);
        assert_eq!(wrap_hue(-1e-18), 0.0);
    }

    #[test]
    fn test_get_set_bounds() {
        let mut c = Xyz::new(0.1, 0.2, 0.3);
        assert_eq!(c.get(2).unwrap(), 0.3);
        c.set(0, 0.5).unwrap();
        assert_eq!(c.x(), 0.5);
        assert!(matches!(c.get(3), Err(ColorError::IndexOutOfRange { index: 3, len: 3 })));
        assert!(c.set(7, 1.0).is_err());
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_cartesian_ops() {
        let a = Rgb::new(0.2, 0.4, 0.6);
        let b = Rgb::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, b + a);
        assert_eq!(a - a, Rgb::new(0.0, 0.0, 0.0));
        assert_eq!(a * 1.0, a);
        assert_eq!(-a, Rgb::new(-0.2, -0.4, -0.6));
        assert_eq!((-a).abs(), a);
        assert_eq!(b / 0.5, Rgb::new(1.0, 1.0, 1.0));
        assert_eq!(Rgb::new(4.0, 9.0, 16.0).powf(0.5), Rgb::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_embedding_roundtrip() {
        let c = Hsl::new(0.3, 0.5, 0.4);
        let back = Hsl::from_embedding(c.embed());
        assert_abs_diff_eq!(back.h(), 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(back.s(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(back.l(), 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_cylindrical_add_opposite_hues() {
        // Complementary hues with equal saturation cancel out
        let a = Hsl::new(0.0, 0.5, 0.2);
        let b = Hsl::new(0.5, 0.5, 0.3);
        let c = a + b;
        assert_abs_diff_eq!(c.s(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.l(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_cylindrical_sub_self() {
        let a = Hsl::new(0.7, 0.3, 0.6);
        let z = a - a;
        assert_abs_diff_eq!(z.s(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(z.l(), 0.0, epsilon = 1e-12);
        assert!((0.0..1.0).contains(&z.h()));
    }

    #[test]
    fn test_cylindrical_neg_abs() {
        let a = Hsl::new(0.25, 0.5, 0.75);
        let n = -a;
        assert_eq!(n.components(), [-0.25, -0.5, -0.75]);
        assert_eq!(Cylindrical::abs(n), a);
    }
}
