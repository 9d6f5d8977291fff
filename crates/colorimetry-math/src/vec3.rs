//! Column vectors for matrix transforms.
//!
//! Color value types keep their own component arrays and only pass through
//! [`Vec3`] while a matrix is applied.

use std::ops::{Add, Div, Mul, Neg, Sub};

/// Three f64 components: RGB, XYZ, cone responses or a white point.
///
/// ```rust
/// use colorimetry_math::Vec3;
///
/// let d65 = Vec3::new(0.95047, 1.0, 1.08883);
/// assert_eq!(d65.get(1), Some(1.0));
/// assert_eq!(d65.get(3), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// First component.
    pub x: f64,
    /// Second component.
    pub y: f64,
    /// Third component.
    pub z: f64,
}

impl Vec3 {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// `(1, 1, 1)`; equal-energy RGB white.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// From `[x, y, z]`.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        let [x, y, z] = a;
        Self { x, y, z }
    }

    /// As `[x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Component by index, `None` past the third.
    #[inline]
    pub const fn get(self, i: usize) -> Option<f64> {
        match i {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            _ => None,
        }
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product; the triple product `a . (b x c)` is a determinant.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Applies `f` to every component.
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Pairs components of `self` and `other` through `f`.
    #[inline]
    pub fn zip(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(f(self.x, other.x), f(self.y, other.y), f(self.z, other.z))
    }

    /// Elementwise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        self.map(f64::abs)
    }

    /// No NaN or infinite component.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }

    /// To glam's `DVec3`.
    #[inline]
    pub fn to_glam(self) -> glam::DVec3 {
        glam::DVec3::from_array(self.to_array())
    }

    /// From glam's `DVec3`.
    #[inline]
    pub fn from_glam(v: glam::DVec3) -> Self {
        Self::from_array(v.to_array())
    }
}

// Elementwise against another vector and against a scalar
macro_rules! elementwise {
    ($($trait:ident $method:ident $op:tt),+) => {$(
        impl $trait for Vec3 {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                self.zip(rhs, |a, b| a $op b)
            }
        }

        impl $trait<f64> for Vec3 {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: f64) -> Self {
                self.map(|a| a $op rhs)
            }
        }
    )+};
}

elementwise!(Add add +, Sub sub -, Mul mul *, Div div /);

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> [f64; 3] {
        v.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Vec3 = Vec3::new(1.0, 2.0, 3.0);
    const B: Vec3 = Vec3::new(4.0, 5.0, 6.0);

    #[test]
    fn test_get_past_end() {
        assert_eq!(A.get(2), Some(3.0));
        assert_eq!(A.get(3), None);
    }

    #[test]
    fn test_dot_cross() {
        assert_eq!(A.dot(B), 32.0);
        let c = A.cross(B);
        assert_eq!(c, Vec3::new(-3.0, 6.0, -3.0));
        assert_eq!(c.dot(A), 0.0);
        assert_eq!(c.dot(B), 0.0);
    }

    #[test]
    fn test_elementwise() {
        assert_eq!(A + B, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(B - A, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(A * B, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(B / A, Vec3::new(4.0, 2.5, 2.0));
        assert_eq!(A * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(B / 2.0 - 1.0, Vec3::new(1.0, 1.5, 2.0));
        assert_eq!(-A, Vec3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_map_cbrt_keeps_sign() {
        let v = Vec3::new(8.0, -27.0, 0.0).map(f64::cbrt);
        assert_eq!(v, Vec3::new(2.0, -3.0, 0.0));
    }

    #[test]
    fn test_non_finite() {
        assert!(A.is_finite());
        assert!(!Vec3::new(0.0, f64::INFINITY, 0.0).is_finite());
    }

    #[test]
    fn test_glam_roundtrip() {
        let v = Vec3::new(0.25, -1.5, 3.0);
        assert_eq!(Vec3::from_glam(v.to_glam()), v);
    }
}
