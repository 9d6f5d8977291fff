//! f64 3x3 matrices.
//!
//! [`Mat3`] carries RGB-to-XYZ matrices, chromatic adaptation transforms and
//! the fixed LMS/OKLAB matrices. Storage is row-major and vectors are
//! columns, so `m * v` is `[row0 . v, row1 . v, row2 . v]` and products
//! compose right to left: `(a * b) * v == a * (b * v)`.

use crate::Vec3;
use std::ops::Mul;

/// Determinants below this magnitude are treated as singular.
pub const SINGULAR_EPSILON: f64 = 1e-12;

/// A row-major 3x3 matrix.
///
/// # Example
///
/// ```rust
/// use colorimetry_math::{Mat3, Vec3};
///
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(Mat3::IDENTITY * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    /// Rows, top to bottom.
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 3]; 3] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// From rows.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// From columns.
    #[inline]
    pub const fn from_cols(cols: [[f64; 3]; 3]) -> Self {
        let [a, b, c] = cols;
        Self { m: [[a[0], b[0], c[0]], [a[1], b[1], c[1]], [a[2], b[2], c[2]]] }
    }

    /// From column vectors, e.g. the XYZ of three primaries.
    #[inline]
    pub fn from_col_vecs(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_cols([c0.to_array(), c1.to_array(), c2.to_array()])
    }

    /// `diag(d0, d1, d2)`.
    #[inline]
    pub const fn diagonal(d0: f64, d1: f64, d2: f64) -> Self {
        Self::from_rows([[d0, 0.0, 0.0], [0.0, d1, 0.0], [0.0, 0.0, d2]])
    }

    /// Row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.m[i])
    }

    /// Column `i`.
    #[inline]
    pub fn col(&self, i: usize) -> Vec3 {
        let [r0, r1, r2] = &self.m;
        Vec3::new(r0[i], r1[i], r2[i])
    }

    /// Transpose.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.m)
    }

    /// Determinant, as the triple product of the rows.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.row(0).dot(self.row(1).cross(self.row(2)))
    }

    /// Inverse, or `None` when |det| is below [`SINGULAR_EPSILON`] or not
    /// finite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colorimetry_math::Mat3;
    ///
    /// let m = Mat3::diagonal(2.0, 4.0, 8.0);
    /// let inv = m.inverse().unwrap();
    /// assert!((m * inv).approx_eq(&Mat3::IDENTITY, 1e-12));
    ///
    /// assert!(Mat3::ZERO.inverse().is_none());
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < SINGULAR_EPSILON {
            return None;
        }

        // Columns of the adjugate are cross products of row pairs
        let [r0, r1, r2] = [self.row(0), self.row(1), self.row(2)];
        let inv_det = 1.0 / det;
        Some(Self::from_col_vecs(
            r1.cross(r2) * inv_det,
            r2.cross(r0) * inv_det,
            r0.cross(r1) * inv_det,
        ))
    }

    /// `self * v`.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }

    /// `self * other`.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let cols = [other.col(0), other.col(1), other.col(2)];
        Self::from_rows([0, 1, 2].map(|i| {
            let row = self.row(i);
            cols.map(|c| row.dot(c))
        }))
    }

    /// True when every element is within `eps` of the other matrix.
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= eps)
    }

    /// No NaN or infinite entries.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// To glam's column-major `DMat3`.
    #[inline]
    pub fn to_glam(&self) -> glam::DMat3 {
        glam::DMat3::from_cols_array_2d(&self.transpose().m)
    }

    /// From glam's `DMat3`.
    #[inline]
    pub fn from_glam(m: glam::DMat3) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}

impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const SAMPLE: Mat3 = Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);

    #[test]
    fn test_mat3_identity() {
        let v = Vec3::new(0.25, -4.0, 9.5);
        assert_eq!(Mat3::IDENTITY * v, v);
    }

    #[test]
    fn test_mat3_diagonal() {
        let m = Mat3::diagonal(2.0, 3.0, 4.0);
        assert_eq!(m * Vec3::ONE, Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_mat3_transpose() {
        let t = SAMPLE.transpose();
        assert_eq!(t.row(1), SAMPLE.col(1));
        assert_eq!(t.col(2), Vec3::new(5.0, 6.0, 0.0));
        assert_eq!(t.transpose(), SAMPLE);
    }

    #[test]
    fn test_mat3_cols() {
        let m = Mat3::from_col_vecs(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(4.0, 5.0, 6.0),
            Vec3::new(7.0, 8.0, 9.0),
        );
        assert_eq!(m.row(0), Vec3::new(1.0, 4.0, 7.0));
        assert_eq!(m.col(2), Vec3::new(7.0, 8.0, 9.0));
    }

    #[test]
    fn test_mat3_determinant() {
        assert_abs_diff_eq!(SAMPLE.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mat3_inverse() {
        let inv = SAMPLE.inverse().unwrap();
        assert!((SAMPLE * inv).approx_eq(&Mat3::IDENTITY, 1e-12));
        assert!((inv * SAMPLE).approx_eq(&Mat3::IDENTITY, 1e-12));
    }

    #[test]
    fn test_mat3_inverse_matches_glam() {
        let ours = SAMPLE.inverse().unwrap();
        let theirs = Mat3::from_glam(SAMPLE.to_glam().inverse());
        assert!(ours.approx_eq(&theirs, 1e-12));
    }

    #[test]
    fn test_mat3_glam_layout() {
        let g = SAMPLE.to_glam();
        let v = Vec3::new(0.5, -1.0, 2.0);
        assert_eq!(Vec3::from_glam(g * v.to_glam()), SAMPLE * v);
    }

    #[test]
    fn test_mat3_singular() {
        let m = Mat3::from_rows([
            [1.0, 2.0, 3.0],
            [-0.5, -1.0, -1.5], // parallel to the first row
            [1.0, 1.0, 1.0],
        ]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_mat3_non_finite_is_singular() {
        let mut m = Mat3::IDENTITY;
        m.m[1][1] = f64::NAN;
        assert!(!m.is_finite());
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_mat3_mul_mat() {
        let a = Mat3::diagonal(2.0, 2.0, 2.0);
        let b = Mat3::diagonal(3.0, 3.0, 3.0);
        assert_eq!(a * b, Mat3::diagonal(6.0, 6.0, 6.0));
    }

    #[test]
    fn test_mat3_composition_order() {
        let v = Vec3::new(1.0, -2.0, 0.5);
        let b = Mat3::diagonal(1.0, 2.0, 3.0);
        assert_eq!((SAMPLE * b) * v, SAMPLE * (b * v));
    }
}
