//! RGB/XYZ matrix generation and table-driven chromatic adaptation.
//!
//! # RGB to XYZ
//!
//! A working space is fixed by the xy chromaticities of its primaries and by
//! its reference white. The RGB to XYZ matrix is derived from them:
//!
//! 1. Lift each primary to XYZ with Y = 1: `(x/y, 1, (1-x-y)/y)`
//! 2. Put the three as columns of `P`
//! 3. Solve `S = P^-1 * W` so RGB (1, 1, 1) lands on the white point `W`
//! 4. `M = P * diag(S)`
//!
//! # Adaptation to D50
//!
//! Working spaces referenced to another white can be Bradford-adapted to
//! D50, the ICC profile connection white: `M' = CAT(W -> D50) * M`.
//!
//! ```rust
//! use colorimetry_core::RgbSpaceId;
//! use colorimetry_data::ReferenceData;
//! use colorimetry_math::Vec3;
//!
//! let data = ReferenceData::builtin().unwrap();
//! let m = data.rgb_to_xyz_matrix(RgbSpaceId::Srgb).unwrap();
//!
//! // White (1,1,1) maps to the D65 white point
//! let white = m * Vec3::ONE;
//! assert!((white.x - 0.95047).abs() < 1e-12);
//! ```

use colorimetry_core::{Illuminant, RgbSpaceId};
use colorimetry_math::{adapt_matrix, AdaptationMethod, Mat3, Vec3};
use tracing::trace;

use crate::error::{DataError, DataResult};
use crate::store::ReferenceData;

/// Converts xy chromaticity to XYZ (with Y=1).
///
/// A zero `y` has no finite lift and yields the zero vector, which makes the
/// primaries matrix singular downstream.
pub fn xy_to_xyz(x: f64, y: f64) -> Vec3 {
    if y == 0.0 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Derives the RGB to XYZ matrix from primaries and a white point.
///
/// Fails with [`DataError::SingularMatrix`] when the primaries are coplanar
/// with the origin.
pub fn primaries_matrix(primaries: [(f64, f64); 3], white: Vec3) -> DataResult<Mat3> {
    let [r, g, b] = primaries.map(|(x, y)| xy_to_xyz(x, y));

    // Build matrix from primaries as columns
    let p = Mat3::from_col_vecs(r, g, b);

    // Solve for scaling factors: P * S = W
    let p_inv = p.inverse().ok_or_else(|| DataError::SingularMatrix {
        context: format!("primaries {:?}", primaries),
    })?;
    let s = p_inv * white;

    // Scale each column by the corresponding factor
    Ok(Mat3::from_col_vecs(r * s.x, g * s.y, b * s.z))
}

impl ReferenceData {
    /// Chromatic adaptation matrix from one tabulated illuminant to another.
    ///
    /// The result maps tristimulus values referenced to `src` onto the same
    /// color referenced to `dst`. `src == dst` gives the identity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colorimetry_core::Illuminant;
    /// use colorimetry_data::ReferenceData;
    /// use colorimetry_math::{AdaptationMethod, Mat3};
    ///
    /// let data = ReferenceData::builtin().unwrap();
    /// let m = data.adapt(Illuminant::D65, Illuminant::D65, AdaptationMethod::VonKries).unwrap();
    /// assert_eq!(m, Mat3::IDENTITY);
    /// ```
    pub fn adapt(
        &self,
        src: Illuminant,
        dst: Illuminant,
        method: AdaptationMethod,
    ) -> DataResult<Mat3> {
        if src == dst {
            return Ok(Mat3::IDENTITY);
        }
        let ws = self.white_point(src)?;
        let wd = self.white_point(dst)?;
        let m = adapt_matrix(method, ws, wd).ok_or_else(|| DataError::SingularMatrix {
            context: format!("{} adaptation {} -> {}", method, src, dst),
        })?;
        trace!(%src, %dst, %method, ?m, "adaptation matrix");
        Ok(m)
    }

    /// [`adapt`](Self::adapt) with illuminants given by name.
    pub fn adapt_by_name(
        &self,
        src: &str,
        dst: &str,
        method: AdaptationMethod,
    ) -> DataResult<Mat3> {
        self.adapt(src.parse()?, dst.parse()?, method)
    }

    /// RGB to XYZ matrix of a working space, relative to its own reference white.
    pub fn rgb_to_xyz_matrix(&self, space: RgbSpaceId) -> DataResult<Mat3> {
        let rec = self.rgb_space_record(space)?;
        let white = self.white_point(rec.white)?;
        let m = primaries_matrix(rec.primaries(), white)?;
        trace!(%space, ?m, "rgb to xyz matrix");
        Ok(m)
    }

    /// [`rgb_to_xyz_matrix`](Self::rgb_to_xyz_matrix) with the space given by name.
    pub fn rgb_to_xyz_matrix_by_name(&self, name: &str) -> DataResult<Mat3> {
        self.rgb_to_xyz_matrix(name.parse()?)
    }

    /// RGB to XYZ matrix, Bradford-adapted to D50 when requested.
    ///
    /// Spaces already referenced to D50 are returned unadapted.
    pub fn rgb_to_xyz_matrix_adapted(
        &self,
        space: RgbSpaceId,
        adapt_to_d50: bool,
    ) -> DataResult<Mat3> {
        let m = self.rgb_to_xyz_matrix(space)?;
        let white = self.rgb_space_record(space)?.white;
        if !adapt_to_d50 || white == Illuminant::D50 {
            return Ok(m);
        }
        let cat = self.adapt(white, Illuminant::D50, AdaptationMethod::Bradford)?;
        Ok(cat * m)
    }

    /// XYZ to RGB matrix: the inverse of
    /// [`rgb_to_xyz_matrix_adapted`](Self::rgb_to_xyz_matrix_adapted).
    pub fn xyz_to_rgb_matrix(&self, space: RgbSpaceId, adapt_to_d50: bool) -> DataResult<Mat3> {
        Ok(RgbXyzTransform::new(self, space, adapt_to_d50)?.inverse)
    }
}

/// Forward and inverse matrix of one working space, derived once.
///
/// Batch conversions hold one of these instead of re-deriving both matrices
/// per value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbXyzTransform {
    /// Working space the matrices belong to.
    pub space: RgbSpaceId,
    /// Whether the matrices include Bradford adaptation to D50.
    pub adapt_to_d50: bool,
    /// RGB to XYZ.
    pub forward: Mat3,
    /// XYZ to RGB.
    pub inverse: Mat3,
}

impl RgbXyzTransform {
    /// Derives both matrices.
    pub fn new(data: &ReferenceData, space: RgbSpaceId, adapt_to_d50: bool) -> DataResult<Self> {
        let forward = data.rgb_to_xyz_matrix_adapted(space, adapt_to_d50)?;
        let inverse = forward.inverse().ok_or_else(|| DataError::SingularMatrix {
            context: format!("rgb to xyz matrix of {}", space),
        })?;
        Ok(Self { space, adapt_to_d50, forward, inverse })
    }

    /// Linear RGB to XYZ.
    #[inline]
    pub fn to_xyz(&self, rgb: Vec3) -> Vec3 {
        self.forward * rgb
    }

    /// XYZ to linear RGB.
    #[inline]
    pub fn to_rgb(&self, xyz: Vec3) -> Vec3 {
        self.inverse * xyz
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{IlluminantRecord, RgbSpaceRecord};
    use approx::assert_abs_diff_eq;

    fn data() -> ReferenceData {
        ReferenceData::builtin().unwrap()
    }

    #[test]
    fn test_srgb_matrix() {
        let m = data().rgb_to_xyz_matrix(RgbSpaceId::Srgb).unwrap();

        // Lindbloom's sRGB (D65) matrix
        let expected = Mat3::from_rows([
            [0.4124564, 0.3575761, 0.1804375],
            [0.2126729, 0.7151522, 0.0721750],
            [0.0193339, 0.1191920, 0.9503041],
        ]);
        assert!(m.approx_eq(&expected, 1e-6), "{:?}", m);
    }

    #[test]
    fn test_srgb_adapted_matrix() {
        let m = data().rgb_to_xyz_matrix_adapted(RgbSpaceId::Srgb, true).unwrap();

        // Lindbloom's Bradford-adapted sRGB (D50) matrix
        let expected = Mat3::from_rows([
            [0.4360747, 0.3850649, 0.1430804],
            [0.2225045, 0.7168786, 0.0606169],
            [0.0139322, 0.0971045, 0.7141733],
        ]);
        assert!(m.approx_eq(&expected, 1e-5), "{:?}", m);
    }

    #[test]
    fn test_white_point_for_every_space() {
        let data = data();
        for rec in data.rgb_spaces() {
            let m = data.rgb_to_xyz_matrix(rec.space).unwrap();
            let white = m * Vec3::ONE;
            let expected = data.white_point(rec.white).unwrap();
            assert_abs_diff_eq!(white.x, expected.x, epsilon = 1e-12);
            assert_abs_diff_eq!(white.y, expected.y, epsilon = 1e-12);
            assert_abs_diff_eq!(white.z, expected.z, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_adapted_white_is_d50() {
        let data = data();
        let d50 = data.white_point(Illuminant::D50).unwrap();
        for rec in data.rgb_spaces() {
            let m = data.rgb_to_xyz_matrix_adapted(rec.space, true).unwrap();
            let white = m * Vec3::ONE;
            assert_abs_diff_eq!(white.x, d50.x, epsilon = 1e-9);
            assert_abs_diff_eq!(white.z, d50.z, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_d50_space_is_not_adapted() {
        let data = data();
        let plain = data.rgb_to_xyz_matrix(RgbSpaceId::ProPhotoRgb).unwrap();
        let adapted = data.rgb_to_xyz_matrix_adapted(RgbSpaceId::ProPhotoRgb, true).unwrap();
        assert_eq!(plain, adapted);
    }

    #[test]
    fn test_transform_inverse() {
        let data = data();
        for space in RgbSpaceId::ALL {
            for adapt in [false, true] {
                let t = RgbXyzTransform::new(&data, space, adapt).unwrap();
                assert!((t.inverse * t.forward).approx_eq(&Mat3::IDENTITY, 1e-6), "{}", space);
            }
        }
    }

    #[test]
    fn test_transform_roundtrip() {
        let t = RgbXyzTransform::new(&data(), RgbSpaceId::AdobeRgb1998, true).unwrap();
        let rgb = Vec3::new(0.5, 0.3, 0.8);
        let back = t.to_rgb(t.to_xyz(rgb));
        assert_abs_diff_eq!(back.x, rgb.x, epsilon = 1e-12);
        assert_abs_diff_eq!(back.y, rgb.y, epsilon = 1e-12);
        assert_abs_diff_eq!(back.z, rgb.z, epsilon = 1e-12);
    }

    #[test]
    fn test_adapt_identity_all() {
        let data = data();
        for ill in Illuminant::ALL {
            for method in AdaptationMethod::ALL {
                assert_eq!(data.adapt(ill, ill, method).unwrap(), Mat3::IDENTITY);
            }
        }
    }

    #[test]
    fn test_adapt_maps_whites() {
        let data = data();
        let m = data.adapt(Illuminant::A, Illuminant::F7, AdaptationMethod::Bradford).unwrap();
        let w = m * data.white_point(Illuminant::A).unwrap();
        let f7 = data.white_point(Illuminant::F7).unwrap();
        assert_abs_diff_eq!(w.x, f7.x, epsilon = 1e-12);
        assert_abs_diff_eq!(w.z, f7.z, epsilon = 1e-12);
    }

    #[test]
    fn test_adapt_by_name() {
        let data = data();
        let m = data.adapt_by_name("D65", "D65", AdaptationMethod::Bradford).unwrap();
        assert_eq!(m, Mat3::IDENTITY);
        let err = data.adapt_by_name("D65", "D93", AdaptationMethod::Bradford).unwrap_err();
        assert!(err.is_lookup());
    }

    #[test]
    fn test_matrix_by_name() {
        let data = data();
        let m = data.rgb_to_xyz_matrix_by_name("sRGB").unwrap();
        assert_eq!(m, data.rgb_to_xyz_matrix(RgbSpaceId::Srgb).unwrap());
        assert!(data.rgb_to_xyz_matrix_by_name("Lab Gamut").unwrap_err().is_lookup());
    }

    #[test]
    fn test_collinear_primaries_are_fatal() {
        let bad = ReferenceData::from_records(
            vec![IlluminantRecord { illuminant: Illuminant::E, xyz: Vec3::ONE }],
            vec![RgbSpaceRecord {
                space: RgbSpaceId::CieRgb,
                white: Illuminant::E,
                red: (0.2, 0.3),
                green: (0.2, 0.3),
                blue: (0.15, 0.06),
            }],
        )
        .unwrap();
        let err = bad.rgb_to_xyz_matrix(RgbSpaceId::CieRgb).unwrap_err();
        assert!(err.is_fatal());
        assert!(!err.is_lookup());
    }

    #[test]
    fn test_zero_y_primary_is_fatal() {
        assert_eq!(xy_to_xyz(0.3, 0.0), Vec3::ZERO);
        let err = primaries_matrix([(0.64, 0.33), (0.3, 0.6), (0.15, 0.0)], Vec3::ONE).unwrap_err();
        assert!(err.is_fatal());
    }
}
