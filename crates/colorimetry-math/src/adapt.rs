//! Chromatic Adaptation Transforms (CAT).
//!
//! Matrices and functions for adapting tristimulus values between
//! illuminants (white points).
//!
//! # Algorithm
//!
//! All supported methods are von Kries-type transforms. A cone-response
//! matrix `MA` takes both white points into a cone space, the ratio of the
//! responses forms a diagonal gain `D`, and the transform is
//!
//! ```text
//! M = MA^-1 * D * MA
//! ```
//!
//! so that `M * W_src == W_dst`.
//!
//! # Supported Methods
//!
//! - [`AdaptationMethod::Bradford`] - sharpened cone space, the usual default
//! - [`AdaptationMethod::VonKries`] - Hunt-Pointer-Estevez cone space
//! - [`AdaptationMethod::XyzScaling`] - identity cone space, scales XYZ directly
//!
//! # Usage
//!
//! ```rust
//! use colorimetry_math::{adapt_matrix, AdaptationMethod, Vec3};
//!
//! let d65 = Vec3::new(0.95047, 1.0, 1.08883);
//! let d50 = Vec3::new(0.96422, 1.0, 0.82521);
//!
//! let m = adapt_matrix(AdaptationMethod::Bradford, d65, d50).unwrap();
//! let white = m * d65;
//! assert!((white.z - d50.z).abs() < 1e-12);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::{Mat3, Vec3};

/// Bradford cone-response matrix.
///
/// # Reference
///
/// Lam, K.M. (1985). Metamerism and Colour Constancy.
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Von Kries cone-response matrix (Hunt-Pointer-Estevez, D65-normalized).
pub const VON_KRIES: Mat3 = Mat3::from_rows([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.00000, 0.00000, 0.91822],
]);

/// XYZ scaling: the identity cone space.
pub const XYZ_SCALING: Mat3 = Mat3::IDENTITY;

/// Choice of cone-response model for chromatic adaptation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AdaptationMethod {
    /// Diagonal scaling in XYZ.
    XyzScaling,
    /// Bradford transform.
    #[default]
    Bradford,
    /// Von Kries transform.
    VonKries,
}

impl AdaptationMethod {
    /// Every method.
    pub const ALL: [AdaptationMethod; 3] = [Self::XyzScaling, Self::Bradford, Self::VonKries];

    /// Cone-response matrix `MA` for this method.
    #[inline]
    pub const fn cone_matrix(self) -> Mat3 {
        match self {
            Self::XyzScaling => XYZ_SCALING,
            Self::Bradford => BRADFORD,
            Self::VonKries => VON_KRIES,
        }
    }

    /// Short name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::XyzScaling => "XYZ",
            Self::Bradford => "Bradford",
            Self::VonKries => "VonKries",
        }
    }
}

impl fmt::Display for AdaptationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for AdaptationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "xyz" | "xyzscaling" => Ok(Self::XyzScaling),
            "bradford" => Ok(Self::Bradford),
            "vonkries" => Ok(Self::VonKries),
            other => Err(format!("unknown adaptation method: {}", other)),
        }
    }
}

/// Computes a chromatic adaptation matrix between two white points.
///
/// The resulting matrix takes XYZ values relative to `src_white` to the
/// corresponding XYZ values relative to `dst_white`.
///
/// Identical white points yield [`Mat3::IDENTITY`] exactly, whatever the
/// method.
///
/// Returns `None` when the cone matrix cannot be inverted or the source
/// white has a zero cone response (a degenerate white point).
pub fn adapt_matrix(method: AdaptationMethod, src_white: Vec3, dst_white: Vec3) -> Option<Mat3> {
    if src_white == dst_white {
        return Some(Mat3::IDENTITY);
    }

    let ma = method.cone_matrix();
    let ma_inv = ma.inverse()?;

    // Transform white points to cone space
    let src_cone = ma * src_white;
    let dst_cone = ma * dst_white;
    if src_cone.x == 0.0 || src_cone.y == 0.0 || src_cone.z == 0.0 {
        return None;
    }

    let gain = dst_cone / src_cone;
    let scale = Mat3::diagonal(gain.x, gain.y, gain.z);

    // Combine: MA^-1 * D * MA
    let m = ma_inv * scale * ma;
    m.is_finite().then_some(m)
}
