//! # colorimetry-math
//!
//! Linear algebra for colorimetric transforms.
//!
//! - [`Mat3`] - 3x3 matrices for RGB/XYZ, LMS and adaptation transforms
//! - [`Vec3`] - 3D vectors for tristimulus and RGB triplets
//! - [`AdaptationMethod`] and [`adapt_matrix`] - von Kries-type chromatic adaptation
//!
//! # Design
//!
//! Everything is `f64`: derived matrices are composed and inverted several
//! times per conversion, and round trips are expected to hold to 1e-6.
//! Matrices are stored **row-major** and act on **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use colorimetry_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(1.0, 0.5, 0.25);
//! let back = rgb_to_xyz.inverse().unwrap() * xyz;
//! assert!((back.y - 0.5).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `colorimetry-data` - primaries matrices, table-driven adaptation
//! - `colorimetry-spaces` - LMS and OKLAB fixed matrices

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod mat3;
mod vec3;

pub use adapt::*;
pub use mat3::*;
pub use vec3::*;
