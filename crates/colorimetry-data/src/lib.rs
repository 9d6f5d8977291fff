//! # colorimetry-data
//!
//! Reference data for colorimetric conversions.
//!
//! - [`ReferenceData`] - illuminant white points and RGB working-space
//!   primaries, loaded from CSV tables (embedded copies ship with the crate)
//! - [`ReferenceData::rgb_to_xyz_matrix`] - RGB/XYZ matrices derived from
//!   primaries, optionally Bradford-adapted to D50
//! - [`ReferenceData::adapt`] - chromatic adaptation between tabulated illuminants
//! - [`RgbXyzTransform`] - a derived forward/inverse matrix pair
//!
//! # Usage
//!
//! ```rust
//! use colorimetry_core::{Illuminant, RgbSpaceId};
//! use colorimetry_data::{ReferenceData, RgbXyzTransform};
//! use colorimetry_math::Vec3;
//!
//! let data = ReferenceData::builtin().unwrap();
//! assert_eq!(data.rgb_spaces().len(), 16);
//!
//! let t = RgbXyzTransform::new(&data, RgbSpaceId::Srgb, false).unwrap();
//! let xyz = t.to_xyz(Vec3::ONE);
//! assert!((xyz.y - 1.0).abs() < 1e-12);
//! assert!((xyz.x - data.white_point(Illuminant::D65).unwrap().x).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod primaries;
pub mod store;
pub mod table;

pub use error::{DataError, DataResult};
pub use primaries::{primaries_matrix, xy_to_xyz, RgbXyzTransform};
pub use store::{ReferenceData, BUILTIN_ILLUMINANTS, BUILTIN_RGB_SPACES};
pub use table::{parse_illuminants, parse_rgb_spaces, IlluminantRecord, RgbSpaceRecord};
