//! # colorimetry-spaces
//!
//! Color values, their arithmetic, and conversions between them.
//!
//! # Spaces
//!
//! | Type | Kind | Algebra |
//! |------|------|---------|
//! | [`Rgb`] | linear device RGB | Cartesian |
//! | [`Xyz`] | CIE 1931 XYZ | Cartesian |
//! | [`Lms`] | cone response | Cartesian |
//! | [`Oklab`] | OKLAB | Cartesian |
//! | [`Hsl`], [`HslStd`] | hue/saturation/lightness | Cylindrical |
//! | [`Hsv`], [`HsvStd`] | hue/saturation/value | Cylindrical |
//! | [`Rgb255`] | 8-bit RGB | integer Cartesian |
//! | [`Hex`] | `#RRGGBB` | none |
//!
//! The XYZ family needs a working space, carried by [`RgbContext`]. The
//! [`Converter`] routes [`AnyColor`] values between any two kinds, and
//! [`EngineConfig`] builds one from YAML.
//!
//! # Quick Start
//!
//! ```rust
//! use colorimetry_spaces::prelude::*;
//!
//! let ctx = RgbContext::builtin().unwrap();
//!
//! let orange = Rgb::new(1.0, 0.5, 0.0);
//! let lab = orange.to_oklab(&ctx);
//! let back = lab.to_rgb(&ctx);
//! assert!((back.g() - 0.5).abs() < 1e-9);
//!
//! assert_eq!(orange.to_hex().to_string(), "#FF8000");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod algebra;
pub mod any;
pub mod config;
pub mod convert;
pub mod error;
pub mod hex;
pub mod hsl;
pub mod hsv;
pub mod lms;
pub mod oklab;
pub mod rgb;
pub mod rgb255;
pub mod xyz;

pub use algebra::{Cartesian, ColorSpace, Cylindrical, COMPONENTS};
pub use any::AnyColor;
pub use config::EngineConfig;
pub use convert::{Converter, RgbContext};
pub use error::{ColorError, ColorResult};
pub use hex::Hex;
pub use hsl::{Hsl, HslStd};
pub use hsv::{Hsv, HsvStd};
pub use lms::Lms;
pub use oklab::Oklab;
pub use rgb::Rgb;
pub use rgb255::Rgb255;
pub use xyz::Xyz;

/// Everything needed for typical use.
pub mod prelude {
    pub use crate::{
        AnyColor, Cartesian, ColorError, ColorResult, ColorSpace, Converter, Cylindrical,
        EngineConfig, Hex, Hsl, HslStd, Hsv, HsvStd, Lms, Oklab, Rgb, Rgb255, RgbContext, Xyz,
    };
    pub use colorimetry_core::{Illuminant, RgbSpaceId, SpaceKind};
    pub use colorimetry_math::{AdaptationMethod, Mat3, Vec3};
}
