//! # colorimetry-core
//!
//! Identifiers shared by every colorimetry crate.
//!
//! - [`Illuminant`] - the CIE reference illuminants with tabulated white points
//! - [`RgbSpaceId`] - the named RGB working spaces with tabulated primaries
//! - [`SpaceKind`] - the closed set of value spaces the conversion engine knows
//!
//! All three are closed enumerations. Names round-trip through
//! [`std::fmt::Display`] and [`std::str::FromStr`], so tables loaded from text
//! and values typed on a command line resolve to the same identifiers.
//!
//! ```text
//! colorimetry-core (this crate)
//!    ^
//!    +-- colorimetry-math (matrices, chromatic adaptation)
//!    +-- colorimetry-data (reference tables, RGB/XYZ matrices)
//!    +-- colorimetry-spaces (color values and conversions)
//!    +-- colorimetry-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod ids;
pub mod kind;

pub use error::{CoreError, CoreResult};
pub use ids::{Illuminant, RgbSpaceId};
pub use kind::{Geometry, SpaceKind};
