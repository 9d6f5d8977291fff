//! The reference data store.
//!
//! [`ReferenceData`] holds the illuminant and RGB working-space tables. It is
//! built once (from the embedded tables or from files) and is read-only
//! afterwards, so one instance can be shared freely across threads.
//!
//! Lookups index dense arrays by the enumeration's position, so resolving an
//! identifier is O(1); resolving a name costs one scan of the closed name list.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

use colorimetry_core::{Illuminant, RgbSpaceId};
use colorimetry_math::Vec3;
use tracing::debug;

use crate::error::{DataError, DataResult};
use crate::table::{parse_illuminants, parse_rgb_spaces, IlluminantRecord, RgbSpaceRecord};

/// Built-in illuminant table (Y normalised to 1).
pub const BUILTIN_ILLUMINANTS: &str = include_str!("../data/illuminant.csv");

/// Built-in RGB working-space table.
pub const BUILTIN_RGB_SPACES: &str = include_str!("../data/rgb.csv");

/// Immutable illuminant and working-space tables.
///
/// # Example
///
/// ```rust
/// use colorimetry_data::ReferenceData;
/// use colorimetry_core::Illuminant;
///
/// let data = ReferenceData::builtin().unwrap();
/// let d65 = data.white_point(Illuminant::D65).unwrap();
/// assert_eq!(d65.y, 1.0);
///
/// let srgb = data.rgb_space("sRGB").unwrap();
/// assert_eq!(srgb.white, Illuminant::D65);
/// assert!(data.rgb_space("Lab Gamut").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ReferenceData {
    illuminants: Vec<IlluminantRecord>,
    rgb_spaces: Vec<RgbSpaceRecord>,
    illuminant_index: [Option<usize>; Illuminant::COUNT],
    rgb_space_index: [Option<usize>; RgbSpaceId::COUNT],
}

impl ReferenceData {
    /// Builds the store from the tables embedded in this crate.
    pub fn builtin() -> DataResult<Self> {
        Self::from_readers(
            Cursor::new(BUILTIN_ILLUMINANTS),
            Cursor::new(BUILTIN_RGB_SPACES),
        )
    }

    /// Builds the store from two CSV files.
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(
        illuminants: P,
        rgb_spaces: Q,
    ) -> DataResult<Self> {
        debug!(
            illuminants = %illuminants.as_ref().display(),
            rgb_spaces = %rgb_spaces.as_ref().display(),
            "loading reference tables"
        );
        let ill = BufReader::new(File::open(illuminants.as_ref())?);
        let rgb = BufReader::new(File::open(rgb_spaces.as_ref())?);
        Self::from_readers(ill, rgb)
    }

    /// Builds the store from two CSV readers.
    pub fn from_readers<R1: BufRead, R2: BufRead>(
        illuminants: R1,
        rgb_spaces: R2,
    ) -> DataResult<Self> {
        Self::from_records(parse_illuminants(illuminants)?, parse_rgb_spaces(rgb_spaces)?)
    }

    /// Builds the store from already-parsed records.
    ///
    /// Rejects duplicate names and working spaces whose reference white is
    /// missing from the illuminant table.
    pub fn from_records(
        illuminants: Vec<IlluminantRecord>,
        rgb_spaces: Vec<RgbSpaceRecord>,
    ) -> DataResult<Self> {
        let mut illuminant_index = [None; Illuminant::COUNT];
        for (pos, rec) in illuminants.iter().enumerate() {
            let slot = &mut illuminant_index[rec.illuminant.index()];
            if slot.is_some() {
                return Err(DataError::Duplicate { name: rec.illuminant.name().to_string() });
            }
            *slot = Some(pos);
        }

        let mut rgb_space_index = [None; RgbSpaceId::COUNT];
        for (pos, rec) in rgb_spaces.iter().enumerate() {
            if illuminant_index[rec.white.index()].is_none() {
                return Err(DataError::IlluminantNotFound { illuminant: rec.white });
            }
            let slot = &mut rgb_space_index[rec.space.index()];
            if slot.is_some() {
                return Err(DataError::Duplicate { name: rec.space.name().to_string() });
            }
            *slot = Some(pos);
        }

        debug!(
            illuminants = illuminants.len(),
            rgb_spaces = rgb_spaces.len(),
            "reference tables loaded"
        );

        Ok(Self {
            illuminants,
            rgb_spaces,
            illuminant_index,
            rgb_space_index,
        })
    }

    /// Illuminant record by identifier.
    pub fn illuminant_record(&self, illuminant: Illuminant) -> DataResult<&IlluminantRecord> {
        self.illuminant_index[illuminant.index()]
            .map(|pos| &self.illuminants[pos])
            .ok_or(DataError::IlluminantNotFound { illuminant })
    }

    /// Illuminant record by name.
    pub fn illuminant(&self, name: &str) -> DataResult<&IlluminantRecord> {
        self.illuminant_record(name.parse()?)
    }

    /// White point tristimulus values of an illuminant.
    #[inline]
    pub fn white_point(&self, illuminant: Illuminant) -> DataResult<Vec3> {
        Ok(self.illuminant_record(illuminant)?.xyz)
    }

    /// Working-space record by identifier.
    pub fn rgb_space_record(&self, space: RgbSpaceId) -> DataResult<&RgbSpaceRecord> {
        self.rgb_space_index[space.index()]
            .map(|pos| &self.rgb_spaces[pos])
            .ok_or(DataError::RgbSpaceNotFound { space })
    }

    /// Working-space record by name.
    pub fn rgb_space(&self, name: &str) -> DataResult<&RgbSpaceRecord> {
        self.rgb_space_record(name.parse()?)
    }

    /// Loaded illuminants, in table order.
    pub fn illuminants(&self) -> &[IlluminantRecord] {
        &self.illuminants
    }

    /// Loaded working spaces, in table order.
    pub fn rgb_spaces(&self) -> &[RgbSpaceRecord] {
        &self.rgb_spaces
    }
}
