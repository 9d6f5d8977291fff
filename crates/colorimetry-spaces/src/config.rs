//! YAML engine configuration.
//!
//! Selects the reference tables and the default working space:
//!
//! ```yaml
//! illuminants: tables/illuminant.csv   # optional, built-in table when absent
//! rgb_spaces: tables/rgb.csv           # optional, built-in table when absent
//! working_space: Adobe RGB (1998)      # default: sRGB
//! adapt_to_d50: false                  # default: true
//! ```
//!
//! Relative table paths resolve against the directory of the config file.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

use colorimetry_core::RgbSpaceId;
use colorimetry_data::{ReferenceData, BUILTIN_ILLUMINANTS, BUILTIN_RGB_SPACES};
use serde::Deserialize;
use tracing::debug;

use crate::convert::Converter;
use crate::error::{ColorError, ColorResult};

/// Raw YAML structure.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    illuminants: Option<PathBuf>,
    #[serde(default)]
    rgb_spaces: Option<PathBuf>,
    #[serde(default)]
    working_space: Option<String>,
    #[serde(default)]
    adapt_to_d50: Option<bool>,
}

/// Engine configuration.
///
/// # Example
///
/// ```rust
/// use colorimetry_spaces::prelude::*;
///
/// let cfg = EngineConfig::from_yaml("working_space: ProPhoto RGB\nadapt_to_d50: false\n").unwrap();
/// let conv = cfg.build().unwrap();
/// assert_eq!(conv.context().space(), RgbSpaceId::ProPhotoRgb);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Illuminant table; built-in when `None`.
    pub illuminants: Option<PathBuf>,
    /// RGB working-space table; built-in when `None`.
    pub rgb_spaces: Option<PathBuf>,
    /// Default working space name.
    pub working_space: String,
    /// Bradford-adapt the working space to D50.
    pub adapt_to_d50: bool,
    working_dir: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            illuminants: None,
            rgb_spaces: None,
            working_space: RgbSpaceId::Srgb.name().to_string(),
            adapt_to_d50: true,
            working_dir: PathBuf::from("."),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> ColorResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ColorError::Config(format!("config file not found: {}", path.display())));
        }

        let content = std::fs::read_to_string(path)?;
        let working_dir = path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        debug!(path = %path.display(), "loading engine config");
        Self::from_yaml_str(&content, working_dir)
    }

    /// Loads configuration from YAML text; relative paths resolve against
    /// the current directory.
    pub fn from_yaml(yaml: &str) -> ColorResult<Self> {
        Self::from_yaml_str(yaml, PathBuf::from("."))
    }

    /// Loads configuration from YAML text with an explicit base directory.
    pub fn from_yaml_str(yaml: &str, working_dir: PathBuf) -> ColorResult<Self> {
        // An empty document is a valid, all-defaults config
        let raw: Option<RawConfig> = serde_yaml::from_str(yaml)?;
        let defaults = Self::default();
        let Some(raw) = raw else {
            return Ok(Self { working_dir, ..defaults });
        };
        Ok(Self {
            illuminants: raw.illuminants,
            rgb_spaces: raw.rgb_spaces,
            working_space: raw.working_space.unwrap_or(defaults.working_space),
            adapt_to_d50: raw.adapt_to_d50.unwrap_or(defaults.adapt_to_d50),
            working_dir,
        })
    }

    /// Directory relative table paths resolve against.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Resolves a table path against the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }

    /// Working space, parsed.
    pub fn working_space_id(&self) -> ColorResult<RgbSpaceId> {
        Ok(self.working_space.parse()?)
    }

    /// Loads the reference tables this config names.
    pub fn load_data(&self) -> ColorResult<ReferenceData> {
        let ill = self.open_table(self.illuminants.as_deref(), BUILTIN_ILLUMINANTS)?;
        let rgb = self.open_table(self.rgb_spaces.as_deref(), BUILTIN_RGB_SPACES)?;
        Ok(ReferenceData::from_readers(ill, rgb)?)
    }

    /// Loads the tables and derives the working-space context.
    pub fn build(&self) -> ColorResult<Converter> {
        let space = self.working_space_id()?;
        let data = self.load_data()?;
        debug!(%space, adapt_to_d50 = self.adapt_to_d50, "building converter");
        Converter::new(data, space, self.adapt_to_d50)
    }

    fn open_table(
        &self,
        path: Option<&Path>,
        builtin: &'static str,
    ) -> ColorResult<Box<dyn BufRead>> {
        match path {
            Some(p) => {
                let full = self.resolve(p);
                debug!(path = %full.display(), "opening table");
                Ok(Box::new(BufReader::new(File::open(&full)?)))
            }
            None => Ok(Box::new(Cursor::new(builtin))),
        }
    }
}
