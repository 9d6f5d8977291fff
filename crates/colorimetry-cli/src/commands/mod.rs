//! CLI command implementations

pub mod adapt;
pub mod convert;
pub mod list;
pub mod matrix;

use anyhow::{Context, Result};
use colorimetry_math::Mat3;
use colorimetry_spaces::EngineConfig;
use std::path::Path;
use tracing::debug;

/// Loads the engine config, or the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(p) => EngineConfig::from_file(p)
            .with_context(|| format!("Failed to load config: {}", p.display())),
        None => {
            debug!("no config given, using built-in tables");
            Ok(EngineConfig::default())
        }
    }
}

/// Formats a matrix one row per line.
pub fn format_matrix(m: &Mat3) -> String {
    (0..3)
        .map(|i| {
            let r = m.row(i);
            format!("{:>14.10} {:>14.10} {:>14.10}", r.x, r.y, r.z)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
