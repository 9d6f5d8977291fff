//! RGB/XYZ matrix command.

use crate::MatrixArgs;
use anyhow::{Context, Result};
use colorimetry_spaces::EngineConfig;
use tracing::{debug, trace};

pub fn run(args: MatrixArgs, config: &EngineConfig, verbose: u8) -> Result<()> {
    trace!(inverse = args.inverse, adapt_d50 = args.adapt_d50, "matrix::run");

    let space = match args.space {
        Some(s) => s,
        None => config.working_space_id()?,
    };
    let data = config.load_data().context("Failed to load reference tables")?;
    debug!(%space, "deriving matrix");

    let m = if args.inverse {
        data.xyz_to_rgb_matrix(space, args.adapt_d50)
    } else {
        data.rgb_to_xyz_matrix_adapted(space, args.adapt_d50)
    }
    .with_context(|| format!("Cannot derive matrix for {}", space))?;

    if verbose > 0 {
        let record = data.rgb_space_record(space)?;
        let dir = if args.inverse { "XYZ -> RGB" } else { "RGB -> XYZ" };
        let white = if args.adapt_d50 {
            "D50 (adapted)".to_string()
        } else {
            record.white.to_string()
        };
        println!("{} {}, white {}", space, dir, white);
    }
    println!("{}", super::format_matrix(&m));
    Ok(())
}
