//! Chromatic adaptation matrix command.

use crate::AdaptArgs;
use anyhow::{Context, Result};
use colorimetry_spaces::EngineConfig;
use tracing::trace;

pub fn run(args: AdaptArgs, config: &EngineConfig, verbose: u8) -> Result<()> {
    trace!(src = %args.src, dst = %args.dst, method = %args.method, "adapt::run");

    let data = config.load_data().context("Failed to load reference tables")?;
    let m = data
        .adapt(args.src, args.dst, args.method)
        .with_context(|| format!("Cannot adapt {} -> {}", args.src, args.dst))?;

    if verbose > 0 {
        let src = data.white_point(args.src)?;
        let dst = data.white_point(args.dst)?;
        println!(
            "{} ({:.5}, {:.5}, {:.5}) -> {} ({:.5}, {:.5}, {:.5}), {}",
            args.src, src.x, src.y, src.z, args.dst, dst.x, dst.y, dst.z, args.method
        );
    }
    println!("{}", super::format_matrix(&m));
    Ok(())
}
