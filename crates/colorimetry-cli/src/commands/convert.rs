//! Single-value conversion command.

use crate::ConvertArgs;
use anyhow::{bail, Context, Result};
use colorimetry_core::SpaceKind;
use colorimetry_spaces::{AnyColor, EngineConfig, Hex};
use tracing::{debug, trace};

/// Runs the convert command.
///
/// `--space` and `--no-adapt` override the config's working space.
pub fn run(args: ConvertArgs, config: &EngineConfig, verbose: u8) -> Result<()> {
    trace!(from = %args.from, to = %args.to, "convert::run");

    let mut config = config.clone();
    if let Some(space) = args.space {
        config.working_space = space.name().to_string();
    }
    if args.no_adapt {
        config.adapt_to_d50 = false;
    }

    let conv = config.build().context("Failed to build converter")?;
    let color = parse_color(args.from, &args.values)?;
    debug!(%color, space = %conv.context().space(), "parsed input");

    let out = conv.convert(&color, args.to);

    if verbose > 0 {
        println!("{} -> {}", color, out);
    } else {
        println!("{}", out);
    }
    Ok(())
}

/// Reads a value of `kind` from the command-line words.
fn parse_color(kind: SpaceKind, values: &[String]) -> Result<AnyColor> {
    if kind == SpaceKind::Hex {
        let [text] = values else {
            bail!("HEX takes one value, got {}", values.len());
        };
        let hex: Hex = text.parse()?;
        return Ok(hex.into());
    }

    let [a, b, c] = values else {
        bail!("{} takes three components, got {}", kind, values.len());
    };
    let num = |s: &String| {
        s.parse::<f64>()
            .with_context(|| format!("Invalid component: {}", s))
    };
    Ok(AnyColor::from_components(kind, [num(a)?, num(b)?, num(c)?]))
}
