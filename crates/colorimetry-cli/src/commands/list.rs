//! Table listing command.

use crate::{ListArgs, ListKind};
use anyhow::{Context, Result};
use colorimetry_core::SpaceKind;
use colorimetry_data::ReferenceData;
use colorimetry_spaces::EngineConfig;

pub fn run(args: ListArgs, config: &EngineConfig) -> Result<()> {
    match args.what {
        ListKind::Kinds => list_kinds(),
        ListKind::Illuminants => list_illuminants(&load(config)?),
        ListKind::Spaces => list_spaces(&load(config)?),
    }
    Ok(())
}

fn load(config: &EngineConfig) -> Result<ReferenceData> {
    config.load_data().context("Failed to load reference tables")
}

fn list_kinds() {
    for kind in SpaceKind::ALL {
        println!("{:<8} {:?}", kind, kind.geometry());
    }
}

fn list_illuminants(data: &ReferenceData) {
    println!("{:<6} {:>9} {:>9} {:>9}", "Name", "X", "Y", "Z");
    for rec in data.illuminants() {
        let xyz = rec.xyz;
        println!("{:<6} {:>9.5} {:>9.5} {:>9.5}", rec.illuminant, xyz.x, xyz.y, xyz.z);
    }
}

fn list_spaces(data: &ReferenceData) {
    println!("{:<18} {:<5} {:>15} {:>15} {:>15}", "Name", "White", "Red", "Green", "Blue");
    for rec in data.rgb_spaces() {
        let [r, g, b] = rec.primaries().map(|(x, y)| format!("({:.4}, {:.4})", x, y));
        println!("{:<18} {:<5} {:>15} {:>15} {:>15}", rec.space, rec.white, r, g, b);
    }
}
