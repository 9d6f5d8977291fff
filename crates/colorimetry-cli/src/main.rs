//! colorimetry - color conversion and reference-matrix CLI
//!
//! Converts single values between color spaces and prints the matrices
//! the conversions are built from.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use colorimetry_core::{Illuminant, RgbSpaceId, SpaceKind};
use colorimetry_math::AdaptationMethod;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "colorimetry")]
#[command(author, version, about = "Color conversion and reference-matrix tool")]
#[command(long_about = "
Converts color values between RGB, XYZ, LMS, OKLAB, HSL, HSV, RGB255 and HEX,
and prints the adaptation and primaries matrices behind the conversions.

Examples:
  colorimetry convert --from rgb --to oklab 1 0.5 0
  colorimetry convert --from hex --to hsl '#FF8800'
  colorimetry convert --from xyz --to rgb 0.3 0.4 0.5 --space 'Adobe RGB (1998)' --no-adapt
  colorimetry adapt D65 D50 --method von-kries
  colorimetry matrix sRGB --adapt-d50 --inverse
  colorimetry list spaces
  colorimetry --config engine.yaml list illuminants
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Engine configuration (YAML); built-in tables and sRGB when absent
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one color value
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Print a chromatic adaptation matrix
    Adapt(AdaptArgs),

    /// Print an RGB to XYZ matrix
    #[command(visible_alias = "m")]
    Matrix(MatrixArgs),

    /// List the loaded reference tables
    #[command(visible_alias = "ls")]
    List(ListArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Source space: rgb, xyz, lms, oklab, hsl, hslstd, hsv, hsvstd, rgb255, hex
    #[arg(short, long)]
    from: SpaceKind,

    /// Target space
    #[arg(short, long)]
    to: SpaceKind,

    /// Three components, or a single `#RRGGBB` string for hex
    #[arg(required = true, num_args = 1..=3, allow_hyphen_values = true)]
    values: Vec<String>,

    /// RGB working space (overrides the config)
    #[arg(short, long)]
    space: Option<RgbSpaceId>,

    /// Keep XYZ relative to the working space's own white
    #[arg(long)]
    no_adapt: bool,
}

#[derive(Args)]
struct AdaptArgs {
    /// Source illuminant
    src: Illuminant,

    /// Destination illuminant
    dst: Illuminant,

    /// Cone response: bradford, von-kries, xyz
    #[arg(short, long, default_value = "bradford")]
    method: AdaptationMethod,
}

#[derive(Args)]
struct MatrixArgs {
    /// RGB working space (defaults to the config's)
    space: Option<RgbSpaceId>,

    /// Print the XYZ to RGB matrix instead
    #[arg(short, long)]
    inverse: bool,

    /// Bradford-adapt the space to D50
    #[arg(long)]
    adapt_d50: bool,
}

#[derive(Args)]
struct ListArgs {
    /// What to list
    #[arg(value_enum)]
    what: ListKind,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ListKind {
    Illuminants,
    Spaces,
    Kinds,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, &config, cli.verbose),
        Commands::Adapt(args) => commands::adapt::run(args, &config, cli.verbose),
        Commands::Matrix(args) => commands::matrix::run(args, &config, cli.verbose),
        Commands::List(args) => commands::list::run(args, &config),
    }
}
