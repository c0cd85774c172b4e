//! csg2irmf - convert CSG files into IRMF shaders.
//!
//! Usage: `csg2irmf [--center] [--material M] [--units U] [-o OUT] FILES...`
//!
//! Each output is written next to its input with the extension swapped to
//! `.irmf`, unless `-o` names the output of a single input.

use anyhow::{bail, Result};
use clap::Parser;
use config::constants::{IrmfOptions, DEFAULT_MATERIAL, DEFAULT_UNITS};
use csg_cli::{convert_file, init_logging, output_path};
use std::path::PathBuf;
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "csg2irmf")]
#[command(about = "Convert CSG files into IRMF shaders")]
struct Args {
    /// CSG files to convert
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Move the model centre to the origin
    #[arg(long)]
    center: bool,

    /// Material name written to the IRMF header
    #[arg(long, default_value = DEFAULT_MATERIAL)]
    material: String,

    /// Units written to the IRMF header
    #[arg(long, default_value = DEFAULT_UNITS)]
    units: String,

    /// Output file (single input only)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();
    let options = IrmfOptions::new(&args.material, &args.units)?;
    if args.output.is_some() && args.files.len() > 1 {
        bail!("-o can only be used with a single input file");
    }

    let mut failed = 0;
    for file in &args.files {
        let output = args.output.clone().unwrap_or_else(|| output_path(file));
        if let Err(err) = convert_file(file, &output, args.center, &options) {
            error!("{err:#}");
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{failed} of {} files failed", args.files.len());
    }
    Ok(())
}
