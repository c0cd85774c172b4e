//! csg-repl - interactive interpreter for the CSG scripting language.

use anyhow::Result;
use clap::Parser;
use csg_cli::{init_logging, run_repl};
use std::io;

#[derive(Parser, Debug)]
#[command(name = "csg-repl")]
#[command(about = "Interactive interpreter for the CSG scripting language")]
struct Args {}

fn main() -> Result<()> {
    init_logging();
    let _args = Args::parse();

    println!("This is the CSG interpreter. Feel free to type in commands (Ctrl-D to quit).");
    run_repl(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
