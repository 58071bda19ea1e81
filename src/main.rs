//! CLI entry point for the edge-matching mosaic generator

use clap::Parser;
use mosaic::io::cli::{Cli, Runner};

// The rendered grid is the program's output
#[allow(clippy::print_stdout)]
fn main() -> mosaic::Result<()> {
    let cli = Cli::parse();
    let mut runner = Runner::new(cli);
    let report = runner.run()?;
    print!("{}", report.rendering);
    Ok(())
}
