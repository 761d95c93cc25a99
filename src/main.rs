use anyhow::Result;
use clap::Parser;

use primebench::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
