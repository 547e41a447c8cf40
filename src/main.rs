use anyhow::Result;
use clap::Parser;
use cuadre::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
