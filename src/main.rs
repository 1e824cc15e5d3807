use clap::Parser;

use conekit::{init_logging, run, Cli};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let cli = Cli::parse();
    run(&cli)
}
