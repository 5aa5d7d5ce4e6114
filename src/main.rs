//! CLI entry point for generating and sequencing brick walls

use brickwork::io::cli::{BuildRunner, Cli};
use clap::Parser;

fn main() -> brickwork::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    BuildRunner::new(cli).run().map(|_| ())
}
