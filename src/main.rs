//! CLI entry point for the puzzle runner

use advent::io::cli::{Cli, PuzzleRunner};
use clap::Parser;

fn main() -> advent::Result<()> {
    let cli = Cli::parse();
    let mut runner = PuzzleRunner::new(cli);
    runner.run()
}
