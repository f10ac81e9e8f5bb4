//! CLI entry point for the interlocking tile puzzle solver

use clap::Parser;
use interlock::io::cli::{Cli, PuzzleRunner, init_tracing};

fn main() -> interlock::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());
    let mut runner = PuzzleRunner::new(cli);
    let output = runner.run()?;
    #[allow(clippy::print_stdout)]
    {
        println!("{output}");
    }
    Ok(())
}
