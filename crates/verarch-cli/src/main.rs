//! Verarch CLI - Command-line utility for byte-exact archive verification
//! against a reference directory.

mod cli;
mod error;
mod output;
mod run;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let mut formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    run::execute(&cli, &mut *formatter)
}
