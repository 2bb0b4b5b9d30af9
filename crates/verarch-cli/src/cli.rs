//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "verarch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source to verify: an archive (.zip, .tar, .tar.gz), a directory,
    /// or '-' for a tar stream on standard input
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Reference directory the source is verified against
    #[arg(short = 'C', long = "reference", value_name = "DIR", default_value = ".")]
    pub reference: PathBuf,

    /// Report every mismatch instead of stopping at the first
    #[arg(short = 'k', long)]
    pub keep_going: bool,

    /// Maximum number of components allowed in an entry path
    #[arg(long, default_value = "32", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_path_depth: u32,

    /// Suppress per-path output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Also print post-walk confirmations for covered reference files
    #[arg(short, long)]
    pub verbose: bool,

    /// Output a machine-readable summary in JSON format
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Builds the core configuration from the parsed flags.
    pub fn verify_config(&self) -> verarch_core::VerifyConfig {
        verarch_core::VerifyConfig {
            fail_fast: !self.keep_going,
            max_path_depth: self.max_path_depth as usize,
        }
    }
}
