//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// envxml - Convert a .env file into an XML environment document
#[derive(Parser, Debug)]
#[command(name = "envxml")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input .env file path.
    /// If not provided, it is requested interactively.
    pub input: Option<PathBuf>,

    /// Output XML file path.
    /// Defaults to 'output.xml' in the input file's directory.
    pub output: Option<PathBuf>,

    /// Print a summary table after converting
    #[arg(long, default_value = "false")]
    pub summary: bool,

    /// Increase diagnostic log output on stderr (-v, -vv, -vvv).
    /// RUST_LOG overrides this when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable diagnostic log output
    #[arg(short, long, default_value = "false", conflicts_with = "verbose")]
    pub quiet: bool,
}
