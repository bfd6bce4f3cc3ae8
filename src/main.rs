//! envxml: `.env` to XML CLI Tool
//!
//! Converts a `.env` file into an XML document with one `env` element per
//! `KEY=VALUE` line.

use anyhow::Result;
use clap::Parser;

use envxml::cli::{prompt_input_path, prompt_output_path, run_convert, Cli};
use envxml::utils::{init_logging, print_banner};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    // Fall back to interactive prompts when no input was given
    let (input, output) = match cli.input.clone() {
        Some(input) => (input, cli.output.clone()),
        None => {
            print_banner(env!("CARGO_PKG_VERSION"));
            (prompt_input_path()?, prompt_output_path()?)
        }
    };

    run_convert(&input, output.as_deref(), cli.summary)?;
    Ok(())
}
