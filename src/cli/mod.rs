//! CLI module - argument parsing, interactive prompts and the convert command

mod args;
pub mod convert;
mod prompts;

pub use args::Cli;
pub use convert::{run_convert, ConvertOutcome};
pub use prompts::*;
