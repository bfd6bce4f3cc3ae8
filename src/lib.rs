//! envxml: `.env` to XML conversion library
//!
//! Parses `KEY=VALUE` lines (skipping blanks and `#` comments) and renders
//! them as `<env name=".." value=".." />` elements under `<environment>`.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;

pub use pipeline::{convert, ConvertError, EnvDocument, EnvEntry, MalformedLine};
pub use report::ConversionReport;
