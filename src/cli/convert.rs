//! `.env` to XML conversion command

use std::path::Path;

use anyhow::Result;
use console::style;

use crate::pipeline::{self, resolve_output_path, ConvertError};
use crate::report::ConversionReport;
use crate::utils::{
    create_spinner, finish_and_clear, print_error, print_info, print_paths, print_success,
    print_warning,
};

/// Outcome of [`run_convert`] once errors have been reported.
#[derive(Debug)]
pub enum ConvertOutcome {
    Converted(ConversionReport),
    /// Read or write failure that was printed and swallowed
    Failed(ConvertError),
}

/// Run the conversion and report its result on stdout.
///
/// # Arguments
/// * `input` - Path to the input `.env` file
/// * `output` - Optional output path. If not provided, writes `output.xml` next to the input
/// * `show_summary` - Print the summary table after a successful conversion
///
/// Malformed lines are warned about as soon as the input is parsed. A
/// missing input file is returned as an error. Any later I/O failure is
/// printed and yields `ConvertOutcome::Failed` instead.
pub fn run_convert(
    input: &Path,
    output: Option<&Path>,
    show_summary: bool,
) -> Result<ConvertOutcome> {
    println!("\n {} Converting .env to XML", style("◆").cyan().bold());
    print_paths(input, &resolve_output_path(input, output));

    let spinner = create_spinner("Writing XML...");
    let result = pipeline::convert_with(input, output, |skipped| {
        spinner.suspend(|| print_warning(&skipped.to_string()));
    });
    finish_and_clear(&spinner);

    let report = match result {
        Ok(report) => report,
        Err(err) if err.is_fatal() => return Err(err.into()),
        Err(err) => {
            tracing::debug!(path = %err.path().display(), error = ?err, "conversion failed");
            print_error(&err.to_string());
            return Ok(ConvertOutcome::Failed(err));
        }
    };

    if report.entries == 0 {
        print_info("No KEY=VALUE entries found; wrote an empty environment");
    }
    print_success(&format!(
        "Successfully converted '{}' to '{}'",
        report.input.display(),
        report.output.display()
    ));

    if show_summary {
        report.display();
    }

    Ok(ConvertOutcome::Converted(report))
}
