//! File-level conversion: existence check, read, parse, write

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use tracing::{debug, info};

use super::error::ConvertError;
use super::model::{EnvDocument, MalformedLine};
use super::parser::parse_str;
use super::paths::resolve_output_path;
use super::xml::write_xml;
use crate::report::ConversionReport;

/// Convert the `.env` file at `input` into an XML document.
///
/// # Arguments
/// * `input` - Path to the `.env` file; must exist
/// * `output` - Optional output path. Defaults to `output.xml` next to the input
///
/// # Errors
/// * `ConvertError::NotFound` - input missing; nothing is written
/// * `ConvertError::Read` / `ConvertError::Write` - I/O failure after the existence check
///
/// Malformed lines are not errors; they are listed on the returned report.
pub fn convert(input: &Path, output: Option<&Path>) -> Result<ConversionReport, ConvertError> {
    convert_with(input, output, |_| {})
}

/// Like [`convert`], calling `on_malformed` for each skipped line as soon as
/// the input is parsed, before the output is written. Warnings therefore
/// reach the caller even when the write later fails.
pub fn convert_with<F>(
    input: &Path,
    output: Option<&Path>,
    mut on_malformed: F,
) -> Result<ConversionReport, ConvertError>
where
    F: FnMut(&MalformedLine),
{
    if !input.exists() {
        return Err(ConvertError::NotFound {
            path: input.to_path_buf(),
        });
    }

    let output_path = resolve_output_path(input, output);
    info!(input = %input.display(), output = %output_path.display(), "converting");

    let doc = read_input(input)?;
    for skipped in &doc.malformed {
        on_malformed(skipped);
    }
    write_xml_file(&doc, &output_path)?;

    info!(entries = doc.len(), malformed = doc.malformed.len(), "conversion finished");
    Ok(ConversionReport::new(input, &output_path, doc))
}

/// Read and parse an input file.
pub fn read_input(path: &Path) -> Result<EnvDocument, ConvertError> {
    let text = fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(bytes = text.len(), "read input");
    Ok(parse_str(&text))
}

/// Render `doc` and write it to `path`, replacing any existing file.
pub fn write_xml_file(doc: &EnvDocument, path: &Path) -> Result<(), ConvertError> {
    let to_write_error = |source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_write_error)?;
    write_xml(doc, BufWriter::new(file)).map_err(to_write_error)?;
    debug!(path = %path.display(), "wrote output");
    Ok(())
}
