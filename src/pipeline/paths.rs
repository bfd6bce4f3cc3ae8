//! Output path derivation

use std::path::{Path, PathBuf};

/// File name used when no output path is given.
pub const DEFAULT_OUTPUT_NAME: &str = "output.xml";

/// `<directory-of-input>/output.xml`, or `./output.xml` when the input has
/// no directory component.
pub fn default_output_path(input: &Path) -> PathBuf {
    let parent = input
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    parent.join(DEFAULT_OUTPUT_NAME)
}

/// Explicit output path if given, else the default for `input`.
pub fn resolve_output_path(input: &Path, output: Option<&Path>) -> PathBuf {
    match output {
        Some(p) => p.to_path_buf(),
        None => default_output_path(input),
    }
}
