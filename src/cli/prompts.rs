//! Interactive prompts using dialoguer

use std::path::PathBuf;

use anyhow::{bail, Result};
use dialoguer::Input;

/// Ask for the input `.env` path. Blank answers are rejected.
pub fn prompt_input_path() -> Result<PathBuf> {
    let answer: String = Input::new()
        .with_prompt("Enter the path to the .env file")
        .interact_text()?;
    parse_input_answer(&answer)
}

/// Ask for the output path. A blank answer selects the default.
pub fn prompt_output_path() -> Result<Option<PathBuf>> {
    let answer: String = Input::new()
        .with_prompt("Enter the desired output XML file path (leave blank for default)")
        .allow_empty(true)
        .interact_text()?;
    Ok(parse_output_answer(&answer))
}

/// Trim a prompted input path; an empty answer is an error.
pub fn parse_input_answer(answer: &str) -> Result<PathBuf> {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        bail!("An input .env file path is required.");
    }
    Ok(PathBuf::from(trimmed))
}

/// Trim a prompted output path; an empty answer means "use the default".
pub fn parse_output_answer(answer: &str) -> Option<PathBuf> {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}
