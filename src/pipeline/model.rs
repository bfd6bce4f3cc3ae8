//! Data model for parsed `.env` documents

use std::fmt;

/// A single `KEY=VALUE` pair parsed from an input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    pub name: String,
    pub value: String,
    /// 1-based line number in the source file
    pub line: usize,
}

impl EnvEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            line,
        }
    }
}

/// A non-blank, non-comment line that has no `=` separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    pub line: usize,
    /// Trimmed line content
    pub content: String,
}

impl fmt::Display for MalformedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid format on line {}: {}", self.line, self.content)
    }
}

/// Ordered entries extracted from one input file.
///
/// Duplicate names are kept as separate entries in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvDocument {
    pub entries: Vec<EnvEntry>,
    pub malformed: Vec<MalformedLine>,
    pub blank_lines: usize,
    pub comment_lines: usize,
}

impl EnvDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnvEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a EnvDocument {
    type Item = &'a EnvEntry;
    type IntoIter = std::slice::Iter<'a, EnvEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
