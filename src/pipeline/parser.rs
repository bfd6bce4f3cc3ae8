//! Line-oriented `.env` parser.
//!
//! Each line is classified on its own; there is no quoting, escaping,
//! `export` prefix or continuation handling. `\n`, `\r\n` and a lone `\r`
//! all end a line.

use std::borrow::Cow;

use tracing::debug;

use super::model::{EnvDocument, EnvEntry, MalformedLine};

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    Blank,
    Comment,
    /// Trimmed name and value
    Pair { name: &'a str, value: &'a str },
    /// Trimmed line content with no `=`
    Malformed(&'a str),
}

/// Classify one line.
///
/// The line is split at the first `=`, so `A=B=C` yields name `A` and
/// value `B=C`. An empty name (`=value`) is accepted.
pub fn parse_line(line: &str) -> ParsedLine<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ParsedLine::Blank;
    }
    if trimmed.starts_with('#') {
        return ParsedLine::Comment;
    }

    match trimmed.split_once('=') {
        Some((name, value)) => ParsedLine::Pair {
            name: name.trim(),
            value: value.trim(),
        },
        None => ParsedLine::Malformed(trimmed),
    }
}

/// Parse a whole input buffer into an [`EnvDocument`].
///
/// Malformed lines never abort parsing; they are recorded on the document.
pub fn parse_str(input: &str) -> EnvDocument {
    let mut doc = EnvDocument::new();
    let normalized = normalize_newlines(input);

    for (idx, raw) in normalized.lines().enumerate() {
        let line_num = idx + 1;
        match parse_line(raw) {
            ParsedLine::Blank => doc.blank_lines += 1,
            ParsedLine::Comment => {
                debug!(line = line_num, "skipping comment");
                doc.comment_lines += 1;
            }
            ParsedLine::Pair { name, value } => {
                debug!(line = line_num, name, "parsed entry");
                doc.entries.push(EnvEntry::new(name, value, line_num));
            }
            ParsedLine::Malformed(content) => {
                debug!(line = line_num, content, "line has no '=' separator");
                doc.malformed.push(MalformedLine {
                    line: line_num,
                    content: content.to_string(),
                });
            }
        }
    }

    doc
}

fn normalize_newlines(input: &str) -> Cow<'_, str> {
    if !input.contains('\r') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            out.push('\n');
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            continue;
        }
        out.push(ch);
    }

    Cow::Owned(out)
}
