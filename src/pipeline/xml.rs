//! XML rendering for parsed documents.
//!
//! Layout is fixed: the declaration, a newline, then the whole
//! `<environment>` element on one line with one self-closing `env` child
//! per entry.

use std::borrow::Cow;
use std::io::{self, Write};

use quick_xml::escape::escape;

use super::model::EnvDocument;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
pub const ROOT_ELEMENT: &str = "environment";
pub const ENTRY_ELEMENT: &str = "env";

/// Escape text for a double-quoted attribute value.
///
/// Tab, CR and LF become character references so attribute-value
/// normalization in readers does not turn them into spaces.
pub fn escape_attribute(raw: &str) -> Cow<'_, str> {
    let escaped = escape(raw);
    if !escaped.contains(['\t', '\r', '\n']) {
        return escaped;
    }

    let mut out = String::with_capacity(escaped.len() + 8);
    for ch in escaped.chars() {
        match ch {
            '\t' => out.push_str("&#9;"),
            '\r' => out.push_str("&#13;"),
            '\n' => out.push_str("&#10;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// Render a document to its XML text.
pub fn to_xml_string(doc: &EnvDocument) -> String {
    let mut out = String::with_capacity(64 + doc.len() * 48);
    out.push_str(XML_DECLARATION);
    out.push('\n');

    if doc.is_empty() {
        out.push_str(&format!("<{ROOT_ELEMENT} />"));
        return out;
    }

    out.push_str(&format!("<{ROOT_ELEMENT}>"));
    for entry in doc {
        out.push_str(&format!(
            r#"<{ENTRY_ELEMENT} name="{}" value="{}" />"#,
            escape_attribute(&entry.name),
            escape_attribute(&entry.value)
        ));
    }
    out.push_str(&format!("</{ROOT_ELEMENT}>"));
    out
}

/// Write the rendered document to any writer.
pub fn write_xml<W: Write>(doc: &EnvDocument, mut writer: W) -> io::Result<()> {
    writer.write_all(to_xml_string(doc).as_bytes())?;
    writer.flush()
}
