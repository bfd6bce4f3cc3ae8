//! Conversion summary report generation

use std::path::{Path, PathBuf};

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::{EnvDocument, MalformedLine};

/// Outcome of a successful conversion
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub entries: usize,
    pub blank_lines: usize,
    pub comment_lines: usize,
    pub malformed: Vec<MalformedLine>,
}

impl ConversionReport {
    pub fn new(input: &Path, output: &Path, doc: EnvDocument) -> Self {
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            entries: doc.entries.len(),
            blank_lines: doc.blank_lines,
            comment_lines: doc.comment_lines,
            malformed: doc.malformed,
        }
    }

    /// Total lines seen in the input
    pub fn total_lines(&self) -> usize {
        self.entries + self.blank_lines + self.comment_lines + self.malformed.len()
    }

    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("📄 Lines Read"), Cell::new(self.total_lines())]);
        table.add_row(vec![Cell::new("💬 Comments"), Cell::new(self.comment_lines)]);
        table.add_row(vec![Cell::new("⬜ Blank"), Cell::new(self.blank_lines)]);

        table.add_row(vec![
            Cell::new("⚠️  Skipped (Malformed)"),
            Cell::new(self.malformed.len()).fg(if self.malformed.is_empty() {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);

        table.add_row(vec![
            Cell::new("✅ Entries Written"),
            Cell::new(self.entries)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("CONVERSION SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        // Indent the table
        for line in self.table().to_string().lines() {
            println!("    {}", line);
        }

        if !self.malformed.is_empty() {
            println!();
            println!(
                "      {} {}:",
                style("Skipped Lines").yellow(),
                style(format!("({})", self.malformed.len())).dim()
            );
            for skipped in &self.malformed {
                println!(
                    "        {} {} {}",
                    style("•").dim(),
                    style(format!("L{}", skipped.line)).dim(),
                    skipped.content
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::parse_str;

    #[test]
    fn test_report_counts_every_line() {
        let doc = parse_str("# c\n\nA=1\nnope\nB=2\n");
        let report = ConversionReport::new(Path::new("in.env"), Path::new("out.xml"), doc);

        assert_eq!(report.entries, 2);
        assert_eq!(report.comment_lines, 1);
        assert_eq!(report.blank_lines, 1);
        assert_eq!(report.malformed.len(), 1);
        assert_eq!(report.total_lines(), 5);
    }

    #[test]
    fn test_table_lists_entry_count() {
        let doc = parse_str("A=1\nB=2\nC=3\n");
        let report = ConversionReport::new(Path::new("in.env"), Path::new("out.xml"), doc);
        let rendered = report.table().to_string();

        assert!(rendered.contains("Entries Written"));
        assert!(rendered.contains('3'));
    }
}
