//! Markdown rendering.

use std::fmt::Write;

use crate::report::{Report, SectionBody};

/// Renders `report` as Markdown.
///
/// Lists become `- ` items and host tables become pipe tables. Empty sections
/// show the "None found" marker as an italic line.
pub fn render_markdown(report: &Report) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "# {}\n", report.title);
    let _ = writeln!(out, "{}\n", report.timestamp);

    for section in &report.sections {
        let _ = writeln!(out, "## {}\n", section.heading);
        match &section.body {
            SectionBody::List { entries } => {
                for entry in entries {
                    let _ = writeln!(out, "- {}", escape(entry));
                }
            }
            SectionBody::Table { columns, rows } => {
                let _ = writeln!(out, "| {} |", columns.join(" | "));
                let _ = writeln!(out, "|{}", "---|".repeat(columns.len()));
                for row in rows {
                    let cells: Vec<String> = row.iter().map(|c| escape(c)).collect();
                    let _ = writeln!(out, "| {} |", cells.join(" | "));
                }
            }
            SectionBody::NoneFound => {
                for line in section.body.lines() {
                    let _ = writeln!(out, "_{line}_");
                }
            }
        }
        out.push('\n');
    }

    out
}

/// TXT data is free text; keep it from turning into markup.
///
/// Backslashes go first so the escapes added after them survive. Line breaks
/// would end a list item or table row and become spaces.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .replace('|', "\\|")
        .replace('*', "\\*")
        .replace('_', "\\_")
}
