//! DOCX rendering.
//!
//! Layout: a cover page (title, capture date), a running header and footer, an
//! overview paragraph, then one numbered heading per record type section.

use docx_rs::{
    AlignmentType, BreakType, Docx, Footer, Header, Paragraph, Run, Table, TableCell, TableRow,
};

use crate::config::{NONE_FOUND_MARKER, REPORT_FOOTER};
use crate::report::{Report, SectionBody};

const TITLE_COLOR: &str = "2F5496";
const FOOTER_COLOR: &str = "969696";

// Run sizes are in half-points
const TITLE_SIZE: usize = 64;
const HEADING_SIZE: usize = 32;
const DATE_SIZE: usize = 22;
const FOOTER_SIZE: usize = 18;

/// Builds the DOCX document for `report`.
///
/// The caller packs it with `render_docx(report).build().pack(writer)`.
pub fn render_docx(report: &Report) -> Docx {
    let mut docx = Docx::new()
        .header(Header::new().add_paragraph(centered(
            Run::new().add_text(format!("DNS Report - {}", report.domain)),
        )))
        .footer(Footer::new().add_paragraph(centered(
            Run::new()
                .add_text(REPORT_FOOTER)
                .size(FOOTER_SIZE)
                .color(FOOTER_COLOR),
        )));

    // Cover page
    docx = docx
        .add_paragraph(centered(
            Run::new()
                .add_text(&report.title)
                .bold()
                .size(TITLE_SIZE)
                .color(TITLE_COLOR),
        ))
        .add_paragraph(centered(
            Run::new()
                .add_text(report.captured_at.format("%d %B %Y").to_string())
                .size(DATE_SIZE),
        ))
        .add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)));

    docx = docx
        .add_paragraph(heading("1. Overview"))
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(format!(
            "Below are the DNS records collected for the domain {}. The data were collected on {}.",
            report.domain,
            report.captured_at.format("%d %B %Y, %H:%M")
        ))))
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(&report.timestamp).size(DATE_SIZE))
                .align(AlignmentType::Right),
        );

    for (idx, section) in report.sections.iter().enumerate() {
        docx = docx.add_paragraph(heading(&format!("{}. {}", idx + 2, section.heading)));
        docx = match &section.body {
            SectionBody::List { entries } => entries
                .iter()
                .fold(docx, |doc, entry| doc.add_paragraph(bullet(entry))),
            SectionBody::Table { columns, rows } => docx.add_table(table(columns, rows)),
            SectionBody::NoneFound => docx.add_paragraph(
                Paragraph::new().add_run(Run::new().add_text(NONE_FOUND_MARKER).italic()),
            ),
        };
        docx = docx.add_paragraph(Paragraph::new());
    }

    docx
}

fn centered(run: Run) -> Paragraph {
    Paragraph::new().add_run(run).align(AlignmentType::Center)
}

fn heading(text: &str) -> Paragraph {
    Paragraph::new().add_run(
        Run::new()
            .add_text(text)
            .bold()
            .size(HEADING_SIZE)
            .color(TITLE_COLOR),
    )
}

fn bullet(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(format!("\u{2022} {text}")))
}

fn table(columns: &[String], rows: &[Vec<String>]) -> Table {
    let header = TableRow::new(
        columns
            .iter()
            .map(|c| {
                TableCell::new().add_paragraph(centered(
                    Run::new().add_text(c).bold().color(TITLE_COLOR),
                ))
            })
            .collect(),
    );
    let body = rows.iter().map(|row| {
        TableRow::new(
            row.iter()
                .map(|cell| TableCell::new().add_paragraph(centered(Run::new().add_text(cell))))
                .collect(),
        )
    });
    Table::new(std::iter::once(header).chain(body).collect())
}
