//! Report persistence.
//!
//! Writes an assembled [`Report`] to a single file in one of the supported
//! formats (DOCX, Markdown, JSON). The file name is derived from the domain and
//! an existing file of that name is overwritten.

mod docx;
mod json;
mod markdown;

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::{ReportFormat, REPORT_FILE_PREFIX};
use crate::domain::Domain;
use crate::error_handling::ReportError;
use crate::report::Report;

pub use docx::render_docx;
pub use json::render_json;
pub use markdown::render_markdown;

/// File name of the report for `domain`, e.g. `DNS_Report_example_com.docx`.
pub fn report_file_name(domain: &Domain, format: ReportFormat) -> String {
    format!(
        "{REPORT_FILE_PREFIX}{}.{}",
        domain.file_stem(),
        format.extension()
    )
}

/// Writes `report` into `output_dir` and returns the path of the written file.
///
/// `output_dir` is created if it does not exist.
///
/// # Errors
///
/// Returns a `ReportError` if the directory or file cannot be created, or the
/// document cannot be rendered. Nothing is retried.
pub fn write_report(
    report: &Report,
    format: ReportFormat,
    output_dir: &Path,
) -> Result<PathBuf, ReportError> {
    fs::create_dir_all(output_dir).map_err(|source| ReportError::Write {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(report_file_name(&report.domain, format));
    debug!("Writing {format:?} report to {}", path.display());

    match format {
        ReportFormat::Docx => {
            let file = fs::File::create(&path).map_err(|source| ReportError::Write {
                path: path.clone(),
                source,
            })?;
            render_docx(report)
                .build()
                .pack(file)
                .map_err(|e| ReportError::Docx {
                    path: path.clone(),
                    message: e.to_string(),
                })?;
        }
        ReportFormat::Markdown => write_text(&path, &render_markdown(report))?,
        ReportFormat::Json => write_text(&path, &render_json(report)?)?,
    }

    Ok(path)
}

fn write_text(path: &Path, contents: &str) -> Result<(), ReportError> {
    fs::write(path, contents).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
