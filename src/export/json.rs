//! JSON rendering.
//!
//! The report is serialized as one pretty-printed JSON document, suitable for
//! piping to `jq` or archiving alongside other scans.

use crate::error_handling::ReportError;
use crate::report::Report;

/// Serializes `report` as pretty-printed JSON.
///
/// # Errors
///
/// Returns `ReportError::Json` if serialization fails.
pub fn render_json(report: &Report) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}
