//! Report assembly.
//!
//! [`assemble`] turns a domain, its record set and the capture time into an
//! immutable document description. It performs no I/O; the [`export`](crate::export)
//! module persists the result.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::config::NONE_FOUND_MARKER;
use crate::dns::{RecordEntry, RecordSet, RecordType};
use crate::domain::Domain;

/// Date and time format of the timestamp line.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Body of one record type section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionBody {
    /// One formatted line per entry.
    List {
        /// Entry lines in transport order
        entries: Vec<String>,
    },
    /// Host records whose addresses were looked up, as table rows.
    Table {
        /// Column headings
        columns: Vec<String>,
        /// One row per entry
        rows: Vec<Vec<String>>,
    },
    /// Nothing was found for this record type.
    NoneFound,
}

impl SectionBody {
    /// Entry lines as they appear in text renderings.
    ///
    /// Table rows are flattened as `cell | cell`; an empty section yields the
    /// "None found" marker.
    pub fn lines(&self) -> Vec<String> {
        match self {
            SectionBody::List { entries } => entries.clone(),
            SectionBody::Table { rows, .. } => rows.iter().map(|row| row.join(" | ")).collect(),
            SectionBody::NoneFound => vec![NONE_FOUND_MARKER.to_string()],
        }
    }
}

/// One record type's section of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Record type the section covers
    pub record_type: RecordType,
    /// Section heading, e.g. `MX Records`
    pub heading: String,
    /// Entries or the empty marker
    pub body: SectionBody,
}

/// DNS findings for one domain, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Analyzed domain
    pub domain: Domain,
    /// Document title
    pub title: String,
    /// When the records were collected (local time)
    pub captured_at: NaiveDateTime,
    /// Timestamp line shown under the title
    pub timestamp: String,
    /// One section per record type, always A, MX, NS, TXT
    pub sections: Vec<Section>,
}

impl Report {
    /// Section for `record_type`.
    pub fn section(&self, record_type: RecordType) -> Option<&Section> {
        self.sections.iter().find(|s| s.record_type == record_type)
    }
}

/// Builds the report for `domain`.
///
/// Deterministic: equal inputs give equal reports. Section order comes from the
/// record type enumeration, not from the record set.
pub fn assemble(domain: &Domain, records: &RecordSet, captured_at: NaiveDateTime) -> Report {
    let sections = RecordType::all()
        .map(|record_type| Section {
            record_type,
            heading: format!("{record_type} Records"),
            body: section_body(record_type, records.get(record_type)),
        })
        .collect();

    Report {
        domain: domain.clone(),
        title: format!("DNS Report for {domain}"),
        captured_at,
        timestamp: format!("Generated on {}", captured_at.format(TIMESTAMP_FORMAT)),
        sections,
    }
}

fn section_body(record_type: RecordType, entries: &[RecordEntry]) -> SectionBody {
    if entries.is_empty() {
        return SectionBody::NoneFound;
    }

    let addresses_checked = entries
        .iter()
        .any(|e| e.host_address().is_some_and(|a| a.is_checked()));
    if !addresses_checked {
        return SectionBody::List {
            entries: entries.iter().map(ToString::to_string).collect(),
        };
    }

    match record_type {
        RecordType::Mx => SectionBody::Table {
            columns: vec!["Priority".into(), "Exchange".into(), "IP".into()],
            rows: entries
                .iter()
                .filter_map(|e| match e {
                    RecordEntry::Mx {
                        preference,
                        exchange,
                        address,
                    } => Some(vec![
                        preference.to_string(),
                        exchange.clone(),
                        address.to_string(),
                    ]),
                    _ => None,
                })
                .collect(),
        },
        RecordType::Ns => SectionBody::Table {
            columns: vec!["Name Server".into(), "IP Address".into()],
            rows: entries
                .iter()
                .filter_map(|e| match e {
                    RecordEntry::Ns { host, address } => {
                        Some(vec![host.clone(), address.to_string()])
                    }
                    _ => None,
                })
                .collect(),
        },
        RecordType::A | RecordType::Txt => SectionBody::List {
            entries: entries.iter().map(ToString::to_string).collect(),
        },
    }
}
