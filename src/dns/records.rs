//! Conversion of resolver answers into report entries.

use hickory_resolver::proto::rr::RData;

use super::types::{RecordEntry, RecordType};
use crate::config::ROOT_NAME;

/// Strips the trailing root dot that fully-qualified names carry.
///
/// The root itself stays `"."`, as in a null MX.
pub(crate) fn host_name(name: &str) -> String {
    match name.trim_end_matches('.') {
        "" => ROOT_NAME.to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// Converts one answer into an entry of `record_type`.
///
/// Answers of another type (for example the CNAME records a lookup follows on
/// its way to an A record) yield `None`.
pub(crate) fn entry_from_rdata(record_type: RecordType, rdata: &RData) -> Option<RecordEntry> {
    match (record_type, rdata) {
        (RecordType::A, RData::A(a)) => Some(RecordEntry::A(a.0)),
        (RecordType::Mx, RData::MX(mx)) => Some(RecordEntry::mx(
            mx.preference(),
            host_name(&mx.exchange().to_utf8()),
        )),
        (RecordType::Ns, RData::NS(ns)) => Some(RecordEntry::ns(host_name(&ns.0.to_utf8()))),
        (RecordType::Txt, RData::TXT(txt)) => {
            // TXT records can contain multiple character-strings; join them
            Some(RecordEntry::Txt(
                txt.iter()
                    .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                    .collect::<Vec<String>>()
                    .join(""),
            ))
        }
        _ => None,
    }
}

/// Converts a lookup's answers into entries, keeping transport order.
pub(crate) fn entries_from_rdata<'a, I>(record_type: RecordType, answers: I) -> Vec<RecordEntry>
where
    I: IntoIterator<Item = &'a RData>,
{
    answers
        .into_iter()
        .filter_map(|rdata| entry_from_rdata(record_type, rdata))
        .collect()
}
