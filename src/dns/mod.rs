//! DNS record types and querying.
//!
//! This module provides:
//! - The fixed record type set (A, MX, NS, TXT) and the entries each resolves to
//! - `RecordSet`, which always holds every record type
//! - The `RecordSource` query seam and its `hickory-resolver` implementation

mod records;
mod source;
mod types;

// Re-export public API
pub use source::{HickorySource, QueryOutcome, RecordSource};
pub use types::{HostAddress, RecordEntry, RecordSet, RecordType, RECORD_TYPE_COUNT};

#[cfg(test)]
mod tests;
