//! The query seam between the collector and the DNS transport.
//!
//! The collector only sees [`RecordSource`]. Production runs use
//! [`HickorySource`], backed by `hickory-resolver` and the system resolver
//! configuration; tests substitute a canned source.

use std::net::Ipv6Addr;

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{RData, RecordType as WireType};
use hickory_resolver::TokioAsyncResolver;

use super::records::entries_from_rdata;
use super::types::{RecordEntry, RecordType};
use crate::error_handling::LookupError;

/// Result of one `(name, record type)` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// At least one record of the queried type, in transport order.
    Records(Vec<RecordEntry>),
    /// The name exists but has no records of this type.
    NotFound,
    /// The query failed; scoped to this record type only.
    Failed(LookupError),
}

impl QueryOutcome {
    /// Collapses the outcome to a sequence: anything but records becomes empty.
    pub fn into_entries(self) -> Vec<RecordEntry> {
        match self {
            QueryOutcome::Records(entries) => entries,
            QueryOutcome::NotFound | QueryOutcome::Failed(_) => Vec::new(),
        }
    }
}

/// Answers one DNS query at a time.
///
/// Implementations must not panic and must report every failure through
/// [`QueryOutcome`].
#[allow(async_fn_in_trait)]
pub trait RecordSource {
    /// Queries `name` for records of `record_type`.
    async fn query(&self, name: &str, record_type: RecordType) -> QueryOutcome;

    /// Queries `name` for IPv6 addresses, in transport order.
    ///
    /// Only the host lookup asks for these; they never form a report section.
    /// An empty vector means the host has none. The default finds nothing.
    async fn query_ipv6(&self, _name: &str) -> Result<Vec<Ipv6Addr>, LookupError> {
        Ok(Vec::new())
    }
}

/// `RecordSource` backed by `hickory-resolver`.
pub struct HickorySource {
    resolver: TokioAsyncResolver,
}

impl HickorySource {
    /// Wraps an initialized resolver.
    pub fn new(resolver: TokioAsyncResolver) -> Self {
        Self { resolver }
    }
}

impl RecordSource for HickorySource {
    async fn query(&self, name: &str, record_type: RecordType) -> QueryOutcome {
        match self.resolver.lookup(name, record_type.to_hickory()).await {
            Ok(lookup) => {
                let entries = entries_from_rdata(record_type, lookup.iter());
                if entries.is_empty() {
                    QueryOutcome::NotFound
                } else {
                    QueryOutcome::Records(entries)
                }
            }
            Err(e) => outcome_from_error(&e),
        }
    }

    async fn query_ipv6(&self, name: &str) -> Result<Vec<Ipv6Addr>, LookupError> {
        match self.resolver.lookup(name, WireType::AAAA).await {
            Ok(lookup) => Ok(lookup
                .iter()
                .filter_map(|rdata| match rdata {
                    RData::AAAA(aaaa) => Some(aaaa.0),
                    _ => None,
                })
                .collect()),
            Err(e) => match outcome_from_error(&e) {
                QueryOutcome::Failed(error) if error != LookupError::NoSuchDomain => Err(error),
                _ => Ok(Vec::new()),
            },
        }
    }
}

/// Maps a resolver error onto the per-type outcome.
pub(crate) fn outcome_from_error(error: &ResolveError) -> QueryOutcome {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. }
            if *response_code == ResponseCode::NXDomain =>
        {
            QueryOutcome::Failed(LookupError::NoSuchDomain)
        }
        ResolveErrorKind::NoRecordsFound { .. } => QueryOutcome::NotFound,
        ResolveErrorKind::Timeout => QueryOutcome::Failed(LookupError::Timeout),
        _ => QueryOutcome::Failed(LookupError::Resolver(error.to_string())),
    }
}
