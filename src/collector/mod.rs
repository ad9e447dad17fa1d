//! Record collection for one domain.
//!
//! Every record type is queried on its own, one after the other. A failed or
//! empty query only empties that type's sequence; the remaining types are still
//! queried and the collection as a whole never fails.

use std::net::IpAddr;

use log::{debug, info, warn};

use crate::config::ROOT_NAME;
use crate::dns::{HostAddress, QueryOutcome, RecordEntry, RecordSet, RecordSource, RecordType};
use crate::domain::Domain;
use crate::error_handling::LookupError;

/// How the query for one record type ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeOutcome {
    /// This many records were found.
    Found(usize),
    /// The name has no records of this type.
    NotFound,
    /// The query failed.
    Failed(LookupError),
}

/// Per-type outcomes of a collection run, in report order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSummary {
    outcomes: Vec<(RecordType, TypeOutcome)>,
}

impl CollectionSummary {
    /// Outcome for `record_type`.
    pub fn outcome(&self, record_type: RecordType) -> Option<&TypeOutcome> {
        self.outcomes
            .iter()
            .find(|(t, _)| *t == record_type)
            .map(|(_, outcome)| outcome)
    }

    /// Record types whose query failed, with the reason.
    pub fn failures(&self) -> impl Iterator<Item = (RecordType, &LookupError)> + '_ {
        self.outcomes.iter().filter_map(|(t, outcome)| match outcome {
            TypeOutcome::Failed(e) => Some((*t, e)),
            _ => None,
        })
    }

    /// Total records found across all types.
    pub fn records_found(&self) -> usize {
        self.outcomes
            .iter()
            .map(|(_, outcome)| match outcome {
                TypeOutcome::Found(n) => *n,
                _ => 0,
            })
            .sum()
    }

    /// True when every type answered NXDOMAIN.
    pub fn domain_does_not_exist(&self) -> bool {
        !self.outcomes.is_empty()
            && self
                .outcomes
                .iter()
                .all(|(_, outcome)| *outcome == TypeOutcome::Failed(LookupError::NoSuchDomain))
    }
}

/// Queries every record type of `domain` and returns the resolved entries.
///
/// Never fails: a type whose query finds nothing or errors is left empty.
pub async fn collect<S: RecordSource>(domain: &Domain, source: &S) -> RecordSet {
    collect_with_summary(domain, source).await.0
}

/// Like [`collect`], also reporting how each record type's query ended.
pub async fn collect_with_summary<S: RecordSource>(
    domain: &Domain,
    source: &S,
) -> (RecordSet, CollectionSummary) {
    let mut records = RecordSet::new();
    let mut outcomes = Vec::new();

    for record_type in RecordType::all() {
        let outcome = source.query(domain.as_str(), record_type).await;
        outcomes.push((record_type, log_outcome(domain, record_type, &outcome)));
        records.set(record_type, outcome.into_entries());
    }

    (records, CollectionSummary { outcomes })
}

fn log_outcome(domain: &Domain, record_type: RecordType, outcome: &QueryOutcome) -> TypeOutcome {
    match outcome {
        QueryOutcome::Records(entries) => {
            debug!(
                "Found {} {record_type} record(s) for {domain}",
                entries.len()
            );
            TypeOutcome::Found(entries.len())
        }
        QueryOutcome::NotFound => {
            info!("No {record_type} records found for {domain}");
            TypeOutcome::NotFound
        }
        QueryOutcome::Failed(e) => {
            match e {
                LookupError::NoSuchDomain => {
                    warn!("{record_type} lookup for {domain}: domain not found (NXDOMAIN)")
                }
                LookupError::Timeout => {
                    warn!("{record_type} record lookup timed out for {domain}")
                }
                LookupError::Resolver(_) => {
                    warn!("Failed to lookup {record_type} records for {domain}: {e}")
                }
            }
            TypeOutcome::Failed(e.clone())
        }
    }
}

/// Looks up the address of every MX exchange and NS host in `records`.
///
/// A host keeps its first A record; a host without one falls back to its first
/// AAAA record. A lookup that times out is marked [`HostAddress::TimedOut`],
/// any other miss [`HostAddress::Unresolved`]. Entries are never removed.
pub async fn resolve_host_addresses<S: RecordSource>(records: &mut RecordSet, source: &S) {
    for record_type in [RecordType::Mx, RecordType::Ns] {
        for entry in records.get_mut(record_type).iter_mut() {
            let Some(host) = entry.host().map(str::to_string) else {
                continue;
            };
            let address = host_address(&host, source).await;
            match address {
                HostAddress::Unresolved => {
                    debug!("No address found for {record_type} host {host}")
                }
                HostAddress::TimedOut => {
                    warn!("Address lookup timed out for {record_type} host {host}")
                }
                _ => {}
            }
            entry.set_host_address(address);
        }
    }
}

async fn host_address<S: RecordSource>(host: &str, source: &S) -> HostAddress {
    // Null MX (RFC 7505) names the root; there is nothing to resolve
    if host == ROOT_NAME {
        return HostAddress::Unresolved;
    }

    match source.query(host, RecordType::A).await {
        QueryOutcome::Records(entries) => {
            let first = entries.into_iter().find_map(|entry| match entry {
                RecordEntry::A(ip) => Some(IpAddr::V4(ip)),
                _ => None,
            });
            if let Some(ip) = first {
                return HostAddress::Resolved(ip);
            }
        }
        QueryOutcome::Failed(LookupError::Timeout) => return HostAddress::TimedOut,
        QueryOutcome::Failed(LookupError::Resolver(_)) => return HostAddress::Unresolved,
        QueryOutcome::NotFound | QueryOutcome::Failed(LookupError::NoSuchDomain) => {}
    }

    match source.query_ipv6(host).await {
        Ok(addresses) => addresses
            .first()
            .map_or(HostAddress::Unresolved, |ip| HostAddress::Resolved(IpAddr::V6(*ip))),
        Err(LookupError::Timeout) => HostAddress::TimedOut,
        Err(_) => HostAddress::Unresolved,
    }
}
