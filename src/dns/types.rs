//! Record types, resolved entries and the per-domain record set.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display as StrumDisplay, EnumIter};

use crate::config::{HOST_TIMEOUT_MARKER, UNRESOLVED_ADDRESS_MARKER};

/// The record types every report covers.
///
/// Declaration order is the report order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, StrumDisplay, Serialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 host address
    A = 0,
    /// Mail exchanger
    Mx = 1,
    /// Authoritative nameserver
    Ns = 2,
    /// Free-form text
    Txt = 3,
}

/// Number of record types in a report.
pub const RECORD_TYPE_COUNT: usize = 4;

impl RecordType {
    /// All record types in report order.
    pub fn all() -> impl Iterator<Item = RecordType> {
        RecordType::iter()
    }

    fn index(self) -> usize {
        self as usize
    }

    pub(crate) fn to_hickory(self) -> hickory_resolver::proto::rr::RecordType {
        use hickory_resolver::proto::rr::RecordType as Wire;
        match self {
            RecordType::A => Wire::A,
            RecordType::Mx => Wire::MX,
            RecordType::Ns => Wire::NS,
            RecordType::Txt => Wire::TXT,
        }
    }
}

/// Address of an MX exchange or NS host, filled in by the optional host lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostAddress {
    /// The host lookup was not requested.
    #[default]
    NotChecked,
    /// First address the host resolved to; IPv4 when it has one, IPv6 otherwise.
    Resolved(IpAddr),
    /// The host lookup ran out of time.
    TimedOut,
    /// The host lookup was made but found nothing.
    Unresolved,
}

impl HostAddress {
    /// Whether a host lookup was made for this entry.
    pub fn is_checked(self) -> bool {
        !matches!(self, HostAddress::NotChecked)
    }
}

impl fmt::Display for HostAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostAddress::Resolved(ip) => write!(f, "{ip}"),
            HostAddress::TimedOut => f.write_str(HOST_TIMEOUT_MARKER),
            HostAddress::NotChecked | HostAddress::Unresolved => {
                f.write_str(UNRESOLVED_ADDRESS_MARKER)
            }
        }
    }
}

/// One resolved value of a record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordEntry {
    /// IPv4 address of the domain
    A(Ipv4Addr),
    /// Mail exchanger with its preference
    Mx {
        /// Lower is preferred
        preference: u16,
        /// Exchange host, without the trailing root dot
        exchange: String,
        /// Exchange address, when looked up
        address: HostAddress,
    },
    /// Nameserver host
    Ns {
        /// Nameserver host, without the trailing root dot
        host: String,
        /// Nameserver address, when looked up
        address: HostAddress,
    },
    /// Text record, character-strings concatenated
    Txt(String),
}

impl RecordEntry {
    /// Builds an MX entry whose address has not been looked up.
    pub fn mx(preference: u16, exchange: impl Into<String>) -> Self {
        RecordEntry::Mx {
            preference,
            exchange: exchange.into(),
            address: HostAddress::NotChecked,
        }
    }

    /// Builds an NS entry whose address has not been looked up.
    pub fn ns(host: impl Into<String>) -> Self {
        RecordEntry::Ns {
            host: host.into(),
            address: HostAddress::NotChecked,
        }
    }

    /// The record type this entry belongs to.
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordEntry::A(_) => RecordType::A,
            RecordEntry::Mx { .. } => RecordType::Mx,
            RecordEntry::Ns { .. } => RecordType::Ns,
            RecordEntry::Txt(_) => RecordType::Txt,
        }
    }

    /// Host name carried by MX and NS entries.
    pub fn host(&self) -> Option<&str> {
        match self {
            RecordEntry::Mx { exchange, .. } => Some(exchange),
            RecordEntry::Ns { host, .. } => Some(host),
            RecordEntry::A(_) | RecordEntry::Txt(_) => None,
        }
    }

    /// Host address of MX and NS entries.
    pub fn host_address(&self) -> Option<HostAddress> {
        match self {
            RecordEntry::Mx { address, .. } | RecordEntry::Ns { address, .. } => Some(*address),
            RecordEntry::A(_) | RecordEntry::Txt(_) => None,
        }
    }

    /// Records the looked-up host address; no-op for A and TXT entries.
    pub fn set_host_address(&mut self, resolved: HostAddress) {
        match self {
            RecordEntry::Mx { address, .. } | RecordEntry::Ns { address, .. } => {
                *address = resolved
            }
            RecordEntry::A(_) | RecordEntry::Txt(_) => {}
        }
    }
}

impl fmt::Display for RecordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordEntry::A(ip) => write!(f, "{ip}"),
            RecordEntry::Mx {
                preference,
                exchange,
                address,
            } => {
                write!(f, "{preference} {exchange}")?;
                if address.is_checked() {
                    write!(f, " ({address})")?;
                }
                Ok(())
            }
            RecordEntry::Ns { host, address } => {
                f.write_str(host)?;
                if address.is_checked() {
                    write!(f, " ({address})")?;
                }
                Ok(())
            }
            RecordEntry::Txt(text) => f.write_str(text),
        }
    }
}

/// Resolved entries for every record type of one domain.
///
/// Storage is indexed by `RecordType`, so every type is always present; a type
/// with nothing found holds an empty sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordSet {
    entries: [Vec<RecordEntry>; RECORD_TYPE_COUNT],
}

impl RecordSet {
    /// A record set with every type empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries for `record_type`, in transport order.
    pub fn get(&self, record_type: RecordType) -> &[RecordEntry] {
        &self.entries[record_type.index()]
    }

    /// Mutable entries for `record_type`.
    pub fn get_mut(&mut self, record_type: RecordType) -> &mut Vec<RecordEntry> {
        &mut self.entries[record_type.index()]
    }

    /// Replaces the entries for `record_type`.
    pub fn set(&mut self, record_type: RecordType, entries: Vec<RecordEntry>) {
        self.entries[record_type.index()] = entries;
    }

    /// `(type, entries)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordType, &[RecordEntry])> + '_ {
        RecordType::all().map(move |t| (t, self.get(t)))
    }

    /// Total number of entries across all types.
    pub fn len(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }

    /// True when no type has any entry.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Vec::is_empty)
    }
}
