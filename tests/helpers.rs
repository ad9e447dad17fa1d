// Shared test helpers: a canned record source and common fixtures.

use std::cell::RefCell;
use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::path::Path;

use dns_report::{
    Config, LogFormat, LogLevel, LookupError, QueryOutcome, RecordEntry, RecordSource, RecordType,
    ReportFormat,
};

/// Answers queries from a fixed table. Unknown queries are `NotFound`.
#[derive(Default)]
pub struct FakeSource {
    answers: HashMap<(String, RecordType), QueryOutcome>,
    ipv6_answers: HashMap<String, Vec<Ipv6Addr>>,
    queries: RefCell<Vec<(String, RecordType)>>,
    ipv6_queries: RefCell<Vec<String>>,
}

#[allow(dead_code)] // Not every test file uses every helper
impl FakeSource {
    pub fn with(mut self, name: &str, record_type: RecordType, outcome: QueryOutcome) -> Self {
        self.answers.insert((name.to_string(), record_type), outcome);
        self
    }

    pub fn with_ipv6(mut self, name: &str, addresses: Vec<Ipv6Addr>) -> Self {
        self.ipv6_answers.insert(name.to_string(), addresses);
        self
    }

    /// Queries for the four report record types; AAAA host lookups are counted apart.
    pub fn query_count(&self) -> usize {
        self.queries.borrow().len()
    }

    pub fn ipv6_query_count(&self) -> usize {
        self.ipv6_queries.borrow().len()
    }

    pub fn queried_names(&self) -> Vec<String> {
        self.queries.borrow().iter().map(|(n, _)| n.clone()).collect()
    }
}

impl RecordSource for FakeSource {
    async fn query(&self, name: &str, record_type: RecordType) -> QueryOutcome {
        self.queries
            .borrow_mut()
            .push((name.to_string(), record_type));
        self.answers
            .get(&(name.to_string(), record_type))
            .cloned()
            .unwrap_or(QueryOutcome::NotFound)
    }

    async fn query_ipv6(&self, name: &str) -> Result<Vec<Ipv6Addr>, LookupError> {
        self.ipv6_queries.borrow_mut().push(name.to_string());
        Ok(self.ipv6_answers.get(name).cloned().unwrap_or_default())
    }
}

/// The github.com record set used across scenarios.
#[allow(dead_code)]
pub fn github_source() -> FakeSource {
    FakeSource::default()
        .with(
            "github.com",
            RecordType::A,
            QueryOutcome::Records(vec![RecordEntry::A(Ipv4Addr::new(140, 82, 121, 3))]),
        )
        .with(
            "github.com",
            RecordType::Mx,
            QueryOutcome::Records(vec![RecordEntry::mx(1, "aspmx.l.google.com")]),
        )
        .with(
            "github.com",
            RecordType::Ns,
            QueryOutcome::Records(vec![
                RecordEntry::ns("dns1.p08.nsone.net"),
                RecordEntry::ns("dns2.p08.nsone.net"),
            ]),
        )
        .with(
            "github.com",
            RecordType::Txt,
            QueryOutcome::Records(vec![RecordEntry::Txt(
                "v=spf1 ip4:192.30.252.0/22 include:_netblocks.google.com ~all".to_string(),
            )]),
        )
}

/// Quiet config writing `format` into `output_dir`.
#[allow(dead_code)]
pub fn test_config(domain: &str, format: ReportFormat, output_dir: &Path) -> Config {
    Config {
        domain: domain.to_string(),
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        format,
        output_dir: output_dir.to_path_buf(),
        ..Default::default()
    }
}
