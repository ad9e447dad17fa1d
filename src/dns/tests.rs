//! DNS module tests.

use std::net::{Ipv4Addr, Ipv6Addr};

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::{Query, ResponseCode};
use hickory_resolver::proto::rr::rdata::{A, CNAME, MX, NS, TXT};
use hickory_resolver::proto::rr::{Name, RData, RecordType as WireType};

use super::records::{entries_from_rdata, host_name};
use super::source::outcome_from_error;
use super::*;
use crate::error_handling::LookupError;

fn name(s: &str) -> Name {
    Name::from_ascii(s).expect("test name should parse")
}

fn no_records(response_code: ResponseCode) -> ResolveError {
    ResolveError::from(ResolveErrorKind::NoRecordsFound {
        query: Box::new(Query::query(name("example.com."), WireType::MX)),
        soa: None,
        negative_ttl: None,
        response_code,
        trusted: true,
    })
}

#[test]
fn test_record_types_in_report_order() {
    let order: Vec<RecordType> = RecordType::all().collect();
    assert_eq!(
        order,
        vec![RecordType::A, RecordType::Mx, RecordType::Ns, RecordType::Txt]
    );
    assert_eq!(order.len(), RECORD_TYPE_COUNT);
}

#[test]
fn test_record_type_display() {
    let labels: Vec<String> = RecordType::all().map(|t| t.to_string()).collect();
    assert_eq!(labels, vec!["A", "MX", "NS", "TXT"]);
}

#[test]
fn test_host_name_strips_root_dot() {
    assert_eq!(host_name("ns1.example.com."), "ns1.example.com");
    assert_eq!(host_name("ns1.example.com"), "ns1.example.com");
}

#[test]
fn test_a_answers_keep_transport_order() {
    let answers = vec![
        RData::A(A(Ipv4Addr::new(192, 0, 2, 20))),
        RData::A(A(Ipv4Addr::new(192, 0, 2, 10))),
    ];
    let entries = entries_from_rdata(RecordType::A, answers.iter());
    assert_eq!(
        entries,
        vec![
            RecordEntry::A(Ipv4Addr::new(192, 0, 2, 20)),
            RecordEntry::A(Ipv4Addr::new(192, 0, 2, 10)),
        ]
    );
}

#[test]
fn test_cname_answers_are_skipped() {
    // A lookup that follows a CNAME returns the alias alongside the addresses
    let answers = vec![
        RData::CNAME(CNAME(name("www.example.com."))),
        RData::A(A(Ipv4Addr::new(192, 0, 2, 1))),
    ];
    let entries = entries_from_rdata(RecordType::A, answers.iter());
    assert_eq!(entries, vec![RecordEntry::A(Ipv4Addr::new(192, 0, 2, 1))]);
}

#[test]
fn test_mx_answers_are_not_resorted() {
    let answers = vec![
        RData::MX(MX::new(20, name("mx2.example.com."))),
        RData::MX(MX::new(10, name("mx1.example.com."))),
    ];
    let entries = entries_from_rdata(RecordType::Mx, answers.iter());
    assert_eq!(
        entries,
        vec![
            RecordEntry::mx(20, "mx2.example.com"),
            RecordEntry::mx(10, "mx1.example.com"),
        ]
    );
}

#[test]
fn test_ns_answers_strip_root_dot() {
    let answers = vec![RData::NS(NS(name("dns1.p08.nsone.net.")))];
    let entries = entries_from_rdata(RecordType::Ns, answers.iter());
    assert_eq!(entries, vec![RecordEntry::ns("dns1.p08.nsone.net")]);
}

#[test]
fn test_txt_segments_are_concatenated() {
    let answers = vec![RData::TXT(TXT::new(vec![
        "v=spf1 include:_spf.google.com".to_string(),
        " ~all".to_string(),
    ]))];
    let entries = entries_from_rdata(RecordType::Txt, answers.iter());
    assert_eq!(
        entries,
        vec![RecordEntry::Txt(
            "v=spf1 include:_spf.google.com ~all".to_string()
        )]
    );
}

#[test]
fn test_host_name_keeps_root() {
    assert_eq!(host_name("."), ".");
}

#[test]
fn test_null_mx_keeps_root_exchange() {
    let answers = vec![RData::MX(MX::new(0, Name::root()))];
    let entries = entries_from_rdata(RecordType::Mx, answers.iter());
    assert_eq!(entries, vec![RecordEntry::mx(0, ".")]);
    assert_eq!(entries[0].to_string(), "0 .");
}

#[test]
fn test_nxdomain_is_a_failed_outcome() {
    assert_eq!(
        outcome_from_error(&no_records(ResponseCode::NXDomain)),
        QueryOutcome::Failed(LookupError::NoSuchDomain)
    );
}

#[test]
fn test_empty_answer_is_not_found() {
    assert_eq!(
        outcome_from_error(&no_records(ResponseCode::NoError)),
        QueryOutcome::NotFound
    );
}

#[test]
fn test_timeout_is_a_failed_outcome() {
    let error = ResolveError::from(ResolveErrorKind::Timeout);
    assert_eq!(
        outcome_from_error(&error),
        QueryOutcome::Failed(LookupError::Timeout)
    );
}

#[test]
fn test_other_resolver_errors_keep_message() {
    let error = ResolveError::from(ResolveErrorKind::Message("connection refused"));
    match outcome_from_error(&error) {
        QueryOutcome::Failed(LookupError::Resolver(message)) => {
            assert!(message.contains("connection refused"));
        }
        other => panic!("expected resolver failure, got {other:?}"),
    }
}

#[test]
fn test_outcomes_collapse_to_entries() {
    let records = QueryOutcome::Records(vec![RecordEntry::Txt("hello".to_string())]);
    assert_eq!(records.into_entries().len(), 1);
    assert!(QueryOutcome::NotFound.into_entries().is_empty());
    assert!(QueryOutcome::Failed(LookupError::NoSuchDomain)
        .into_entries()
        .is_empty());
}

#[test]
fn test_new_record_set_has_every_type_empty() {
    let set = RecordSet::new();
    let types: Vec<RecordType> = set.iter().map(|(t, _)| t).collect();
    assert_eq!(types.len(), RECORD_TYPE_COUNT);
    assert!(set.iter().all(|(_, entries)| entries.is_empty()));
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
}

#[test]
fn test_record_set_iterates_in_report_order_regardless_of_insertion() {
    let mut set = RecordSet::new();
    set.set(RecordType::Txt, vec![RecordEntry::Txt("t".to_string())]);
    set.set(RecordType::Ns, vec![RecordEntry::ns("ns.example.com")]);
    set.set(RecordType::A, vec![RecordEntry::A(Ipv4Addr::LOCALHOST)]);
    let types: Vec<RecordType> = set.iter().map(|(t, _)| t).collect();
    assert_eq!(
        types,
        vec![RecordType::A, RecordType::Mx, RecordType::Ns, RecordType::Txt]
    );
    assert_eq!(set.len(), 3);
    assert!(set.get(RecordType::Mx).is_empty());
}

#[test]
fn test_entry_display() {
    assert_eq!(
        RecordEntry::A(Ipv4Addr::new(140, 82, 121, 3)).to_string(),
        "140.82.121.3"
    );
    assert_eq!(
        RecordEntry::mx(1, "aspmx.l.google.com").to_string(),
        "1 aspmx.l.google.com"
    );
    assert_eq!(
        RecordEntry::ns("dns1.p08.nsone.net").to_string(),
        "dns1.p08.nsone.net"
    );
    assert_eq!(RecordEntry::Txt("v=spf1 -all".to_string()).to_string(), "v=spf1 -all");
}

#[test]
fn test_entry_display_with_host_address() {
    let mut mx = RecordEntry::mx(10, "mx.example.com");
    mx.set_host_address(HostAddress::Resolved(Ipv4Addr::new(192, 0, 2, 25).into()));
    assert_eq!(mx.to_string(), "10 mx.example.com (192.0.2.25)");

    let mut ns = RecordEntry::ns("ns.example.com");
    ns.set_host_address(HostAddress::Unresolved);
    assert_eq!(ns.to_string(), "ns.example.com (N/A)");

    ns.set_host_address(HostAddress::Resolved(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 0x53).into()));
    assert_eq!(ns.to_string(), "ns.example.com (2001:db8::53)");

    ns.set_host_address(HostAddress::TimedOut);
    assert_eq!(ns.to_string(), "ns.example.com (Time limit exceeded)");
}

#[test]
fn test_set_host_address_ignores_a_and_txt() {
    let mut a = RecordEntry::A(Ipv4Addr::LOCALHOST);
    a.set_host_address(HostAddress::Unresolved);
    assert_eq!(a, RecordEntry::A(Ipv4Addr::LOCALHOST));
    assert_eq!(a.host_address(), None);
    assert_eq!(a.host(), None);
}
