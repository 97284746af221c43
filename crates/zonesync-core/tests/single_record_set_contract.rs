//! Contract Test: Single-Record-Set Writes
//!
//! A conforming `DnsClient` rejects unsafe `set_record` inputs before any
//! network I/O: inputs spanning more than one record name, and inputs
//! carrying record types outside A/AAAA. The double used here runs the same
//! pre-flight every real client runs and only records calls that survive
//! it, so "zero recorded calls" means "zero network calls".

mod common;

use common::*;
use zonesync_core::error::Error;
use zonesync_core::rrset::{RRSet, RecordType};
use zonesync_core::traits::DnsClient;

#[tokio::test]
async fn two_record_names_in_one_call_are_rejected_before_io() {
    let client = MockDnsClient::new("example.com");

    let rrsets = vec![
        RRSet::new("web1", RecordType::A, vec!["198.51.100.7".into()], None).unwrap(),
        RRSet::new("web2", RecordType::A, vec!["198.51.100.8".into()], None).unwrap(),
    ];

    let err = client
        .set_record(&rrsets)
        .await
        .expect_err("expected MultiRecordSet");
    assert!(matches!(err, Error::MultiRecordSet(_)));
    assert_eq!(client.network_call_count(), 0, "no network call may be attempted");
}

#[tokio::test]
async fn non_address_types_are_rejected_before_io() {
    let client = MockDnsClient::new("example.com");

    let rrsets =
        vec![RRSet::new("web1", RecordType::Cname, vec!["target.example.com".into()], None)
            .unwrap()];

    let err = client
        .set_record(&rrsets)
        .await
        .expect_err("expected UnsupportedRecordType");
    assert!(matches!(
        err,
        Error::UnsupportedRecordType(RecordType::Cname)
    ));
    assert_eq!(client.network_call_count(), 0);
}

#[tokio::test]
async fn a_and_aaaa_under_one_name_are_accepted() {
    let client = MockDnsClient::new("example.com");

    let rrsets = vec![
        RRSet::new("web1", RecordType::A, vec!["198.51.100.7".into()], Some(300)).unwrap(),
        RRSet::new("web1", RecordType::Aaaa, vec!["2001:db8::7".into()], Some(300)).unwrap(),
    ];

    client.set_record(&rrsets).await.unwrap();
    assert_eq!(client.set_calls().len(), 1);
}

#[tokio::test]
async fn empty_input_is_rejected_before_io() {
    let client = MockDnsClient::new("example.com");

    let err = client.set_record(&[]).await.expect_err("expected Validation");
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(client.network_call_count(), 0);
}
