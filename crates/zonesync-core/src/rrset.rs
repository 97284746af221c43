//! DNS record set model
//!
//! [`RRSet`] is the unit of synchronization: one name, one type, the values
//! sharing that name/type, and an optional TTL. Construction validates
//! everything up front so an `RRSet` in hand is always safe to hand to a
//! [`DnsClient`](crate::traits::DnsClient):
//!
//! - the name conforms to the DNS host-name grammar (via [`crate::name`]),
//! - address-type values parse as literals of the matching family,
//! - the TTL lies within the provider-accepted range.
//!
//! Deserialization routes through the same constructor, so record sets parsed
//! out of a provider response get the same treatment; a malformed remote
//! record fails the parse instead of being silently carried along.
//!
//! The "only A/AAAA are synchronized" rule is deliberately *not* baked into
//! [`RecordType`]: `get_record` must be able to represent provider-returned
//! records of any kind. The restriction is enforced by
//! [`single_record_set_name`] on the write path.

use std::collections::BTreeSet;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::name;

/// Minimum TTL accepted by the provider, in seconds
pub const MIN_TTL_SECS: u32 = 300;

/// Maximum TTL accepted by the provider, in seconds (30 days)
pub const MAX_TTL_SECS: u32 = 2_592_000;

/// DNS record type
///
/// Covers the full record-type alphabet of the LiveDNS API so that records
/// read back from the provider can always be represented. Only [`A`] and
/// [`AAAA`] are accepted on the synchronization path.
///
/// [`A`]: RecordType::A
/// [`AAAA`]: RecordType::Aaaa
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// A record (IPv4 address)
    A,
    /// AAAA record (IPv6 address)
    Aaaa,
    Alias,
    Caa,
    Cds,
    Cname,
    Dname,
    Ds,
    Key,
    Loc,
    Mx,
    Naptr,
    Ns,
    Openpgpkey,
    Ptr,
    Rp,
    Spf,
    Srv,
    Sshfp,
    Tlsa,
    Txt,
    Wks,
}

impl RecordType {
    /// Wire representation of the record type
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Alias => "ALIAS",
            RecordType::Caa => "CAA",
            RecordType::Cds => "CDS",
            RecordType::Cname => "CNAME",
            RecordType::Dname => "DNAME",
            RecordType::Ds => "DS",
            RecordType::Key => "KEY",
            RecordType::Loc => "LOC",
            RecordType::Mx => "MX",
            RecordType::Naptr => "NAPTR",
            RecordType::Ns => "NS",
            RecordType::Openpgpkey => "OPENPGPKEY",
            RecordType::Ptr => "PTR",
            RecordType::Rp => "RP",
            RecordType::Spf => "SPF",
            RecordType::Srv => "SRV",
            RecordType::Sshfp => "SSHFP",
            RecordType::Tlsa => "TLSA",
            RecordType::Txt => "TXT",
            RecordType::Wks => "WKS",
        }
    }

    /// Whether this is an address record type (A or AAAA)
    pub fn is_address(&self) -> bool {
        matches!(self, RecordType::A | RecordType::Aaaa)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a TTL against the provider-accepted range
///
/// # Errors
///
/// Returns [`Error::Validation`] when `ttl` lies outside
/// [`MIN_TTL_SECS`]..=[`MAX_TTL_SECS`].
pub fn validate_ttl(ttl: u32) -> Result<()> {
    if !(MIN_TTL_SECS..=MAX_TTL_SECS).contains(&ttl) {
        return Err(Error::validation(format!(
            "TTL {} out of range [{}, {}]",
            ttl, MIN_TTL_SECS, MAX_TTL_SECS
        )));
    }
    Ok(())
}

/// A DNS resource-record set
///
/// Field names match the provider wire format (`rrset_*`), so the value
/// serializes directly into API payloads and provider responses deserialize
/// directly into it (going through [`RRSet::new`] on the way in).
///
/// Constructed fresh per reconciliation call and never persisted locally;
/// the remote provider is the system of record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RRSetWire")]
pub struct RRSet {
    /// Record name, normalized
    pub rrset_name: String,

    /// Record type
    pub rrset_type: RecordType,

    /// Record values; literal addresses for A/AAAA
    pub rrset_values: Vec<String>,

    /// Time-to-live in seconds, if set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rrset_ttl: Option<u32>,
}

impl RRSet {
    /// Construct a validated record set.
    ///
    /// # Parameters
    ///
    /// - `name`: record name; normalized via [`crate::name::normalize`]
    /// - `rrset_type`: record type
    /// - `values`: record values; for A/AAAA each must be a literal address
    ///   of the matching family and at least one value must be present
    /// - `ttl`: optional TTL in seconds, bounded by
    ///   [`MIN_TTL_SECS`]..=[`MAX_TTL_SECS`]
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`]: bad name, out-of-range TTL, or an address
    ///   record set without values
    /// - [`Error::InvalidAddress`]: a value that does not parse as a literal
    ///   of the declared family, identifying the offending value
    pub fn new(
        name: &str,
        rrset_type: RecordType,
        values: Vec<String>,
        ttl: Option<u32>,
    ) -> Result<Self> {
        let rrset_name = name::normalize(name)?;

        if let Some(ttl) = ttl {
            validate_ttl(ttl)?;
        }

        match rrset_type {
            RecordType::A => {
                if values.is_empty() {
                    return Err(Error::validation("A record set requires at least one value"));
                }
                for value in &values {
                    if value.parse::<Ipv4Addr>().is_err() {
                        return Err(Error::invalid_address(value, rrset_type));
                    }
                }
            }
            RecordType::Aaaa => {
                if values.is_empty() {
                    return Err(Error::validation(
                        "AAAA record set requires at least one value",
                    ));
                }
                for value in &values {
                    if value.parse::<Ipv6Addr>().is_err() {
                        return Err(Error::invalid_address(value, rrset_type));
                    }
                }
            }
            // Non-address types are only ever read back from the provider;
            // their values are provider-opaque and pass through unvalidated.
            _ => {}
        }

        Ok(Self {
            rrset_name,
            rrset_type,
            rrset_values: values,
            rrset_ttl: ttl,
        })
    }

    /// Construct a single-value address record set for `ip`.
    ///
    /// The record type follows the address family: A for IPv4, AAAA for IPv6.
    pub fn address(name: &str, ip: IpAddr, ttl: Option<u32>) -> Result<Self> {
        let rrset_type = match ip {
            IpAddr::V4(_) => RecordType::A,
            IpAddr::V6(_) => RecordType::Aaaa,
        };
        Self::new(name, rrset_type, vec![ip.to_string()], ttl)
    }
}

/// Unvalidated wire shape; `RRSet` deserialization goes through this and
/// then through [`RRSet::new`].
#[derive(Deserialize)]
struct RRSetWire {
    rrset_name: String,
    rrset_type: RecordType,
    rrset_values: Vec<String>,
    #[serde(default)]
    rrset_ttl: Option<u32>,
}

impl TryFrom<RRSetWire> for RRSet {
    type Error = Error;

    fn try_from(wire: RRSetWire) -> Result<Self> {
        RRSet::new(
            &wire.rrset_name,
            wire.rrset_type,
            wire.rrset_values,
            wire.rrset_ttl,
        )
    }
}

/// Pre-flight invariant for `set_record`: one call updates exactly one
/// record set name, and only address types.
///
/// Returns the single shared name on success. Intended to be called by
/// [`DnsClient`](crate::traits::DnsClient) implementations before any
/// network I/O is attempted.
///
/// # Errors
///
/// - [`Error::Validation`]: empty input
/// - [`Error::MultiRecordSet`]: more than one distinct `rrset_name`
/// - [`Error::UnsupportedRecordType`]: any type outside A/AAAA
pub fn single_record_set_name(rrsets: &[RRSet]) -> Result<&str> {
    if rrsets.is_empty() {
        return Err(Error::validation("set_record requires at least one record set"));
    }

    let names: BTreeSet<&str> = rrsets.iter().map(|r| r.rrset_name.as_str()).collect();
    if names.len() > 1 {
        return Err(Error::MultiRecordSet(
            names.into_iter().map(String::from).collect(),
        ));
    }

    if let Some(rrset) = rrsets.iter().find(|r| !r.rrset_type.is_address()) {
        return Err(Error::UnsupportedRecordType(rrset.rrset_type));
    }

    Ok(rrsets[0].rrset_name.as_str())
}
