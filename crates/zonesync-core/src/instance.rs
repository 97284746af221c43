//! Managed instance model
//!
//! An [`InstanceRecord`] identifies one cloud instance whose address record
//! this system keeps in sync. Records are read-only: they are sourced from an
//! external registry and never mutated by the core.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::name;
use crate::rrset;

/// Default TTL for managed records, in seconds
pub const DEFAULT_TTL_SECS: u32 = 300;

/// Opaque cloud instance identifier
///
/// The lexical shape is fixed: `i-` followed by exactly 17 lowercase hex
/// digits. Anything else fails construction, so an `InstanceId` in hand is
/// always safe to splice into provider lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InstanceId(String);

impl InstanceId {
    /// Number of hex digits after the `i-` prefix
    const HEX_LEN: usize = 17;

    /// Construct a validated instance identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when `raw` does not match the
    /// `i-<17 lowercase hex digits>` shape.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let hex = raw.strip_prefix("i-").ok_or_else(|| {
            Error::validation(format!("Instance id {:?} must start with \"i-\"", raw))
        })?;

        let valid = hex.len() == Self::HEX_LEN
            && hex
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
        if !valid {
            return Err(Error::validation(format!(
                "Instance id {:?} must be \"i-\" followed by {} lowercase hex digits",
                raw,
                Self::HEX_LEN
            )));
        }

        Ok(Self(raw))
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for InstanceId {
    type Error = Error;

    fn try_from(raw: String) -> Result<Self> {
        Self::new(raw)
    }
}

impl From<InstanceId> for String {
    fn from(id: InstanceId) -> Self {
        id.0
    }
}

/// A managed instance and the record it maps to
///
/// One instance maps to exactly one logical record set name (`name`) within
/// one zone (`domain`) at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "InstanceRecordWire")]
pub struct InstanceRecord {
    /// Cloud instance identifier
    pub instance_id: InstanceId,

    /// Record name within the zone, normalized
    pub name: String,

    /// DNS zone the record lives in, normalized
    pub domain: String,

    /// TTL for the managed record, in seconds
    pub ttl: u32,
}

impl InstanceRecord {
    /// Construct a validated instance record.
    ///
    /// `name` and `domain` are normalized via [`crate::name::normalize`];
    /// `ttl` defaults to [`DEFAULT_TTL_SECS`] when absent and is bounded like
    /// record-set TTLs.
    pub fn new(
        instance_id: impl Into<String>,
        name: &str,
        domain: &str,
        ttl: Option<u32>,
    ) -> Result<Self> {
        let instance_id = InstanceId::new(instance_id)?;
        let name = name::normalize(name)?;
        let domain = name::normalize(domain)?;

        let ttl = ttl.unwrap_or(DEFAULT_TTL_SECS);
        rrset::validate_ttl(ttl)?;

        Ok(Self {
            instance_id,
            name,
            domain,
            ttl,
        })
    }
}

/// Unvalidated wire shape for `InstanceRecord` deserialization
#[derive(Deserialize)]
struct InstanceRecordWire {
    instance_id: String,
    name: String,
    domain: String,
    #[serde(default)]
    ttl: Option<u32>,
}

impl TryFrom<InstanceRecordWire> for InstanceRecord {
    type Error = Error;

    fn try_from(wire: InstanceRecordWire) -> Result<Self> {
        InstanceRecord::new(wire.instance_id, &wire.name, &wire.domain, wire.ttl)
    }
}
