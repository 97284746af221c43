// # Address Source Trait
//
// Defines the interface for resolving an instance's current public address.
//
// ## Implementations
//
// - HTTP inventory endpoint: `zonesync-address-http` crate
// - Future: cloud SDK bindings, local agents
//
// ## Model
//
// One lookup per reconciliation pass; no watching, no polling, no caching.
// An instance that currently has no public address is a normal outcome
// (`Ok(None)`), left to the caller to interpret.

use async_trait::async_trait;
use std::net::IpAddr;

use crate::error::Result;
use crate::instance::InstanceId;

/// Trait for public-address resolution implementations
///
/// # Thread Safety
///
/// Implementations must be thread-safe and usable across async tasks.
#[async_trait]
pub trait AddressSource: Send + Sync {
    /// Resolve the current public address of `instance_id`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ip))`: the instance's current public address
    /// - `Ok(None)`: the instance exists but has no public address right now
    /// - `Err(Error)`: the lookup itself failed
    async fn public_address(&self, instance_id: &InstanceId) -> Result<Option<IpAddr>>;

    /// Source implementation name (for logging/debugging)
    fn source_name(&self) -> &'static str;
}

/// Helper trait for constructing address sources from configuration
pub trait AddressSourceFactory: Send + Sync {
    /// Create an [`AddressSource`] instance from configuration
    fn create(
        &self,
        config: &crate::config::AddressSourceConfig,
    ) -> Result<Box<dyn AddressSource>>;
}
