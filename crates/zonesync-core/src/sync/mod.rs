//! Lifecycle-driven record reconciliation
//!
//! This module turns one instance lifecycle event into at most one DNS
//! write:
//!
//! ```text
//! ┌────────────────┐
//! │ LifecycleEvent │──── running / shutting-down / other ────┐
//! └────────────────┘                                         ▼
//!                                                  ┌───────────────┐
//!                                                  │ LifecycleSync │
//!                                                  └───────────────┘
//!                                                          │
//!            ┌──────────────────┬──────────────────────────┼─────────────────┐
//!            ▼                  ▼                          ▼                 ▼
//!   ┌──────────────────┐ ┌─────────────┐          ┌───────────────┐  ┌─────────────┐
//!   │ InstanceRegistry │ │ SecretStore │          │ AddressSource │  │  DnsClient  │
//!   │ (lookup)         │ │ (creds)     │          │ (resolve)     │  │ (set/remove)│
//!   └──────────────────┘ └─────────────┘          └───────────────┘  └─────────────┘
//! ```
//!
//! ## Event Flow
//!
//! 1. Decide the action from the event state (other states are skipped
//!    without touching any collaborator)
//! 2. Look up the instance in the registry
//! 3. Fetch provider credentials
//! 4. Construct one DNS client scoped to the instance's zone
//! 5. Run the reconciliation action
//!
//! Each invocation is one strict sequence with no retries and no state
//! shared across invocations; errors propagate to the caller untouched.

use std::net::IpAddr;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::DnsProviderConfig;
use crate::error::{Error, Result};
use crate::event::{InstanceState, LifecycleEvent};
use crate::instance::InstanceRecord;
use crate::registry::ProviderRegistry;
use crate::rrset::RRSet;
use crate::traits::{AddressSource, DnsClient, InstanceRegistry, SecretStore};

/// Outcome of handling one lifecycle event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The record was upserted to the instance's current public address
    Updated {
        record_name: String,
        address: IpAddr,
    },

    /// The record was removed
    Removed { record_name: String },

    /// The event's state requires no reconciliation
    Skipped { state: InstanceState },
}

/// Upsert the address record for `instance`.
///
/// Resolves the instance's current public address, builds exactly one
/// address record set (`A` for an IPv4 address, `AAAA` for IPv6, TTL from
/// the instance record), and issues one idempotent `set_record`.
///
/// # Errors
///
/// - [`Error::AddressUnavailable`]: the instance has no public address
/// - any address lookup, record construction, or provider failure,
///   propagated as-is
pub async fn add_or_update(
    client: &dyn DnsClient,
    addresses: &dyn AddressSource,
    instance: &InstanceRecord,
) -> Result<IpAddr> {
    let address = addresses
        .public_address(&instance.instance_id)
        .await?
        .ok_or_else(|| Error::address_unavailable(instance.instance_id.as_str()))?;

    let rrset = RRSet::address(&instance.name, address, Some(instance.ttl))?;

    info!(
        "Upserting {}.{} -> {} (ttl {})",
        rrset.rrset_name,
        client.zone(),
        address,
        instance.ttl
    );
    client.set_record(std::slice::from_ref(&rrset)).await?;

    Ok(address)
}

/// Remove the address record for `instance`.
///
/// Removing an already-absent record is success (idempotent delete).
pub async fn remove(client: &dyn DnsClient, instance: &InstanceRecord) -> Result<()> {
    info!("Removing {}.{}", instance.name, client.zone());
    client.remove_record(&instance.name).await
}

/// Per-event reconciliation handler
///
/// Owns the collaborators one deployment wires together and drives the
/// event flow above. The handler itself is stateless across events: every
/// invocation constructs its own zone-scoped DNS client and nothing is
/// cached in between, so concurrent events for different instances need no
/// coordination.
///
/// Correctness under concurrent events for the *same* instance is not
/// guaranteed here; it relies on the provider's per-record atomicity.
pub struct LifecycleSync {
    /// Instance registry for event → record resolution
    instances: Box<dyn InstanceRegistry>,

    /// Public-address source
    addresses: Box<dyn AddressSource>,

    /// Provider credential source
    secrets: Box<dyn SecretStore>,

    /// Factory registry used to construct zone-scoped DNS clients
    clients: Arc<ProviderRegistry>,

    /// Provider selection and endpoint configuration
    provider: DnsProviderConfig,
}

impl LifecycleSync {
    /// Create a new handler
    ///
    /// # Parameters
    ///
    /// - `instances`: instance registry implementation
    /// - `addresses`: address source implementation
    /// - `secrets`: secret store implementation
    /// - `clients`: plugin registry with the provider's client factory
    ///   registered
    /// - `provider`: provider configuration
    pub fn new(
        instances: Box<dyn InstanceRegistry>,
        addresses: Box<dyn AddressSource>,
        secrets: Box<dyn SecretStore>,
        clients: Arc<ProviderRegistry>,
        provider: DnsProviderConfig,
    ) -> Self {
        Self {
            instances,
            addresses,
            secrets,
            clients,
            provider,
        }
    }

    /// Handle one lifecycle event.
    ///
    /// # Returns
    ///
    /// - `Ok(SyncOutcome)`: what was done
    /// - `Err(Error)`: the first failure in the sequence; nothing is
    ///   retried and no partial success is reported
    pub async fn handle(&self, event: &LifecycleEvent) -> Result<SyncOutcome> {
        enum Action {
            Add,
            Remove,
        }

        let action = match &event.state {
            InstanceState::Running => Action::Add,
            InstanceState::ShuttingDown => Action::Remove,
            InstanceState::Other(state) => {
                debug!("Ignoring {} state {:?}", event.instance_id, state);
                return Ok(SyncOutcome::Skipped {
                    state: event.state.clone(),
                });
            }
        };

        let instance = self.instances.lookup(&event.instance_id).await?;

        // Credentials are fetched after the registry lookup so an unmanaged
        // instance never triggers a secret read, and before client
        // construction so a secret failure aborts without any network call.
        let credentials = self.secrets.provider_credentials().await?;
        let client = self
            .clients
            .create_client(&self.provider, &credentials, &instance.domain)?;

        match action {
            Action::Add => {
                let address =
                    add_or_update(client.as_ref(), self.addresses.as_ref(), &instance).await?;
                Ok(SyncOutcome::Updated {
                    record_name: instance.name,
                    address,
                })
            }
            Action::Remove => {
                remove(client.as_ref(), &instance).await?;
                Ok(SyncOutcome::Removed {
                    record_name: instance.name,
                })
            }
        }
    }
}
