// # zonesync-core
//
// Core library for instance-lifecycle DNS zone synchronization.
//
// ## Architecture Overview
//
// This library keeps a DNS zone's address records in line with the
// lifecycle state of cloud instances:
//
// - **RRSet / RecordType**: validated DNS record-set model
// - **DnsClient**: trait for manipulating records via provider APIs
// - **AddressSource**: trait for resolving an instance's public address
// - **InstanceRegistry**: trait for looking up managed instances
// - **SecretStore**: trait for retrieving provider credentials
// - **LifecycleSync**: per-event handler that orchestrates the
//   event → lookup → resolve → write flow
// - **ProviderRegistry**: plugin-based registry for client and source
//   factories
//
// ## Design Principles
//
// 1. **Separation of Concerns**: the reconciliation core is separate from
//    provider and resolver implementations
// 2. **Validated Construction**: no RRSet or instance record exists without
//    having passed validation
// 3. **Plugin-Based**: providers are registered dynamically, no hard-coded
//    if-else
// 4. **Library-First**: driven by an external event loop; no daemon, no CLI
// 5. **Single-Pass**: one event, one strict sequence of calls, no retries,
//    no state shared between invocations

pub mod config;
pub mod error;
pub mod event;
pub mod instance;
pub mod name;
pub mod registry;
pub mod rrset;
pub mod secrets;
pub mod store;
pub mod sync;
pub mod traits;

// Re-export core types for convenience
pub use config::{AddressSourceConfig, DnsProviderConfig, InstanceStoreConfig, SyncConfig};
pub use error::{Error, Result};
pub use event::{InstanceState, LifecycleEvent, StateChangeNotification};
pub use instance::{InstanceId, InstanceRecord};
pub use registry::ProviderRegistry;
pub use rrset::{RRSet, RecordType};
pub use secrets::{EnvSecretStore, StaticSecretStore};
pub use store::{FileInstanceStore, MemoryInstanceStore};
pub use sync::{LifecycleSync, SyncOutcome};
pub use traits::{AddressSource, DnsClient, InstanceRegistry, ProviderCredentials, SecretStore};
