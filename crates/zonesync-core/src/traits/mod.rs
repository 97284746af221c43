//! Capability traits for the zone synchronization system

pub mod address_source;
pub mod dns_client;
pub mod instance_registry;
pub mod secret_store;

pub use address_source::{AddressSource, AddressSourceFactory};
pub use dns_client::{DnsClient, DnsClientFactory};
pub use instance_registry::{InstanceRegistry, InstanceStoreFactory};
pub use secret_store::{ProviderCredentials, SecretStore};
