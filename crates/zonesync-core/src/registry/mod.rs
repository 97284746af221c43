//! Plugin-based provider registry
//!
//! The registry allows DNS clients, address sources, and instance stores to
//! be registered dynamically at runtime, avoiding hardcoded if-else chains.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use zonesync_core::registry::ProviderRegistry;
//! use zonesync_core::config::DnsProviderConfig;
//!
//! // Create a registry with the built-in instance stores
//! let registry = ProviderRegistry::new();
//!
//! // Register clients
//! zonesync_provider_gandi::register(&registry);
//!
//! // Create a zone-scoped client from config
//! let config = DnsProviderConfig::Gandi { base_url: None };
//! let client = registry.create_client(&config, &credentials, "example.com")?;
//! ```
//!
//! ## Registration
//!
//! Implementations should register themselves during initialization:
//!
//! ```rust,ignore
//! // In zonesync-provider-gandi crate
//! pub fn register(registry: &ProviderRegistry) {
//!     registry.register_client("gandi", Box::new(GandiFactory));
//! }
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use crate::config::{AddressSourceConfig, DnsProviderConfig, InstanceStoreConfig};
use crate::error::{Error, Result};
use crate::store::{FileStoreFactory, MemoryStoreFactory};
use crate::traits::{
    AddressSource, AddressSourceFactory, DnsClient, DnsClientFactory, InstanceRegistry,
    InstanceStoreFactory, ProviderCredentials,
};

/// Plugin registry for DNS clients, address sources, and instance stores
///
/// The registry maintains maps of type names to factory objects, allowing
/// dynamic instantiation based on configuration.
///
/// ## Thread Safety
///
/// The registry uses interior mutability with RwLock, allowing concurrent
/// reads and exclusive writes.
pub struct ProviderRegistry {
    /// Registered DNS client factories
    clients: RwLock<HashMap<String, Box<dyn DnsClientFactory>>>,

    /// Registered address source factories
    address_sources: RwLock<HashMap<String, Box<dyn AddressSourceFactory>>>,

    /// Registered instance store factories
    instance_stores: RwLock<HashMap<String, Box<dyn InstanceStoreFactory>>>,
}

impl ProviderRegistry {
    /// Create a registry with the built-in instance stores registered
    pub fn new() -> Self {
        let registry = Self {
            clients: RwLock::new(HashMap::new()),
            address_sources: RwLock::new(HashMap::new()),
            instance_stores: RwLock::new(HashMap::new()),
        };
        registry.register_instance_store("memory", Box::new(MemoryStoreFactory));
        registry.register_instance_store("file", Box::new(FileStoreFactory));
        registry
    }

    /// Register a DNS client factory
    ///
    /// # Parameters
    ///
    /// - `name`: Client type name (e.g., "gandi")
    /// - `factory`: Factory object for creating client instances
    pub fn register_client(&self, name: impl Into<String>, factory: Box<dyn DnsClientFactory>) {
        let name = name.into();
        let mut clients = self.clients.write().unwrap();
        clients.insert(name, factory);
    }

    /// Register an address source factory
    ///
    /// # Parameters
    ///
    /// - `name`: Source type name (e.g., "http")
    /// - `factory`: Factory object for creating source instances
    pub fn register_address_source(
        &self,
        name: impl Into<String>,
        factory: Box<dyn AddressSourceFactory>,
    ) {
        let name = name.into();
        let mut sources = self.address_sources.write().unwrap();
        sources.insert(name, factory);
    }

    /// Register an instance store factory
    ///
    /// # Parameters
    ///
    /// - `name`: Store type name (e.g., "file", "memory")
    /// - `factory`: Factory object for creating store instances
    pub fn register_instance_store(
        &self,
        name: impl Into<String>,
        factory: Box<dyn InstanceStoreFactory>,
    ) {
        let name = name.into();
        let mut stores = self.instance_stores.write().unwrap();
        stores.insert(name, factory);
    }

    /// Create a zone-scoped DNS client from configuration
    ///
    /// # Parameters
    ///
    /// - `config`: Provider configuration
    /// - `credentials`: Credentials from the secret store
    /// - `zone`: The DNS zone the client is scoped to
    ///
    /// # Returns
    ///
    /// - `Ok(Box<dyn DnsClient>)`: Created client instance
    /// - `Err(Error)`: If the client type is not registered or creation fails
    pub fn create_client(
        &self,
        config: &DnsProviderConfig,
        credentials: &ProviderCredentials,
        zone: &str,
    ) -> Result<Box<dyn DnsClient>> {
        let client_type = config.type_name();
        let clients = self.clients.read().unwrap();

        let factory = clients
            .get(client_type)
            .ok_or_else(|| Error::config(format!("Unknown provider type: {}", client_type)))?;

        factory.create(config, credentials, zone)
    }

    /// Create an address source from configuration
    ///
    /// # Returns
    ///
    /// - `Ok(Box<dyn AddressSource>)`: Created source instance
    /// - `Err(Error)`: If the source type is not registered or creation fails
    pub fn create_address_source(
        &self,
        config: &AddressSourceConfig,
    ) -> Result<Box<dyn AddressSource>> {
        let source_type = config.type_name();
        let sources = self.address_sources.read().unwrap();

        let factory = sources
            .get(source_type)
            .ok_or_else(|| Error::config(format!("Unknown address source type: {}", source_type)))?;

        factory.create(config)
    }

    /// Create an instance registry from configuration
    ///
    /// # Returns
    ///
    /// - `Ok(Box<dyn InstanceRegistry>)`: Created registry instance
    /// - `Err(Error)`: If the store type is not registered or creation fails
    pub fn create_instance_store(
        &self,
        config: &InstanceStoreConfig,
    ) -> Result<Box<dyn InstanceRegistry>> {
        let store_type = config.type_name();
        let stores = self.instance_stores.read().unwrap();

        let factory = stores
            .get(store_type)
            .ok_or_else(|| Error::config(format!("Unknown instance store type: {}", store_type)))?;

        factory.create(config)
    }

    /// List all registered client types
    pub fn list_clients(&self) -> Vec<String> {
        let clients = self.clients.read().unwrap();
        clients.keys().cloned().collect()
    }

    /// List all registered address source types
    pub fn list_address_sources(&self) -> Vec<String> {
        let sources = self.address_sources.read().unwrap();
        sources.keys().cloned().collect()
    }

    /// Check if a client type is registered
    pub fn has_client(&self, name: &str) -> bool {
        let clients = self.clients.read().unwrap();
        clients.contains_key(name)
    }

    /// Check if an address source type is registered
    pub fn has_address_source(&self, name: &str) -> bool {
        let sources = self.address_sources.read().unwrap();
        sources.contains_key(name)
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockClientFactory;

    impl DnsClientFactory for MockClientFactory {
        fn create(
            &self,
            _config: &DnsProviderConfig,
            _credentials: &ProviderCredentials,
            _zone: &str,
        ) -> Result<Box<dyn DnsClient>> {
            Err(Error::not_found("Mock client not implemented"))
        }
    }

    #[test]
    fn test_registry_registration() {
        let registry = ProviderRegistry::new();

        // Initially absent
        assert!(!registry.has_client("mock"));

        // Register
        registry.register_client("mock", Box::new(MockClientFactory));

        // Now present
        assert!(registry.has_client("mock"));
        assert!(registry.list_clients().contains(&"mock".to_string()));
    }

    #[test]
    fn test_unknown_client_type_is_config_error() {
        let registry = ProviderRegistry::new();
        let config = DnsProviderConfig::Gandi { base_url: None };
        let credentials = ProviderCredentials::new("key");

        let result = registry.create_client(&config, &credentials, "example.com");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_builtin_instance_stores_registered() {
        let registry = ProviderRegistry::new();
        let store = registry.create_instance_store(&InstanceStoreConfig::Memory);
        assert!(store.is_ok());
    }
}
