//! Configuration types for the zone synchronization system
//!
//! This module defines all configuration structures used throughout the
//! crate. Provider credentials deliberately do not live here; they are
//! supplied by a [`SecretStore`](crate::traits::SecretStore) at
//! reconciliation time.

use serde::{Deserialize, Serialize};

/// Main synchronization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// DNS provider configuration
    pub provider: DnsProviderConfig,

    /// Public-address source configuration
    pub address_source: AddressSourceConfig,

    /// Instance registry configuration
    #[serde(default)]
    pub instance_store: InstanceStoreConfig,
}

impl SyncConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        self.provider.validate()?;
        self.address_source.validate()?;
        Ok(())
    }
}

/// DNS provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DnsProviderConfig {
    /// Gandi LiveDNS provider
    Gandi {
        /// Base URL override (defaults to the public LiveDNS endpoint)
        base_url: Option<String>,
    },

    /// Custom provider
    Custom {
        /// Factory name to use
        factory: String,
        /// Custom configuration data
        config: serde_json::Value,
    },
}

impl DnsProviderConfig {
    /// Validate the provider configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        match self {
            DnsProviderConfig::Gandi { .. } => Ok(()),
            DnsProviderConfig::Custom { factory, config } => {
                if factory.is_empty() {
                    return Err(crate::Error::config(
                        "Custom provider factory cannot be empty",
                    ));
                }
                if config.is_null() {
                    return Err(crate::Error::config("Custom provider config cannot be null"));
                }
                Ok(())
            }
        }
    }

    /// Get the provider type name
    pub fn type_name(&self) -> &str {
        match self {
            DnsProviderConfig::Gandi { .. } => "gandi",
            DnsProviderConfig::Custom { factory, .. } => factory,
        }
    }
}

impl Default for DnsProviderConfig {
    fn default() -> Self {
        DnsProviderConfig::Gandi { base_url: None }
    }
}

/// Public-address source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AddressSourceConfig {
    /// HTTP inventory endpoint
    Http {
        /// Base URL of the inventory service
        base_url: String,
    },

    /// Custom address source
    Custom {
        /// Factory name to use
        factory: String,
        /// Custom configuration data
        config: serde_json::Value,
    },
}

impl AddressSourceConfig {
    /// Validate the address source configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        match self {
            AddressSourceConfig::Http { base_url } => {
                if base_url.is_empty() {
                    return Err(crate::Error::config(
                        "HTTP address source base URL cannot be empty",
                    ));
                }
                Ok(())
            }
            AddressSourceConfig::Custom { factory, config } => {
                if factory.is_empty() {
                    return Err(crate::Error::config(
                        "Custom address source factory cannot be empty",
                    ));
                }
                if config.is_null() {
                    return Err(crate::Error::config(
                        "Custom address source config cannot be null",
                    ));
                }
                Ok(())
            }
        }
    }

    /// Get the source type name
    pub fn type_name(&self) -> &str {
        match self {
            AddressSourceConfig::Http { .. } => "http",
            AddressSourceConfig::Custom { factory, .. } => factory,
        }
    }
}

/// Instance registry configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InstanceStoreConfig {
    /// JSON-file-backed registry
    File {
        /// Path to the instance records file
        path: String,
    },

    /// In-memory registry (provisioned programmatically)
    #[default]
    Memory,

    /// Custom registry
    Custom {
        /// Factory name to use
        factory: String,
        /// Custom configuration data
        config: serde_json::Value,
    },
}

impl InstanceStoreConfig {
    /// Get the store type name
    pub fn type_name(&self) -> &str {
        match self {
            InstanceStoreConfig::File { .. } => "file",
            InstanceStoreConfig::Memory => "memory",
            InstanceStoreConfig::Custom { factory, .. } => factory,
        }
    }
}
