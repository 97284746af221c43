// # Instance Registry Trait
//
// Defines the interface for looking up managed instances.
//
// ## Implementations
//
// - In-memory: `store::MemoryInstanceStore`
// - JSON file: `store::FileInstanceStore`
//
// ## Model
//
// The registry is a read-only collaborator: records are provisioned out of
// band and never mutated by the reconciliation core.

use async_trait::async_trait;

use crate::error::Result;
use crate::instance::{InstanceId, InstanceRecord};

/// Trait for instance registry implementations
#[async_trait]
pub trait InstanceRegistry: Send + Sync {
    /// Look up the record for `instance_id`.
    ///
    /// # Returns
    ///
    /// - `Ok(record)`: the managed instance
    /// - `Err(Error::NotFound)`: the instance is not managed by this registry
    async fn lookup(&self, instance_id: &InstanceId) -> Result<InstanceRecord>;

    /// List the identifiers of all managed instances
    async fn list(&self) -> Result<Vec<InstanceId>>;
}

/// Helper trait for constructing instance registries from configuration
pub trait InstanceStoreFactory: Send + Sync {
    /// Create an [`InstanceRegistry`] instance from configuration
    fn create(
        &self,
        config: &crate::config::InstanceStoreConfig,
    ) -> Result<Box<dyn InstanceRegistry>>;
}
