// # Memory Instance Store
//
// In-memory implementation of InstanceRegistry.
//
// ## Purpose
//
// Holds instance records provisioned programmatically by the embedding
// application. Useful for testing and for deployments whose instance
// inventory is assembled at startup rather than read from disk.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{Error, Result};
use crate::instance::{InstanceId, InstanceRecord};
use crate::traits::InstanceRegistry;

/// In-memory instance registry implementation
///
/// Records are stored in a HashMap protected by a RwLock. Lookups are served
/// concurrently; `insert` is only expected during provisioning.
///
/// # Example
///
/// ```rust,no_run
/// use zonesync_core::store::MemoryInstanceStore;
/// use zonesync_core::instance::InstanceRecord;
/// use zonesync_core::traits::InstanceRegistry;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = MemoryInstanceStore::new();
///
///     let record = InstanceRecord::new("i-0123456789abcdef0", "web1", "example.com", None)?;
///     store.insert(record.clone()).await;
///
///     let found = store.lookup(&record.instance_id).await?;
///     assert_eq!(found.name, "web1");
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryInstanceStore {
    inner: Arc<RwLock<HashMap<InstanceId, InstanceRecord>>>,
}

impl MemoryInstanceStore {
    /// Create a new empty memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a record
    pub async fn insert(&self, record: InstanceRecord) {
        let mut guard = self.inner.write().await;
        guard.insert(record.instance_id.clone(), record);
    }

    /// Get the number of records in the store
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Check if the store is empty
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Clear all records from the store
    pub async fn clear(&self) {
        let mut guard = self.inner.write().await;
        guard.clear();
    }
}

#[async_trait]
impl InstanceRegistry for MemoryInstanceStore {
    async fn lookup(&self, instance_id: &InstanceId) -> Result<InstanceRecord> {
        let guard = self.inner.read().await;
        guard
            .get(instance_id)
            .cloned()
            .ok_or_else(|| Error::not_found(instance_id.as_str()))
    }

    async fn list(&self) -> Result<Vec<InstanceId>> {
        let guard = self.inner.read().await;
        Ok(guard.keys().cloned().collect())
    }
}
