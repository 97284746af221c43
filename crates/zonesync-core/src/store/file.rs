// # File Instance Store
//
// JSON-file-backed implementation of InstanceRegistry.
//
// ## Format
//
// The file holds a JSON array of instance records:
//
// ```json
// [
//   {"instance_id": "i-0123456789abcdef0", "name": "web1", "domain": "example.com", "ttl": 300}
// ]
// ```
//
// Every record is validated while loading; a malformed record fails the
// load rather than being skipped.
//
// ## Lifecycle
//
// The registry is a read-only collaborator: the file is read once at
// construction and lookups are served from memory. There is no write path
// and no reloading; provisioning changes require constructing a new store.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::instance::{InstanceId, InstanceRecord};
use crate::traits::InstanceRegistry;

/// JSON-file-backed instance registry implementation
#[derive(Debug, Clone)]
pub struct FileInstanceStore {
    path: PathBuf,
    records: HashMap<InstanceId, InstanceRecord>,
}

impl FileInstanceStore {
    /// Load an instance registry from `path`.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`]: the file cannot be read
    /// - [`Error::Json`]: the file is not a valid JSON array of records
    ///   (including records that fail validation)
    /// - [`Error::Config`]: two records share an instance id
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let contents = std::fs::read_to_string(&path)?;
        let loaded: Vec<InstanceRecord> = serde_json::from_str(&contents)?;

        let mut records = HashMap::with_capacity(loaded.len());
        for record in loaded {
            let id = record.instance_id.clone();
            if records.insert(id.clone(), record).is_some() {
                return Err(Error::config(format!(
                    "Duplicate instance id {} in {}",
                    id,
                    path.display()
                )));
            }
        }

        tracing::debug!(
            "Loaded {} instance record(s) from {}",
            records.len(),
            path.display()
        );

        Ok(Self { path, records })
    }

    /// The file this store was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the number of records in the store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl InstanceRegistry for FileInstanceStore {
    async fn lookup(&self, instance_id: &InstanceId) -> Result<InstanceRecord> {
        self.records
            .get(instance_id)
            .cloned()
            .ok_or_else(|| Error::not_found(instance_id.as_str()))
    }

    async fn list(&self) -> Result<Vec<InstanceId>> {
        Ok(self.records.keys().cloned().collect())
    }
}
