//! Instance registry implementations

mod file;
mod memory;

pub use file::FileInstanceStore;
pub use memory::MemoryInstanceStore;

use crate::config::InstanceStoreConfig;
use crate::error::{Error, Result};
use crate::traits::{InstanceRegistry, InstanceStoreFactory};

/// Factory for in-memory instance stores
pub struct MemoryStoreFactory;

impl InstanceStoreFactory for MemoryStoreFactory {
    fn create(&self, config: &InstanceStoreConfig) -> Result<Box<dyn InstanceRegistry>> {
        match config {
            InstanceStoreConfig::Memory => Ok(Box::new(MemoryInstanceStore::new())),
            _ => Err(Error::config("Invalid config for memory instance store")),
        }
    }
}

/// Factory for JSON-file-backed instance stores
pub struct FileStoreFactory;

impl InstanceStoreFactory for FileStoreFactory {
    fn create(&self, config: &InstanceStoreConfig) -> Result<Box<dyn InstanceRegistry>> {
        match config {
            InstanceStoreConfig::File { path } => Ok(Box::new(FileInstanceStore::load(path)?)),
            _ => Err(Error::config("Invalid config for file instance store")),
        }
    }
}
