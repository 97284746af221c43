//! Test doubles and common utilities for contract tests
//!
//! The doubles count every call and record call arguments, so tests can
//! assert not just outcomes but exactly which collaborators were touched.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use zonesync_core::config::DnsProviderConfig;
use zonesync_core::error::{Error, Result};
use zonesync_core::instance::{InstanceId, InstanceRecord};
use zonesync_core::rrset::{RRSet, single_record_set_name};
use zonesync_core::traits::{
    AddressSource, DnsClient, DnsClientFactory, InstanceRegistry, ProviderCredentials, SecretStore,
};

/// A DNS client double that runs the mandatory pre-flight and records calls
///
/// `set_record` performs the same single-record-set pre-flight every
/// conforming client must run before network I/O; a rejected call is
/// therefore NOT recorded, which lets tests assert "zero network calls".
pub struct MockDnsClient {
    zone: String,
    /// Recorded set_record inputs
    set_calls: Arc<std::sync::Mutex<Vec<Vec<RRSet>>>>,
    /// Recorded remove_record names
    remove_calls: Arc<std::sync::Mutex<Vec<String>>>,
    /// When set, every network operation fails with this remote error
    failure: Option<(u16, String)>,
}

impl MockDnsClient {
    pub fn new(zone: &str) -> Self {
        Self {
            zone: zone.to_string(),
            set_calls: Arc::new(std::sync::Mutex::new(Vec::new())),
            remove_calls: Arc::new(std::sync::Mutex::new(Vec::new())),
            failure: None,
        }
    }

    /// Make every network operation fail with a remote error
    pub fn failing(zone: &str, status: u16, detail: &str) -> Self {
        Self {
            failure: Some((status, detail.to_string())),
            ..Self::new(zone)
        }
    }

    /// Create a client that shares recorded calls with an existing one
    pub fn sharing_calls_with(&self, zone: &str) -> Self {
        Self {
            zone: zone.to_string(),
            set_calls: Arc::clone(&self.set_calls),
            remove_calls: Arc::clone(&self.remove_calls),
            failure: self.failure.clone(),
        }
    }

    pub fn set_calls(&self) -> Vec<Vec<RRSet>> {
        self.set_calls.lock().unwrap().clone()
    }

    pub fn remove_calls(&self) -> Vec<String> {
        self.remove_calls.lock().unwrap().clone()
    }

    pub fn network_call_count(&self) -> usize {
        self.set_calls.lock().unwrap().len() + self.remove_calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl DnsClient for MockDnsClient {
    async fn get_record(&self, _record_name: &str) -> Result<Option<Vec<RRSet>>> {
        if let Some((status, detail)) = &self.failure {
            return Err(Error::remote(*status, detail.clone()));
        }
        // Lookups play no part in the reconciliation flow; absence is the
        // safe default for the double
        Ok(None)
    }

    async fn set_record(&self, rrsets: &[RRSet]) -> Result<()> {
        // Pre-flight before anything that would touch the network
        single_record_set_name(rrsets)?;

        if let Some((status, detail)) = &self.failure {
            return Err(Error::remote(*status, detail.clone()));
        }
        self.set_calls.lock().unwrap().push(rrsets.to_vec());
        Ok(())
    }

    async fn remove_record(&self, record_name: &str) -> Result<()> {
        if let Some((status, detail)) = &self.failure {
            return Err(Error::remote(*status, detail.clone()));
        }
        self.remove_calls
            .lock()
            .unwrap()
            .push(record_name.to_string());
        Ok(())
    }

    fn zone(&self) -> &str {
        &self.zone
    }

    fn client_name(&self) -> &'static str {
        "mock"
    }
}

/// Factory that hands out clients sharing one template's recorded calls
pub struct MockClientFactory {
    template: MockDnsClient,
}

impl MockClientFactory {
    pub fn new(template: MockDnsClient) -> Self {
        Self { template }
    }
}

impl DnsClientFactory for MockClientFactory {
    fn create(
        &self,
        _config: &DnsProviderConfig,
        _credentials: &ProviderCredentials,
        zone: &str,
    ) -> Result<Box<dyn DnsClient>> {
        Ok(Box::new(self.template.sharing_calls_with(zone)))
    }
}

/// An address source double with a fixed answer and a call counter
pub struct MockAddressSource {
    address: Option<IpAddr>,
    fail: bool,
    call_count: Arc<AtomicUsize>,
}

impl MockAddressSource {
    pub fn returning(address: IpAddr) -> Self {
        Self {
            address: Some(address),
            fail: false,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn absent() -> Self {
        Self {
            address: None,
            fail: false,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            address: None,
            fail: true,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.call_count)
    }
}

#[async_trait::async_trait]
impl AddressSource for MockAddressSource {
    async fn public_address(&self, _instance_id: &InstanceId) -> Result<Option<IpAddr>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::http("address lookup unavailable"));
        }
        Ok(self.address)
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}

/// A secret store double with a call counter
pub struct MockSecretStore {
    fail: bool,
    call_count: Arc<AtomicUsize>,
}

impl MockSecretStore {
    pub fn new() -> Self {
        Self {
            fail: false,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.call_count)
    }
}

#[async_trait::async_trait]
impl SecretStore for MockSecretStore {
    async fn provider_credentials(&self) -> Result<ProviderCredentials> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::secret("secret service unavailable"));
        }
        Ok(ProviderCredentials::new("test-key"))
    }
}

/// An instance registry double with a call counter
pub struct MockInstanceRegistry {
    records: HashMap<InstanceId, InstanceRecord>,
    call_count: Arc<AtomicUsize>,
}

impl MockInstanceRegistry {
    pub fn with_records(records: Vec<InstanceRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|r| (r.instance_id.clone(), r))
                .collect(),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.call_count)
    }
}

#[async_trait::async_trait]
impl InstanceRegistry for MockInstanceRegistry {
    async fn lookup(&self, instance_id: &InstanceId) -> Result<InstanceRecord> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.records
            .get(instance_id)
            .cloned()
            .ok_or_else(|| Error::not_found(instance_id.as_str()))
    }

    async fn list(&self) -> Result<Vec<InstanceId>> {
        Ok(self.records.keys().cloned().collect())
    }
}

/// The managed instance most tests use
pub fn sample_instance() -> InstanceRecord {
    InstanceRecord::new("i-0123456789abcdef0", "web1", "example.com", Some(300)).unwrap()
}
