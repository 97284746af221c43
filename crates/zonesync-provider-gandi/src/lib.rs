// # Gandi LiveDNS Client
//
// This crate provides a Gandi LiveDNS implementation of the DnsClient
// protocol for the zone synchronization system.
//
// ## Behavior
//
// - Makes one HTTP request per protocol operation
// - Runs the single-record-set pre-flight before any network I/O
// - Full error propagation to the caller (retry policy is not the
//   client's business)
// - HTTP timeout configured (30 seconds)
// - "Not found" on delete is success (idempotent delete)
// - "Not found" on lookup is absence, not an error
// - NO retry logic, NO caching, NO background tasks
//
// ## Security Requirements
//
// - API key NEVER appears in logs or Debug output
// - Client construction MUST fail fast if the key is empty
//
// ## API Reference
//
// - LiveDNS API: https://api.gandi.net/docs/livedns/
// - Upsert record sets: PUT `/v5/livedns/domains/{zone}/records/{name}`
// - Delete record sets: DELETE `/v5/livedns/domains/{zone}/records/{name}`
// - Read record sets: GET `/v5/livedns/domains/{zone}/records/{name}`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;

use zonesync_core::config::DnsProviderConfig;
use zonesync_core::rrset::{RRSet, single_record_set_name};
use zonesync_core::traits::{DnsClient, DnsClientFactory, ProviderCredentials};
use zonesync_core::{Error, ProviderRegistry, Result};

/// LiveDNS API base URL
pub const GANDI_LIVEDNS_BASE: &str = "https://api.gandi.net/v5/livedns/domains";

/// Default HTTP timeout for API requests (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Gandi LiveDNS client
///
/// Scoped at construction to one zone and one API key; every request
/// carries an `Authorization: Apikey ...` header. The client is stateless
/// across calls beyond the shared authenticated connection.
///
/// # Security
///
/// The Debug implementation intentionally does NOT expose the API key.
pub struct GandiClient {
    /// Gandi API key
    /// ⚠️ NEVER log this value
    api_key: String,

    /// The zone this client is scoped to
    zone: String,

    /// LiveDNS endpoint, without a trailing slash
    base_url: String,

    /// HTTP client for API requests
    client: reqwest::Client,
}

// Custom Debug implementation that hides the API key
impl std::fmt::Debug for GandiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GandiClient")
            .field("api_key", &"<REDACTED>")
            .field("zone", &self.zone)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GandiClient {
    /// Create a new LiveDNS client scoped to `zone`.
    ///
    /// # Parameters
    ///
    /// - `api_key`: Gandi API key with record edit permissions
    /// - `zone`: the DNS zone all record operations are scoped to
    /// - `base_url`: endpoint override, e.g. for a sandbox environment;
    ///   `None` targets the public LiveDNS API
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the API key is empty.
    pub fn new(
        api_key: impl Into<String>,
        zone: impl Into<String>,
        base_url: Option<String>,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::config("Gandi API key cannot be empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = base_url.unwrap_or_else(|| GANDI_LIVEDNS_BASE.to_string());

        Ok(Self {
            api_key,
            zone: zone.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn records_url(&self, record_name: &str) -> String {
        format!("{}/{}/records/{}", self.base_url, self.zone, record_name)
    }

    fn auth_header(&self) -> String {
        format!("Apikey {}", self.api_key)
    }

    /// Drain a non-success response into a remote error
    async fn remote_error(response: reqwest::Response) -> Error {
        let status = response.status().as_u16();
        let detail = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error response".to_string());
        Error::remote(status, detail)
    }
}

#[async_trait]
impl DnsClient for GandiClient {
    /// Look up the current record sets for `record_name`.
    ///
    /// # API Call
    ///
    /// ```http
    /// GET /v5/livedns/domains/{zone}/records/{name}
    /// Authorization: Apikey <key>
    /// ```
    ///
    /// A 404 yields `Ok(None)`. A success body is parsed into validated
    /// record sets; a record that fails validation surfaces as
    /// [`Error::Remote`], never silently dropped.
    async fn get_record(&self, record_name: &str) -> Result<Option<Vec<RRSet>>> {
        let url = self.records_url(record_name);
        tracing::debug!("Fetching record sets: {}", url);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.auth_header())
            .send()
            .await
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::remote_error(response).await);
        }

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        let rrsets: Vec<RRSet> = serde_json::from_str(&body)
            .map_err(|e| Error::remote(status, format!("Malformed record set in response: {}", e)))?;

        Ok(Some(rrsets))
    }

    /// Idempotently upsert record sets under a single name.
    ///
    /// The pre-flight runs first: all record sets must share exactly one
    /// name and carry only address types, otherwise the call fails without
    /// any network I/O.
    ///
    /// # API Call
    ///
    /// ```http
    /// PUT /v5/livedns/domains/{zone}/records/{name}
    /// Authorization: Apikey <key>
    ///
    /// {"items": [{"rrset_type": "A", "rrset_values": ["198.51.100.7"], "rrset_ttl": 300}]}
    /// ```
    async fn set_record(&self, rrsets: &[RRSet]) -> Result<()> {
        let record_name = single_record_set_name(rrsets)?;

        let items: Vec<serde_json::Value> = rrsets
            .iter()
            .map(|rrset| {
                let mut item = serde_json::json!({
                    "rrset_type": rrset.rrset_type,
                    "rrset_values": rrset.rrset_values,
                });
                if let Some(ttl) = rrset.rrset_ttl {
                    item["rrset_ttl"] = ttl.into();
                }
                item
            })
            .collect();

        let url = self.records_url(record_name);
        tracing::debug!("Upserting {} record set(s): {}", items.len(), url);

        let response = self
            .client
            .put(&url)
            .header(AUTHORIZATION, self.auth_header())
            .json(&serde_json::json!({ "items": items }))
            .send()
            .await
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::remote_error(response).await);
        }

        tracing::info!("Record set {} upserted in zone {}", record_name, self.zone);
        Ok(())
    }

    /// Idempotently delete the record set for `record_name`.
    ///
    /// # API Call
    ///
    /// ```http
    /// DELETE /v5/livedns/domains/{zone}/records/{name}
    /// Authorization: Apikey <key>
    /// ```
    ///
    /// A 404 means the record is already gone and is treated as success.
    async fn remove_record(&self, record_name: &str) -> Result<()> {
        let url = self.records_url(record_name);
        tracing::debug!("Deleting record sets: {}", url);

        let response = self
            .client
            .delete(&url)
            .header(AUTHORIZATION, self.auth_header())
            .send()
            .await
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!("Record set {} already absent", record_name);
            return Ok(());
        }
        if !response.status().is_success() {
            return Err(Self::remote_error(response).await);
        }

        tracing::info!("Record set {} removed from zone {}", record_name, self.zone);
        Ok(())
    }

    fn zone(&self) -> &str {
        &self.zone
    }

    fn client_name(&self) -> &'static str {
        "gandi"
    }
}

/// Factory for creating Gandi clients
pub struct GandiFactory;

impl DnsClientFactory for GandiFactory {
    fn create(
        &self,
        config: &DnsProviderConfig,
        credentials: &ProviderCredentials,
        zone: &str,
    ) -> Result<Box<dyn DnsClient>> {
        match config {
            DnsProviderConfig::Gandi { base_url } => {
                // A credential-supplied endpoint wins over the configured one
                let base_url = credentials.base_url.clone().or_else(|| base_url.clone());
                Ok(Box::new(GandiClient::new(
                    credentials.api_key.clone(),
                    zone,
                    base_url,
                )?))
            }
            _ => Err(Error::config("Invalid config for Gandi client")),
        }
    }
}

/// Register the Gandi client with a registry
///
/// This function should be called during initialization to make the
/// Gandi client available.
///
/// # Example
///
/// ```rust
/// use zonesync_core::ProviderRegistry;
///
/// let registry = ProviderRegistry::new();
/// zonesync_provider_gandi::register(&registry);
/// ```
pub fn register(registry: &ProviderRegistry) {
    registry.register_client("gandi", Box::new(GandiFactory));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_creation() {
        let factory = GandiFactory;

        let config = DnsProviderConfig::Gandi { base_url: None };
        let credentials = ProviderCredentials::new("test-key");

        let client = factory.create(&config, &credentials, "example.com");
        assert!(client.is_ok());
        assert_eq!(client.unwrap().zone(), "example.com");
    }

    #[test]
    fn test_factory_rejects_empty_key() {
        let factory = GandiFactory;

        let config = DnsProviderConfig::Gandi { base_url: None };
        let credentials = ProviderCredentials::new("");

        let client = factory.create(&config, &credentials, "example.com");
        assert!(matches!(client, Err(Error::Config(_))));
    }

    #[test]
    fn test_base_url_override_trims_trailing_slash() {
        let client = GandiClient::new(
            "test-key",
            "example.com",
            Some("https://dns.sandbox.test/v5/livedns/domains/".to_string()),
        )
        .unwrap();

        assert_eq!(
            client.records_url("web1"),
            "https://dns.sandbox.test/v5/livedns/domains/example.com/records/web1"
        );
    }

    #[test]
    fn test_register_makes_client_creatable_through_registry() {
        let registry = ProviderRegistry::new();
        register(&registry);

        let client = registry
            .create_client(
                &DnsProviderConfig::Gandi { base_url: None },
                &ProviderCredentials::new("test-key"),
                "example.com",
            )
            .unwrap();
        assert_eq!(client.client_name(), "gandi");
        assert_eq!(client.zone(), "example.com");
    }

    #[test]
    fn test_default_base_url() {
        let client = GandiClient::new("test-key", "example.com", None).unwrap();
        assert_eq!(
            client.records_url("web1"),
            "https://api.gandi.net/v5/livedns/domains/example.com/records/web1"
        );
    }

    #[test]
    fn test_api_key_not_exposed_in_debug() {
        let client = GandiClient::new("secret_key_12345", "example.com", None).unwrap();

        let debug_str = format!("{:?}", client);
        assert!(!debug_str.contains("secret_key_12345"));
        assert!(debug_str.contains("GandiClient"));
        assert!(debug_str.contains("example.com"));
    }

    #[test]
    fn test_client_name() {
        let client = GandiClient::new("test-key", "example.com", None).unwrap();
        assert_eq!(client.client_name(), "gandi");
    }
}
