// # HTTP Address Source
//
// This crate provides an HTTP-based address source for the zone
// synchronization system.
//
// ## Purpose
//
// Resolves an instance's current public address from an inventory service
// (the cloud control plane, or an internal facade in front of it) over
// plain HTTP:
//
// ```http
// GET {base}/instances/{instance-id}/public-address
// ```
//
// - `200` with the address literal as the body → the current address
// - `404` or `204` → the instance has no public address right now
//
// ## Model
//
// One request per lookup, nothing cached, nothing polled: the caller runs
// one reconciliation pass per lifecycle event and resolves the address
// exactly once within it.

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use zonesync_core::config::AddressSourceConfig;
use zonesync_core::instance::InstanceId;
use zonesync_core::traits::{AddressSource, AddressSourceFactory};
use zonesync_core::{Error, ProviderRegistry, Result};

/// Default HTTP timeout for inventory requests (10 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP-based address source
pub struct HttpAddressSource {
    /// Base URL of the inventory service, without a trailing slash
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpAddressSource {
    /// Create a new HTTP address source.
    ///
    /// # Parameters
    ///
    /// - `base_url`: base URL of the inventory service
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when `base_url` is empty.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(Error::config("Inventory base URL cannot be empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn address_url(&self, instance_id: &InstanceId) -> String {
        format!("{}/instances/{}/public-address", self.base_url, instance_id)
    }
}

#[async_trait]
impl AddressSource for HttpAddressSource {
    async fn public_address(&self, instance_id: &InstanceId) -> Result<Option<IpAddr>> {
        let url = self.address_url(instance_id);
        tracing::debug!("Resolving public address: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            return Err(Error::remote(status.as_u16(), detail));
        }

        let status = status.as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        let ip: IpAddr = body.trim().parse().map_err(|_| {
            Error::remote(
                status,
                format!("Invalid address literal in response: {:?}", body.trim()),
            )
        })?;

        tracing::debug!("Resolved {} -> {}", instance_id, ip);
        Ok(Some(ip))
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}

/// Factory for creating HTTP address sources
pub struct HttpFactory;

impl AddressSourceFactory for HttpFactory {
    fn create(&self, config: &AddressSourceConfig) -> Result<Box<dyn AddressSource>> {
        match config {
            AddressSourceConfig::Http { base_url } => {
                Ok(Box::new(HttpAddressSource::new(base_url.clone())?))
            }
            _ => Err(Error::config("Invalid config for HTTP address source")),
        }
    }
}

/// Register the HTTP address source with a registry
pub fn register(registry: &ProviderRegistry) {
    registry.register_address_source("http", Box::new(HttpFactory));
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_id() -> InstanceId {
        InstanceId::new("i-0123456789abcdef0").unwrap()
    }

    #[test]
    fn test_register_makes_source_creatable_through_registry() {
        let registry = ProviderRegistry::new();
        register(&registry);

        let source = registry
            .create_address_source(&AddressSourceConfig::Http {
                base_url: "https://inventory.internal".to_string(),
            })
            .unwrap();
        assert_eq!(source.source_name(), "http");
    }

    #[test]
    fn test_factory_creation() {
        let factory = HttpFactory;

        let config = AddressSourceConfig::Http {
            base_url: "https://inventory.internal".to_string(),
        };
        assert!(factory.create(&config).is_ok());

        let empty = AddressSourceConfig::Http {
            base_url: String::new(),
        };
        assert!(factory.create(&empty).is_err());
    }

    #[tokio::test]
    async fn test_resolves_address_literal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/instances/i-0123456789abcdef0/public-address"))
            .respond_with(ResponseTemplate::new(200).set_body_string("198.51.100.7\n"))
            .mount(&server)
            .await;

        let source = HttpAddressSource::new(server.uri()).unwrap();
        let ip = source.public_address(&test_id()).await.unwrap();
        assert_eq!(ip, Some("198.51.100.7".parse().unwrap()));
    }

    #[tokio::test]
    async fn test_absent_address_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let source = HttpAddressSource::new(server.uri()).unwrap();
        assert_eq!(source.public_address(&test_id()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_garbage_body_is_remote_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not-an-address"))
            .mount(&server)
            .await;

        let source = HttpAddressSource::new(server.uri()).unwrap();
        let err = source
            .public_address(&test_id())
            .await
            .expect_err("expected Remote");
        assert!(matches!(err, Error::Remote { status: 200, .. }));
    }

    #[tokio::test]
    async fn test_server_error_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let source = HttpAddressSource::new(server.uri()).unwrap();
        let err = source
            .public_address(&test_id())
            .await
            .expect_err("expected Remote");
        assert!(matches!(err, Error::Remote { status: 500, .. }));
    }
}
