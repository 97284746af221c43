//! Secret store implementations
//!
//! The real deployments of this library fetch provider credentials from a
//! managed secret service; that service sits behind the
//! [`SecretStore`](crate::traits::SecretStore) seam. The implementations
//! here cover the common embedding cases: environment variables and
//! pre-resolved values.

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::traits::{ProviderCredentials, SecretStore};

/// Default environment variable holding the provider API key
pub const DEFAULT_API_KEY_VAR: &str = "ZONESYNC_API_KEY";

/// Default environment variable holding an optional provider URL override
pub const DEFAULT_PROVIDER_URL_VAR: &str = "ZONESYNC_PROVIDER_URL";

/// Secret store backed by environment variables
///
/// Variables are read at fetch time, not at construction, so the store can
/// be built before the environment is fully populated.
#[derive(Debug, Clone)]
pub struct EnvSecretStore {
    api_key_var: String,
    provider_url_var: String,
}

impl EnvSecretStore {
    /// Create a store reading the default variable names
    pub fn new() -> Self {
        Self {
            api_key_var: DEFAULT_API_KEY_VAR.to_string(),
            provider_url_var: DEFAULT_PROVIDER_URL_VAR.to_string(),
        }
    }

    /// Create a store reading custom variable names
    pub fn with_vars(api_key_var: impl Into<String>, provider_url_var: impl Into<String>) -> Self {
        Self {
            api_key_var: api_key_var.into(),
            provider_url_var: provider_url_var.into(),
        }
    }
}

impl Default for EnvSecretStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SecretStore for EnvSecretStore {
    async fn provider_credentials(&self) -> Result<ProviderCredentials> {
        let api_key = std::env::var(&self.api_key_var)
            .map_err(|_| Error::secret(format!("{} is not set", self.api_key_var)))?;
        if api_key.is_empty() {
            return Err(Error::secret(format!("{} is empty", self.api_key_var)));
        }

        Ok(ProviderCredentials {
            api_key,
            base_url: std::env::var(&self.provider_url_var).ok(),
        })
    }
}

/// Secret store holding pre-resolved credentials
///
/// For tests and embeddings that obtain credentials through their own
/// channel before constructing the handler.
pub struct StaticSecretStore {
    credentials: ProviderCredentials,
}

impl StaticSecretStore {
    /// Wrap pre-resolved credentials
    pub fn new(credentials: ProviderCredentials) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl SecretStore for StaticSecretStore {
    async fn provider_credentials(&self) -> Result<ProviderCredentials> {
        Ok(ProviderCredentials {
            api_key: self.credentials.api_key.clone(),
            base_url: self.credentials.base_url.clone(),
        })
    }
}
