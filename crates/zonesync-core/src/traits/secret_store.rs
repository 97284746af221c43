// # Secret Store Trait
//
// Defines the interface for retrieving DNS provider credentials.
//
// ## Implementations
//
// - Environment variables: `secrets::EnvSecretStore`
// - Pre-resolved values: `secrets::StaticSecretStore`
// - Future: cloud secret managers
//
// ## Security
//
// API keys NEVER appear in logs or Debug output. A retrieval failure aborts
// the current reconciliation pass before any network call is attempted.

use async_trait::async_trait;

use crate::error::Result;

/// Credentials for a DNS provider client
///
/// # Security
///
/// The Debug implementation intentionally does NOT expose the API key.
pub struct ProviderCredentials {
    /// Provider API key
    /// ⚠️ NEVER log this value
    pub api_key: String,

    /// Optional override of the provider base URL
    pub base_url: Option<String>,
}

impl ProviderCredentials {
    /// Create credentials with the default provider endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
        }
    }

    /// Create credentials with a base URL override
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Some(base_url.into()),
        }
    }
}

// Custom Debug implementation that hides the API key
impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("api_key", &"<REDACTED>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Trait for secret store implementations
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch the DNS provider credentials.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SecretRetrieval`] when the credentials cannot be
    /// obtained; the caller must abort without attempting network calls.
    ///
    /// [`Error::SecretRetrieval`]: crate::Error::SecretRetrieval
    async fn provider_credentials(&self) -> Result<ProviderCredentials>;
}
