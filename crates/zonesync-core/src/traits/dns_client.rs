// # DNS Client Trait
//
// Defines the provider-agnostic protocol for manipulating the address
// records of one DNS zone.
//
// ## Implementations
//
// - Gandi LiveDNS: `zonesync-provider-gandi` crate
// - Future: Route53, Cloudflare, deSEC, etc.
//
// ## Scope
//
// A client is bound at construction to exactly one zone and one credential.
// Calls are synchronous from the caller's point of view (one attempt, no
// client-side retry) and stateless across invocations beyond the shared
// authenticated connection.

use async_trait::async_trait;

use crate::error::Result;
use crate::rrset::RRSet;

/// Trait for DNS provider client implementations
///
/// This trait defines the three operations of the record reconciliation
/// protocol. Implementations must handle the specifics of each provider's
/// API and translate provider failures into the crate error taxonomy.
///
/// # Thread Safety
///
/// Implementations must be thread-safe and usable across async tasks.
///
/// # Constraints
///
/// Implementations must not retry, back off, cache remote state, or spawn
/// background work; a failed call is reported to the caller, whose retry
/// policy is none of the client's business. Concurrent calls for the *same*
/// record name are not serialized here either; that relies on the
/// provider's own per-record atomicity, if any.
#[async_trait]
pub trait DnsClient: Send + Sync {
    /// Look up the current record sets for `record_name`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(rrsets))`: the record sets currently present, each
    ///   validated on the way in
    /// - `Ok(None)`: nothing exists under that name (not an error)
    /// - `Err(Error::Remote)`: any other provider failure, including a
    ///   malformed record in a success response (never silently dropped)
    async fn get_record(&self, record_name: &str) -> Result<Option<Vec<RRSet>>>;

    /// Idempotently upsert record sets under a single name.
    ///
    /// Calling this repeatedly with the same input converges to the same
    /// remote state. Implementations must reject inputs spanning more than
    /// one record name ([`Error::MultiRecordSet`]) or carrying non-address
    /// types ([`Error::UnsupportedRecordType`]) *before* issuing any network
    /// call; [`single_record_set_name`] performs exactly that check.
    ///
    /// [`Error::MultiRecordSet`]: crate::Error::MultiRecordSet
    /// [`Error::UnsupportedRecordType`]: crate::Error::UnsupportedRecordType
    /// [`single_record_set_name`]: crate::rrset::single_record_set_name
    async fn set_record(&self, rrsets: &[RRSet]) -> Result<()>;

    /// Idempotently delete the record set for `record_name`.
    ///
    /// Deleting an already-absent name is success, not an error.
    async fn remove_record(&self, record_name: &str) -> Result<()>;

    /// The zone this client is scoped to
    fn zone(&self) -> &str;

    /// Client implementation name (for logging/debugging)
    fn client_name(&self) -> &'static str;
}

/// Helper trait for constructing DNS clients from configuration
pub trait DnsClientFactory: Send + Sync {
    /// Create a [`DnsClient`] bound to `zone`.
    ///
    /// # Parameters
    ///
    /// - `config`: provider selection and endpoint configuration
    /// - `credentials`: API key (and optional base URL override) from the
    ///   secret store
    /// - `zone`: the DNS zone the client is scoped to
    fn create(
        &self,
        config: &crate::config::DnsProviderConfig,
        credentials: &crate::traits::ProviderCredentials,
        zone: &str,
    ) -> Result<Box<dyn DnsClient>>;
}
