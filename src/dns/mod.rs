//! The managed DNS record API.
//!
//! coolbeans serves no DNS traffic of its own; the address records it manages
//! live in a third-party provider and are reached through the [`RecordApi`]
//! trait. The update handler consumes exactly two operations per request: one
//! [`get_address`][RecordApi::get_address] to decide whether a write is
//! needed, and at most one [`upsert_address`][RecordApi::upsert_address].
//! [`list_zones`][RecordApi::list_zones] exists for the registration CLI
//! only.

use crate::error::Error;
use std::net::IpAddr;
use std::sync::Arc;

pub mod cloudflare;

pub use cloudflare::CloudflareApi;

/// `DynRecordApi` is a type alias for a [`RecordApi`] shared across request
/// handlers.
#[allow(clippy::module_name_repetitions)]
pub type DynRecordApi = Arc<dyn RecordApi + Send + Sync>;

/// A DNS zone visible to the record API credentials.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Zone {
    pub id: String,
    pub name: String,
}

/// The slice of a managed DNS API that coolbeans consumes.
#[async_trait::async_trait]
pub trait RecordApi {
    /// Current value of the address record for `hostname`, if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AmbiguousRecord`] if more than one address record
    /// matches the exact name, and [`Error::Upstream`] or
    /// [`Error::UpstreamStatus`] if the API call fails.
    async fn get_address(&self, zone_id: &str, hostname: &str) -> Result<Option<IpAddr>, Error>;

    /// Create or overwrite the address record for `hostname`. Idempotent:
    /// writing a value that is already present is harmless.
    ///
    /// The record type follows the address family, A for IPv4 and AAAA for
    /// IPv6.
    async fn upsert_address(
        &self,
        zone_id: &str,
        hostname: &str,
        address: IpAddr,
        ttl: u32,
    ) -> Result<(), Error>;

    /// List the zones the API credentials can see. Hostname registration uses
    /// this to discover which zone encloses a new name.
    async fn list_zones(&self) -> Result<Vec<Zone>, Error>;
}

/// DNS record type for an address, following the address family.
#[must_use]
pub fn record_type(address: IpAddr) -> &'static str {
    match address {
        IpAddr::V4(_) => "A",
        IpAddr::V6(_) => "AAAA",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_type_follows_family() {
        assert_eq!(record_type("203.0.113.9".parse().unwrap()), "A");
        assert_eq!(record_type("2001:db8::1".parse().unwrap()), "AAAA");
    }
}
