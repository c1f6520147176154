//! Hostname configuration lookup.
//!
//! Maps a registered hostname to the identifier of the DNS zone containing
//! its record and to the shared secret its one authorized client signs
//! updates with. The update handler only ever reads this mapping;
//! registration happens out of band through the `add`/`remove` CLI flows.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub mod env;
pub mod memory;

#[allow(clippy::module_name_repetitions)]
pub use env::EnvHostTable;
#[allow(clippy::module_name_repetitions)]
pub use memory::InMemoryHostTable;

/// `DynHostTable` is a type alias for a [`HostTable`] shared across request
/// handlers.
#[allow(clippy::module_name_repetitions)]
pub type DynHostTable = Arc<dyn HostTable + Send + Sync>;

/// Configuration for a single registered hostname.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct HostEntry {
    /// Opaque identifier of the DNS zone containing the hostname's record.
    pub zone_id: String,
    /// Secret shared with the one client authorized to update the hostname.
    pub shared_secret: String,
}

/// Read-only lookup of per-hostname configuration.
///
/// Lookup is case-sensitive on the exact string supplied; no normalization or
/// wildcard matching. A missing entry is the normal "unknown hostname" case,
/// not an error.
pub trait HostTable {
    fn lookup(&self, hostname: &str) -> Option<HostEntry>;
}
