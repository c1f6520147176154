//! An environment-variable [`HostTable`], matching serverless deployments
//! where each hostname's settings travel as function environment:
//!
//! ```text
//! HOME_EXAMPLE_COM__ZONE_ID=Z1
//! HOME_EXAMPLE_COM__SHARED_SECRET=f00f...
//! ```
//!
//! The variable prefix is the hostname uppercased with dots replaced by
//! underscores. Both variables must be present for a hostname to count as
//! registered.

use crate::hosts::{HostEntry, HostTable};

const ZONE_ID_OPTION: &str = "ZONE_ID";
const SHARED_SECRET_OPTION: &str = "SHARED_SECRET";

#[derive(Default, Debug, Clone)]
pub struct EnvHostTable;

fn var_prefix(hostname: &str) -> String {
    hostname.replace('.', "_").to_uppercase()
}

impl HostTable for EnvHostTable {
    fn lookup(&self, hostname: &str) -> Option<HostEntry> {
        let prefix = var_prefix(hostname);
        let zone_id = std::env::var(format!("{prefix}__{ZONE_ID_OPTION}")).ok()?;
        let shared_secret = std::env::var(format!("{prefix}__{SHARED_SECRET_OPTION}")).ok()?;
        Some(HostEntry {
            zone_id,
            shared_secret,
        })
    }
}
