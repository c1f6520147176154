use crate::error::Error;
use crate::hosts::HostEntry;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationSeconds};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub type SharedConfig = Arc<Config>;

/// Environment variable consulted for the DNS API token before falling back
/// to [`Config::api_token`].
pub const API_TOKEN_VAR: &str = "COOLBEANS_API_TOKEN";

const DEFAULT_RECORD_TTL: u32 = 900;

#[serde_as]
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    pub api_bind_addr: SocketAddr,
    #[serde_as(as = "DurationSeconds<u64>")]
    pub api_timeout: Duration,

    /// TTL in seconds applied to every address record written.
    #[serde(default = "default_record_ttl")]
    pub record_ttl: u32,

    /// DNS API bearer token. [`API_TOKEN_VAR`] takes precedence when set, so
    /// deployments can keep the token out of the config file entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Registered hostnames. When empty the server falls back to
    /// environment-variable lookup, see
    /// [`EnvHostTable`][crate::hosts::EnvHostTable].
    #[serde(default)]
    pub hosts: HashMap<String, HostEntry>,
}

fn default_record_ttl() -> u32 {
    DEFAULT_RECORD_TTL
}

impl Config {
    /// Load a [`Config`] from the JSON file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IO`] if the path can't be opened or read, and
    /// [`Error::InvalidJSON`] if its content doesn't parse.
    pub fn try_from_file(p: impl AsRef<Path>) -> Result<Self, Error> {
        let f = File::open(p)?;
        let reader = BufReader::new(f);
        let conf: Config = serde_json::from_reader(reader)?;
        Ok(conf)
    }

    /// Write the config back to disk. The `add`/`remove` registration flows
    /// use this to persist host table edits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IO`] if the file can't be written.
    pub fn save(&self, p: impl AsRef<Path>) -> Result<(), Error> {
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(p, data)?;
        Ok(())
    }

    /// Resolve the DNS API token, environment before file.
    #[must_use]
    pub fn api_token(&self) -> Option<String> {
        std::env::var(API_TOKEN_VAR)
            .ok()
            .or_else(|| self.api_token.clone())
    }
}
