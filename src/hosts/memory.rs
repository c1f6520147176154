use crate::hosts::{HostEntry, HostTable};
use std::collections::HashMap;

/// A [`HostTable`] backed by the `hosts` map of the config file.
#[derive(Default, Debug, Clone)]
pub struct InMemoryHostTable {
    hosts: HashMap<String, HostEntry>,
}

impl From<HashMap<String, HostEntry>> for InMemoryHostTable {
    fn from(hosts: HashMap<String, HostEntry>) -> Self {
        Self { hosts }
    }
}

impl HostTable for InMemoryHostTable {
    fn lookup(&self, hostname: &str) -> Option<HostEntry> {
        self.hosts.get(hostname).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> InMemoryHostTable {
        let mut hosts = HashMap::new();
        hosts.insert(
            "home.example.com".to_string(),
            HostEntry {
                zone_id: "Z1".to_string(),
                shared_secret: "s3cr3t".to_string(),
            },
        );
        InMemoryHostTable::from(hosts)
    }

    #[test]
    fn finds_registered_hostname() {
        let entry = table().lookup("home.example.com").unwrap();
        assert_eq!(entry.zone_id, "Z1");
    }

    #[test]
    fn misses_unregistered_hostname() {
        assert!(table().lookup("other.example.com").is_none());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(table().lookup("HOME.example.com").is_none());
    }
}
