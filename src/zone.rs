//! Zone discovery for hostname registration.
//!
//! Given the zones the DNS API credentials can see, registration needs the
//! one that contains a new hostname. That is a longest-suffix match on label
//! boundaries: `example.com` encloses `home.example.com` and `example.com`
//! itself, but not `notexample.com`. Pure function, no API calls here; the
//! caller supplies the candidate list.

use crate::dns::Zone;

/// Find the zone whose name is the longest label-boundary suffix of
/// `hostname`. Trailing dots on either side are ignored.
#[must_use]
pub fn find_enclosing_zone<'a>(hostname: &str, zones: &'a [Zone]) -> Option<&'a Zone> {
    let hostname = hostname.trim_end_matches('.');
    zones
        .iter()
        .filter(|zone| encloses(zone.name.trim_end_matches('.'), hostname))
        .max_by_key(|zone| zone.name.trim_end_matches('.').len())
}

fn encloses(zone: &str, hostname: &str) -> bool {
    match hostname.strip_suffix(zone) {
        Some("") => true,
        Some(prefix) => prefix.ends_with('.'),
        None => false,
    }
}
