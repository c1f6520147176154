//! Error types.

/// Error enumerates the possible coolbeans error states.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when clients send a body that parses as JSON but is missing a
    /// usable `hostname` or `signature` value.
    #[error("Invalid payload")]
    InvalidPayload,

    /// Returned when the hostname in an update request has no entry in the
    /// host table. Lookup is case-sensitive on the exact string supplied.
    #[error("Invalid hostname")]
    UnknownHostname,

    /// Returned when the supplied signature does not verify against the
    /// hostname's shared secret.
    #[error("Unauthorized")]
    Unauthorized,

    /// Returned when the DNS API holds more than one address record for a
    /// name. This is a configuration inconsistency, not a client error:
    /// picking one of the records would hide the bug.
    #[error("multiple address records exist for \"{0}\"")]
    AmbiguousRecord(String),

    /// Returned when the DNS API hands back an address record whose content
    /// doesn't parse as an IP address.
    #[error("record for \"{name}\" holds unparseable address \"{content}\"")]
    BadRecordData { name: String, content: String },

    /// Returned when a request to the DNS API (or, from the pinger, to the
    /// update endpoint) fails outright.
    #[error("upstream request failed")]
    Upstream(#[from] reqwest::Error),

    /// Returned when an upstream API answers with a non-success status.
    #[error("upstream returned {status}: {body}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Returned by hostname registration when no zone visible to the DNS API
    /// token encloses the hostname being added.
    #[error("no zone encloses \"{0}\"")]
    NoEnclosingZone(String),

    /// Returned when a generic IO error occurs.
    #[error("an IO error occurred")]
    IO(#[from] std::io::Error),

    /// Returned when JSON from disk (e.g.
    /// [trying to load a `Config`][crate::config::Config::try_from_file])
    /// is invalid.
    #[error("invalid JSON")]
    InvalidJSON(#[from] serde_json::Error),
}
