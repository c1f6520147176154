//! The companion pinger.
//!
//! Runs on the host whose address changes: it signs the hostname with the
//! shared secret and PUTs the update request to the deployed endpoint on a
//! timer (cron, systemd timer, whatever the host offers). The server writes
//! whatever source address it observed for the request, so the pinger never
//! has to figure out its own public IP. A failed ping needs no retry logic
//! here; the next scheduled ping is the retry.

use crate::auth;
use crate::error::Error;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
struct Reply {
    message: String,
}

/// Send one update ping, returning the server's response message.
///
/// # Errors
///
/// Returns [`Error::Upstream`] if the request can't be sent or the response
/// body doesn't parse, and [`Error::UpstreamStatus`] carrying the status and
/// body when the server rejects the update.
pub async fn ping(url: &str, hostname: &str, secret: &str) -> Result<String, Error> {
    let signature = auth::sign(secret.as_bytes(), hostname);
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let response = client
        .put(url)
        .json(&json!({ "hostname": hostname, "signature": signature }))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::UpstreamStatus { status, body });
    }

    let reply: Reply = response.json().await?;
    Ok(reply.message)
}
