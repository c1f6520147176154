//! A [`RecordApi`] speaking the Cloudflare v4 REST dialect.
//!
//! Endpoints used:
//!
//! - `GET /zones` to list zones,
//! - `GET /zones/:zone/dns_records?name=...` to read records,
//! - `POST /zones/:zone/dns_records` to create a record,
//! - `PUT /zones/:zone/dns_records/:id` to overwrite one.
//!
//! The API has no single upsert verb, so
//! [`upsert_address`][RecordApi::upsert_address] resolves the record id with
//! a scoped read first and picks `PUT` or `POST` accordingly. A `PUT` replaces
//! the whole record, so an existing record of the other address family is
//! rewritten rather than left to accumulate next to the new one.

use crate::dns::{record_type, RecordApi, Zone};
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::time::Duration;

const API_BASE: &str = "https://api.cloudflare.com/client/v4";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct CloudflareApi {
    client: reqwest::Client,
    api_token: String,
    base_url: String,
}

#[derive(Deserialize, Debug)]
struct RecordSet {
    result: Vec<Record>,
}

#[derive(Deserialize, Debug)]
struct Record {
    id: String,
    #[serde(rename = "type")]
    record_type: String,
    name: String,
    content: String,
}

#[derive(Deserialize, Debug)]
struct ZoneSet {
    result: Vec<ZoneEntry>,
}

#[derive(Deserialize, Debug)]
struct ZoneEntry {
    id: String,
    name: String,
}

#[derive(Serialize, Debug)]
struct RecordPayload<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    name: &'a str,
    content: String,
    ttl: u32,
}

impl Record {
    fn is_address(&self) -> bool {
        self.record_type == "A" || self.record_type == "AAAA"
    }
}

impl CloudflareApi {
    /// Build a client against the production API base.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Upstream`] if the HTTP client can't be constructed.
    pub fn new(api_token: impl Into<String>) -> Result<Self, Error> {
        Self::with_base_url(api_token, API_BASE)
    }

    /// Build a client against a different API base. Tests use this to target
    /// a local stand-in server.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Upstream`] if the HTTP client can't be constructed.
    pub fn with_base_url(
        api_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api_token: api_token.into(),
            base_url: base_url.into(),
        })
    }

    /// Address records (A or AAAA) matching the exact name, at most a handful
    /// in any sane zone.
    async fn address_records(&self, zone_id: &str, hostname: &str) -> Result<Vec<Record>, Error> {
        let url = format!(
            "{}/zones/{zone_id}/dns_records?name={hostname}",
            self.base_url
        );
        let set: RecordSet = self.get_json(&url).await?;
        Ok(set
            .result
            .into_iter()
            .filter(|r| r.name == hostname && r.is_address())
            .collect())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_token)
            .send()
            .await?;
        Ok(Self::checked(response).await?.json().await?)
    }

    async fn checked(response: reqwest::Response) -> Result<reqwest::Response, Error> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(Error::UpstreamStatus { status, body })
    }
}

#[async_trait::async_trait]
impl RecordApi for CloudflareApi {
    async fn get_address(&self, zone_id: &str, hostname: &str) -> Result<Option<IpAddr>, Error> {
        let mut records = self.address_records(zone_id, hostname).await?;
        if records.len() > 1 {
            return Err(Error::AmbiguousRecord(hostname.to_string()));
        }
        match records.pop() {
            None => Ok(None),
            Some(record) => {
                let address = record.content.parse().map_err(|_| Error::BadRecordData {
                    name: record.name,
                    content: record.content.clone(),
                })?;
                Ok(Some(address))
            }
        }
    }

    async fn upsert_address(
        &self,
        zone_id: &str,
        hostname: &str,
        address: IpAddr,
        ttl: u32,
    ) -> Result<(), Error> {
        let payload = RecordPayload {
            record_type: record_type(address),
            name: hostname,
            content: address.to_string(),
            ttl,
        };

        let mut records = self.address_records(zone_id, hostname).await?;
        if records.len() > 1 {
            return Err(Error::AmbiguousRecord(hostname.to_string()));
        }

        let response = match records.pop() {
            Some(record) => {
                let url = format!("{}/zones/{zone_id}/dns_records/{}", self.base_url, record.id);
                self.client
                    .put(&url)
                    .bearer_auth(&self.api_token)
                    .json(&payload)
                    .send()
                    .await?
            }
            None => {
                let url = format!("{}/zones/{zone_id}/dns_records", self.base_url);
                self.client
                    .post(&url)
                    .bearer_auth(&self.api_token)
                    .json(&payload)
                    .send()
                    .await?
            }
        };
        Self::checked(response).await?;
        Ok(())
    }

    async fn list_zones(&self) -> Result<Vec<Zone>, Error> {
        let url = format!("{}/zones", self.base_url);
        let set: ZoneSet = self.get_json(&url).await?;
        Ok(set
            .result
            .into_iter()
            .map(|z| Zone {
                id: z.id,
                name: z.name,
            })
            .collect())
    }
}
