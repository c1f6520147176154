//! Tests for the Cloudflare-dialect record API client, against a local mock
//! of the REST endpoints.

use coolbeans::dns::{CloudflareApi, RecordApi};
use coolbeans::error::Error;
use serde_json::json;
use std::net::IpAddr;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ZONE_ID: &str = "Z1";
const HOSTNAME: &str = "home.example.com";

fn api(server: &MockServer) -> CloudflareApi {
    CloudflareApi::with_base_url("test-token", server.uri()).unwrap()
}

fn record(id: &str, record_type: &str, content: &str) -> serde_json::Value {
    json!({
        "id": id,
        "type": record_type,
        "name": HOSTNAME,
        "content": content,
        "ttl": 900
    })
}

async fn mount_records(server: &MockServer, records: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/zones/{ZONE_ID}/dns_records")))
        .and(query_param("name", HOSTNAME))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": records })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn get_address_absent() {
    let server = MockServer::start().await;
    mount_records(&server, json!([])).await;

    let got = api(&server).get_address(ZONE_ID, HOSTNAME).await.unwrap();
    assert_eq!(got, None);
}

#[tokio::test]
async fn get_address_present() {
    let server = MockServer::start().await;
    mount_records(&server, json!([record("abc123", "A", "203.0.113.9")])).await;

    let got = api(&server).get_address(ZONE_ID, HOSTNAME).await.unwrap();
    assert_eq!(got, Some("203.0.113.9".parse::<IpAddr>().unwrap()));
}

#[tokio::test]
async fn get_address_ignores_non_address_records() {
    let server = MockServer::start().await;
    mount_records(
        &server,
        json!([
            record("abc123", "TXT", "v=spf1 -all"),
            record("def456", "AAAA", "2001:db8::1"),
        ]),
    )
    .await;

    let got = api(&server).get_address(ZONE_ID, HOSTNAME).await.unwrap();
    assert_eq!(got, Some("2001:db8::1".parse::<IpAddr>().unwrap()));
}

#[tokio::test]
async fn multiple_address_records_are_ambiguous() {
    let server = MockServer::start().await;
    mount_records(
        &server,
        json!([
            record("abc123", "A", "203.0.113.9"),
            record("def456", "A", "198.51.100.7"),
        ]),
    )
    .await;

    let err = api(&server).get_address(ZONE_ID, HOSTNAME).await.unwrap_err();
    assert!(matches!(err, Error::AmbiguousRecord(name) if name == HOSTNAME));
}

#[tokio::test]
async fn unparseable_record_content_is_an_error() {
    let server = MockServer::start().await;
    mount_records(&server, json!([record("abc123", "A", "not-an-ip")])).await;

    let err = api(&server).get_address(ZONE_ID, HOSTNAME).await.unwrap_err();
    assert!(matches!(err, Error::BadRecordData { .. }));
}

#[tokio::test]
async fn upsert_creates_when_absent() {
    let server = MockServer::start().await;
    mount_records(&server, json!([])).await;
    Mock::given(method("POST"))
        .and(path(format!("/zones/{ZONE_ID}/dns_records")))
        .and(body_partial_json(json!({
            "type": "A",
            "name": HOSTNAME,
            "content": "203.0.113.9",
            "ttl": 900
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    api(&server)
        .upsert_address(ZONE_ID, HOSTNAME, "203.0.113.9".parse().unwrap(), 900)
        .await
        .unwrap();
}

#[tokio::test]
async fn upsert_overwrites_when_present() {
    let server = MockServer::start().await;
    mount_records(&server, json!([record("abc123", "A", "198.51.100.7")])).await;
    Mock::given(method("PUT"))
        .and(path(format!("/zones/{ZONE_ID}/dns_records/abc123")))
        .and(body_partial_json(json!({
            "type": "A",
            "content": "203.0.113.9"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    api(&server)
        .upsert_address(ZONE_ID, HOSTNAME, "203.0.113.9".parse().unwrap(), 900)
        .await
        .unwrap();
}

#[tokio::test]
async fn upsert_replaces_record_of_other_family() {
    let server = MockServer::start().await;
    mount_records(&server, json!([record("abc123", "AAAA", "2001:db8::1")])).await;
    // The stale AAAA record is overwritten in place, not left beside a new A.
    Mock::given(method("PUT"))
        .and(path(format!("/zones/{ZONE_ID}/dns_records/abc123")))
        .and(body_partial_json(json!({
            "type": "A",
            "content": "203.0.113.9"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    api(&server)
        .upsert_address(ZONE_ID, HOSTNAME, "203.0.113.9".parse().unwrap(), 900)
        .await
        .unwrap();
}

#[tokio::test]
async fn upstream_error_status_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/zones/{ZONE_ID}/dns_records")))
        .respond_with(ResponseTemplate::new(500).set_body_string("zone melted"))
        .mount(&server)
        .await;

    let err = api(&server).get_address(ZONE_ID, HOSTNAME).await.unwrap_err();
    match err {
        Error::UpstreamStatus { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "zone melted");
        }
        other => panic!("expected UpstreamStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn list_zones_maps_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/zones"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [
                { "id": "Z1", "name": "example.com", "status": "active" },
                { "id": "Z2", "name": "example.org", "status": "active" }
            ]
        })))
        .mount(&server)
        .await;

    let zones = api(&server).list_zones().await.unwrap();
    assert_eq!(zones.len(), 2);
    assert_eq!(zones[0].id, "Z1");
    assert_eq!(zones[1].name, "example.org");
}
