use crate::api::api_error::APIError;
use crate::api::model::{UpdateRequest, UpdateResult, UPDATE_OK};
use crate::api::server::AppState;
use crate::auth;
use crate::error::Error;
use axum::extract::{ConnectInfo, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::WithRejection;
use serde_json::json;
use std::net::SocketAddr;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub(super) fn new(state: AppState) -> Router {
    Router::new()
        .route("/healthcheck", get(health_check))
        .route("/update", post(update).put(update))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(state.config.api_timeout))
        .with_state(state)
}

#[allow(clippy::unused_async)]
async fn health_check() -> impl IntoResponse {
    Json(json!({"ok":"healthy"}))
}

/// The one interesting handler: validate, authenticate, then write the
/// observed source address to DNS iff it differs from what's stored.
async fn update(
    State(state): State<AppState>,
    ConnectInfo(client_addr): ConnectInfo<SocketAddr>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateRequest>, APIError>,
) -> Result<Json<UpdateResult>, APIError> {
    payload.validate()?;
    let source_ip = client_addr.ip();
    let hostname = &payload.hostname;

    let Some(host) = state.hosts.lookup(hostname) else {
        tracing::debug!("rejected update from {source_ip} for unknown hostname \"{hostname}\"");
        return Err(Error::UnknownHostname.into());
    };

    if !auth::verify(host.shared_secret.as_bytes(), hostname, &payload.signature) {
        tracing::debug!("rejected update from {source_ip} for \"{hostname}\": signature mismatch");
        return Err(Error::Unauthorized.into());
    }

    let current = state.records.get_address(&host.zone_id, hostname).await?;
    if current == Some(source_ip) {
        tracing::debug!("\"{hostname}\" already points at {source_ip}, skipping write");
    } else {
        state
            .records
            .upsert_address(&host.zone_id, hostname, source_ip, state.config.record_ttl)
            .await?;
        tracing::info!("updated \"{hostname}\" to {source_ip}");
    }

    Ok(Json(UpdateResult {
        message: UPDATE_OK.to_string(),
    }))
}
