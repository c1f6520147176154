use crate::api::routes;
use crate::config::SharedConfig;
use crate::dns::DynRecordApi;
use crate::hosts::DynHostTable;
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;

#[derive(Clone)]
pub(super) struct AppState {
    pub config: SharedConfig,
    pub hosts: DynHostTable,
    pub records: DynRecordApi,
}

/// Build the API router. Exposed separately from [`new`] so tests can drive
/// the handlers without binding a socket.
#[must_use]
pub fn router(config: SharedConfig, hosts: DynHostTable, records: DynRecordApi) -> Router {
    routes::new(AppState {
        config,
        hosts,
        records,
    })
}

/// Serve the API on the configured bind address.
pub fn new(
    config: SharedConfig,
    hosts: DynHostTable,
    records: DynRecordApi,
) -> impl Future<Output = hyper::Result<()>> {
    let bind_addr = config.api_bind_addr;
    axum::Server::bind(&bind_addr).serve(
        router(config, hosts, records).into_make_service_with_connect_info::<SocketAddr>(),
    )
}
