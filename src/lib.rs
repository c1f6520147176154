//! Cool Beans
//!
//! A tiny dynamic DNS service: one authenticated `/update` endpoint that
//! points a DNS address record at whatever source address the request came
//! from. Each hostname is registered with a shared secret; the companion
//! pinger signs the hostname with that secret and calls home on a timer, so
//! a connection with a changing public IP keeps its name.
//!
//! Records are written through a managed DNS provider's REST API
//! ([`dns::CloudflareApi`]); coolbeans itself serves no DNS traffic and
//! stores nothing durable. The record in the provider's zone is the only
//! state.
//!
#![warn(clippy::pedantic)]

pub mod api;
pub mod auth;
#[doc(hidden)]
pub mod beans;
pub mod config;
pub mod dns;
pub mod error;
pub mod hosts;
pub mod pinger;
pub mod zone;

pub use api::new as new_api;
pub use config::{Config, SharedConfig};
pub use dns::CloudflareApi;
pub use hosts::{EnvHostTable, InMemoryHostTable};
