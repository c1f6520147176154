//! HTTP API for authenticated dynamic DNS updates.
//!
//! # API Endpoints
//!
//! ## `/healthcheck` (GET)
//!
//!   Returns HTTP 200 (OK) and the JSON body `{"ok":"healthy"}` when the
//!   service is operational.
//!
//! ## `/update` (POST or PUT)
//!
//!   Expects a JSON request body of the form:
//!
//!   ```json
//!   { "hostname": "home.example.com", "signature": "6e07c..." }
//!   ```
//!
//!   Where `signature` is hex(HMAC-SHA256(shared secret, hostname)), see
//!   [`auth`][crate::auth]. The address written to DNS is the source address
//!   of the request as observed by the server, never a value from the
//!   payload. If the stored record already carries that address no write is
//!   issued.
//!
//!   | Status | Body | Condition |
//!   |---|---|---|
//!   | 200 | `{"message": "Cool beans"}` | record unchanged or updated |
//!   | 400 | `{"message": "Invalid payload"}` | malformed body or missing fields |
//!   | 400 | `{"message": "Invalid hostname"}` | hostname not registered |
//!   | 401 | `{"message": "Unauthorized"}` | signature mismatch |
//!   | 500 | `{"message": "Internal error"}` | ambiguous record state or DNS API failure |
//!
//!   Both POST and PUT are accepted: the original pinger PUT its payload and
//!   there is no reason to break it.

mod api_error;
mod model;
mod routes;
pub mod server;

pub use server::{new, router};
