//! Update request signing and verification.
//!
//! The signed material is the hostname alone. The address written to DNS is
//! always the transport-observed source of the request, so a client-claimed
//! IP has no place in the signature: the signature proves who is asking, the
//! network layer says from where.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the update signature for `hostname`:
/// hex(HMAC-SHA256(`secret`, `hostname`)).
#[must_use]
pub fn sign(secret: &[u8], hostname: &str) -> String {
    hex::encode(mac(secret, hostname).finalize().into_bytes())
}

/// Check a hex-encoded signature against the expected value for `hostname`.
///
/// The comparison happens inside [`Mac::verify_slice`], which is
/// constant-time. Signatures that aren't valid hex, or decode to the wrong
/// length, fail verification like any other mismatch.
#[must_use]
pub fn verify(secret: &[u8], hostname: &str, signature: &str) -> bool {
    let Ok(raw) = hex::decode(signature) else {
        return false;
    };
    mac(secret, hostname).verify_slice(&raw).is_ok()
}

fn mac(secret: &[u8], hostname: &str) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC keys can be any length");
    mac.update(hostname.as_bytes());
    mac
}
