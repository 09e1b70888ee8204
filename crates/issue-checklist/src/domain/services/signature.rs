//! Webhook signature verification
//!
//! GitHub signs every delivery with HMAC-SHA256 over the raw request body
//! and sends it as `x-hub-signature-256: sha256=<hex>`.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the delivery signature
pub const SIGNATURE_HEADER: &str = "x-hub-signature-256";

const SIGNATURE_PREFIX: &str = "sha256=";

fn mac_for(secret: &str) -> HmacSha256 {
    // HMAC accepts keys of any length
    HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size")
}

/// Compute the `sha256=<hex>` header value for `body`
pub fn sign_payload(secret: &str, body: &[u8]) -> String {
    let mut mac = mac_for(secret);
    mac.update(body);
    let bytes = mac.finalize().into_bytes();

    format!("{}{}", SIGNATURE_PREFIX, hex::encode(bytes))
}

/// Verify `header` against the HMAC of the exact bytes received
///
/// Must be given the raw body, never a re-serialized JSON value. The digest
/// comparison is constant-time.
pub fn verify_signature(body: &[u8], header: Option<&str>, secret: &str) -> bool {
    let Some(digest) = header.and_then(|h| h.strip_prefix(SIGNATURE_PREFIX)) else {
        return false;
    };

    let Ok(expected) = hex::decode(digest) else {
        return false;
    };

    let mut mac = mac_for(secret);
    mac.update(body);
    mac.verify_slice(&expected).is_ok()
}
