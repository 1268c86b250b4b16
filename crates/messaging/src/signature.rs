//! Webhook signature validation.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Validates the `X-Line-Signature` header against the raw request body.
///
/// The platform signs the body with HMAC-SHA256 keyed by the channel secret
/// and sends the digest base64-encoded. Returns false for malformed or
/// missing signatures rather than erroring; callers only need pass/fail.
#[must_use]
pub fn validate_signature(channel_secret: &str, body: &[u8], signature: &str) -> bool {
    let Ok(expected) = BASE64.decode(signature) else {
        return false;
    };

    let Ok(mut mac) = Hmac::<Sha256>::new_from_slice(channel_secret.as_bytes()) else {
        return false;
    };
    mac.update(body);

    // Constant-time comparison
    mac.verify_slice(&expected).is_ok()
}
