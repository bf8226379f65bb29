//! Webhook secret handling: the `whsec_` format and key generation.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{Result, WebhookError};

/// Prefix carried by secrets in the portable webhook format.
pub(crate) const SECRET_PREFIX: &str = "whsec_";

/// Size of generated signing keys before base64 encoding.
const SECRET_KEY_BYTES: usize = 24;

/// Generate a fresh webhook secret in the portable `whsec_<base64>` format.
///
/// The returned string can be handed to an endpoint owner and later passed to
/// [`Webhook::new`](crate::Webhook::new) on both sides.
///
/// # Example
///
/// ```
/// let secret = weir::generate_secret();
/// assert!(secret.starts_with("whsec_"));
/// ```
pub fn generate_secret() -> String {
    use rand::RngCore;
    let mut bytes = [0u8; SECRET_KEY_BYTES];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    format!("{}{}", SECRET_PREFIX, STANDARD.encode(bytes))
}

/// Decode a secret into raw key bytes.
///
/// The `whsec_` prefix is optional; the remainder must be standard base64.
pub(crate) fn decode(secret: &str) -> Result<Vec<u8>> {
    let encoded = secret.strip_prefix(SECRET_PREFIX).unwrap_or(secret);
    STANDARD
        .decode(encoded)
        .map_err(|err| WebhookError::invalid_secret(format!("secret is not valid base64: {}", err)))
}
