//! Webhook signing and verification.
//!
//! Implements the delivery format used by Svix-compatible senders: an id
//! header, a timestamp header, and a signature header carrying one or more
//! `v1,<base64>` HMAC-SHA256 tokens over `{id}.{timestamp}.{payload}`.
//! Signature tokens are matched in constant time, and timestamps must fall
//! within a five-minute window of the local clock in either direction.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::{engine::general_purpose::STANDARD, Engine};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretSlice};
use serde::de::DeserializeOwned;
use sha2::Sha256;

use crate::error::{Result, WebhookError};
use crate::headers::{self, HeaderSource};
use crate::secret;
use crate::signature::{self, SIGNATURE_VERSION};

type HmacSha256 = Hmac<Sha256>;

/// Maximum accepted distance, in seconds, between a delivery's timestamp and
/// the local clock, in either direction.
const TIMESTAMP_TOLERANCE_SECS: i64 = 300;

/// Signs and verifies webhook deliveries for one endpoint secret.
///
/// A `Webhook` holds the decoded signing key and nothing else; it is cheap to
/// build and safe to share across threads. The key is stored using
/// [`SecretSlice`] so it never shows up in logs or debug output.
///
/// # Example
///
/// ```
/// use weir::Webhook;
///
/// let webhook = Webhook::new("whsec_MfKQ9r8GKYqrTwjUPD8ILPZIo2LaLaSw")?;
/// let token = webhook.sign("msg_1", std::time::SystemTime::now(), br#"{"ok":true}"#);
/// assert!(token.starts_with("v1,"));
/// # Ok::<(), weir::WebhookError>(())
/// ```
#[derive(Debug)]
pub struct Webhook {
    key: SecretSlice<u8>,
}

impl Webhook {
    /// Create a verifier from a secret in the portable `whsec_<base64>`
    /// format. The `whsec_` prefix is optional.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::InvalidSecret`] if the secret is not valid
    /// base64 or decodes to an empty key.
    pub fn new(secret: &str) -> Result<Self> {
        Self::from_bytes(secret::decode(secret)?)
    }

    /// Create a verifier from raw key bytes, for secrets held outside the
    /// `whsec_` format.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::InvalidSecret`] if `key` is empty.
    pub fn from_bytes(key: Vec<u8>) -> Result<Self> {
        if key.is_empty() {
            return Err(WebhookError::invalid_secret("secret must not be empty"));
        }
        Ok(Self {
            key: SecretSlice::from(key),
        })
    }

    /// Sign a payload, producing the value for the signature header.
    ///
    /// # Arguments
    ///
    /// * `msg_id` - The message id delivered alongside the payload
    /// * `timestamp` - The delivery time; transmitted as whole seconds
    /// * `payload` - The raw payload bytes, exactly as they will be sent
    ///
    /// The returned token is `v1,<base64>`. Receivers rebuild the signed
    /// content from the id and timestamp headers, so the same values must be
    /// placed there unchanged.
    pub fn sign(&self, msg_id: &str, timestamp: SystemTime, payload: &[u8]) -> String {
        let timestamp = unix_seconds(timestamp);
        let body = self.signature_body(msg_id, timestamp, payload);
        format!("{},{}", SIGNATURE_VERSION, body)
    }

    /// Verify a delivery and deserialize its payload.
    ///
    /// Runs the same checks as [`verify_raw`](Self::verify_raw), then parses
    /// the payload as JSON into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Verification`] if the delivery is rejected,
    /// or [`WebhookError::Payload`] if it was authentic but the payload did
    /// not deserialize into `T`.
    pub fn verify<T: DeserializeOwned>(
        &self,
        payload: &[u8],
        headers: &dyn HeaderSource,
    ) -> Result<T> {
        self.verify_raw(payload, headers)?;

        serde_json::from_slice(payload).map_err(|err| {
            tracing::warn!(error = %err, "verified webhook payload failed to deserialize");
            WebhookError::Payload(err)
        })
    }

    /// Verify a delivery without inspecting the payload's content.
    ///
    /// Headers are read under the `svix-*` names first, then the
    /// `webhook-*` names. Use this directly when the payload is not JSON or
    /// is parsed elsewhere.
    ///
    /// # Arguments
    ///
    /// * `payload` - The raw request body, exactly as received
    /// * `headers` - The delivery's headers
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Verification`] when the required headers are
    /// missing, the timestamp is malformed or outside the accepted window,
    /// or no signature token matches.
    pub fn verify_raw(&self, payload: &[u8], headers: &dyn HeaderSource) -> Result<()> {
        self.verify_at(payload, headers, unix_seconds(SystemTime::now()))
    }

    /// Verification against an explicit clock; the public paths pass the
    /// real one.
    fn verify_at(&self, payload: &[u8], headers: &dyn HeaderSource, now: i64) -> Result<()> {
        let parts = headers::extract(headers)
            .ok_or_else(|| WebhookError::verification("missing required headers"))?;

        let timestamp = validate_timestamp(parts.timestamp, now)?;

        // Recompute the signature and look for it among the header's tokens.
        let expected = self.signature_body(parts.id, timestamp, payload);
        if !signature::any_token_matches(parts.signature, &expected) {
            tracing::debug!(msg_id = %parts.id, "webhook signature verification failed");
            return Err(WebhookError::verification("no matching signature found"));
        }

        Ok(())
    }

    /// Compute the base64 HMAC-SHA256 signature of `{id}.{timestamp}.{payload}`.
    ///
    /// The payload is fed to the MAC exactly as received; it is never decoded
    /// or re-encoded as text.
    fn signature_body(&self, msg_id: &str, timestamp: i64, payload: &[u8]) -> String {
        let mut mac = HmacSha256::new_from_slice(self.key.expose_secret())
            .expect("HMAC can take key of any size");
        mac.update(msg_id.as_bytes());
        mac.update(b".");
        mac.update(timestamp.to_string().as_bytes());
        mac.update(b".");
        mac.update(payload);
        STANDARD.encode(mac.finalize().into_bytes())
    }
}

/// Seconds since the Unix epoch; times before the epoch clamp to zero.
fn unix_seconds(time: SystemTime) -> i64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0) as i64
}

/// Parse a timestamp header and check it against `now`.
///
/// The header value is attacker-controlled and may sit at the `i64`
/// extremes, so it is only ever compared, never subtracted from; `now` is
/// clock-bounded and the window around it cannot overflow.
fn validate_timestamp(raw: &str, now: i64) -> Result<i64> {
    let timestamp: i64 = raw
        .parse()
        .map_err(|_| WebhookError::verification("invalid timestamp header"))?;

    if timestamp < now - TIMESTAMP_TOLERANCE_SECS {
        tracing::debug!(timestamp, now, "webhook timestamp too old");
        return Err(WebhookError::verification("timestamp too old"));
    }
    if timestamp > now + TIMESTAMP_TOLERANCE_SECS {
        tracing::debug!(timestamp, now, "webhook timestamp too new");
        return Err(WebhookError::verification("timestamp too new"));
    }

    Ok(timestamp)
}
