//! Weir - verification and signing for Svix-compatible webhooks
//!
//! Weir authenticates webhook deliveries signed the way Svix and Standard
//! Webhooks senders sign them: HMAC-SHA256 over `{id}.{timestamp}.{payload}`,
//! carried as `v1,<base64>` tokens alongside an id and a timestamp header.
//!
//! # Features
//!
//! - **Verification**: constant-time signature checks plus a five-minute
//!   timestamp window against replayed or delayed deliveries
//! - **Signing**: produce signature headers for outbound deliveries and tests
//! - **Header schemes**: accepts both the branded `svix-*` and the
//!   vendor-neutral `webhook-*` header names
//! - **Key rotation**: a multi-token signature header verifies when any one
//!   token matches
//!
//! # Quick Start
//!
//! ```
//! use std::collections::HashMap;
//! use std::time::{SystemTime, UNIX_EPOCH};
//! use weir::Webhook;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let secret = weir::generate_secret();
//! let webhook = Webhook::new(&secret)?;
//!
//! // Sender side: sign the payload.
//! let payload = br#"{"event":"invoice.paid","amount":1000}"#;
//! let now = SystemTime::now();
//! let token = webhook.sign("msg_27", now, payload);
//!
//! // Receiver side: verify against the delivery headers.
//! let seconds = now.duration_since(UNIX_EPOCH)?.as_secs();
//! let mut headers = HashMap::new();
//! headers.insert("webhook-id".to_string(), "msg_27".to_string());
//! headers.insert("webhook-timestamp".to_string(), seconds.to_string());
//! headers.insert("webhook-signature".to_string(), token);
//!
//! let event: serde_json::Value = webhook.verify(payload, &headers)?;
//! assert_eq!(event["event"], "invoice.paid");
//! # Ok(())
//! # }
//! ```

mod error;
mod headers;
mod secret;
mod signature;
mod verifier;

// Re-exports for public API
pub use error::{Result, WebhookError};
pub use headers::HeaderSource;
pub use secret::generate_secret;
pub use verifier::Webhook;
