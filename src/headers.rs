//! Header access and the branded/unbranded delivery header schemes.

use std::collections::{BTreeMap, HashMap};

use http::HeaderMap;

/// Read access to a delivery's headers.
///
/// Implemented for [`http::HeaderMap`] and for plain string maps, so the same
/// verifier works against a live request or against headers rebuilt from a
/// queue or log. Lookups use lowercase names; implementations over
/// case-preserving storage must match case-insensitively.
pub trait HeaderSource {
    /// Returns the value for `name`, if present and representable as a string.
    fn header(&self, name: &str) -> Option<&str>;
}

impl HeaderSource for HeaderMap {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|value| value.to_str().ok())
    }
}

impl HeaderSource for HashMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl HeaderSource for BTreeMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// The three delivery headers under one naming scheme.
struct HeaderScheme {
    id: &'static str,
    timestamp: &'static str,
    signature: &'static str,
}

/// Recognized naming schemes, tried in order. A delivery must satisfy one
/// scheme completely; values are never mixed across schemes.
const HEADER_SCHEMES: &[HeaderScheme] = &[
    HeaderScheme {
        id: "svix-id",
        timestamp: "svix-timestamp",
        signature: "svix-signature",
    },
    HeaderScheme {
        id: "webhook-id",
        timestamp: "webhook-timestamp",
        signature: "webhook-signature",
    },
];

/// Raw header values for one delivery.
pub(crate) struct WebhookHeaders<'a> {
    pub(crate) id: &'a str,
    pub(crate) timestamp: &'a str,
    pub(crate) signature: &'a str,
}

/// Find the first scheme for which all three headers are present.
pub(crate) fn extract(headers: &dyn HeaderSource) -> Option<WebhookHeaders<'_>> {
    HEADER_SCHEMES.iter().find_map(|scheme| {
        Some(WebhookHeaders {
            id: headers.header(scheme.id)?,
            timestamp: headers.header(scheme.timestamp)?,
            signature: headers.header(scheme.signature)?,
        })
    })
}
