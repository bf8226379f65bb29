/// The error type for webhook construction and verification
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// The configured secret could not be turned into a signing key.
    #[error("Invalid webhook secret: {0}")]
    InvalidSecret(String),

    /// The delivery failed signature or timestamp checks.
    ///
    /// Every rejection surfaces through this one variant, with the cause
    /// carried only in the message text. A rejected delivery should be
    /// dropped the same way no matter which check failed.
    #[error("Webhook verification failed: {0}")]
    Verification(String),

    /// The delivery passed verification but its payload did not deserialize
    /// into the requested type.
    #[error("Verified payload could not be deserialized: {0}")]
    Payload(#[source] serde_json::Error),
}

impl WebhookError {
    pub(crate) fn invalid_secret(msg: impl Into<String>) -> Self {
        Self::InvalidSecret(msg.into())
    }

    pub(crate) fn verification(msg: impl Into<String>) -> Self {
        Self::Verification(msg.into())
    }
}

/// Result type alias for webhook operations
pub type Result<T> = std::result::Result<T, WebhookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_secret_error() {
        let err = WebhookError::invalid_secret("secret must not be empty");
        assert!(matches!(err, WebhookError::InvalidSecret(_)));
        assert_eq!(
            err.to_string(),
            "Invalid webhook secret: secret must not be empty"
        );
    }

    #[test]
    fn test_verification_error() {
        let err = WebhookError::verification("timestamp too old");
        assert!(matches!(err, WebhookError::Verification(_)));
        assert_eq!(
            err.to_string(),
            "Webhook verification failed: timestamp too old"
        );
    }

    #[test]
    fn test_payload_error_keeps_source() {
        let json_err = serde_json::from_slice::<u64>(b"not json").unwrap_err();
        let err = WebhookError::Payload(json_err);
        assert!(matches!(err, WebhookError::Payload(_)));
        assert!(err
            .to_string()
            .starts_with("Verified payload could not be deserialized"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
