//! Signature header tokens: `v1,<base64>` parsing and constant-time matching.

use subtle::ConstantTimeEq;

/// Signature scheme version produced and accepted by this crate.
pub(crate) const SIGNATURE_VERSION: &str = "v1";

/// Returns `true` when any token in `header` is a `v1` signature whose body
/// equals `expected`.
///
/// The header may carry several space-separated tokens (deliveries signed
/// under old and new keys during rotation). Tokens that are not
/// `version,body` pairs or carry a different version are skipped; comparison
/// against the body is constant-time.
pub(crate) fn any_token_matches(header: &str, expected: &str) -> bool {
    header
        .split(' ')
        .filter_map(|token| token.split_once(','))
        .any(|(version, body)| {
            version == SIGNATURE_VERSION
                && constant_time_compare(body.as_bytes(), expected.as_bytes())
        })
}

/// Constant-time comparison of two byte slices.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
