//! Login handshake marker and session-credential cookie formats.
//!
//! The login provider returns the browser with `#session_id=<token>` in the
//! URL fragment. The token is traded once for a session credential that is
//! persisted as a cookie; these helpers build and parse those strings so the
//! browser glue stays trivial.

#[cfg(test)]
#[path = "handshake_test.rs"]
mod handshake_test;

const MARKER: &str = "session_id=";

/// Cookie holding the session credential.
pub const CREDENTIAL_COOKIE: &str = "session_token";

/// Credential lifetime: seven days.
pub const CREDENTIAL_MAX_AGE_SECS: u64 = 7 * 24 * 60 * 60;

/// Extract the handshake token from a location fragment.
///
/// The token runs from `session_id=` to the next `&` or the end of the
/// fragment. An empty token is treated as no marker.
pub fn extract_session_id(fragment: &str) -> Option<&str> {
    let start = fragment.find(MARKER)? + MARKER.len();
    let rest = &fragment[start..];
    let token = rest.split('&').next().unwrap_or_default();
    (!token.is_empty()).then_some(token)
}

/// `document.cookie` assignment that persists a credential.
///
/// `secure; samesite=none` lets the cookie ride the cross-site redirect back
/// from the login provider.
pub fn credential_cookie(token: &str) -> String {
    format!("{CREDENTIAL_COOKIE}={token}; path=/; max-age={CREDENTIAL_MAX_AGE_SECS}; secure; samesite=none")
}

/// `document.cookie` assignment that expires the credential immediately.
pub fn expired_credential_cookie() -> String {
    format!("{CREDENTIAL_COOKIE}=; path=/; max-age=0")
}
