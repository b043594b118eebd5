use super::*;

#[test]
fn extracts_token_at_end_of_fragment() {
    assert_eq!(extract_session_id("#session_id=abc123"), Some("abc123"));
}

#[test]
fn token_stops_at_ampersand() {
    assert_eq!(extract_session_id("#state=x&session_id=abc123&foo=bar"), Some("abc123"));
}

#[test]
fn missing_marker_yields_none() {
    assert_eq!(extract_session_id(""), None);
    assert_eq!(extract_session_id("#section-2"), None);
}

#[test]
fn empty_token_yields_none() {
    assert_eq!(extract_session_id("#session_id="), None);
    assert_eq!(extract_session_id("#session_id=&x=1"), None);
}

#[test]
fn credential_cookie_carries_expiry_and_cross_site_flags() {
    assert_eq!(
        credential_cookie("tok1"),
        "session_token=tok1; path=/; max-age=604800; secure; samesite=none"
    );
}

#[test]
fn expired_cookie_clears_value_at_root() {
    assert_eq!(expired_credential_cookie(), "session_token=; path=/; max-age=0");
}
