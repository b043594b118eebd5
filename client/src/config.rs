//! Build-time endpoint configuration.
//!
//! The WASM bundle has no process environment at runtime, so backend and
//! login-provider locations are baked in from `GEARUP_BACKEND_URL` and
//! `GEARUP_AUTH_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_AUTH_URL: &str = "https://auth.emergentagent.com";

/// Route the login provider sends the browser back to after sign-in.
pub const LOGIN_RETURN_PATH: &str = "/dashboard";

/// Base URL for every REST call, e.g. `https://api.example.com/api`.
///
/// An unset or empty `GEARUP_BACKEND_URL` yields the same-origin `/api`.
pub fn api_base() -> String {
    api_base_from(option_env!("GEARUP_BACKEND_URL"))
}

/// Hosted login provider root.
pub fn auth_url() -> String {
    auth_url_from(option_env!("GEARUP_AUTH_URL"))
}

fn api_base_from(raw: Option<&str>) -> String {
    let backend = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    format!("{backend}/api")
}

fn auth_url_from(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_owned(),
        _ => DEFAULT_AUTH_URL.to_owned(),
    }
}

/// Build the login-provider redirect for a page served from `origin`.
pub fn login_redirect_url(auth_url: &str, origin: &str) -> String {
    let return_to = format!("{origin}{LOGIN_RETURN_PATH}");
    let encoded: String = url::form_urlencoded::byte_serialize(return_to.as_bytes()).collect();
    format!("{auth_url}/?redirect={encoded}")
}
