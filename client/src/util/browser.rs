//! Thin wrappers over the browser APIs the app needs.
//!
//! TRADE-OFFS
//! ==========
//! Every function is a no-op (or returns an empty value) outside `hydrate`
//! so SSR rendering stays deterministic and native tests never touch a DOM.
//! DOM failures are logged, not propagated: none of them leave the app in a
//! state the user could act on.

use crate::util::bootstrap::SessionHost;
use crate::util::handshake::{credential_cookie, expired_credential_cookie};

/// Current `location.hash`, including the leading `#`.
pub fn location_fragment() -> String {
    #[cfg(feature = "hydrate")]
    {
        match web_sys::window().map(|w| w.location().hash()) {
            Some(Ok(hash)) => hash,
            Some(Err(e)) => {
                log::warn!("reading location hash failed: {e:?}");
                String::new()
            }
            None => String::new(),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Current `location.origin`, used as the checkout and login return target.
pub fn location_origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        match web_sys::window().map(|w| w.location().origin()) {
            Some(Ok(origin)) => origin,
            Some(Err(e)) => {
                log::warn!("reading location origin failed: {e:?}");
                String::new()
            }
            None => String::new(),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Full-page navigation to an external URL (login provider, hosted checkout).
pub fn assign_location(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                log::error!("navigation to external page failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("skipping external navigation outside the browser: {url}");
    }
}

/// Write one `document.cookie` assignment.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn write_cookie(assignment: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        match document.dyn_into::<web_sys::HtmlDocument>() {
            Ok(html) => {
                if let Err(e) = html.set_cookie(assignment) {
                    log::error!("writing session cookie failed: {e:?}");
                }
            }
            Err(_) => log::error!("document is not an HTML document; cookie not written"),
        }
    }
}

/// Persist the session credential cookie.
pub fn store_credential(token: &str) {
    write_cookie(&credential_cookie(token));
}

/// Expire the session credential cookie.
pub fn clear_credential() {
    write_cookie(&expired_credential_cookie());
}

/// Replace the current history entry with the bare path, dropping the
/// query and fragment without a reload.
pub fn strip_fragment() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let path = match window.location().pathname() {
            Ok(path) => path,
            Err(e) => {
                log::warn!("reading location path failed: {e:?}");
                return;
            }
        };
        let replaced = window
            .history()
            .and_then(|h| h.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path)));
        if let Err(e) = replaced {
            log::warn!("clearing login fragment failed: {e:?}");
        }
    }
}

/// Current time as an ISO-8601 UTC timestamp.
pub fn now_iso8601() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// The real browser behind the bootstrap's host seam.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

impl SessionHost for BrowserHost {
    fn location_fragment(&self) -> String {
        location_fragment()
    }

    fn persist_credential(&self, token: &str) {
        store_credential(token);
    }

    fn strip_handshake(&self) {
        strip_fragment();
    }
}
