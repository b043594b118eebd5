//! One-shot auth bootstrap run when the application loads.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` spawns [`bootstrap`] once on hydration and applies the returned
//! [`BootstrapOutcome`] to the session store in a single write, which is the
//! "loading complete" signal. Because the function has exactly one return
//! point per branch and never panics, that signal fires once on every path.
//!
//! FLOW
//! ====
//! 1. Fragment carries `session_id=<token>`: exchange it for a credential,
//!    persist the cookie, fetch the profile, strip the fragment, welcome.
//!    A failed exchange notifies the user and leaves them signed out.
//! 2. No marker: fetch the profile with whatever credential the browser
//!    already holds. Failure here is the normal signed-out state and stays
//!    silent.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use crate::net::error::ApiError;
use crate::net::types::Identity;
use crate::state::toast::Notice;
use crate::util::handshake::extract_session_id;

pub const WELCOME_MESSAGE: &str = "Welcome back!";
pub const AUTH_FAILED_MESSAGE: &str = "Authentication failed";

/// Backend calls the bootstrap depends on.
pub trait AuthGateway {
    /// Trade a one-time handshake token for a session credential.
    async fn exchange_session(&self, session_id: &str) -> Result<String, ApiError>;

    /// Fetch the identity bound to the ambient credential.
    async fn fetch_identity(&self) -> Result<Identity, ApiError>;
}

/// Browser facilities the bootstrap depends on.
pub trait SessionHost {
    /// Current location fragment including the leading `#`, or empty.
    fn location_fragment(&self) -> String;

    /// Store the credential so later requests carry it.
    fn persist_credential(&self, token: &str);

    /// Remove the handshake marker from the visible URL without navigating.
    fn strip_handshake(&self);
}

/// What the session store and toast queue should receive.
#[derive(Clone, Debug, PartialEq)]
pub struct BootstrapOutcome {
    pub identity: Option<Identity>,
    pub notice: Option<Notice>,
}

/// Resolve the initial identity for this page load.
pub async fn bootstrap<G: AuthGateway, H: SessionHost>(gateway: &G, host: &H) -> BootstrapOutcome {
    let fragment = host.location_fragment();
    let Some(session_id) = extract_session_id(&fragment) else {
        return BootstrapOutcome { identity: load_identity(gateway).await, notice: None };
    };

    match gateway.exchange_session(session_id).await {
        Ok(token) => {
            host.persist_credential(&token);
            let identity = load_identity(gateway).await;
            host.strip_handshake();
            log::info!("login handshake completed");
            BootstrapOutcome { identity, notice: Some(Notice::success(WELCOME_MESSAGE)) }
        }
        Err(e) => {
            log::error!("login handshake failed: {e}");
            BootstrapOutcome { identity: None, notice: Some(Notice::error(AUTH_FAILED_MESSAGE)) }
        }
    }
}

/// Fetch the profile; any failure means "not signed in".
pub async fn load_identity<G: AuthGateway>(gateway: &G) -> Option<Identity> {
    match gateway.fetch_identity().await {
        Ok(identity) => Some(identity),
        Err(e) => {
            log::debug!("no active session: {e}");
            None
        }
    }
}
