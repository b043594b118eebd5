//! Session store: the signed-in identity for this tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` as an `RwSignal<SessionState>` context. The auth
//! bootstrap writes it exactly once at load; profile refresh and logout are
//! the only later writers. The route guard reads snapshots on every render.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Identity;

/// Identity-or-absent plus the bootstrap-pending flag.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    identity: Option<Identity>,
    loading: bool,
}

impl Default for SessionState {
    /// A fresh store is loading until the bootstrap reports in.
    fn default() -> Self {
        Self { identity: None, loading: true }
    }
}

impl SessionState {
    /// Current identity, if signed in.
    pub fn get(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Replace the identity wholesale.
    pub fn set(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }

    /// Forget the identity. Must run before navigating off an authenticated page.
    pub fn clear(&mut self) {
        self.identity = None;
    }

    /// True until the bootstrap has completed.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Record the bootstrap result and end the loading state.
    ///
    /// Only the first call has an effect; returns `false` for any later call.
    pub fn complete_bootstrap(&mut self, identity: Option<Identity>) -> bool {
        if !self.loading {
            log::warn!("session bootstrap completed more than once; ignoring");
            return false;
        }
        self.identity = identity;
        self.loading = false;
        true
    }
}
