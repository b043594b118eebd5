//! Shared session actions used by pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never navigate on logout themselves: clearing the session store is
//! enough, because `Guarded` re-evaluates and redirects to the landing page
//! on the very next render.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::browser;

pub const LOGOUT_MESSAGE: &str = "Logged out successfully";

/// Drop the local session: expire the credential cookie and clear the store.
pub fn end_session(session: RwSignal<SessionState>) {
    browser::clear_credential();
    session.update(SessionState::clear);
}

/// Sign out on the server, then end the local session regardless.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn logout(session: RwSignal<SessionState>, toasts: RwSignal<ToastState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::components::toast_host::notify;
        use crate::state::toast::Notice;

        let acknowledged = match crate::net::api::logout().await {
            Ok(()) => true,
            Err(e) => {
                log::warn!("server logout failed, clearing local session anyway: {e}");
                false
            }
        };
        end_session(session);
        if acknowledged {
            notify(toasts, Notice::success(LOGOUT_MESSAGE));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("no server to sign out of outside the browser");
        end_session(session);
    }
}

/// Re-fetch the identity after a profile mutation.
///
/// A failed re-validation means the credential is no longer good, so the
/// session is ended.
pub async fn refresh_identity(session: RwSignal<SessionState>) {
    match crate::net::api::fetch_current_identity().await {
        Ok(identity) => session.update(|s| s.set(identity)),
        Err(e) => {
            log::warn!("profile refresh failed, ending session: {e}");
            end_session(session);
        }
    }
}
