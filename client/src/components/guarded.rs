//! Route wrapper that applies the authorization guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route in `App` renders through `Guarded`. While the session
//! bootstrap is pending it shows the loading screen; afterwards it asks
//! `util::guard::resolve` and either renders the page or redirects straight
//! to the end of the redirect chain.
//! The decision is memoized, so profile refreshes that keep the same
//! outcome do not rebuild the page.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::loading_screen::LoadingScreen;
use crate::state::session::SessionState;
use crate::util::guard::{RouteArea, RouteDecision, resolve};

#[component]
pub fn Guarded(area: RouteArea, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let decision = Memo::new(move |_| {
        session.with(|s| {
            if s.is_loading() {
                return None;
            }
            let target = resolve(s.get(), area);
            Some(if target == area { RouteDecision::Render } else { RouteDecision::Redirect(target.path()) })
        })
    });

    move || match decision.get() {
        None => view! { <LoadingScreen /> }.into_any(),
        Some(RouteDecision::Render) => children().into_any(),
        Some(RouteDecision::Redirect(path)) => {
            log::debug!("guard redirecting {} -> {path}", area.path());
            view! { <Redirect path=path /> }.into_any()
        }
    }
}
