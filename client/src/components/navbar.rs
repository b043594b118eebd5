//! Top navigation bar for signed-in pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Consumers get links to their three areas; technicians and admins see a
//! single home link with a role badge. Logout goes through
//! `util::auth::logout`, after which the route guard sends the user to the
//! landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Role;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::format::initial;
use crate::util::guard::{RouteArea, role_home};

const CONSUMER_LINKS: [(RouteArea, &str); 3] = [
    (RouteArea::ConsumerDashboard, "Dashboard"),
    (RouteArea::TechnicianSearch, "Find Technicians"),
    (RouteArea::Marketplace, "Parts Marketplace"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let role = move || session.with(|s| s.get().map(|i| i.role));
    let home = move || role().map_or(RouteArea::Landing.path(), role_home).to_owned();
    let name = move || session.with(|s| s.get().map(|i| i.display_name().to_owned()).unwrap_or_default());
    let picture = move || session.with(|s| s.get().and_then(|i| i.picture.clone()));
    let badge = move || match role() {
        Some(Role::Technician) => Some("Technician"),
        Some(Role::Admin) => Some("Admin"),
        _ => None,
    };
    let is_consumer = move || matches!(role(), Some(Role::Consumer | Role::Unrecognized));

    view! {
        <nav class="navbar" data-testid="navbar">
            <A href=home attr:class="navbar__brand">
                <span class="navbar__logo" aria-hidden="true">"⚙"</span>
                "GearUp Repairs"
            </A>
            {move || badge().map(|b| view! { <span class="navbar__badge">{b}</span> })}

            <Show when=is_consumer>
                <div class="navbar__links">
                    {CONSUMER_LINKS
                        .into_iter()
                        .map(|(area, label)| {
                            view! {
                                <A href=area.path() attr:class="navbar__link">
                                    {label}
                                </A>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>

            <span class="navbar__spacer"></span>

            <span class="navbar__user">
                {move || match picture() {
                    Some(src) => view! { <img class="navbar__avatar" src=src alt="" /> }.into_any(),
                    None => view! { <span class="navbar__avatar navbar__avatar--initial">{initial(&name())}</span> }
                        .into_any(),
                }}
                <span class="navbar__name">{name}</span>
            </span>
            <button
                class="btn navbar__logout"
                data-testid="logout-btn"
                on:click=move |_| crate::util::auth::logout(session, toasts)
            >
                "Logout"
            </button>
        </nav>
    }
}
