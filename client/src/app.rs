//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the session store and toast queue, runs the auth bootstrap once
//! per load, and wraps every route in `Guarded`. Until the bootstrap reports
//! in, every route renders the loading screen, which is also what SSR emits.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guarded::Guarded;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, dashboard::DashboardPage, landing::LandingPage,
    marketplace::MarketplacePage, payment_cancel::PaymentCancelPage, payment_success::PaymentSuccessPage,
    technician_dashboard::TechnicianDashboardPage, technicians::TechniciansPage,
};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::guard::RouteArea;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(toasts);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api::RestApi;
        use crate::util::bootstrap::{BootstrapOutcome, bootstrap};
        use crate::util::browser::BrowserHost;

        let BootstrapOutcome { identity, notice } = bootstrap(&RestApi, &BrowserHost).await;
        log::debug!("session bootstrap finished (signed in: {})", identity.is_some());
        session.update(|s| {
            s.complete_bootstrap(identity);
        });
        if let Some(notice) = notice {
            crate::components::toast_host::notify(toasts, notice);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/gearup.css"/>
        <Title text="GearUp Repairs"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Guarded area=RouteArea::Landing><LandingPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <Guarded area=RouteArea::ConsumerDashboard><DashboardPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("technicians")
                    view=|| view! { <Guarded area=RouteArea::TechnicianSearch><TechniciansPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("marketplace")
                    view=|| view! { <Guarded area=RouteArea::Marketplace><MarketplacePage/></Guarded> }
                />
                <Route
                    path=(StaticSegment("technician"), StaticSegment("dashboard"))
                    view=|| view! { <Guarded area=RouteArea::TechnicianDashboard><TechnicianDashboardPage/></Guarded> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("dashboard"))
                    view=|| view! { <Guarded area=RouteArea::AdminDashboard><AdminDashboardPage/></Guarded> }
                />
                <Route
                    path=(StaticSegment("payment"), StaticSegment("success"))
                    view=|| view! { <Guarded area=RouteArea::PaymentSuccess><PaymentSuccessPage/></Guarded> }
                />
                <Route
                    path=(StaticSegment("payment"), StaticSegment("cancel"))
                    view=|| view! { <Guarded area=RouteArea::PaymentCancel><PaymentCancelPage/></Guarded> }
                />
            </Routes>
        </Router>
        <ToastHost/>
    }
}
