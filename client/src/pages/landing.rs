//! Public marketing page and the entry point into the external login.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only signed-out visitors reach this page; the guard sends everyone else
//! to their role home. "Get Started" leaves the app for the auth provider,
//! which later returns to `/dashboard` with a `#session_id=` marker.

use leptos::prelude::*;

use crate::config::{auth_url, login_redirect_url};
use crate::util::browser;

const HIGHLIGHTS: [(&str, &str); 3] = [("500+", "Certified Technicians"), ("10k+", "Services Completed"), ("4.9/5", "Average Rating")];

const FEATURES: [(&str, &str); 4] = [
    (
        "AI-Powered Matching",
        "Smart algorithms connect you with the perfect technician based on your equipment, location, and service needs.",
    ),
    (
        "Verified Professionals",
        "All technicians are certified and background-checked. Read reviews and ratings from real customers.",
    ),
    (
        "Parts Marketplace",
        "Browse genuine parts with AI-powered compatibility checks. Get what you need, when you need it.",
    ),
    (
        "Predictive Maintenance",
        "Stay ahead of issues with AI-driven maintenance recommendations based on your equipment usage.",
    ),
];

fn start_login() {
    let target = login_redirect_url(&auth_url(), &browser::location_origin());
    log::info!("redirecting to login provider");
    browser::assign_location(&target);
}

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page" data-testid="landing-page">
            <header class="landing-page__nav">
                <span class="landing-page__brand">"GearUp Repairs"</span>
                <button class="btn" data-testid="nav-login-btn" on:click=move |_| start_login()>
                    "Sign In"
                </button>
            </header>

            <section class="landing-page__hero">
                <span class="landing-page__eyebrow">"AI-Powered Service Platform"</span>
                <h1>"Expert Repairs for Your " <span class="landing-page__accent">"Fitness Equipment"</span></h1>
                <p>
                    "Book certified technicians, shop genuine parts and keep every machine running with AI maintenance plans."
                </p>
                <button class="btn btn--primary" data-testid="get-started-btn" on:click=move |_| start_login()>
                    "Get Started"
                </button>
                <div class="landing-page__highlights">
                    {HIGHLIGHTS
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="landing-page__highlight">
                                    <strong>{value}</strong>
                                    <span>{label}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="landing-page__features">
                <h2>"Why Choose GearUp Repairs?"</h2>
                <p>"Everything you need in one powerful platform"</p>
                <div class="landing-page__feature-grid">
                    {FEATURES
                        .into_iter()
                        .map(|(title, body)| {
                            view! {
                                <article class="landing-page__feature">
                                    <h3>{title}</h3>
                                    <p>{body}</p>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="landing-page__cta">
                <h2>"Ready to Get Started?"</h2>
                <p>"Join thousands of satisfied customers and technicians"</p>
                <button class="btn btn--primary" on:click=move |_| start_login()>
                    "Sign In to Continue"
                </button>
            </section>

            <footer class="landing-page__footer">"© 2025 GearUp Repairs. All rights reserved."</footer>
        </div>
    }
}
