//! Full-page placeholder shown while the session bootstraps.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen(#[prop(default = "Loading...")] message: &'static str) -> impl IntoView {
    view! {
        <div class="loading-screen" data-testid="loading-screen">
            <div class="loading-screen__spinner" aria-hidden="true"></div>
            <p class="loading-screen__message">{message}</p>
        </div>
    }
}
