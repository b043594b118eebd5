//! Panel showing free-text advice returned by one of the AI endpoints.

use leptos::prelude::*;

#[component]
pub fn AiBanner(
    title: &'static str,
    #[prop(into)] text: Signal<Option<String>>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || text.with(Option::is_some)>
            <section class="ai-banner" data-testid="ai-banner">
                <header class="ai-banner__header">
                    <h3>{title}</h3>
                    <button class="ai-banner__close" title="Dismiss" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </header>
                <p class="ai-banner__text">{move || text.get().unwrap_or_default()}</p>
            </section>
        </Show>
    }
}
