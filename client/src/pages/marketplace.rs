//! Parts marketplace: search, AI part finder and hosted checkout.
//!
//! SYSTEM CONTEXT
//! ==============
//! "Buy Now" creates a checkout session and hands the whole tab to the
//! payment provider, which later returns to `/payment/success` or
//! `/payment/cancel`.

use leptos::prelude::*;

use crate::components::ai_banner::AiBanner;
use crate::components::modal::Modal;
use crate::components::navbar::Navbar;
use crate::components::toast_host::notify;
use crate::net::api;
use crate::net::types::{CheckoutRequest, Part, PartRecommendRequest};
use crate::state::toast::{Notice, ToastState};
use crate::util::browser;
use crate::util::format::{money, search_term};

fn load_parts(parts: RwSignal<Vec<Part>>, toasts: RwSignal<ToastState>, search: String) {
    leptos::task::spawn_local(async move {
        match api::list_parts(search_term(&search)).await {
            Ok(items) => parts.set(items),
            Err(e) => {
                log::warn!("loading parts failed: {e}");
                notify(toasts, Notice::error("Failed to load parts"));
            }
        }
    });
}

fn buy_part(part: Part, toasts: RwSignal<ToastState>) {
    let request = CheckoutRequest::for_part(&part, browser::location_origin());
    leptos::task::spawn_local(async move {
        match api::start_checkout(&request).await {
            Ok(session) => {
                log::info!("checkout session created for part {}", part.id);
                browser::assign_location(&session.url);
            }
            Err(e) => {
                log::warn!("checkout start failed: {e}");
                notify(toasts, Notice::error("Failed to initiate payment"));
            }
        }
    });
}

#[component]
pub fn MarketplacePage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let parts = RwSignal::new(Vec::<Part>::new());
    let search = RwSignal::new(String::new());
    let show_finder = RwSignal::new(false);
    let recommendation = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    load_parts(parts, toasts, String::new());

    let run_search = move || load_parts(parts, toasts, search.get_untracked());

    view! {
        <div class="app-page marketplace-page" data-testid="marketplace-page">
            <Navbar />
            <main class="app-page__main">
                <header class="app-page__header">
                    <div>
                        <h1>"Parts Marketplace"</h1>
                        <p>"Find genuine parts for your fitness equipment"</p>
                    </div>
                    <button class="btn btn--primary" data-testid="ai-finder-btn" on:click=move |_| show_finder.set(true)>
                        "AI Part Finder"
                    </button>
                </header>

                <section class="panel search-bar">
                    <input
                        class="search-bar__input"
                        type="text"
                        placeholder="Search parts"
                        data-testid="parts-search-input"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                run_search();
                            }
                        }
                    />
                    <button class="btn" data-testid="parts-search-btn" on:click=move |_| run_search()>
                        "Search"
                    </button>
                </section>

                <AiBanner
                    title="AI Part Recommendations"
                    text=recommendation
                    on_close=Callback::new(move |()| recommendation.set(None))
                />

                <Show
                    when=move || parts.with(|p| !p.is_empty())
                    fallback=|| view! { <p class="panel__empty">"No parts found"</p> }
                >
                    <div class="part-grid">
                        <For
                            each=move || parts.get()
                            key=|part| part.id.clone()
                            children=move |part| view! { <PartCard part=part toasts=toasts /> }
                        />
                    </div>
                </Show>
            </main>

            <Show when=move || show_finder.get()>
                <PartFinderDialog
                    recommendation=recommendation
                    on_close=Callback::new(move |()| show_finder.set(false))
                />
            </Show>
        </div>
    }
}

#[component]
fn PartCard(part: Part, toasts: RwSignal<ToastState>) -> impl IntoView {
    let for_checkout = part.clone();
    let Part { name, brand, category, description, price, image_url, compatible_models, .. } = part;
    let compatible = (!compatible_models.is_empty()).then(|| compatible_models.join(", "));

    view! {
        <article class="part-card" data-testid="part-card">
            {image_url.map(|src| view! { <img class="part-card__image" src=src alt="" /> })}
            <span class="part-card__category">{category}</span>
            <h3>{name}</h3>
            <span class="part-card__brand">{brand}</span>
            <p class="part-card__description">{description}</p>
            {compatible.map(|models| view! { <p class="part-card__compatible">"Compatible: " {models}</p> })}
            <footer class="part-card__footer">
                <span class="part-card__price">{money(price)}</span>
                <button
                    class="btn btn--primary"
                    data-testid="buy-part-btn"
                    on:click=move |_| buy_part(for_checkout.clone(), toasts)
                >
                    "Buy Now"
                </button>
            </footer>
        </article>
    }
}

#[component]
fn PartFinderDialog(recommendation: RwSignal<Option<String>>, on_close: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let draft = RwSignal::new(PartRecommendRequest::default());
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let request = draft.get_untracked();
        leptos::task::spawn_local(async move {
            match api::recommend_parts(&request).await {
                Ok(result) => {
                    recommendation.set(Some(result.recommendations));
                    notify(toasts, Notice::success("AI recommendations generated"));
                    on_close.run(());
                }
                Err(e) => {
                    log::warn!("part recommendation failed: {e}");
                    notify(toasts, Notice::error("Failed to get AI recommendations"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <Modal title="AI Part Finder" on_close=on_close>
            <form class="dialog__form" data-testid="part-finder-form" on:submit=submit>
                <label class="dialog__label">
                    "Equipment Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Brand"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.with(|d| d.brand.clone())
                        on:input=move |ev| draft.update(|d| d.brand = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Model"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.with(|d| d.model.clone())
                        on:input=move |ev| draft.update(|d| d.model = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Issue/Need"
                    <textarea
                        class="dialog__input"
                        prop:value=move || draft.with(|d| d.issue.clone())
                        on:input=move |ev| draft.update(|d| d.issue = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Finding..." } else { "Get Recommendations" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
