//! Technician search, AI matching and direct booking.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list starts as the full directory and is replaced either by a
//! location search or by the AI matcher's ranked result. Booking a card
//! opens the shared booking form and returns the consumer to their
//! dashboard on success.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::ai_banner::AiBanner;
use crate::components::booking_form::BookingForm;
use crate::components::navbar::Navbar;
use crate::components::toast_host::notify;
use crate::net::api;
use crate::net::types::{ServiceType, Technician, TechnicianMatchRequest};
use crate::state::session::SessionState;
use crate::state::toast::{Notice, ToastState};
use crate::util::format::{initial, money, rating, search_term};
use crate::util::guard::CONSUMER_HOME;

fn load_technicians(technicians: RwSignal<Vec<Technician>>, toasts: RwSignal<ToastState>, location: String) {
    leptos::task::spawn_local(async move {
        match api::list_technicians(search_term(&location)).await {
            Ok(items) => technicians.set(items),
            Err(e) => {
                log::warn!("loading technicians failed: {e}");
                notify(toasts, Notice::error("Failed to load technicians"));
            }
        }
    });
}

#[component]
pub fn TechniciansPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let technicians = RwSignal::new(Vec::<Technician>::new());
    let location_filter = RwSignal::new(String::new());
    let recommendation = RwSignal::new(None::<String>);
    let selected = RwSignal::new(None::<Technician>);
    let matching = RwSignal::new(false);

    let home_location = move || session.with_untracked(|s| s.get().and_then(|i| i.location.clone()));
    let match_service = RwSignal::new(ServiceType::default().as_str().to_owned());
    let match_equipment = RwSignal::new(String::new());
    let match_location = RwSignal::new(home_location().unwrap_or_default());

    #[cfg(feature = "hydrate")]
    load_technicians(technicians, toasts, String::new());

    let on_search = move |_| load_technicians(technicians, toasts, location_filter.get_untracked());

    let on_ai_match = move |_| {
        if matching.get_untracked() {
            return;
        }
        let request = TechnicianMatchRequest {
            service_type: ServiceType::parse(&match_service.get_untracked()).unwrap_or_default(),
            equipment: match_equipment.get_untracked().trim().to_owned(),
            location: match_location.get_untracked().trim().to_owned(),
        };
        matching.set(true);
        leptos::task::spawn_local(async move {
            match api::match_technicians(&request).await {
                Ok(result) => {
                    technicians.set(result.technicians);
                    recommendation.set(Some(result.ai_recommendation).filter(|r| !r.is_empty()));
                    notify(toasts, Notice::success("AI matching completed"));
                }
                Err(e) => {
                    log::warn!("technician match failed: {e}");
                    notify(toasts, Notice::error("AI matching failed"));
                }
            }
            matching.set(false);
        });
    };

    let booked = RwSignal::new(false);
    Effect::new(move || {
        if booked.get() {
            navigate(CONSUMER_HOME, NavigateOptions::default());
        }
    });
    let on_booked = Callback::new(move |()| {
        selected.set(None);
        booked.set(true);
    });

    view! {
        <div class="app-page technicians-page" data-testid="technicians-page">
            <Navbar />
            <main class="app-page__main">
                <header class="app-page__header">
                    <div>
                        <h1>"Find Technicians"</h1>
                        <p>"Certified professionals near you"</p>
                    </div>
                </header>

                <section class="panel search-bar">
                    <input
                        class="search-bar__input"
                        type="text"
                        placeholder="Search by location"
                        data-testid="location-search-input"
                        prop:value=move || location_filter.get()
                        on:input=move |ev| location_filter.set(event_target_value(&ev))
                    />
                    <button class="btn" data-testid="search-btn" on:click=on_search>
                        "Search"
                    </button>
                </section>

                <section class="panel ai-match" data-testid="ai-match-panel">
                    <h2>"AI Smart Match"</h2>
                    <div class="ai-match__fields">
                        <select
                            prop:value=move || match_service.get()
                            on:change=move |ev| match_service.set(event_target_value(&ev))
                        >
                            {ServiceType::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                        <input
                            type="text"
                            placeholder="Equipment"
                            prop:value=move || match_equipment.get()
                            on:input=move |ev| match_equipment.set(event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Location"
                            prop:value=move || match_location.get()
                            on:input=move |ev| match_location.set(event_target_value(&ev))
                        />
                        <button
                            class="btn btn--primary"
                            data-testid="ai-match-btn"
                            disabled=move || matching.get()
                            on:click=on_ai_match
                        >
                            {move || if matching.get() { "Matching..." } else { "Find Best Match" }}
                        </button>
                    </div>
                </section>

                <AiBanner
                    title="AI Recommendation"
                    text=recommendation
                    on_close=Callback::new(move |()| recommendation.set(None))
                />

                <Show
                    when=move || technicians.with(|t| !t.is_empty())
                    fallback=|| view! { <p class="panel__empty">"No technicians found."</p> }
                >
                    <div class="technician-grid">
                        <For
                            each=move || technicians.get()
                            key=|tech| tech.id.clone()
                            children=move |tech| {
                                let for_booking = tech.clone();
                                view! {
                                    <TechnicianCard
                                        technician=tech
                                        on_book=Callback::new(move |()| selected.set(Some(for_booking.clone())))
                                    />
                                }
                            }
                        />
                    </div>
                </Show>
            </main>

            <Show when=move || selected.with(Option::is_some)>
                <BookingForm
                    title="Book Technician"
                    technician_id=selected.get_untracked().map(|t| t.id).unwrap_or_default()
                    default_location=home_location().unwrap_or_default()
                    success_message="Booking request sent successfully"
                    on_booked=on_booked
                    on_close=Callback::new(move |()| selected.set(None))
                />
            </Show>
        </div>
    }
}

#[component]
fn TechnicianCard(technician: Technician, on_book: Callback<()>) -> impl IntoView {
    let Technician { name, picture, rating: score, total_reviews, location, hourly_rate, services_offered, qualifications, .. } =
        technician;
    let avatar = match picture {
        Some(src) => view! { <img class="technician-card__avatar" src=src alt="" /> }.into_any(),
        None => view! { <span class="technician-card__avatar technician-card__avatar--initial">{initial(&name)}</span> }
            .into_any(),
    };
    let reviews = total_reviews.unwrap_or(0);

    view! {
        <article class="technician-card" data-testid="technician-card">
            <header class="technician-card__header">
                {avatar}
                <div>
                    <h3>{name}</h3>
                    <span class="technician-card__rating">{format!("★ {} ({reviews} reviews)", rating(score))}</span>
                </div>
            </header>
            <p class="technician-card__location">{location.unwrap_or_else(|| "Location not listed".to_owned())}</p>
            <p class="technician-card__rate">
                {hourly_rate.map_or_else(|| "Rate on request".to_owned(), |r| format!("{}/hr", money(r)))}
            </p>
            <ul class="technician-card__services">
                {services_offered.into_iter().map(|s| view! { <li>{s}</li> }).collect::<Vec<_>>()}
            </ul>
            {qualifications.map(|q| view! { <p class="technician-card__qualifications">{q}</p> })}
            <button class="btn btn--primary" data-testid="book-technician-btn" on:click=move |_| on_book.run(())>
                "Book Now"
            </button>
        </article>
    }
}
