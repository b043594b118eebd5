//! Technician role home: incoming requests, active jobs and recent history.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend scopes `GET /bookings` to the signed-in technician. Every
//! status transition is written with `PUT /bookings/{id}` and the list is
//! re-fetched afterwards rather than patched locally.

use leptos::prelude::*;

use crate::components::booking_card::BookingCard;
use crate::components::navbar::Navbar;
use crate::components::stat_card::StatCard;
use crate::components::toast_host::notify;
use crate::net::api;
use crate::net::types::{Booking, BookingUpdate};
use crate::state::toast::{Notice, ToastState};
use crate::util::browser;
use crate::util::format::BookingBuckets;

fn load_bookings(buckets: RwSignal<BookingBuckets>) {
    leptos::task::spawn_local(async move {
        match api::list_bookings().await {
            Ok(items) => buckets.set(BookingBuckets::partition(items)),
            Err(e) => log::warn!("loading technician bookings failed: {e}"),
        }
    });
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Transition {
    Accept,
    Complete,
}

impl Transition {
    fn update(self) -> BookingUpdate {
        match self {
            Self::Accept => BookingUpdate::accept(),
            Self::Complete => BookingUpdate::complete(browser::now_iso8601()),
        }
    }

    fn messages(self) -> (&'static str, &'static str) {
        match self {
            Self::Accept => ("Booking accepted", "Failed to accept booking"),
            Self::Complete => ("Booking completed", "Failed to complete booking"),
        }
    }
}

fn apply(booking_id: String, transition: Transition, buckets: RwSignal<BookingBuckets>, toasts: RwSignal<ToastState>) {
    let update = transition.update();
    let (ok, failed) = transition.messages();
    leptos::task::spawn_local(async move {
        match api::update_booking(&booking_id, &update).await {
            Ok(()) => {
                notify(toasts, Notice::success(ok));
                load_bookings(buckets);
            }
            Err(e) => {
                log::warn!("booking {booking_id} transition {transition:?} failed: {e}");
                notify(toasts, Notice::error(failed));
            }
        }
    });
}

#[component]
pub fn TechnicianDashboardPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let buckets = RwSignal::new(BookingBuckets::default());

    #[cfg(feature = "hydrate")]
    load_bookings(buckets);

    let section = move |title: &'static str,
                        empty: &'static str,
                        pick: fn(&BookingBuckets) -> &Vec<Booking>,
                        action: Option<(Transition, &'static str)>| {
        view! {
            <section class="panel">
                <header class="panel__header">
                    <h2>{title}</h2>
                </header>
                {move || {
                    let items = buckets.with(|b| pick(b).clone());
                    if items.is_empty() {
                        return view! { <p class="panel__empty">{empty}</p> }.into_any();
                    }
                    view! {
                        <div class="booking-grid">
                            {items
                                .into_iter()
                                .map(|booking| {
                                    let id = booking.id.clone();
                                    match action {
                                        Some((transition, label)) => view! {
                                            <BookingCard booking=booking>
                                                <button
                                                    class="btn btn--primary"
                                                    on:click=move |_| apply(id.clone(), transition, buckets, toasts)
                                                >
                                                    {label}
                                                </button>
                                            </BookingCard>
                                        }
                                            .into_any(),
                                        None => view! { <BookingCard booking=booking /> }.into_any(),
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }}
            </section>
        }
    };

    view! {
        <div class="app-page technician-dashboard" data-testid="technician-dashboard">
            <Navbar />
            <main class="app-page__main">
                <header class="app-page__header">
                    <div>
                        <h1>"Technician Dashboard"</h1>
                        <p>"Manage your service requests and schedule"</p>
                    </div>
                </header>

                <section class="stat-grid">
                    <StatCard
                        label="Pending Requests"
                        value=Signal::derive(move || buckets.with(|b| b.pending.len()).to_string())
                    />
                    <StatCard label="Active Jobs" value=Signal::derive(move || buckets.with(|b| b.active.len()).to_string()) />
                    <StatCard
                        label="Completed"
                        value=Signal::derive(move || buckets.with(|b| b.completed_total).to_string())
                    />
                </section>

                {section(
                    "Pending Requests",
                    "No pending requests",
                    |b| &b.pending,
                    Some((Transition::Accept, "Accept")),
                )}
                {section("Active Jobs", "No active jobs", |b| &b.active, Some((Transition::Complete, "Mark Complete")))}
                {section("Completed Jobs", "No completed jobs yet", |b| &b.completed, None)}
            </main>
        </div>
    }
}
