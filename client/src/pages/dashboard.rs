//! Consumer dashboard: profile, equipment, AI maintenance and bookings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Consumer role home. Profile and equipment live on the identity, so every
//! mutation is a `PUT /users/me` followed by an identity refresh; bookings
//! are loaded separately and re-fetched after a booking is created.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::ai_banner::AiBanner;
use crate::components::booking_card::BookingCard;
use crate::components::booking_form::BookingForm;
use crate::components::modal::Modal;
use crate::components::navbar::Navbar;
use crate::components::stat_card::StatCard;
use crate::components::toast_host::notify;
use crate::net::api;
use crate::net::types::{Booking, Equipment, EquipmentCondition, Identity, MaintenanceRequest, ProfileUpdate};
use crate::state::session::SessionState;
use crate::state::toast::{Notice, ToastState};
use crate::util::auth::refresh_identity;
use crate::util::format::completed_count;

/// Raw add-equipment form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquipmentDraft {
    pub name: String,
    pub brand: String,
    pub model: String,
    pub condition: String,
    pub purchase_date: String,
}

impl Default for EquipmentDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            brand: String::new(),
            model: String::new(),
            condition: EquipmentCondition::Good.as_str().to_owned(),
            purchase_date: String::new(),
        }
    }
}

impl EquipmentDraft {
    pub fn into_equipment(self) -> Result<Equipment, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Equipment name is required");
        }
        let purchase_date = Some(self.purchase_date.trim()).filter(|d| !d.is_empty()).map(str::to_owned);
        Ok(Equipment {
            name: name.to_owned(),
            brand: self.brand.trim().to_owned(),
            model: self.model.trim().to_owned(),
            condition: EquipmentCondition::parse(&self.condition).unwrap_or_default(),
            purchase_date,
        })
    }
}

/// Equipment list after appending one item, as sent to `PUT /users/me`.
pub fn with_added_equipment(identity: Option<&Identity>, item: Equipment) -> ProfileUpdate {
    let mut equipment = identity.map(|i| i.equipment.clone()).unwrap_or_default();
    equipment.push(item);
    ProfileUpdate { equipment: Some(equipment), ..ProfileUpdate::default() }
}

/// Profile edit body; blank fields are sent as empty strings so they clear.
pub fn profile_update(location: &str, phone: &str) -> ProfileUpdate {
    ProfileUpdate {
        location: Some(location.trim().to_owned()),
        phone: Some(phone.trim().to_owned()),
        equipment: None,
    }
}

fn load_bookings(bookings: RwSignal<Vec<Booking>>) {
    leptos::task::spawn_local(async move {
        match api::list_bookings().await {
            Ok(items) => bookings.set(items),
            Err(e) => log::warn!("loading bookings failed: {e}"),
        }
    });
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let bookings = RwSignal::new(Vec::<Booking>::new());
    let show_profile = RwSignal::new(false);
    let show_equipment = RwSignal::new(false);
    let show_booking = RwSignal::new(false);
    let ai_plan = RwSignal::new(None::<String>);
    let ai_busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    load_bookings(bookings);

    let first_name = move || session.with(|s| s.get().map(|i| i.first_name().to_owned()).unwrap_or_default());
    let equipment = move || session.with(|s| s.get().map(|i| i.equipment.clone()).unwrap_or_default());
    let location = move || session.with(|s| s.get().and_then(|i| i.location.clone()));
    let phone = move || session.with(|s| s.get().and_then(|i| i.phone.clone()));

    let request_plan = move |item: Equipment| {
        if ai_busy.get_untracked() {
            return;
        }
        ai_busy.set(true);
        leptos::task::spawn_local(async move {
            match api::predictive_maintenance(&MaintenanceRequest::from(&item)).await {
                Ok(plan) => {
                    ai_plan.set(Some(plan.maintenance_plan));
                    notify(toasts, Notice::success("AI recommendation generated"));
                }
                Err(e) => {
                    log::warn!("predictive maintenance failed: {e}");
                    notify(toasts, Notice::error("Failed to get AI recommendation"));
                }
            }
            ai_busy.set(false);
        });
    };

    view! {
        <div class="app-page dashboard-page" data-testid="consumer-dashboard">
            <Navbar />
            <main class="app-page__main">
                <header class="app-page__header">
                    <div>
                        <h1>{move || format!("Welcome back, {}!", first_name())}</h1>
                        <p>"Manage your equipment and service bookings"</p>
                    </div>
                    <button
                        class="btn btn--primary"
                        data-testid="book-service-btn"
                        on:click=move |_| show_booking.set(true)
                    >
                        "Book Service"
                    </button>
                </header>

                <section class="stat-grid">
                    <StatCard label="My Equipment" value=Signal::derive(move || equipment().len().to_string()) />
                    <StatCard label="Total Bookings" value=Signal::derive(move || bookings.with(Vec::len).to_string()) />
                    <StatCard
                        label="Completed"
                        value=Signal::derive(move || bookings.with(|b| completed_count(b)).to_string())
                    />
                </section>

                <AiBanner
                    title="AI Maintenance Recommendation"
                    text=ai_plan
                    on_close=Callback::new(move |()| ai_plan.set(None))
                />

                <section class="panel" data-testid="profile-panel">
                    <header class="panel__header">
                        <h2>"Profile"</h2>
                        <button class="btn" data-testid="edit-profile-btn" on:click=move |_| show_profile.set(true)>
                            "Edit Profile"
                        </button>
                    </header>
                    <dl class="panel__meta">
                        <dt>"Location"</dt>
                        <dd>{move || location().unwrap_or_else(|| "Not set".to_owned())}</dd>
                        <dt>"Phone"</dt>
                        <dd>{move || phone().unwrap_or_else(|| "Not set".to_owned())}</dd>
                    </dl>
                </section>

                <section class="panel" data-testid="equipment-panel">
                    <header class="panel__header">
                        <h2>"My Equipment"</h2>
                        <button class="btn" data-testid="add-equipment-btn" on:click=move |_| show_equipment.set(true)>
                            "Add Equipment"
                        </button>
                    </header>
                    <Show
                        when=move || !equipment().is_empty()
                        fallback=|| view! { <p class="panel__empty">"No equipment added yet."</p> }
                    >
                        <ul class="equipment-list">
                            {move || {
                                equipment()
                                    .into_iter()
                                    .map(|item| {
                                        let for_plan = item.clone();
                                        view! {
                                            <li class="equipment-list__item">
                                                <div>
                                                    <strong>{item.name}</strong>
                                                    <span class="equipment-list__model">
                                                        {format!("{} {}", item.brand, item.model)}
                                                    </span>
                                                    <span class="equipment-list__condition">{item.condition.label()}</span>
                                                </div>
                                                <button
                                                    class="btn btn--ghost"
                                                    disabled=move || ai_busy.get()
                                                    on:click=move |_| request_plan(for_plan.clone())
                                                >
                                                    "AI Maintenance Check"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </section>

                <section class="panel" data-testid="bookings-panel">
                    <header class="panel__header">
                        <h2>"My Bookings"</h2>
                    </header>
                    <Show
                        when=move || bookings.with(|b| !b.is_empty())
                        fallback=|| view! { <p class="panel__empty">"No bookings yet."</p> }
                    >
                        <div class="booking-grid">
                            {move || {
                                bookings
                                    .get()
                                    .into_iter()
                                    .map(|booking| view! { <BookingCard booking=booking /> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </section>
            </main>

            <Show when=move || show_profile.get()>
                <ProfileDialog
                    location=location().unwrap_or_default()
                    phone=phone().unwrap_or_default()
                    on_close=Callback::new(move |()| show_profile.set(false))
                />
            </Show>
            <Show when=move || show_equipment.get()>
                <EquipmentDialog on_close=Callback::new(move |()| show_equipment.set(false)) />
            </Show>
            <Show when=move || show_booking.get()>
                <BookingForm
                    title="Book a Service"
                    default_location=location().unwrap_or_default()
                    success_message="Service booked successfully"
                    on_booked=Callback::new(move |()| {
                        show_booking.set(false);
                        load_bookings(bookings);
                    })
                    on_close=Callback::new(move |()| show_booking.set(false))
                />
            </Show>
        </div>
    }
}

#[component]
fn ProfileDialog(location: String, phone: String, on_close: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let location = RwSignal::new(location);
    let phone = RwSignal::new(phone);
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let update = profile_update(&location.get_untracked(), &phone.get_untracked());
        leptos::task::spawn_local(async move {
            match api::update_profile(&update).await {
                Ok(()) => {
                    on_close.run(());
                    notify(toasts, Notice::success("Profile updated successfully"));
                    refresh_identity(session).await;
                }
                Err(e) => {
                    log::warn!("profile update failed: {e}");
                    notify(toasts, Notice::error("Failed to update profile"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <Modal title="Edit Profile" on_close=on_close>
            <form class="dialog__form" data-testid="profile-form" on:submit=submit>
                <label class="dialog__label">
                    "Location"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Phone"
                    <input
                        class="dialog__input"
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        "Save"
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[component]
fn EquipmentDialog(on_close: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let draft = RwSignal::new(EquipmentDraft::default());
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let item = match draft.get_untracked().into_equipment() {
            Ok(item) => item,
            Err(message) => {
                notify(toasts, Notice::error(message));
                return;
            }
        };
        let update = session.with_untracked(|s| with_added_equipment(s.get(), item));
        busy.set(true);
        leptos::task::spawn_local(async move {
            match api::update_profile(&update).await {
                Ok(()) => {
                    on_close.run(());
                    notify(toasts, Notice::success("Equipment added successfully"));
                    refresh_identity(session).await;
                }
                Err(e) => {
                    log::warn!("equipment update failed: {e}");
                    notify(toasts, Notice::error("Failed to add equipment"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <Modal title="Add Equipment" on_close=on_close>
            <form class="dialog__form" data-testid="equipment-form" on:submit=submit>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="e.g. Treadmill"
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
                    "Condition"
                    <select
                        class="dialog__input"
                        prop:value=move || draft.with(|d| d.condition.clone())
                        on:change=move |ev| draft.update(|d| d.condition = event_target_value(&ev))
                    >
                        {EquipmentCondition::ALL
                            .into_iter()
                            .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Purchase Date"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || draft.with(|d| d.purchase_date.clone())
                        on:input=move |ev| draft.update(|d| d.purchase_date = event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        "Add Equipment"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
