//! Service booking form used from the consumer dashboard and from a
//! technician card.

#[cfg(test)]
#[path = "booking_form_test.rs"]
mod booking_form_test;

use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::components::toast_host::notify;
use crate::net::types::{EquipmentDetails, NewBooking, ServiceType};
use crate::state::toast::{Notice, ToastState};

/// Raw form input before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub service_type: String,
    pub equipment_name: String,
    pub issue_description: String,
    pub location: String,
    pub preferred_date: String,
}

impl BookingDraft {
    /// Validate and build the request body. Errors are user-facing messages.
    pub fn into_request(self, technician_id: Option<String>) -> Result<NewBooking, &'static str> {
        let service_type = ServiceType::parse(&self.service_type).unwrap_or_default();
        let equipment_name = self.equipment_name.trim();
        if equipment_name.is_empty() {
            return Err("Equipment name is required");
        }
        let location = self.location.trim();
        if location.is_empty() {
            return Err("Location is required");
        }
        Ok(NewBooking {
            service_type,
            equipment_details: EquipmentDetails {
                name: equipment_name.to_owned(),
                issue_description: self.issue_description.trim().to_owned(),
            },
            location: location.to_owned(),
            preferred_date: self.preferred_date.trim().to_owned(),
            technician_id,
        })
    }
}

#[component]
pub fn BookingForm(
    title: &'static str,
    #[prop(optional)] technician_id: Option<String>,
    #[prop(optional)] default_location: Option<String>,
    success_message: &'static str,
    on_booked: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let draft = RwSignal::new(BookingDraft {
        service_type: ServiceType::default().as_str().to_owned(),
        location: default_location.unwrap_or_default(),
        ..BookingDraft::default()
    });
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match draft.get_untracked().into_request(technician_id.clone()) {
            Ok(request) => request,
            Err(message) => {
                notify(toasts, Notice::error(message));
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::create_booking(&request).await {
                Ok(()) => {
                    notify(toasts, Notice::success(success_message));
                    on_booked.run(());
                }
                Err(e) => {
                    log::warn!("booking create failed: {e}");
                    notify(toasts, Notice::error("Failed to create booking"));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <Modal title=title on_close=on_close>
            <form class="dialog__form" data-testid="booking-form" on:submit=submit>
                <label class="dialog__label">
                    "Service Type"
                    <select
                        class="dialog__input"
                        prop:value=move || draft.with(|d| d.service_type.clone())
                        on:change=move |ev| draft.update(|d| d.service_type = event_target_value(&ev))
                    >
                        {ServiceType::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Equipment"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="e.g. Treadmill"
                        prop:value=move || draft.with(|d| d.equipment_name.clone())
                        on:input=move |ev| draft.update(|d| d.equipment_name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Issue Description"
                    <textarea
                        class="dialog__input"
                        prop:value=move || draft.with(|d| d.issue_description.clone())
                        on:input=move |ev| draft.update(|d| d.issue_description = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Location"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.with(|d| d.location.clone())
                        on:input=move |ev| draft.update(|d| d.location = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Preferred Date"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || draft.with(|d| d.preferred_date.clone())
                        on:input=move |ev| draft.update(|d| d.preferred_date = event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Booking..." } else { "Book Service" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
