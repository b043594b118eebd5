//! Booking summary shared by the consumer and technician dashboards.

use leptos::prelude::*;

use crate::net::types::Booking;
use crate::util::format::{booking_cost, humanize};

/// Renders one booking; `children` supplies role-specific actions.
#[component]
pub fn BookingCard(booking: Booking, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let status_class = format!("booking-card__status booking-card__status--{}", booking.status.as_str());
    let status = humanize(booking.status.as_str());
    let cost = booking_cost(&booking);
    let Booking { service_type, equipment_details, location, preferred_date, .. } = booking;

    view! {
        <article class="booking-card" data-testid="booking-card">
            <header class="booking-card__header">
                <h4 class="booking-card__title">{humanize(&service_type)}</h4>
                <span class=status_class>{status}</span>
            </header>
            <p class="booking-card__equipment">{equipment_details.name}</p>
            <p class="booking-card__issue">{equipment_details.issue_description}</p>
            <dl class="booking-card__meta">
                <dt>"Location"</dt>
                <dd>{location}</dd>
                <dt>"Preferred date"</dt>
                <dd>{preferred_date.unwrap_or_else(|| "Flexible".to_owned())}</dd>
                <dt>"Cost"</dt>
                <dd>{cost}</dd>
            </dl>
            {children.map(|c| view! { <footer class="booking-card__actions">{c()}</footer> })}
        </article>
    }
}
