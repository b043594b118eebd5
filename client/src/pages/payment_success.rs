//! Return page for a completed hosted checkout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The checkout provider redirects here with `?session_id=`. The page starts
//! a bounded payment watch tied to its own lifetime: leaving the page clears
//! the liveness flag and the watch stops without touching the view.

#[cfg(test)]
#[path = "payment_success_test.rs"]
mod payment_success_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::util::format::money;
use crate::util::guard::CONSUMER_HOME;
use crate::util::payment_watch::PaymentOutcome;

/// What the page shows.
#[derive(Clone, Debug, PartialEq)]
pub enum PaymentView {
    Verifying,
    Paid { amount: String, status: String },
    Expired,
    Processing,
}

impl PaymentView {
    /// Initial state: without a checkout session there is nothing to verify.
    pub fn initial(session_id: Option<&str>) -> Self {
        match session_id {
            Some(id) if !id.is_empty() => Self::Verifying,
            _ => Self::Processing,
        }
    }

    pub fn from_outcome(outcome: &PaymentOutcome) -> Self {
        match outcome {
            PaymentOutcome::Paid(status) => {
                Self::Paid { amount: money(status.amount), status: status.payment_status.clone() }
            }
            PaymentOutcome::Expired(_) => Self::Expired,
            PaymentOutcome::Pending(_) => Self::Processing,
        }
    }
}

#[component]
pub fn PaymentSuccessPage() -> impl IntoView {
    let query = use_query_map();
    let session_id = query.with_untracked(|q| q.get("session_id")).filter(|id| !id.is_empty());
    let state = RwSignal::new(PaymentView::initial(session_id.as_deref()));

    #[cfg(feature = "hydrate")]
    if let Some(id) = session_id {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use crate::net::api::RestApi;
        use crate::util::payment_watch::{PollPolicy, watch_payment};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let outcome =
                watch_payment(&RestApi, &id, PollPolicy::default(), &alive_task, gloo_timers::future::sleep).await;
            if let Some(outcome) = outcome {
                log::info!("payment watch settled: {outcome:?}");
                state.set(PaymentView::from_outcome(&outcome));
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    log::debug!("payment watch deferred to the browser (session present: {})", session_id.is_some());

    view! {
        <div class="payment-page" data-testid="payment-success-page">
            <div class="payment-page__card">
                {move || match state.get() {
                    PaymentView::Verifying => view! {
                        <div class="payment-page__spinner" aria-hidden="true"></div>
                        <h1>"Verifying Payment..."</h1>
                        <p>"Please wait while we confirm your payment"</p>
                    }
                        .into_any(),
                    PaymentView::Paid { amount, status } => view! {
                        <h1>"Payment Successful!"</h1>
                        <p>"Thank you for your purchase"</p>
                        <dl class="payment-page__details">
                            <dt>"Amount Paid:"</dt>
                            <dd data-testid="payment-amount">{amount}</dd>
                            <dt>"Status:"</dt>
                            <dd>{status}</dd>
                        </dl>
                    }
                        .into_any(),
                    PaymentView::Expired => view! {
                        <h1>"Checkout Expired"</h1>
                        <p>"This checkout session expired before payment. No charges were made."</p>
                    }
                        .into_any(),
                    PaymentView::Processing => view! {
                        <h1>"Payment Processing"</h1>
                        <p>"Your payment is being processed. Please check back later."</p>
                    }
                        .into_any(),
                }}
                <A href=CONSUMER_HOME attr:class="btn btn--primary">
                    "Back to Dashboard"
                </A>
            </div>
        </div>
    }
}
