//! Static return page for an abandoned hosted checkout.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::guard::CONSUMER_HOME;

#[component]
pub fn PaymentCancelPage() -> impl IntoView {
    view! {
        <div class="payment-page" data-testid="payment-cancel-page">
            <div class="payment-page__card">
                <h1>"Payment Cancelled"</h1>
                <p>"Your payment was cancelled. No charges were made."</p>
                <div class="payment-page__actions">
                    <A href="/marketplace" attr:class="btn btn--primary">
                        "Back to Marketplace"
                    </A>
                    <A href=CONSUMER_HOME attr:class="btn">
                        "Go to Dashboard"
                    </A>
                </div>
            </div>
        </div>
    }
}
