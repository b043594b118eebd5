//! Transient notification stack pinned to the viewport corner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any page or action pushes a `Notice` through [`notify`]; the host renders
//! the queue and each toast removes itself after `TOAST_TTL_MS`.

use leptos::prelude::*;

use crate::state::toast::{Notice, ToastState};

/// Show a notice and schedule its auto-dismissal.
pub fn notify(toasts: RwSignal<ToastState>, notice: Notice) {
    let mut id = 0;
    toasts.update(|t| id = t.push(notice));

    #[cfg(feature = "hydrate")]
    gloo_timers::callback::Timeout::new(crate::state::toast::TOAST_TTL_MS, move || {
        toasts.update(|t| t.dismiss(id));
    })
    .forget();
    #[cfg(not(feature = "hydrate"))]
    log::debug!("toast {id} queued outside the browser");
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = format!("toast {}", toast.notice.kind.css_modifier());
                    view! {
                        <div class=class data-testid="toast">
                            <span class="toast__message">{toast.notice.message}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
