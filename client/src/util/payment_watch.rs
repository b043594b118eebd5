//! Bounded short-polling of a checkout session's payment state.
//!
//! The hosted checkout redirects back before the backend has necessarily
//! seen the payment webhook, so the return page polls
//! `/payments/status/{id}` a fixed number of times before settling on
//! "still processing".
//!
//! LIFECYCLE
//! =========
//! The owning view hands in a liveness flag and clears it from
//! `on_cleanup`. The watcher checks it before every request and after every
//! sleep, so no request is issued and nothing is reported once the view has
//! been torn down.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "payment_watch_test.rs"]
mod payment_watch_test;

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::net::error::ApiError;
use crate::net::types::PaymentStatus;

/// Source of payment state for a checkout session.
pub trait PaymentStatusSource {
    async fn fetch_status(&self, session_id: &str) -> Result<PaymentStatus, ApiError>;
}

/// Attempt budget and spacing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self { max_attempts: 5, interval: Duration::from_secs(2) }
    }
}

/// Terminal result of a watch.
#[derive(Clone, Debug, PartialEq)]
pub enum PaymentOutcome {
    Paid(PaymentStatus),
    Expired(PaymentStatus),
    /// Budget exhausted without a terminal state; carries the last status seen.
    Pending(Option<PaymentStatus>),
}

/// Poll until a terminal state or the attempt budget runs out.
///
/// The first request goes out immediately; later ones are spaced by
/// `policy.interval` using `sleep`. Transport failures use up an attempt but
/// do not end the watch. Returns `None` if `alive` was cleared mid-watch.
pub async fn watch_payment<S, Z, F>(
    source: &S,
    session_id: &str,
    policy: PollPolicy,
    alive: &AtomicBool,
    sleep: Z,
) -> Option<PaymentOutcome>
where
    S: PaymentStatusSource,
    Z: Fn(Duration) -> F,
    F: Future<Output = ()>,
{
    let mut last_seen = None;
    for attempt in 1..=policy.max_attempts {
        if attempt > 1 {
            sleep(policy.interval).await;
        }
        if !alive.load(Ordering::Relaxed) {
            log::debug!("payment watch cancelled before attempt {attempt}");
            return None;
        }
        match source.fetch_status(session_id).await {
            Ok(status) if status.is_paid() => return still_alive(alive, PaymentOutcome::Paid(status)),
            Ok(status) if status.is_expired() => return still_alive(alive, PaymentOutcome::Expired(status)),
            Ok(status) => last_seen = Some(status),
            Err(e) => log::warn!("payment status attempt {attempt}/{} failed: {e}", policy.max_attempts),
        }
    }
    still_alive(alive, PaymentOutcome::Pending(last_seen))
}

fn still_alive(alive: &AtomicBool, outcome: PaymentOutcome) -> Option<PaymentOutcome> {
    alive.load(Ordering::Relaxed).then_some(outcome)
}
