use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use futures::executor::block_on;

use super::*;

struct ScriptedSource {
    replies: RefCell<VecDeque<Result<PaymentStatus, ApiError>>>,
    requests: Cell<u32>,
}

impl ScriptedSource {
    fn new(replies: Vec<Result<PaymentStatus, ApiError>>) -> Self {
        Self { replies: RefCell::new(replies.into()), requests: Cell::new(0) }
    }
}

impl PaymentStatusSource for ScriptedSource {
    async fn fetch_status(&self, session_id: &str) -> Result<PaymentStatus, ApiError> {
        assert_eq!(session_id, "cs_test_1");
        self.requests.set(self.requests.get() + 1);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("script exhausted".to_owned())))
    }
}

fn pending() -> Result<PaymentStatus, ApiError> {
    Ok(PaymentStatus { payment_status: "unpaid".to_owned(), status: "open".to_owned(), amount: 25.0 })
}

fn paid() -> Result<PaymentStatus, ApiError> {
    Ok(PaymentStatus { payment_status: "paid".to_owned(), status: "complete".to_owned(), amount: 25.0 })
}

fn expired() -> Result<PaymentStatus, ApiError> {
    Ok(PaymentStatus { payment_status: "unpaid".to_owned(), status: "expired".to_owned(), amount: 25.0 })
}

fn run(source: &ScriptedSource, alive: &AtomicBool, sleeps: &Cell<u32>) -> Option<PaymentOutcome> {
    block_on(watch_payment(source, "cs_test_1", PollPolicy::default(), alive, |d| {
        assert_eq!(d, Duration::from_secs(2));
        sleeps.set(sleeps.get() + 1);
        async {}
    }))
}

#[test]
fn default_policy_is_five_attempts_two_seconds_apart() {
    let policy = PollPolicy::default();
    assert_eq!(policy.max_attempts, 5);
    assert_eq!(policy.interval, Duration::from_secs(2));
}

#[test]
fn stops_on_third_attempt_when_paid() {
    let source = ScriptedSource::new(vec![pending(), pending(), paid()]);
    let alive = AtomicBool::new(true);
    let sleeps = Cell::new(0);

    let outcome = run(&source, &alive, &sleeps);

    assert!(matches!(outcome, Some(PaymentOutcome::Paid(ref s)) if s.amount == 25.0));
    assert_eq!(source.requests.get(), 3);
    assert_eq!(sleeps.get(), 2);
}

#[test]
fn five_pending_replies_resolve_pending_without_sixth_request() {
    let source = ScriptedSource::new(vec![pending(), pending(), pending(), pending(), pending(), paid()]);
    let alive = AtomicBool::new(true);
    let sleeps = Cell::new(0);

    let outcome = run(&source, &alive, &sleeps);

    assert!(matches!(outcome, Some(PaymentOutcome::Pending(Some(_)))));
    assert_eq!(source.requests.get(), 5);
    assert_eq!(sleeps.get(), 4);
}

#[test]
fn expired_on_first_attempt_stops_immediately() {
    let source = ScriptedSource::new(vec![expired(), paid()]);
    let alive = AtomicBool::new(true);
    let sleeps = Cell::new(0);

    let outcome = run(&source, &alive, &sleeps);

    assert!(matches!(outcome, Some(PaymentOutcome::Expired(_))));
    assert_eq!(source.requests.get(), 1);
    assert_eq!(sleeps.get(), 0);
}

#[test]
fn transport_failures_consume_attempts_but_continue() {
    let offline = || Err(ApiError::Network("offline".to_owned()));
    let source = ScriptedSource::new(vec![offline(), offline(), paid()]);
    let alive = AtomicBool::new(true);
    let sleeps = Cell::new(0);

    let outcome = run(&source, &alive, &sleeps);

    assert!(matches!(outcome, Some(PaymentOutcome::Paid(_))));
    assert_eq!(source.requests.get(), 3);
}

#[test]
fn failure_on_last_attempt_resolves_pending() {
    let offline = || Err(ApiError::Network("offline".to_owned()));
    let source = ScriptedSource::new(vec![offline(), offline(), offline(), offline(), offline()]);
    let alive = AtomicBool::new(true);
    let sleeps = Cell::new(0);

    let outcome = run(&source, &alive, &sleeps);

    assert_eq!(outcome, Some(PaymentOutcome::Pending(None)));
    assert_eq!(source.requests.get(), 5);
}

#[test]
fn teardown_during_sleep_stops_without_reporting() {
    let source = ScriptedSource::new(vec![pending(), paid()]);
    let alive = AtomicBool::new(true);

    let outcome = block_on(watch_payment(&source, "cs_test_1", PollPolicy::default(), &alive, |_| {
        alive.store(false, Ordering::Relaxed);
        async {}
    }));

    assert_eq!(outcome, None);
    assert_eq!(source.requests.get(), 1);
}

#[test]
fn dead_view_issues_no_requests() {
    let source = ScriptedSource::new(vec![paid()]);
    let alive = AtomicBool::new(false);
    let sleeps = Cell::new(0);

    assert_eq!(run(&source, &alive, &sleeps), None);
    assert_eq!(source.requests.get(), 0);
}
