use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;
use crate::net::types::Role;
use crate::state::session::SessionState;
use crate::state::toast::ToastKind;
use crate::util::guard::{LANDING_PATH, RouteArea, RouteDecision, TECHNICIAN_HOME, decide, resolve};

struct FakeGateway {
    exchange: Result<String, ApiError>,
    profile: Result<Identity, ApiError>,
    exchanged_ids: RefCell<Vec<String>>,
    profile_fetches: Cell<usize>,
}

impl FakeGateway {
    fn new(exchange: Result<String, ApiError>, profile: Result<Identity, ApiError>) -> Self {
        Self { exchange, profile, exchanged_ids: RefCell::new(Vec::new()), profile_fetches: Cell::new(0) }
    }
}

impl AuthGateway for FakeGateway {
    async fn exchange_session(&self, session_id: &str) -> Result<String, ApiError> {
        self.exchanged_ids.borrow_mut().push(session_id.to_owned());
        self.exchange.clone()
    }

    async fn fetch_identity(&self) -> Result<Identity, ApiError> {
        self.profile_fetches.set(self.profile_fetches.get() + 1);
        self.profile.clone()
    }
}

struct FakeHost {
    fragment: RefCell<String>,
    stored: RefCell<Vec<String>>,
}

impl FakeHost {
    fn with_fragment(fragment: &str) -> Self {
        Self { fragment: RefCell::new(fragment.to_owned()), stored: RefCell::new(Vec::new()) }
    }
}

impl SessionHost for FakeHost {
    fn location_fragment(&self) -> String {
        self.fragment.borrow().clone()
    }

    fn persist_credential(&self, token: &str) {
        self.stored.borrow_mut().push(token.to_owned());
    }

    fn strip_handshake(&self) {
        self.fragment.borrow_mut().clear();
    }
}

fn identity(role: Role) -> Identity {
    Identity {
        id: "u1".to_owned(),
        role,
        name: Some("Terry Tech".to_owned()),
        email: None,
        picture: None,
        location: None,
        phone: None,
        equipment: Vec::new(),
    }
}

fn unauthorized() -> ApiError {
    ApiError::Status { operation: "load profile", status: 401 }
}

#[test]
fn handshake_exchanges_persists_loads_and_strips() {
    let gateway = FakeGateway::new(Ok("tok1".to_owned()), Ok(identity(Role::Technician)));
    let host = FakeHost::with_fragment("#session_id=abc123");

    let outcome = block_on(bootstrap(&gateway, &host));

    assert_eq!(*gateway.exchanged_ids.borrow(), vec!["abc123".to_owned()]);
    assert_eq!(*host.stored.borrow(), vec!["tok1".to_owned()]);
    assert_eq!(host.location_fragment(), "");
    assert_eq!(outcome.identity.as_ref().map(|i| i.role), Some(Role::Technician));
    assert_eq!(outcome.notice, Some(Notice::success(WELCOME_MESSAGE)));
}

#[test]
fn technician_handshake_is_routed_to_technician_home() {
    let gateway = FakeGateway::new(Ok("tok1".to_owned()), Ok(identity(Role::Technician)));
    let host = FakeHost::with_fragment("#session_id=abc123");
    let mut session = SessionState::default();

    let outcome = block_on(bootstrap(&gateway, &host));
    assert!(session.complete_bootstrap(outcome.identity));

    assert_eq!(decide(session.get(), RouteArea::ConsumerDashboard), RouteDecision::Redirect(LANDING_PATH));
    assert_eq!(decide(session.get(), RouteArea::Landing), RouteDecision::Redirect(TECHNICIAN_HOME));
    assert_eq!(resolve(session.get(), RouteArea::ConsumerDashboard), RouteArea::TechnicianDashboard);
}

#[test]
fn failed_exchange_notifies_and_stays_signed_out() {
    let gateway = FakeGateway::new(
        Err(ApiError::Status { operation: "session exchange", status: 400 }),
        Ok(identity(Role::Consumer)),
    );
    let host = FakeHost::with_fragment("#session_id=stale");

    let outcome = block_on(bootstrap(&gateway, &host));

    assert_eq!(outcome.identity, None);
    assert_eq!(outcome.notice.as_ref().map(|n| n.kind), Some(ToastKind::Error));
    assert_eq!(outcome.notice.map(|n| n.message), Some(AUTH_FAILED_MESSAGE.to_owned()));
    assert_eq!(gateway.profile_fetches.get(), 0);
    assert!(host.stored.borrow().is_empty());
}

#[test]
fn no_marker_uses_existing_credential_silently() {
    let gateway = FakeGateway::new(Ok("unused".to_owned()), Ok(identity(Role::Admin)));
    let host = FakeHost::with_fragment("");

    let outcome = block_on(bootstrap(&gateway, &host));

    assert!(gateway.exchanged_ids.borrow().is_empty());
    assert_eq!(outcome.identity.map(|i| i.role), Some(Role::Admin));
    assert_eq!(outcome.notice, None);
}

#[test]
fn no_marker_and_no_credential_resolves_to_landing() {
    let gateway = FakeGateway::new(Ok("unused".to_owned()), Err(unauthorized()));
    let host = FakeHost::with_fragment("");
    let mut session = SessionState::default();

    let outcome = block_on(bootstrap(&gateway, &host));
    assert_eq!(outcome.notice, None);
    assert!(session.complete_bootstrap(outcome.identity));

    assert!(!session.is_loading());
    assert_eq!(decide(session.get(), RouteArea::Landing), RouteDecision::Render);
}

#[test]
fn exchange_success_with_failed_profile_still_completes() {
    let gateway = FakeGateway::new(Ok("tok1".to_owned()), Err(ApiError::Network("offline".to_owned())));
    let host = FakeHost::with_fragment("#session_id=abc123");

    let outcome = block_on(bootstrap(&gateway, &host));

    assert_eq!(outcome.identity, None);
    assert_eq!(host.location_fragment(), "");
    assert_eq!(outcome.notice.map(|n| n.kind), Some(ToastKind::Success));
}

#[test]
fn rerun_after_strip_does_not_replay_handshake() {
    let gateway = FakeGateway::new(Ok("tok1".to_owned()), Ok(identity(Role::Consumer)));
    let host = FakeHost::with_fragment("#session_id=abc123");

    block_on(bootstrap(&gateway, &host));
    block_on(bootstrap(&gateway, &host));

    assert_eq!(gateway.exchanged_ids.borrow().len(), 1);
    assert_eq!(gateway.profile_fetches.get(), 2);
}

#[test]
fn every_branch_completes_the_store_exactly_once() {
    let cases = [
        (FakeGateway::new(Ok("t".to_owned()), Ok(identity(Role::Consumer))), "#session_id=a"),
        (FakeGateway::new(Err(unauthorized()), Ok(identity(Role::Consumer))), "#session_id=a"),
        (FakeGateway::new(Ok("t".to_owned()), Ok(identity(Role::Consumer))), ""),
        (FakeGateway::new(Ok("t".to_owned()), Err(unauthorized())), ""),
    ];
    for (gateway, fragment) in cases {
        let host = FakeHost::with_fragment(fragment);
        let mut session = SessionState::default();
        let outcome = block_on(bootstrap(&gateway, &host));
        assert!(session.complete_bootstrap(outcome.identity));
        assert!(!session.is_loading());
        assert!(!session.complete_bootstrap(None));
    }
}
