use super::*;
use crate::net::types::Role;

fn identity(role: Role) -> Identity {
    Identity {
        id: "u1".to_owned(),
        role,
        name: Some("Ada Lovelace".to_owned()),
        email: None,
        picture: None,
        location: None,
        phone: None,
        equipment: Vec::new(),
    }
}

#[test]
fn default_store_is_loading_and_absent() {
    let state = SessionState::default();
    assert!(state.is_loading());
    assert!(state.get().is_none());
}

#[test]
fn set_replaces_identity() {
    let mut state = SessionState::default();
    state.set(identity(Role::Consumer));
    state.set(identity(Role::Admin));
    assert_eq!(state.get().map(|i| i.role), Some(Role::Admin));
}

#[test]
fn clear_makes_identity_absent() {
    let mut state = SessionState::default();
    state.complete_bootstrap(Some(identity(Role::Technician)));
    state.clear();
    assert!(state.get().is_none());
    assert!(!state.is_loading());
}

#[test]
fn bootstrap_completion_applies_only_once() {
    let mut state = SessionState::default();
    assert!(state.complete_bootstrap(None));
    assert!(!state.complete_bootstrap(Some(identity(Role::Admin))));
    assert!(state.get().is_none());
    assert!(!state.is_loading());
}

#[test]
fn guard_sees_absent_identity_immediately_after_clear() {
    use crate::util::guard::{LANDING_PATH, RouteArea, RouteDecision, decide};

    let mut state = SessionState::default();
    state.complete_bootstrap(Some(identity(Role::Technician)));
    assert_eq!(decide(state.get(), RouteArea::TechnicianDashboard), RouteDecision::Render);

    state.clear();

    assert_eq!(decide(state.get(), RouteArea::TechnicianDashboard), RouteDecision::Redirect(LANDING_PATH));
    assert_eq!(decide(state.get(), RouteArea::Landing), RouteDecision::Render);
}
