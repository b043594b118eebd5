use super::*;

fn identity(role: Role) -> Identity {
    Identity {
        id: "u1".to_owned(),
        role,
        name: None,
        email: None,
        picture: None,
        location: None,
        phone: None,
        equipment: Vec::new(),
    }
}

const GATED: [RouteArea; 7] = [
    RouteArea::ConsumerDashboard,
    RouteArea::TechnicianSearch,
    RouteArea::Marketplace,
    RouteArea::TechnicianDashboard,
    RouteArea::AdminDashboard,
    RouteArea::PaymentSuccess,
    RouteArea::PaymentCancel,
];

#[test]
fn landing_renders_for_visitors() {
    assert_eq!(decide(None, RouteArea::Landing), RouteDecision::Render);
}

#[test]
fn visitors_never_reach_gated_pages() {
    for area in GATED {
        assert_eq!(decide(None, area), RouteDecision::Redirect(LANDING_PATH), "{area:?}");
    }
}

#[test]
fn landing_sends_signed_in_users_home() {
    assert_eq!(decide(Some(&identity(Role::Consumer)), RouteArea::Landing), RouteDecision::Redirect(CONSUMER_HOME));
    assert_eq!(
        decide(Some(&identity(Role::Technician)), RouteArea::Landing),
        RouteDecision::Redirect(TECHNICIAN_HOME)
    );
    assert_eq!(decide(Some(&identity(Role::Admin)), RouteArea::Landing), RouteDecision::Redirect(ADMIN_HOME));
}

#[test]
fn matching_role_renders_its_pages() {
    let consumer = identity(Role::Consumer);
    for area in [RouteArea::ConsumerDashboard, RouteArea::TechnicianSearch, RouteArea::Marketplace] {
        assert_eq!(decide(Some(&consumer), area), RouteDecision::Render);
    }
    assert_eq!(decide(Some(&identity(Role::Technician)), RouteArea::TechnicianDashboard), RouteDecision::Render);
    assert_eq!(decide(Some(&identity(Role::Admin)), RouteArea::AdminDashboard), RouteDecision::Render);
}

#[test]
fn role_mismatch_redirects_to_landing() {
    assert_eq!(
        decide(Some(&identity(Role::Admin)), RouteArea::Marketplace),
        RouteDecision::Redirect(LANDING_PATH)
    );
    assert_eq!(
        decide(Some(&identity(Role::Consumer)), RouteArea::AdminDashboard),
        RouteDecision::Redirect(LANDING_PATH)
    );
    assert_eq!(
        decide(Some(&identity(Role::Technician)), RouteArea::ConsumerDashboard),
        RouteDecision::Redirect(LANDING_PATH)
    );
}

#[test]
fn payment_pages_accept_any_signed_in_role() {
    for role in [Role::Consumer, Role::Technician, Role::Admin, Role::Unrecognized] {
        for area in [RouteArea::PaymentSuccess, RouteArea::PaymentCancel] {
            assert_eq!(decide(Some(&identity(role)), area), RouteDecision::Render);
        }
    }
}

#[test]
fn unrecognized_role_lands_on_consumer_home_without_looping() {
    let odd = identity(Role::Unrecognized);
    assert_eq!(role_home(Role::Unrecognized), CONSUMER_HOME);
    assert_eq!(decide(Some(&odd), RouteArea::Landing), RouteDecision::Redirect(CONSUMER_HOME));
    assert_eq!(decide(Some(&odd), RouteArea::ConsumerDashboard), RouteDecision::Render);
}

#[test]
fn decision_is_idempotent() {
    let tech = identity(Role::Technician);
    let first = decide(Some(&tech), RouteArea::ConsumerDashboard);
    for _ in 0..3 {
        assert_eq!(decide(Some(&tech), RouteArea::ConsumerDashboard), first);
    }
}

#[test]
fn from_path_round_trips_every_area() {
    for area in RouteArea::ALL {
        assert_eq!(RouteArea::from_path(area.path()), Some(area));
    }
    assert_eq!(RouteArea::from_path("/dashboard/"), Some(RouteArea::ConsumerDashboard));
    assert_eq!(RouteArea::from_path(""), Some(RouteArea::Landing));
    assert_eq!(RouteArea::from_path("/nowhere"), None);
}

#[test]
fn resolve_follows_mismatch_through_landing_to_role_home() {
    let tech = identity(Role::Technician);
    assert_eq!(resolve(Some(&tech), RouteArea::ConsumerDashboard), RouteArea::TechnicianDashboard);
    assert_eq!(resolve(Some(&identity(Role::Consumer)), RouteArea::AdminDashboard), RouteArea::ConsumerDashboard);
    assert_eq!(resolve(Some(&identity(Role::Unrecognized)), RouteArea::Marketplace), RouteArea::Marketplace);
}

#[test]
fn resolve_settles_on_landing_when_signed_out() {
    for area in RouteArea::ALL {
        assert_eq!(resolve(None, area), RouteArea::Landing);
    }
}

#[test]
fn resolve_always_ends_on_a_rendering_area() {
    for role in [Role::Consumer, Role::Technician, Role::Admin, Role::Unrecognized] {
        let user = identity(role);
        for area in RouteArea::ALL {
            let target = resolve(Some(&user), area);
            assert_eq!(decide(Some(&user), target), RouteDecision::Render, "{role:?} from {area:?}");
        }
    }
}
