//! Route authorization guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page is wrapped in `components::guarded::Guarded`, which
//! feeds the current session snapshot through [`resolve`] on each render.
//! [`decide`] answers one hop of the access table; [`resolve`] follows the
//! hops to the page that finally renders, so a technician opening
//! `/dashboard` lands on `/technician/dashboard` by way of `/`.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::{Identity, Role};

pub const LANDING_PATH: &str = "/";
pub const CONSUMER_HOME: &str = "/dashboard";
pub const TECHNICIAN_HOME: &str = "/technician/dashboard";
pub const ADMIN_HOME: &str = "/admin/dashboard";

/// Every routable area of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteArea {
    Landing,
    ConsumerDashboard,
    TechnicianSearch,
    Marketplace,
    TechnicianDashboard,
    AdminDashboard,
    PaymentSuccess,
    PaymentCancel,
}

/// Who may see an area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Access {
    /// Signed-out visitors only; signed-in users are sent home.
    Public,
    Role(Role),
    /// Any signed-in role.
    Authenticated,
}

impl RouteArea {
    pub const ALL: [Self; 8] = [
        Self::Landing,
        Self::ConsumerDashboard,
        Self::TechnicianSearch,
        Self::Marketplace,
        Self::TechnicianDashboard,
        Self::AdminDashboard,
        Self::PaymentSuccess,
        Self::PaymentCancel,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => LANDING_PATH,
            Self::ConsumerDashboard => CONSUMER_HOME,
            Self::TechnicianSearch => "/technicians",
            Self::Marketplace => "/marketplace",
            Self::TechnicianDashboard => TECHNICIAN_HOME,
            Self::AdminDashboard => ADMIN_HOME,
            Self::PaymentSuccess => "/payment/success",
            Self::PaymentCancel => "/payment/cancel",
        }
    }

    /// Resolve a browser path, ignoring a trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = match path.trim_end_matches('/') {
            "" => LANDING_PATH,
            p => p,
        };
        Self::ALL.into_iter().find(|area| area.path() == trimmed)
    }

    fn access(self) -> Access {
        match self {
            Self::Landing => Access::Public,
            Self::ConsumerDashboard | Self::TechnicianSearch | Self::Marketplace => Access::Role(Role::Consumer),
            Self::TechnicianDashboard => Access::Role(Role::Technician),
            Self::AdminDashboard => Access::Role(Role::Admin),
            Self::PaymentSuccess | Self::PaymentCancel => Access::Authenticated,
        }
    }
}

/// Outcome of a routing decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    Redirect(&'static str),
}

/// Collapse roles outside the closed set onto consumer.
fn effective_role(role: Role) -> Role {
    match role {
        Role::Unrecognized => Role::Consumer,
        known => known,
    }
}

/// Default landing route for a signed-in role.
pub fn role_home(role: Role) -> &'static str {
    match effective_role(role) {
        Role::Admin => ADMIN_HOME,
        Role::Technician => TECHNICIAN_HOME,
        Role::Consumer | Role::Unrecognized => CONSUMER_HOME,
    }
}

/// Decide whether `area` renders for `identity` or where to send the browser.
pub fn decide(identity: Option<&Identity>, area: RouteArea) -> RouteDecision {
    match (area.access(), identity) {
        (Access::Public, None) => RouteDecision::Render,
        (Access::Public, Some(user)) => RouteDecision::Redirect(role_home(user.role)),
        (Access::Role(_) | Access::Authenticated, None) => RouteDecision::Redirect(LANDING_PATH),
        (Access::Role(required), Some(user)) if effective_role(user.role) == required => RouteDecision::Render,
        (Access::Role(_), Some(_)) => RouteDecision::Redirect(LANDING_PATH),
        (Access::Authenticated, Some(_)) => RouteDecision::Render,
    }
}

/// Follow [`decide`] redirects from `area` to the area that renders.
pub fn resolve(identity: Option<&Identity>, area: RouteArea) -> RouteArea {
    let mut current = area;
    for _ in 0..RouteArea::ALL.len() {
        match decide(identity, current) {
            RouteDecision::Render => return current,
            RouteDecision::Redirect(path) => match RouteArea::from_path(path) {
                Some(next) => current = next,
                None => return current,
            },
        }
    }
    current
}
