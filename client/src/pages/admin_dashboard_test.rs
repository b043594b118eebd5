use super::*;
use crate::net::types::PlatformStats;

fn user(id: &str, role: Role) -> AdminUser {
    AdminUser {
        id: id.to_owned(),
        name: format!("user {id}"),
        email: format!("{id}@example.com"),
        role,
        location: None,
    }
}

fn dashboard() -> AdminDashboard {
    AdminDashboard { stats: PlatformStats { total_users: 3, ..PlatformStats::default() } }
}

fn revenue() -> RevenueStats {
    RevenueStats { service_transactions: 4, parts_transactions: 2, ..RevenueStats::default() }
}

#[test]
fn assemble_keeps_every_read_when_all_succeed() {
    let data = AdminData::assemble(
        Ok(dashboard()),
        Ok(vec![user("u1", Role::Consumer)]),
        Ok(Vec::new()),
        Ok(Vec::new()),
        Ok(revenue()),
        Ok(Vec::new()),
    )
    .unwrap();

    assert_eq!(data.dashboard.stats.total_users, 3);
    assert_eq!(data.users.len(), 1);
    assert_eq!(data.transaction_count(), 6);
}

#[test]
fn assemble_fails_when_any_single_read_fails() {
    let denied = ApiError::Status { operation: "admin reviews", status: 403 };
    let result = AdminData::assemble(
        Ok(dashboard()),
        Ok(Vec::new()),
        Ok(Vec::new()),
        Ok(Vec::new()),
        Ok(revenue()),
        Err(denied.clone()),
    );
    assert_eq!(result, Err(denied));
}

#[test]
fn admins_cannot_be_deleted() {
    assert!(!can_delete(&user("a1", Role::Admin)));
    assert!(can_delete(&user("t1", Role::Technician)));
    assert!(can_delete(&user("c1", Role::Consumer)));
}

#[test]
fn pending_delete_names_its_target() {
    let target = PendingDelete::User { id: "u9".to_owned(), name: "Sam Rivera".to_owned() };
    assert_eq!(target.title(), "Delete User");
    assert!(target.prompt().contains("Sam Rivera"));
    assert_eq!(target.messages(), ("User deleted", "Failed to delete user"));

    let review = PendingDelete::Review { id: "r1".to_owned(), reviewer: "Kim".to_owned() };
    assert_eq!(review.title(), "Delete Review");
    assert!(review.prompt().contains("review by Kim"));
}

#[test]
fn tabs_are_listed_in_display_order() {
    let labels: Vec<_> = AdminTab::ALL.into_iter().map(AdminTab::label).collect();
    assert_eq!(labels, ["Users", "Bookings", "Transactions", "Reviews"]);
}
