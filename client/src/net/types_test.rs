use super::*;

#[test]
fn identity_decodes_minimal_payload() {
    let identity: Identity = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "role": "technician"
    }))
    .unwrap();
    assert_eq!(identity.role, Role::Technician);
    assert!(identity.equipment.is_empty());
    assert_eq!(identity.display_name(), "Member");
}

#[test]
fn unknown_role_decodes_as_unrecognized() {
    let identity: Identity = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "role": "superuser",
        "name": "Dana Scully"
    }))
    .unwrap();
    assert_eq!(identity.role, Role::Unrecognized);
    assert_eq!(identity.first_name(), "Dana");
}

#[test]
fn equipment_blank_purchase_date_is_absent() {
    let item: Equipment = serde_json::from_value(serde_json::json!({
        "name": "Treadmill",
        "brand": "NordicTrack",
        "model": "Commercial 1750",
        "condition": "fair",
        "purchase_date": ""
    }))
    .unwrap();
    assert_eq!(item.condition, EquipmentCondition::Fair);
    assert_eq!(item.purchase_date, None);
}

#[test]
fn profile_update_only_serializes_present_fields() {
    let update = ProfileUpdate { phone: Some("555-0100".to_owned()), ..ProfileUpdate::default() };
    assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({ "phone": "555-0100" }));
}

#[test]
fn booking_status_keeps_unknown_values_decodable() {
    let booking: Booking = serde_json::from_value(serde_json::json!({
        "id": "b1",
        "service_type": "repair",
        "status": "disputed"
    }))
    .unwrap();
    assert_eq!(booking.status, BookingStatus::Unrecognized);
    assert!(!booking.status.is_active());
}

#[test]
fn booking_update_complete_carries_timestamp() {
    let update = BookingUpdate::complete("2026-10-16T12:00:00.000Z".to_owned());
    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        serde_json::json!({ "status": "completed", "completed_at": "2026-10-16T12:00:00.000Z" })
    );
    assert_eq!(
        serde_json::to_value(BookingUpdate::accept()).unwrap(),
        serde_json::json!({ "status": "accepted" })
    );
}

#[test]
fn checkout_request_for_part_uses_usd() {
    let part = Part {
        id: "p9".to_owned(),
        name: "Belt".to_owned(),
        brand: String::new(),
        category: String::new(),
        description: String::new(),
        price: 49.5,
        image_url: None,
        compatible_models: Vec::new(),
    };
    let req = CheckoutRequest::for_part(&part, "https://app.test".to_owned());
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({
            "part_ids": ["p9"],
            "amount": 49.5,
            "currency": "usd",
            "origin_url": "https://app.test"
        })
    );
}

#[test]
fn payment_status_terminal_checks() {
    let paid = PaymentStatus { payment_status: "paid".to_owned(), ..PaymentStatus::default() };
    let expired = PaymentStatus { status: "expired".to_owned(), ..PaymentStatus::default() };
    assert!(paid.is_paid() && !paid.is_expired());
    assert!(expired.is_expired() && !expired.is_paid());
}

#[test]
fn platform_stats_accept_integral_floats() {
    let stats: PlatformStats = serde_json::from_value(serde_json::json!({
        "total_users": 12.0,
        "total_bookings": 3
    }))
    .unwrap();
    assert_eq!(stats.total_users, 12);
    assert_eq!(stats.total_bookings, 3);
    assert_eq!(stats.total_parts, 0);
}

#[test]
fn platform_stats_reject_fractional_counts() {
    let result = serde_json::from_value::<PlatformStats>(serde_json::json!({ "total_users": 1.5 }));
    assert!(result.is_err());
}

#[test]
fn revenue_rate_accepts_string_or_number() {
    let stats: RevenueStats = serde_json::from_value(serde_json::json!({
        "service_commission_rate": "15%",
        "parts_commission_rate": 0.1
    }))
    .unwrap();
    assert_eq!(stats.service_commission_rate, "15%");
    assert_eq!(stats.parts_commission_rate, "0.1");
}

#[test]
fn technician_review_count_is_optional() {
    let tech: Technician = serde_json::from_value(serde_json::json!({
        "id": "t1",
        "name": "Sam",
        "total_reviews": null
    }))
    .unwrap();
    assert_eq!(tech.total_reviews, None);
}
