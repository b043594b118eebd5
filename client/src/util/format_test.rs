use super::*;
use crate::net::types::EquipmentDetails;

fn booking(id: &str, status: BookingStatus) -> Booking {
    Booking {
        id: id.to_owned(),
        service_type: "repair".to_owned(),
        status,
        equipment_details: EquipmentDetails::default(),
        location: "Austin".to_owned(),
        preferred_date: None,
        estimated_cost: None,
        actual_cost: None,
        payment_status: None,
        technician_id: None,
    }
}

#[test]
fn money_groups_thousands_and_pads_cents() {
    assert_eq!(money(0.0), "$0.00");
    assert_eq!(money(25.5), "$25.50");
    assert_eq!(money(1234.567), "$1,234.57");
    assert_eq!(money(1_000_000.0), "$1,000,000.00");
}

#[test]
fn money_clamps_negative_and_nan() {
    assert_eq!(money(-4.0), "$0.00");
    assert_eq!(money(f64::NAN), "$0.00");
}

#[test]
fn booking_cost_prefers_actual_then_estimate() {
    let mut b = booking("b1", BookingStatus::Completed);
    assert_eq!(booking_cost(&b), "TBD");
    b.estimated_cost = Some(80.0);
    assert_eq!(booking_cost(&b), "$80.00");
    b.actual_cost = Some(95.0);
    assert_eq!(booking_cost(&b), "$95.00");
}

#[test]
fn rating_shows_new_without_reviews() {
    assert_eq!(rating(None), "New");
    assert_eq!(rating(Some(0.0)), "New");
    assert_eq!(rating(Some(4.66)), "4.7");
}

#[test]
fn humanize_snake_case_statuses() {
    assert_eq!(humanize("in_progress"), "In Progress");
    assert_eq!(humanize("pending"), "Pending");
    assert_eq!(humanize(""), "");
}

#[test]
fn date_only_drops_time_component() {
    assert_eq!(date_only("2026-03-04T10:11:12Z"), "2026-03-04");
    assert_eq!(date_only("2026-03-04"), "2026-03-04");
}

#[test]
fn initial_falls_back_for_blank_names() {
    assert_eq!(initial("  maria"), "M");
    assert_eq!(initial(""), "?");
}

#[test]
fn partition_splits_by_status_and_caps_completed() {
    let mut all = vec![
        booking("p1", BookingStatus::Pending),
        booking("a1", BookingStatus::Accepted),
        booking("i1", BookingStatus::InProgress),
        booking("x1", BookingStatus::Unrecognized),
    ];
    all.extend((0..7).map(|i| booking(&format!("c{i}"), BookingStatus::Completed)));

    let buckets = BookingBuckets::partition(all);

    assert_eq!(buckets.pending.len(), 1);
    assert_eq!(buckets.active.iter().map(|b| b.id.as_str()).collect::<Vec<_>>(), ["a1", "i1"]);
    assert_eq!(buckets.completed.len(), COMPLETED_PREVIEW);
    assert_eq!(buckets.completed[0].id, "c0");
    assert_eq!(buckets.completed_total, 7);
}

#[test]
fn completed_count_ignores_other_statuses() {
    let all = vec![
        booking("p1", BookingStatus::Pending),
        booking("c1", BookingStatus::Completed),
        booking("c2", BookingStatus::Completed),
    ];
    assert_eq!(completed_count(&all), 2);
}

#[test]
fn search_term_treats_whitespace_as_no_filter() {
    assert_eq!(search_term("  "), None);
    assert_eq!(search_term(" Austin "), Some("Austin"));
}
