//! Display formatting and list shaping for marketplace records.
//!
//! Pages stay thin by delegating every string decision here, which keeps the
//! rules testable without a DOM.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::{Booking, BookingStatus};

/// Completed bookings shown on the technician dashboard.
pub const COMPLETED_PREVIEW: usize = 5;

/// `$1,234.50`-style currency text; negative and non-finite input clamps to zero.
pub fn money(amount: f64) -> String {
    let amount = if amount.is_finite() && amount > 0.0 { amount } else { 0.0 };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (amount * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}.{frac:02}")
}

/// Actual cost when known, else the estimate, else `TBD`.
pub fn booking_cost(booking: &Booking) -> String {
    booking.actual_cost.or(booking.estimated_cost).map_or_else(|| "TBD".to_owned(), money)
}

/// Rating to one decimal, or `New` for technicians without reviews.
pub fn rating(value: Option<f64>) -> String {
    match value {
        Some(r) if r > 0.0 => format!("{r:.1}"),
        _ => "New".to_owned(),
    }
}

/// `in_progress` -> `In Progress`.
pub fn humanize(raw: &str) -> String {
    raw.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Date portion of an ISO-8601 timestamp.
pub fn date_only(timestamp: &str) -> &str {
    timestamp.split_once('T').map_or(timestamp, |(date, _)| date)
}

/// Single uppercase letter for avatar placeholders.
pub fn initial(name: &str) -> String {
    name.trim().chars().next().map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

/// Bookings grouped by lifecycle stage for the technician dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingBuckets {
    pub pending: Vec<Booking>,
    pub active: Vec<Booking>,
    pub completed: Vec<Booking>,
    pub completed_total: usize,
}

impl BookingBuckets {
    /// Split by status, keeping server order; only the first
    /// [`COMPLETED_PREVIEW`] completed bookings are retained.
    pub fn partition(bookings: Vec<Booking>) -> Self {
        let mut buckets = Self::default();
        for booking in bookings {
            match booking.status {
                BookingStatus::Pending => buckets.pending.push(booking),
                BookingStatus::Completed => {
                    buckets.completed_total += 1;
                    if buckets.completed.len() < COMPLETED_PREVIEW {
                        buckets.completed.push(booking);
                    }
                }
                ref status if status.is_active() => buckets.active.push(booking),
                _ => {}
            }
        }
        buckets
    }
}

/// Number of completed bookings in a list.
pub fn completed_count(bookings: &[Booking]) -> usize {
    bookings.iter().filter(|b| b.status == BookingStatus::Completed).count()
}

/// Trimmed search box input, or `None` when blank.
pub fn search_term(raw: &str) -> Option<&str> {
    Some(raw.trim()).filter(|t| !t.is_empty())
}
