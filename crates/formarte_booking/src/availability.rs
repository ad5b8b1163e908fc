// --- File: crates/formarte_booking/src/availability.rs ---
//! Slot availability.
//!
//! Everything here is a pure fold over the booking list: inputs are never
//! mutated and the result does not depend on input order.

use std::collections::{HashMap, HashSet};

use crate::models::{Booking, BookingKind, BookingStatus};

/// Key identifying a booked slot: `"{date}-{time}"`.
pub fn slot_key(date: &str, time: &str) -> String {
    format!("{}-{}", date, time)
}

/// Date part of a slot key (its first ten characters).
fn slot_date(key: &str) -> &str {
    key.get(..10).unwrap_or(key)
}

/// Slot keys of every booking still marked upcoming. Cancelled and completed
/// bookings never block a slot.
pub fn booked_slot_keys<'a, I>(bookings: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a Booking>,
{
    bookings
        .into_iter()
        .filter(|b| b.status == BookingStatus::Upcoming)
        .map(|b| slot_key(&b.date, &b.time))
        .collect()
}

/// Dates whose number of distinct booked slot keys reaches `slot_count`.
///
/// Only the count is compared, not which times are taken: a booking of any
/// kind at any time on that date counts toward the limit.
pub fn fully_booked_dates(booked_slots: &HashSet<String>, slot_count: usize) -> HashSet<String> {
    let mut per_date: HashMap<&str, usize> = HashMap::new();
    for key in booked_slots {
        *per_date.entry(slot_date(key)).or_insert(0) += 1;
    }
    per_date
        .into_iter()
        .filter(|(_, count)| *count >= slot_count)
        .map(|(date, _)| date.to_string())
        .collect()
}

/// Availability as seen by one booking flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowAvailability {
    /// Slot keys that disable individual time buttons.
    pub booked_slots: HashSet<String>,
    /// Date keys that disable whole calendar days.
    pub disabled_dates: HashSet<String>,
}

impl FlowAvailability {
    /// Psychological sessions block a date once it is full; academic tutoring
    /// never blocks a whole date, only individual times.
    pub fn compute(kind: BookingKind, bookings: &[Booking], times: &[String]) -> Self {
        let booked_slots = booked_slot_keys(bookings);
        let disabled_dates = match kind {
            BookingKind::Psychological => fully_booked_dates(&booked_slots, times.len()),
            BookingKind::Academic => HashSet::new(),
        };
        Self {
            booked_slots,
            disabled_dates,
        }
    }

    pub fn is_slot_booked(&self, date: &str, time: &str) -> bool {
        self.booked_slots.contains(&slot_key(date, time))
    }

    pub fn is_date_disabled(&self, date: &str) -> bool {
        self.disabled_dates.contains(date)
    }
}
