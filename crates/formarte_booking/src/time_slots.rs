//! Time slot picker for a selected date.

use std::collections::HashSet;

use serde::Serialize;

use crate::availability::slot_key;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TimeSlotCell {
    #[cfg_attr(feature = "openapi", schema(example = "17:00"))]
    pub time: String,
    pub disabled: bool,
    pub active: bool,
}

/// One button per time label; at most one active label.
///
/// The picker does not watch the date. Callers must [`clear`](Self::clear)
/// it whenever the selected date changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlotPicker {
    times: Vec<String>,
    active: Option<String>,
}

impl TimeSlotPicker {
    pub fn new(times: Vec<String>) -> Self {
        Self {
            times,
            active: None,
        }
    }

    pub fn times(&self) -> &[String] {
        &self.times
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn is_disabled(date: &str, time: &str, booked_slots: &HashSet<String>) -> bool {
        booked_slots.contains(&slot_key(date, time))
    }

    pub fn cells(&self, date: &str, booked_slots: &HashSet<String>) -> Vec<TimeSlotCell> {
        self.times
            .iter()
            .map(|time| TimeSlotCell {
                time: time.clone(),
                disabled: Self::is_disabled(date, time, booked_slots),
                active: self.active.as_deref() == Some(time.as_str()),
            })
            .collect()
    }

    /// Clicks a time label. Booked labels and labels the picker does not
    /// offer are refused without touching the active label or calling
    /// `on_select`.
    pub fn select<F>(
        &mut self,
        date: &str,
        time: &str,
        booked_slots: &HashSet<String>,
        on_select: F,
    ) -> bool
    where
        F: FnOnce(&str),
    {
        if !self.times.iter().any(|t| t == time) || Self::is_disabled(date, time, booked_slots) {
            return false;
        }
        self.active = Some(time.to_string());
        on_select(time);
        true
    }
}
