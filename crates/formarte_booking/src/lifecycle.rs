//! Booking lifecycle: `upcoming -> {completed, cancelled}`.
//!
//! Only the transition to `cancelled` is ever persisted. "Completed" is a
//! read-time classification of an upcoming booking whose date has passed.

use chrono::NaiveDate;

use crate::error::BookingError;
use crate::format::parse_date_key;
use crate::models::{Booking, BookingStatus, DisplayStatus};

/// Whether the booking's date lies strictly before `today`. Unreadable dates
/// never count as past.
pub fn is_past(booking: &Booking, today: NaiveDate) -> bool {
    parse_date_key(&booking.date).is_some_and(|date| date < today)
}

pub fn display_status(booking: &Booking, today: NaiveDate) -> DisplayStatus {
    match booking.status {
        BookingStatus::Cancelled => DisplayStatus::Cancelled,
        BookingStatus::Completed => DisplayStatus::Completed,
        BookingStatus::Upcoming if is_past(booking, today) => DisplayStatus::Completed,
        BookingStatus::Upcoming => DisplayStatus::Upcoming,
    }
}

/// Cancellation is offered only while the booking still reads as upcoming.
pub fn can_cancel(booking: &Booking, today: NaiveDate) -> bool {
    display_status(booking, today) == DisplayStatus::Upcoming
}

/// Applies the cancel transition in place.
pub fn cancel(booking: &mut Booking, today: NaiveDate) -> Result<(), BookingError> {
    if !can_cancel(booking, today) {
        return Err(BookingError::NotCancellable(booking.id.clone()));
    }
    booking.status = BookingStatus::Cancelled;
    Ok(())
}
