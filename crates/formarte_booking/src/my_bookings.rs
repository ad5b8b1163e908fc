//! "Mis Reservas" page.

use chrono::NaiveDate;
use serde::Serialize;

use crate::format::{card_date, parse_date_key};
use crate::lifecycle::{can_cancel, display_status, is_past};
use crate::models::{Booking, BookingStatus, DisplayStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingCard {
    pub booking: Booking,
    /// `Apoyo Psicológico` / `Apoyo Académico`
    pub kind_label: String,
    pub icon: String,
    pub display_status: DisplayStatus,
    /// `Próxima` / `Completada` / `Cancelada`
    pub status_label: String,
    /// `"lunes, 15 de enero a las 18:00"`
    pub when: String,
    pub can_cancel: bool,
}

impl BookingCard {
    pub fn new(booking: Booking, today: NaiveDate) -> Self {
        let status = display_status(&booking, today);
        let date_label = parse_date_key(&booking.date)
            .map(card_date)
            .unwrap_or_else(|| booking.date.clone());
        Self {
            kind_label: booking.kind.label().to_string(),
            icon: booking.kind.icon().to_string(),
            display_status: status,
            status_label: status.label().to_string(),
            when: format!("{} a las {}", date_label, booking.time),
            can_cancel: can_cancel(&booking, today),
            booking,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MyBookingsView {
    /// "Próximas Sesiones"
    pub upcoming: Vec<BookingCard>,
    /// "Historial de Sesiones"
    pub history: Vec<BookingCard>,
    /// True when the owner has no bookings at all ("Aún no tienes reservas").
    pub empty: bool,
}

impl MyBookingsView {
    /// Sorts the owner's bookings by date, newest first, and splits them into
    /// upcoming (still upcoming, not past) and history (everything else).
    pub fn build(mut bookings: Vec<Booking>, today: NaiveDate) -> Self {
        let empty = bookings.is_empty();
        // Stable sort: equal dates keep store order. Unreadable dates sort last.
        bookings.sort_by(|a, b| parse_date_key(&b.date).cmp(&parse_date_key(&a.date)));

        let (upcoming, history): (Vec<Booking>, Vec<Booking>) = bookings
            .into_iter()
            .partition(|b| b.status == BookingStatus::Upcoming && !is_past(b, today));

        Self {
            upcoming: upcoming
                .into_iter()
                .map(|b| BookingCard::new(b, today))
                .collect(),
            history: history
                .into_iter()
                .map(|b| BookingCard::new(b, today))
                .collect(),
            empty,
        }
    }
}
