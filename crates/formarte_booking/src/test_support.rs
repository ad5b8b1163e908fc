//! Builders shared by the unit tests.

use chrono::NaiveDate;

use crate::models::{Booking, BookingKind, BookingStatus};

pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn psychological_times() -> Vec<String> {
    ["17:00", "18:00", "19:00", "20:00"]
        .iter()
        .map(|t| t.to_string())
        .collect()
}

pub fn academic_times() -> Vec<String> {
    [
        "09:00", "10:00", "11:00", "12:00", "14:00", "15:00", "16:00", "17:00",
    ]
    .iter()
    .map(|t| t.to_string())
    .collect()
}

pub fn booking(
    id: &str,
    kind: BookingKind,
    date: &str,
    time: &str,
    status: BookingStatus,
) -> Booking {
    Booking {
        id: id.to_string(),
        user_email: "guest@formarte.com".to_string(),
        kind,
        service_title: match kind {
            BookingKind::Psychological => "Sesión de Apoyo Psicológico".to_string(),
            BookingKind::Academic => "Asistencia con Tareas".to_string(),
        },
        date: date.to_string(),
        time: time.to_string(),
        tutor_name: match kind {
            BookingKind::Psychological => None,
            BookingKind::Academic => Some("Paula Salcedo".to_string()),
        },
        status,
        price: match kind {
            BookingKind::Psychological => 0,
            BookingKind::Academic => 3500,
        },
    }
}

pub fn upcoming(id: &str, date: &str, time: &str) -> Booking {
    booking(id, BookingKind::Psychological, date, time, BookingStatus::Upcoming)
}
