//! Spanish (es-CO / es-ES) display formatting.

use chrono::{Datelike, NaiveDate, Weekday};

/// Calendar header month names.
pub const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Sunday-first weekday column headers.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Dom", "Lun", "Mar", "Mié", "Jue", "Vie", "Sáb"];

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

fn month_name_lower(month: u32) -> String {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .map(|m| m.to_lowercase())
        .unwrap_or_default()
}

/// `"Enero 2024"`
pub fn month_title(year: i32, month: u32) -> String {
    let name = MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("");
    format!("{} {}", name, year)
}

/// Whole pesos with `.` grouping: `7500 -> "$ 7.500"`.
pub fn format_cop(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("$ {}", grouped)
}

/// `"lunes, 15 de enero de 2024"`
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{}, {} de {} de {}",
        weekday_name(date.weekday()),
        date.day(),
        month_name_lower(date.month()),
        date.year()
    )
}

/// `"lunes, 15 de enero"`, used on booking cards.
pub fn card_date(date: NaiveDate) -> String {
    format!(
        "{}, {} de {}",
        weekday_name(date.weekday()),
        date.day(),
        month_name_lower(date.month())
    )
}

/// `"15 de enero de 2024"`, used in the payment summary.
pub fn checkout_date(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        month_name_lower(date.month()),
        date.year()
    )
}

/// `"15/1/2024"`
pub fn short_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

/// Parses a stored `YYYY-MM-DD` key.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// Formats a date as its `YYYY-MM-DD` key.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
