// --- File: crates/formarte_booking/src/calendar.rs ---
//! Month grid for the date picker.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::BookingError;
use crate::format::{date_key, month_title, WEEKDAY_HEADERS};

/// A reference month. Navigation is unbounded in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CalendarMonth {
    year: i32,
    month: u32,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, BookingError> {
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(BookingError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Day count, taken as the day before the first of the following month.
    pub fn days_in_month(&self) -> u32 {
        self.next()
            .first_day()
            .pred_opt()
            .map(|last| last.day())
            .unwrap_or(31)
    }

    /// Blank cells before day 1 in a Sunday-first week.
    pub fn leading_blanks(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

/// A date is unavailable when it is strictly before today or listed as
/// disabled by the flow.
pub fn is_day_disabled(date: NaiveDate, today: NaiveDate, disabled: &HashSet<String>) -> bool {
    date < today || disabled.contains(&date_key(date))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DayCell {
    pub day: u32,
    /// `YYYY-MM-DD`
    pub date: String,
    pub past: bool,
    pub booked: bool,
    /// Rendered struck through and refuses selection.
    pub disabled: bool,
    /// Today's highlight, only when today is itself selectable.
    pub today: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CalendarView {
    #[cfg_attr(feature = "openapi", schema(example = "Enero 2024"))]
    pub title: String,
    pub year: i32,
    pub month: u32,
    pub weekdays: Vec<String>,
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

/// Renders one month against the "today" anchor and a disabled-date set.
pub fn render_month(
    month: CalendarMonth,
    today: NaiveDate,
    disabled: &HashSet<String>,
) -> CalendarView {
    let days = (1..=month.days_in_month())
        .filter_map(|day| month.day(day).map(|date| (day, date)))
        .map(|(day, date)| {
            let key = date_key(date);
            let past = date < today;
            let booked = disabled.contains(&key);
            let is_disabled = past || booked;
            DayCell {
                day,
                date: key,
                past,
                booked,
                disabled: is_disabled,
                today: date == today && !is_disabled,
            }
        })
        .collect();

    CalendarView {
        title: month_title(month.year(), month.month()),
        year: month.year(),
        month: month.month(),
        weekdays: WEEKDAY_HEADERS.iter().map(|d| d.to_string()).collect(),
        leading_blanks: month.leading_blanks(),
        days,
    }
}

/// Calendar widget state: the month currently on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarWidget {
    month: CalendarMonth,
}

impl CalendarWidget {
    /// Opens on the month containing today.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            month: CalendarMonth::containing(today),
        }
    }

    pub fn showing(month: CalendarMonth) -> Self {
        Self { month }
    }

    pub fn month(&self) -> CalendarMonth {
        self.month
    }

    pub fn next_month(&mut self) {
        self.month = self.month.next();
    }

    pub fn previous_month(&mut self) {
        self.month = self.month.previous();
    }

    pub fn render(&self, today: NaiveDate, disabled: &HashSet<String>) -> CalendarView {
        render_month(self.month, today, disabled)
    }

    /// Clicks a day cell of the displayed month.
    ///
    /// `on_select` runs only for an enabled day; clicking a disabled or
    /// nonexistent day does nothing and returns `false`.
    pub fn select_day<F>(
        &self,
        day: u32,
        today: NaiveDate,
        disabled: &HashSet<String>,
        on_select: F,
    ) -> bool
    where
        F: FnOnce(NaiveDate),
    {
        match self.month.day(day) {
            Some(date) if !is_day_disabled(date, today, disabled) => {
                on_select(date);
                true
            }
            _ => false,
        }
    }
}
