//! The "today" anchor.
//!
//! All date comparisons in the portal are done on calendar dates in the
//! configured zone, so the booking logic takes a `NaiveDate` and never asks
//! the system clock itself.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::warn;

/// Fallback zone when the configured one does not parse.
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::America::Bogota;

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock projected into a time zone.
#[derive(Debug, Clone, Copy)]
pub struct ZonedClock {
    zone: Tz,
}

impl ZonedClock {
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    /// Builds a clock from an IANA name, falling back to Bogotá.
    pub fn from_name(name: &str) -> Self {
        let zone = name.parse::<Tz>().unwrap_or_else(|_| {
            warn!(
                "Unknown time zone '{}', using {}",
                name,
                DEFAULT_TIME_ZONE.name()
            );
            DEFAULT_TIME_ZONE
        });
        Self { zone }
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }
}

impl Clock for ZonedClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.zone).date_naive()
    }
}

/// A clock frozen on one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
