// --- File: crates/formarte_booking/src/models.rs ---
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Which booking flow produced a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum BookingKind {
    Psychological,
    Academic,
}

impl BookingKind {
    /// Label shown on booking cards.
    pub fn label(&self) -> &'static str {
        match self {
            BookingKind::Psychological => "Apoyo Psicológico",
            BookingKind::Academic => "Apoyo Académico",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BookingKind::Psychological => "brain",
            BookingKind::Academic => "academic-cap",
        }
    }
}

/// Persisted lifecycle status.
///
/// `Completed` is accepted when reading old records but is never written:
/// whether a booking is completed is decided at read time from its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Upcoming,
    Completed,
    Cancelled,
}

/// Display category computed from the stored status and "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum DisplayStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl DisplayStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DisplayStatus::Upcoming => "Próxima",
            DisplayStatus::Completed => "Completada",
            DisplayStatus::Cancelled => "Cancelada",
        }
    }
}

/// A stored booking. Field names match the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub user_email: String,
    #[serde(rename = "type")]
    pub kind: BookingKind,
    pub service_title: String,
    /// `YYYY-MM-DD`
    #[cfg_attr(feature = "openapi", schema(example = "2024-01-15"))]
    pub date: String,
    #[cfg_attr(feature = "openapi", schema(example = "18:00"))]
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tutor_name: Option<String>,
    pub status: BookingStatus,
    pub price: u64,
}

/// Everything a flow collects before payment; id and owner are stamped by
/// the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub kind: BookingKind,
    pub service_title: String,
    pub date: String,
    pub time: String,
    pub tutor_name: Option<String>,
    pub price: u64,
}

/// Static catalog entry for a bookable service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Service {
    pub title: String,
    pub description: String,
    /// Opaque icon identifier; rendering is up to the client.
    pub icon: String,
    pub price: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Tutor {
    pub id: u32,
    pub name: String,
    pub specialty: String,
}

/// Pages of the portal; used as navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    Booking,
    Support,
    AcademicBooking,
    MyBookings,
}
