use formarte_common::{HttpStatusCode, PortalError};
use formarte_payment::PaymentError;
use formarte_storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Payment error: {0}")]
    Payment(#[from] PaymentError),

    #[error("Failed to encode bookings: {0}")]
    Encode(#[from] serde_json::Error),

    /// No booking with this id exists in the store
    #[error("Booking {0} not found")]
    NotFound(String),

    /// Only bookings that still read as upcoming may be cancelled
    #[error("Booking {0} can no longer be cancelled")]
    NotCancellable(String),

    /// Confirm was attempted with a missing selection
    #[error("Incomplete booking: {0}")]
    Incomplete(&'static str),

    /// The chosen day is in the past or fully booked
    #[error("Date {0} is not available")]
    DateUnavailable(String),

    /// The chosen time is already taken or not offered by the flow
    #[error("Time {time} on {date} is not available")]
    TimeUnavailable { date: String, time: String },

    #[error("Servicio no seleccionado")]
    ServiceNotSelected,

    #[error("Unknown service: {0}")]
    UnknownService(String),

    #[error("Unknown tutor: {0}")]
    UnknownTutor(u32),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month {0}, expected 1-12")]
    InvalidMonth(u32),

    #[error("Tour step {0} does not exist")]
    UnknownTourStep(usize),

    #[error("Tour step {step} has no option {option}")]
    UnknownTourOption { step: usize, option: usize },
}

impl From<BookingError> for PortalError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Storage(e) => e.into(),
            BookingError::Payment(e) => e.into(),
            BookingError::Encode(e) => PortalError::InternalError(e.to_string()),
            BookingError::NotFound(_)
            | BookingError::UnknownService(_)
            | BookingError::UnknownTutor(_)
            | BookingError::UnknownTourStep(_) => PortalError::NotFoundError(err.to_string()),
            BookingError::NotCancellable(_)
            | BookingError::DateUnavailable(_)
            | BookingError::TimeUnavailable { .. } => PortalError::ConflictError(err.to_string()),
            BookingError::Incomplete(_)
            | BookingError::ServiceNotSelected
            | BookingError::InvalidDate(_)
            | BookingError::InvalidMonth(_)
            | BookingError::UnknownTourOption { .. } => PortalError::ValidationError(err.to_string()),
        }
    }
}

impl HttpStatusCode for BookingError {
    fn status_code(&self) -> u16 {
        match self {
            BookingError::Storage(e) => e.status_code(),
            BookingError::Payment(e) => e.status_code(),
            BookingError::Encode(_) => 500,
            BookingError::NotFound(_)
            | BookingError::UnknownService(_)
            | BookingError::UnknownTutor(_)
            | BookingError::UnknownTourStep(_) => 404,
            BookingError::NotCancellable(_)
            | BookingError::DateUnavailable(_)
            | BookingError::TimeUnavailable { .. } => 409,
            BookingError::Incomplete(_)
            | BookingError::ServiceNotSelected
            | BookingError::InvalidDate(_)
            | BookingError::InvalidMonth(_)
            | BookingError::UnknownTourOption { .. } => 400,
        }
    }
}
