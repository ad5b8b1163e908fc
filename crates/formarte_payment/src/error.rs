// --- File: crates/formarte_payment/src/error.rs ---
use formarte_common::{HttpStatusCode, PortalError};
use thiserror::Error;

/// Payment-specific error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// A charge is already in flight for this checkout
    #[error("A payment is already being processed")]
    AlreadyProcessing,

    /// The checkout was already paid
    #[error("This checkout has already been paid")]
    AlreadyPaid,

    /// Settling a checkout that never started processing
    #[error("No payment is in progress")]
    NotProcessing,

    /// The gateway refused the charge
    #[error("Payment declined: {0}")]
    Declined(String),

    /// Currency does not match the configured one
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
}

impl From<PaymentError> for PortalError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::AlreadyProcessing | PaymentError::AlreadyPaid => {
                PortalError::ConflictError(err.to_string())
            }
            PaymentError::NotProcessing => PortalError::InternalError(err.to_string()),
            PaymentError::Declined(_) | PaymentError::UnsupportedCurrency(_) => {
                PortalError::ValidationError(err.to_string())
            }
        }
    }
}

impl HttpStatusCode for PaymentError {
    fn status_code(&self) -> u16 {
        match self {
            PaymentError::AlreadyProcessing | PaymentError::AlreadyPaid => 409,
            PaymentError::NotProcessing => 500,
            PaymentError::Declined(_) => 402,
            PaymentError::UnsupportedCurrency(_) => 400,
        }
    }
}
