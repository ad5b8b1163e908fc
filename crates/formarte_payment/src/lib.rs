// --- File: crates/formarte_payment/src/lib.rs ---

pub mod checkout;
pub mod error;
pub mod service;

pub use checkout::{Checkout, CheckoutStep};
pub use error::PaymentError;
pub use service::SimulatedPaymentService;

use formarte_common::PaymentService;
use std::sync::Arc;

/// Shared gateway handle used by the booking flows.
pub type SharedPaymentService = Arc<dyn PaymentService<Error = PaymentError>>;
