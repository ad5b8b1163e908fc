// --- File: crates/formarte_common/src/services.rs ---
//! Service abstractions shared by the portal crates.
//!
//! Booking and account logic talk to durable storage and to the payment
//! gateway only through these traits, so tests can swap in in-memory or
//! failing implementations.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Durable string-keyed storage, the server-side stand-in for the browser's
/// local storage. Values are opaque strings (the portal stores JSON text).
pub trait KeyValueStore: Send + Sync {
    /// Error type returned by storage operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reads the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> BoxFuture<'_, Option<String>, Self::Error>;

    /// Replaces the value stored under `key`.
    fn set(&self, key: &str, value: String) -> BoxFuture<'_, (), Self::Error>;

    /// Deletes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> BoxFuture<'_, (), Self::Error>;
}

/// A payment gateway able to settle a single checkout.
pub trait PaymentService: Send + Sync {
    /// Error type returned by payment operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Charges the given amount and resolves once the gateway answers.
    fn charge(&self, request: ChargeRequest) -> BoxFuture<'_, ChargeReceipt, Self::Error>;
}

/// What is being paid for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeRequest {
    /// Human-readable name of the service.
    pub description: String,
    /// Amount in whole units of `currency` (COP has no minor unit).
    pub amount: u64,
    pub currency: String,
}

/// Outcome of a settled charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeReceipt {
    pub id: String,
    pub status: String,
    pub amount: u64,
    pub currency: String,
}
