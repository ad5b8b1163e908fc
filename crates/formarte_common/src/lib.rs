// --- File: crates/formarte_common/src/lib.rs ---

pub mod clock; // "Today" anchor in the configured zone
pub mod error; // Error handling
pub mod features; // Runtime feature flags
pub mod http; // HTTP error responses
pub mod logging; // Logging utilities
pub mod services; // Storage and payment abstractions

// Re-export error types and utilities for easier access
pub use error::{Context, HttpStatusCode, PortalError};

pub use http::IntoHttpResponse;

pub use logging::{init_from_config, init_with_level, log_error, log_result};

pub use features::is_auth_enabled;

pub use clock::{Clock, FixedClock, ZonedClock};

pub use services::{BoxFuture, ChargeReceipt, ChargeRequest, KeyValueStore, PaymentService};
