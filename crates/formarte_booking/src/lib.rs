// --- File: crates/formarte_booking/src/lib.rs ---
pub mod availability;
#[cfg(test)]
mod availability_proptest;
pub mod calendar;
pub mod catalog;
pub mod doc;
pub mod error;
pub mod flows;
#[cfg(test)]
mod flows_test;
pub mod format;
pub mod handlers;
pub mod lifecycle;
#[cfg(test)]
mod lifecycle_test;
pub mod models;
pub mod my_bookings;
pub mod routes;
pub mod service;
pub mod store;
#[cfg(test)]
mod test_support;
pub mod time_slots;
#[cfg(test)]
mod time_slots_test;
pub mod tour;

pub use error::BookingError;
pub use handlers::BookingState;
pub use models::{Booking, BookingKind, BookingStatus, DisplayStatus, NewBooking, Service, Tutor};
pub use routes::{router, routes};
pub use service::BookingService;
pub use store::BookingStore;
