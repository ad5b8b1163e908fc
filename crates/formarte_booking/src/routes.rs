// --- File: crates/formarte_booking/src/routes.rs ---

use crate::handlers::{
    book_academic_handler, book_psychological_handler, calendar_handler, cancel_booking_handler,
    list_services_handler, list_tutors_handler, my_bookings_handler, time_slots_handler,
    tour_choice_handler, tour_step_handler, BookingState,
};
use crate::service::BookingService;
use crate::store::BookingStore;
use axum::{
    routing::{get, patch, post},
    Router,
};
use formarte_common::ZonedClock;
use formarte_config::AppConfig;
use formarte_payment::SimulatedPaymentService;
use formarte_storage::SharedStore;
use std::sync::Arc;

/// Creates the booking router: loads the booking store from `kv` and wires
/// the simulated gateway and the zoned clock.
pub async fn routes(config: Arc<AppConfig>, kv: SharedStore) -> Router {
    let store = BookingStore::load(kv, config.storage.bookings_key.clone()).await;
    let payment = Arc::new(SimulatedPaymentService::new(&config.payment));
    let clock = Arc::new(ZonedClock::from_name(&config.schedule.time_zone));
    let service = BookingService::new(config, store, payment, clock);
    router(Arc::new(BookingState {
        service: Arc::new(service),
    }))
}

/// Router over an already built state.
pub fn router(state: Arc<BookingState>) -> Router {
    Router::new()
        .route("/services", get(list_services_handler))
        .route("/tutors", get(list_tutors_handler))
        .route("/calendar", get(calendar_handler))
        .route("/time-slots", get(time_slots_handler))
        .route("/bookings", get(my_bookings_handler))
        .route("/bookings/psychological", post(book_psychological_handler))
        .route("/bookings/academic", post(book_academic_handler))
        .route("/bookings/{id}/cancel", patch(cancel_booking_handler))
        .route("/tour/{step}", get(tour_step_handler))
        .route("/tour/{step}/choose", post(tour_choice_handler))
        .with_state(state)
}
