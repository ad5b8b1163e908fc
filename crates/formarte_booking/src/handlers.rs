// File: crates/formarte_booking/src/handlers.rs
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use formarte_common::PortalError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::calendar::CalendarView;
use crate::catalog;
use crate::models::{Page, Tutor};
use crate::my_bookings::{BookingCard, MyBookingsView};
use crate::service::{
    AcademicBookingRequest, BookingConfirmation, BookingService, CalendarQuery,
    PsychologicalBookingRequest, ServicesResponse, TimeSlotQuery, TimeSlotsView,
};
use crate::tour::{choose_option, tour_step, TourOutcome, TourStep};

// Shared state needed by the booking handlers
#[derive(Clone)]
pub struct BookingState {
    pub service: Arc<BookingService>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TourChoiceRequest {
    pub option: usize,
}

/// Flattened [`TourOutcome`] for JSON clients.
#[derive(Serialize, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TourChoiceResponse {
    /// `advance`, `navigate` or `finished`
    pub outcome: String,
    pub next_step: Option<usize>,
    pub page: Option<Page>,
}

impl From<TourOutcome> for TourChoiceResponse {
    fn from(outcome: TourOutcome) -> Self {
        match outcome {
            TourOutcome::Advance(next) => Self {
                outcome: "advance".to_string(),
                next_step: Some(next),
                page: None,
            },
            TourOutcome::Navigate(page) => Self {
                outcome: "navigate".to_string(),
                next_step: None,
                page: Some(page),
            },
            TourOutcome::Finished => Self {
                outcome: "finished".to_string(),
                next_step: None,
                page: None,
            },
        }
    }
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/services",
    responses((status = 200, description = "Support services and peer tutoring", body = ServicesResponse)),
    tag = "Catalog"
))]
pub async fn list_services_handler(
    State(state): State<Arc<BookingState>>,
) -> Json<ServicesResponse> {
    Json(state.service.services())
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/tutors",
    responses((status = 200, description = "Tutor catalog", body = [Tutor])),
    tag = "Catalog"
))]
pub async fn list_tutors_handler() -> Json<Vec<Tutor>> {
    Json(catalog::tutors())
}

/// Month grid with disabled days for one flow.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/calendar",
    params(CalendarQuery),
    responses(
        (status = 200, description = "Rendered month", body = CalendarView),
        (status = 400, description = "Invalid month")
    ),
    tag = "Booking"
))]
pub async fn calendar_handler(
    State(state): State<Arc<BookingState>>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarView>, PortalError> {
    let view = state
        .service
        .calendar(query.flow, query.year, query.month)
        .await?;
    Ok(Json(view))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/time-slots",
    params(TimeSlotQuery),
    responses(
        (status = 200, description = "Time buttons for the date", body = TimeSlotsView),
        (status = 400, description = "Invalid date format")
    ),
    tag = "Booking"
))]
pub async fn time_slots_handler(
    State(state): State<Arc<BookingState>>,
    Query(query): Query<TimeSlotQuery>,
) -> Result<Json<TimeSlotsView>, PortalError> {
    let view = state.service.time_slots(query.flow, &query.date).await?;
    Ok(Json(view))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/bookings",
    responses((status = 200, description = "Upcoming sessions and history", body = MyBookingsView)),
    tag = "Booking"
))]
pub async fn my_bookings_handler(State(state): State<Arc<BookingState>>) -> Json<MyBookingsView> {
    Json(state.service.my_bookings().await)
}

/// Books a psychological support session (simulated payment, price 0).
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/bookings/psychological",
    request_body = PsychologicalBookingRequest,
    responses(
        (status = 200, description = "Booking stored", body = BookingConfirmation),
        (status = 400, description = "Invalid date or missing selection"),
        (status = 409, description = "Date or time no longer available")
    ),
    tag = "Booking"
))]
pub async fn book_psychological_handler(
    State(state): State<Arc<BookingState>>,
    Json(request): Json<PsychologicalBookingRequest>,
) -> Result<Json<BookingConfirmation>, PortalError> {
    info!(
        "Psychological booking requested for {} {}",
        request.date, request.time
    );
    let confirmation = state.service.book_psychological(request).await?;
    Ok(Json(confirmation))
}

/// Books an academic support session with a tutor.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/bookings/academic",
    request_body = AcademicBookingRequest,
    responses(
        (status = 200, description = "Booking stored", body = BookingConfirmation),
        (status = 400, description = "Servicio no seleccionado, missing tutor or invalid date"),
        (status = 404, description = "Unknown service or tutor"),
        (status = 409, description = "Time no longer available")
    ),
    tag = "Booking"
))]
pub async fn book_academic_handler(
    State(state): State<Arc<BookingState>>,
    Json(request): Json<AcademicBookingRequest>,
) -> Result<Json<BookingConfirmation>, PortalError> {
    info!(
        "Academic booking requested: {:?} with tutor {:?} on {} {}",
        request.service_title, request.tutor_id, request.date, request.time
    );
    let confirmation = state.service.book_academic(request).await?;
    Ok(Json(confirmation))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    patch,
    path = "/bookings/{id}/cancel",
    params(("id" = String, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking cancelled", body = BookingCard),
        (status = 404, description = "Unknown booking"),
        (status = 409, description = "Booking is past or already cancelled")
    ),
    tag = "Booking"
))]
pub async fn cancel_booking_handler(
    State(state): State<Arc<BookingState>>,
    Path(id): Path<String>,
) -> Result<Json<BookingCard>, PortalError> {
    let card = state.service.cancel(&id).await?;
    Ok(Json(card))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/tour/{step}",
    params(("step" = usize, Path, description = "Zero-based tour step")),
    responses(
        (status = 200, description = "Tour step", body = TourStep),
        (status = 404, description = "No such step")
    ),
    tag = "Tour"
))]
pub async fn tour_step_handler(Path(step): Path<usize>) -> Result<Json<TourStep>, PortalError> {
    Ok(Json(tour_step(step)?.clone()))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/tour/{step}/choose",
    params(("step" = usize, Path, description = "Zero-based tour step")),
    request_body = TourChoiceRequest,
    responses(
        (status = 200, description = "What the tour does next", body = TourChoiceResponse),
        (status = 400, description = "The step has no such option"),
        (status = 404, description = "No such step")
    ),
    tag = "Tour"
))]
pub async fn tour_choice_handler(
    Path(step): Path<usize>,
    Json(request): Json<TourChoiceRequest>,
) -> Result<Json<TourChoiceResponse>, PortalError> {
    let outcome = choose_option(step, request.option)?;
    Ok(Json(outcome.into()))
}
