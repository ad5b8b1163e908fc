// File: crates/formarte_booking/src/doc.rs

#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::calendar::{CalendarView, DayCell};
use crate::flows::CheckoutSummary;
use crate::handlers::{TourChoiceRequest, TourChoiceResponse};
use crate::models::{
    Booking, BookingKind, BookingStatus, DisplayStatus, Page, Service, Tutor,
};
use crate::my_bookings::{BookingCard, MyBookingsView};
use crate::service::{
    AcademicBookingRequest, BookingConfirmation, CalendarQuery, PsychologicalBookingRequest,
    ServicesResponse, TimeSlotQuery, TimeSlotsView,
};
use crate::time_slots::TimeSlotCell;
use crate::tour::TourStep;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::list_services_handler,
        crate::handlers::list_tutors_handler,
        crate::handlers::calendar_handler,
        crate::handlers::time_slots_handler,
        crate::handlers::my_bookings_handler,
        crate::handlers::book_psychological_handler,
        crate::handlers::book_academic_handler,
        crate::handlers::cancel_booking_handler,
        crate::handlers::tour_step_handler,
        crate::handlers::tour_choice_handler
    ),
    components(
        schemas(
            Booking,
            BookingKind,
            BookingStatus,
            DisplayStatus,
            Page,
            Service,
            Tutor,
            CalendarQuery,
            CalendarView,
            DayCell,
            TimeSlotQuery,
            TimeSlotCell,
            TimeSlotsView,
            PsychologicalBookingRequest,
            AcademicBookingRequest,
            BookingConfirmation,
            CheckoutSummary,
            BookingCard,
            MyBookingsView,
            ServicesResponse,
            TourStep,
            TourChoiceRequest,
            TourChoiceResponse
        )
    ),
    tags(
        (name = "Catalog", description = "Support services and tutors"),
        (name = "Booking", description = "Calendar, time slots and bookings"),
        (name = "Tour", description = "Interactive home tour")
    ),
    servers(
        (url = "/api", description = "FormArte portal API")
    )
)]
pub struct BookingApiDoc;
