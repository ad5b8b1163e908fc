// --- File: crates/formarte_booking/src/service.rs ---
//! Booking service: the shared booking store plus the page controllers,
//! wired to a payment gateway and a clock.
//!
//! The store sits behind one `RwLock`; every mutation holds the write lock
//! while it rewrites the durable entry. Payment runs without any lock held.

use std::sync::Arc;

use chrono::NaiveDate;
use formarte_common::Clock;
use formarte_config::AppConfig;
use formarte_payment::SharedPaymentService;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::availability::FlowAvailability;
use crate::calendar::{render_month, CalendarMonth, CalendarView};
use crate::catalog::{self, SupportCatalog};
use crate::error::BookingError;
use crate::flows::{AcademicBookingFlow, CheckoutSummary, PsychologicalBookingFlow};
use crate::format::{long_date, parse_date_key, short_date};
use crate::models::{Booking, BookingKind, NewBooking, Service};
use crate::my_bookings::{BookingCard, MyBookingsView};
use crate::store::BookingStore;
use crate::time_slots::{TimeSlotCell, TimeSlotPicker};

#[cfg(feature = "openapi")]
use utoipa::{IntoParams, ToSchema};

// --- Request / response types ---

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(IntoParams, ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct CalendarQuery {
    /// `psychological` or `academic`
    pub flow: BookingKind,
    /// Defaults to the current year
    #[cfg_attr(feature = "openapi", schema(example = 2024))]
    pub year: Option<i32>,
    /// 1-12, defaults to the current month
    #[cfg_attr(feature = "openapi", schema(example = 2))]
    pub month: Option<u32>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(IntoParams, ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct TimeSlotQuery {
    pub flow: BookingKind,
    /// Date in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2024-01-15"))]
    pub date: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct TimeSlotsView {
    pub date: String,
    /// `"lunes, 15 de enero de 2024"`
    pub date_label: String,
    pub slots: Vec<TimeSlotCell>,
}

#[derive(Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PsychologicalBookingRequest {
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2024-01-15"))]
    pub date: String,
    #[cfg_attr(feature = "openapi", schema(example = "18:00"))]
    pub time: String,
}

#[derive(Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AcademicBookingRequest {
    /// Title of the service picked on the support page
    #[serde(default)]
    pub service_title: Option<String>,
    #[serde(default)]
    pub tutor_id: Option<u32>,
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2024-01-15"))]
    pub date: String,
    #[cfg_attr(feature = "openapi", schema(example = "10:00"))]
    pub time: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BookingConfirmation {
    pub booking: Booking,
    pub summary: CheckoutSummary,
    pub title: String,
    pub message: String,
}

#[derive(Serialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ServicesResponse {
    pub support: Vec<Service>,
    pub tutoring: Service,
}

pub struct BookingService {
    store: RwLock<BookingStore>,
    payment: SharedPaymentService,
    clock: Arc<dyn Clock>,
    config: Arc<AppConfig>,
}

impl BookingService {
    pub fn new(
        config: Arc<AppConfig>,
        store: BookingStore,
        payment: SharedPaymentService,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store: RwLock::new(store),
            payment,
            clock,
            config,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Identity stamped on every new booking.
    pub fn owner(&self) -> &str {
        &self.config.identity.guest_email
    }

    pub fn times_for(&self, kind: BookingKind) -> &[String] {
        match kind {
            BookingKind::Psychological => &self.config.schedule.psychological_times,
            BookingKind::Academic => &self.config.schedule.academic_times,
        }
    }

    fn currency(&self) -> &str {
        &self.config.payment.currency
    }

    pub fn services(&self) -> ServicesResponse {
        let catalog = SupportCatalog::new();
        ServicesResponse {
            support: catalog.services().to_vec(),
            tutoring: catalog.tutoring().clone(),
        }
    }

    pub async fn availability(&self, kind: BookingKind) -> FlowAvailability {
        let store = self.store.read().await;
        FlowAvailability::compute(kind, store.all(), self.times_for(kind))
    }

    pub async fn all_bookings(&self) -> Vec<Booking> {
        self.store.read().await.all().to_vec()
    }

    pub async fn calendar(
        &self,
        kind: BookingKind,
        year: Option<i32>,
        month: Option<u32>,
    ) -> Result<CalendarView, BookingError> {
        let today = self.today();
        let current = CalendarMonth::containing(today);
        let month = CalendarMonth::new(
            year.unwrap_or(current.year()),
            month.unwrap_or(current.month()),
        )?;
        let availability = self.availability(kind).await;
        Ok(render_month(month, today, &availability.disabled_dates))
    }

    pub async fn time_slots(
        &self,
        kind: BookingKind,
        date: &str,
    ) -> Result<TimeSlotsView, BookingError> {
        let parsed = parse_date(date)?;
        let availability = self.availability(kind).await;
        let picker = TimeSlotPicker::new(self.times_for(kind).to_vec());
        Ok(TimeSlotsView {
            date: date.to_string(),
            date_label: long_date(parsed),
            slots: picker.cells(date, &availability.booked_slots),
        })
    }

    pub async fn book_psychological(
        &self,
        request: PsychologicalBookingRequest,
    ) -> Result<BookingConfirmation, BookingError> {
        let today = self.today();
        let date = parse_date(&request.date)?;
        let availability = self.availability(BookingKind::Psychological).await;

        let mut flow = PsychologicalBookingFlow::new(
            self.times_for(BookingKind::Psychological).to_vec(),
            self.currency(),
            today,
        );
        if !flow.select_date(date, today, &availability) {
            return Err(BookingError::DateUnavailable(request.date));
        }
        if !flow.select_time(&request.time, &availability) {
            return Err(BookingError::TimeUnavailable {
                date: request.date,
                time: request.time,
            });
        }
        let summary = flow.summary().ok_or(BookingError::Incomplete("time"))?;

        let draft = flow.confirm(self.payment.as_ref()).await?;
        let booking = self.commit(BookingKind::Psychological, draft).await?;
        let message = format!(
            "Tu sesión ha sido agendada para el {} a las {}.",
            long_date(date),
            booking.time
        );
        Ok(BookingConfirmation {
            booking,
            summary,
            title: "¡Cita Confirmada!".to_string(),
            message,
        })
    }

    pub async fn book_academic(
        &self,
        request: AcademicBookingRequest,
    ) -> Result<BookingConfirmation, BookingError> {
        let today = self.today();
        let service = match request.service_title.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(title) => Some(catalog::find_service(title)?),
        };
        let date = parse_date(&request.date)?;
        let availability = self.availability(BookingKind::Academic).await;

        let mut flow = AcademicBookingFlow::new(
            service,
            catalog::tutors(),
            self.times_for(BookingKind::Academic).to_vec(),
            self.currency(),
            today,
        );
        flow.service()?;
        if let Some(id) = request.tutor_id {
            flow.select_tutor(id)?;
        }
        if !flow.select_date(date, today, &availability) {
            return Err(BookingError::DateUnavailable(request.date));
        }
        if !flow.select_time(&request.time, &availability) {
            return Err(BookingError::TimeUnavailable {
                date: request.date,
                time: request.time,
            });
        }
        if !flow.can_confirm() {
            warn!("Academic booking submitted without a tutor");
            return Err(BookingError::Incomplete("tutor"));
        }
        let summary = flow.summary().ok_or(BookingError::Incomplete("time"))?;

        let draft = flow.confirm(self.payment.as_ref()).await?;
        let booking = self.commit(BookingKind::Academic, draft).await?;
        let message = format!(
            "Tu sesión de {} con {} ha sido agendada para el {} a las {}.",
            booking.service_title,
            booking.tutor_name.as_deref().unwrap_or_default(),
            short_date(date),
            booking.time
        );
        Ok(BookingConfirmation {
            booking,
            summary,
            title: "¡Reserva Completada!".to_string(),
            message,
        })
    }

    /// Appends a paid booking after re-checking the slot under the write lock.
    async fn commit(&self, kind: BookingKind, draft: NewBooking) -> Result<Booking, BookingError> {
        let mut store = self.store.write().await;
        let availability = FlowAvailability::compute(kind, store.all(), self.times_for(kind));
        if availability.is_date_disabled(&draft.date) {
            return Err(BookingError::DateUnavailable(draft.date));
        }
        if availability.is_slot_booked(&draft.date, &draft.time) {
            return Err(BookingError::TimeUnavailable {
                date: draft.date,
                time: draft.time,
            });
        }
        store.append(draft, self.owner()).await
    }

    pub async fn my_bookings(&self) -> MyBookingsView {
        let bookings = self.store.read().await.for_owner(self.owner());
        MyBookingsView::build(bookings, self.today())
    }

    pub async fn cancel(&self, id: &str) -> Result<BookingCard, BookingError> {
        let today = self.today();
        let mut store = self.store.write().await;
        if store.get(id).is_some_and(|b| b.user_email != self.owner()) {
            info!("Refusing to cancel booking {} of another owner", id);
            return Err(BookingError::NotFound(id.to_string()));
        }
        let booking = store.cancel(id, today).await?;
        Ok(BookingCard::new(booking, today))
    }

    /// Re-reads the durable entry.
    pub async fn reload(&self) {
        self.store.write().await.reload().await;
    }
}

fn parse_date(date: &str) -> Result<NaiveDate, BookingError> {
    parse_date_key(date).ok_or_else(|| BookingError::InvalidDate(date.to_string()))
}
