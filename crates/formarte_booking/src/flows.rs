// --- File: crates/formarte_booking/src/flows.rs ---
//! Booking page controllers.
//!
//! Both flows share one shape: pick a date, pick a time (academic also picks
//! a tutor), review the total, pay, then hand a [`NewBooking`] to the store.
//! Confirm stays disabled until every selection is made and while a charge is
//! in flight.

use chrono::{Datelike, NaiveDate};
use formarte_common::{ChargeReceipt, ChargeRequest, PaymentService};
use formarte_payment::{Checkout, CheckoutStep, PaymentError};
use serde::Serialize;
use tracing::debug;

use crate::availability::FlowAvailability;
use crate::calendar::{CalendarMonth, CalendarWidget};
use crate::catalog::{PSYCHOLOGICAL_SERVICE_PRICE, PSYCHOLOGICAL_SERVICE_TITLE};
use crate::error::BookingError;
use crate::format::{checkout_date, date_key, format_cop};
use crate::models::{BookingKind, NewBooking, Service, Tutor};
use crate::time_slots::TimeSlotPicker;

/// What the payment modal shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CheckoutSummary {
    pub service_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tutor_name: Option<String>,
    /// `"15 de enero de 2024"`
    pub date_label: String,
    pub time: String,
    pub amount: u64,
    /// `"$ 7.500"`
    pub total: String,
}

/// Date, time and payment state shared by both flows.
#[derive(Debug, Clone)]
struct Selection {
    kind: BookingKind,
    currency: String,
    calendar: CalendarWidget,
    picker: TimeSlotPicker,
    date: Option<NaiveDate>,
    checkout: Option<Checkout>,
}

impl Selection {
    fn new(kind: BookingKind, times: Vec<String>, currency: &str, today: NaiveDate) -> Self {
        Self {
            kind,
            currency: currency.to_string(),
            calendar: CalendarWidget::new(today),
            picker: TimeSlotPicker::new(times),
            date: None,
            checkout: None,
        }
    }

    fn select_date(
        &mut self,
        date: NaiveDate,
        today: NaiveDate,
        availability: &FlowAvailability,
    ) -> bool {
        let widget = CalendarWidget::showing(CalendarMonth::containing(date));
        let mut chosen = None;
        let accepted =
            widget.select_day(date.day(), today, &availability.disabled_dates, |d| {
                chosen = Some(d)
            });
        if let Some(d) = chosen {
            self.calendar = widget;
            self.date = Some(d);
            self.picker.clear();
            debug!("{:?} flow: date {} selected", self.kind, d);
        }
        accepted
    }

    fn select_time(&mut self, time: &str, availability: &FlowAvailability) -> bool {
        let Some(date) = self.date else {
            return false;
        };
        self.picker
            .select(&date_key(date), time, &availability.booked_slots, |_| {})
    }

    fn time(&self) -> Option<&str> {
        self.picker.active()
    }

    fn processing(&self) -> bool {
        self.checkout
            .as_ref()
            .is_some_and(|c| c.step() == CheckoutStep::Processing)
    }

    fn checkout_step(&self) -> CheckoutStep {
        self.checkout
            .as_ref()
            .map(|c| c.step())
            .unwrap_or(CheckoutStep::Idle)
    }

    fn submit(&mut self, description: &str, amount: u64) -> Result<ChargeRequest, BookingError> {
        let currency = self.currency.clone();
        let checkout = self
            .checkout
            .get_or_insert_with(|| Checkout::new(description, amount, currency));
        Ok(checkout.submit()?)
    }

    fn settle(
        &mut self,
        result: Result<ChargeReceipt, PaymentError>,
    ) -> Result<(), BookingError> {
        let checkout = self
            .checkout
            .as_mut()
            .ok_or(BookingError::Payment(PaymentError::NotProcessing))?;
        match result {
            Ok(receipt) => {
                checkout.settle(receipt)?;
                Ok(())
            }
            Err(e) => {
                checkout.abort();
                Err(e.into())
            }
        }
    }

    /// Closes the modal; yields the date and time only if it was paid.
    fn close_checkout(&mut self) -> Option<(NaiveDate, String)> {
        let mut checkout = self.checkout.take()?;
        checkout.close()?;
        let date = self.date?;
        let time = self.time()?.to_string();
        Some((date, time))
    }

    fn reset(&mut self) {
        self.date = None;
        self.picker.clear();
        self.checkout = None;
    }
}

/// Psychological support booking page.
#[derive(Debug, Clone)]
pub struct PsychologicalBookingFlow {
    selection: Selection,
}

impl PsychologicalBookingFlow {
    pub fn new(times: Vec<String>, currency: &str, today: NaiveDate) -> Self {
        Self {
            selection: Selection::new(BookingKind::Psychological, times, currency, today),
        }
    }

    pub fn calendar(&self) -> &CalendarWidget {
        &self.selection.calendar
    }

    pub fn calendar_mut(&mut self) -> &mut CalendarWidget {
        &mut self.selection.calendar
    }

    pub fn picker(&self) -> &TimeSlotPicker {
        &self.selection.picker
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selection.date
    }

    pub fn selected_time(&self) -> Option<&str> {
        self.selection.time()
    }

    pub fn checkout_step(&self) -> CheckoutStep {
        self.selection.checkout_step()
    }

    /// Selecting a new date clears the time. Disabled dates are refused.
    pub fn select_date(
        &mut self,
        date: NaiveDate,
        today: NaiveDate,
        availability: &FlowAvailability,
    ) -> bool {
        self.selection.select_date(date, today, availability)
    }

    pub fn select_time(&mut self, time: &str, availability: &FlowAvailability) -> bool {
        self.selection.select_time(time, availability)
    }

    pub fn can_confirm(&self) -> bool {
        self.selection.date.is_some()
            && self.selection.time().is_some()
            && !self.selection.processing()
    }

    pub fn summary(&self) -> Option<CheckoutSummary> {
        let date = self.selection.date?;
        Some(CheckoutSummary {
            service_title: PSYCHOLOGICAL_SERVICE_TITLE.to_string(),
            tutor_name: None,
            date_label: checkout_date(date),
            time: self.selection.time()?.to_string(),
            amount: PSYCHOLOGICAL_SERVICE_PRICE,
            total: format_cop(PSYCHOLOGICAL_SERVICE_PRICE),
        })
    }

    /// Moves the checkout to `Processing` and returns the charge to send.
    pub fn begin_payment(&mut self) -> Result<ChargeRequest, BookingError> {
        if self.selection.date.is_none() {
            return Err(BookingError::Incomplete("date"));
        }
        if self.selection.time().is_none() {
            return Err(BookingError::Incomplete("time"));
        }
        self.selection
            .submit(PSYCHOLOGICAL_SERVICE_TITLE, PSYCHOLOGICAL_SERVICE_PRICE)
    }

    pub fn settle_payment(
        &mut self,
        result: Result<ChargeReceipt, PaymentError>,
    ) -> Result<(), BookingError> {
        self.selection.settle(result)
    }

    /// Closes a paid checkout and produces the booking to store. The page is
    /// reset for the next booking.
    pub fn finish(&mut self) -> Result<NewBooking, BookingError> {
        let (date, time) = self
            .selection
            .close_checkout()
            .ok_or(BookingError::Payment(PaymentError::NotProcessing))?;
        self.selection.reset();
        Ok(NewBooking {
            kind: BookingKind::Psychological,
            service_title: PSYCHOLOGICAL_SERVICE_TITLE.to_string(),
            date: date_key(date),
            time,
            tutor_name: None,
            price: PSYCHOLOGICAL_SERVICE_PRICE,
        })
    }

    /// Whole confirm sequence against a gateway.
    pub async fn confirm<P>(&mut self, gateway: &P) -> Result<NewBooking, BookingError>
    where
        P: PaymentService<Error = PaymentError> + ?Sized,
    {
        let charge = self.begin_payment()?;
        let result = gateway.charge(charge).await;
        self.settle_payment(result)?;
        self.finish()
    }
}

/// Academic support booking page, opened for one catalog service.
#[derive(Debug, Clone)]
pub struct AcademicBookingFlow {
    service: Option<Service>,
    tutors: Vec<Tutor>,
    tutor: Option<Tutor>,
    selection: Selection,
}

impl AcademicBookingFlow {
    /// Starts with no tutor chosen.
    pub fn new(
        service: Option<Service>,
        tutors: Vec<Tutor>,
        times: Vec<String>,
        currency: &str,
        today: NaiveDate,
    ) -> Self {
        Self {
            service,
            tutors,
            tutor: None,
            selection: Selection::new(BookingKind::Academic, times, currency, today),
        }
    }

    pub fn service(&self) -> Result<&Service, BookingError> {
        self.service.as_ref().ok_or(BookingError::ServiceNotSelected)
    }

    pub fn tutors(&self) -> &[Tutor] {
        &self.tutors
    }

    pub fn selected_tutor(&self) -> Option<&Tutor> {
        self.tutor.as_ref()
    }

    pub fn calendar(&self) -> &CalendarWidget {
        &self.selection.calendar
    }

    pub fn calendar_mut(&mut self) -> &mut CalendarWidget {
        &mut self.selection.calendar
    }

    pub fn picker(&self) -> &TimeSlotPicker {
        &self.selection.picker
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selection.date
    }

    pub fn selected_time(&self) -> Option<&str> {
        self.selection.time()
    }

    pub fn checkout_step(&self) -> CheckoutStep {
        self.selection.checkout_step()
    }

    pub fn select_tutor(&mut self, id: u32) -> Result<&Tutor, BookingError> {
        let tutor = self
            .tutors
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(BookingError::UnknownTutor(id))?;
        Ok(self.tutor.insert(tutor))
    }

    pub fn select_date(
        &mut self,
        date: NaiveDate,
        today: NaiveDate,
        availability: &FlowAvailability,
    ) -> bool {
        self.selection.select_date(date, today, availability)
    }

    pub fn select_time(&mut self, time: &str, availability: &FlowAvailability) -> bool {
        self.selection.select_time(time, availability)
    }

    pub fn can_confirm(&self) -> bool {
        self.service.is_some()
            && self.tutor.is_some()
            && self.selection.date.is_some()
            && self.selection.time().is_some()
            && !self.selection.processing()
    }

    pub fn summary(&self) -> Option<CheckoutSummary> {
        let service = self.service.as_ref()?;
        let date = self.selection.date?;
        Some(CheckoutSummary {
            service_title: service.title.clone(),
            tutor_name: self.tutor.as_ref().map(|t| t.name.clone()),
            date_label: checkout_date(date),
            time: self.selection.time()?.to_string(),
            amount: service.price,
            total: format_cop(service.price),
        })
    }

    pub fn begin_payment(&mut self) -> Result<ChargeRequest, BookingError> {
        let service = self.service()?.clone();
        if self.tutor.is_none() {
            return Err(BookingError::Incomplete("tutor"));
        }
        if self.selection.date.is_none() {
            return Err(BookingError::Incomplete("date"));
        }
        if self.selection.time().is_none() {
            return Err(BookingError::Incomplete("time"));
        }
        self.selection.submit(&service.title, service.price)
    }

    pub fn settle_payment(
        &mut self,
        result: Result<ChargeReceipt, PaymentError>,
    ) -> Result<(), BookingError> {
        self.selection.settle(result)
    }

    /// Closes a paid checkout and produces the booking, tutor name attached.
    /// Date and time are cleared; the tutor stays selected.
    pub fn finish(&mut self) -> Result<NewBooking, BookingError> {
        let service = self.service()?.clone();
        let tutor_name = self.tutor.as_ref().map(|t| t.name.clone());
        let (date, time) = self
            .selection
            .close_checkout()
            .ok_or(BookingError::Payment(PaymentError::NotProcessing))?;
        self.selection.reset();
        Ok(NewBooking {
            kind: BookingKind::Academic,
            service_title: service.title,
            date: date_key(date),
            time,
            tutor_name,
            price: service.price,
        })
    }

    pub async fn confirm<P>(&mut self, gateway: &P) -> Result<NewBooking, BookingError>
    where
        P: PaymentService<Error = PaymentError> + ?Sized,
    {
        let charge = self.begin_payment()?;
        let result = gateway.charge(charge).await;
        self.settle_payment(result)?;
        self.finish()
    }
}
