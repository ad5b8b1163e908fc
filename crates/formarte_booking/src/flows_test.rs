#[cfg(test)]
mod tests {
    use std::time::Duration;

    use formarte_common::ChargeReceipt;
    use formarte_payment::{CheckoutStep, PaymentError, SimulatedPaymentService};

    use crate::availability::FlowAvailability;
    use crate::catalog::{find_service, tutors};
    use crate::error::BookingError;
    use crate::flows::{AcademicBookingFlow, PsychologicalBookingFlow};
    use crate::models::{BookingKind, BookingStatus};
    use crate::test_support::{academic_times, booking, day, psychological_times, upcoming};

    fn gateway() -> SimulatedPaymentService {
        SimulatedPaymentService::with_delay(Duration::ZERO, "COP")
    }

    fn receipt(amount: u64) -> ChargeReceipt {
        ChargeReceipt {
            id: "sim_test".to_string(),
            status: "succeeded".to_string(),
            amount,
            currency: "COP".to_string(),
        }
    }

    fn academic_flow() -> AcademicBookingFlow {
        AcademicBookingFlow::new(
            find_service("Asistencia con Tareas").ok(),
            tutors(),
            academic_times(),
            "COP",
            day(2024, 1, 15),
        )
    }

    #[test]
    fn changing_the_date_clears_the_time() {
        let today = day(2024, 1, 15);
        let none = FlowAvailability::default();
        let mut flow = PsychologicalBookingFlow::new(psychological_times(), "COP", today);

        assert!(flow.select_date(day(2024, 1, 16), today, &none));
        assert!(flow.select_time("18:00", &none));
        assert_eq!(flow.selected_time(), Some("18:00"));

        assert!(flow.select_date(day(2024, 1, 17), today, &none));
        assert_eq!(flow.selected_date(), Some(day(2024, 1, 17)));
        assert_eq!(flow.selected_time(), None);
        assert!(!flow.can_confirm());
    }

    #[test]
    fn past_and_full_dates_are_refused() {
        let today = day(2024, 1, 15);
        let bookings: Vec<_> = psychological_times()
            .iter()
            .map(|t| upcoming(t, "2024-01-18", t))
            .collect();
        let availability =
            FlowAvailability::compute(BookingKind::Psychological, &bookings, &psychological_times());
        let mut flow = PsychologicalBookingFlow::new(psychological_times(), "COP", today);

        assert!(!flow.select_date(day(2024, 1, 14), today, &availability));
        assert!(!flow.select_date(day(2024, 1, 18), today, &availability));
        assert_eq!(flow.selected_date(), None);
        assert!(flow.select_date(today, today, &availability));
    }

    #[test]
    fn booked_time_is_refused() {
        let today = day(2024, 1, 15);
        let bookings = vec![upcoming("1", "2024-01-16", "19:00")];
        let availability =
            FlowAvailability::compute(BookingKind::Psychological, &bookings, &psychological_times());
        let mut flow = PsychologicalBookingFlow::new(psychological_times(), "COP", today);

        flow.select_date(day(2024, 1, 16), today, &availability);
        assert!(!flow.select_time("19:00", &availability));
        assert_eq!(flow.selected_time(), None);
        assert!(flow.select_time("20:00", &availability));
    }

    #[test]
    fn time_without_date_is_ignored() {
        let mut flow =
            PsychologicalBookingFlow::new(psychological_times(), "COP", day(2024, 1, 15));
        assert!(!flow.select_time("17:00", &FlowAvailability::default()));
        assert!(matches!(
            flow.begin_payment(),
            Err(BookingError::Incomplete("date"))
        ));
    }

    #[test]
    fn processing_disables_confirm() {
        let today = day(2024, 1, 15);
        let none = FlowAvailability::default();
        let mut flow = PsychologicalBookingFlow::new(psychological_times(), "COP", today);
        flow.select_date(day(2024, 1, 16), today, &none);
        flow.select_time("17:00", &none);
        assert!(flow.can_confirm());

        let charge = flow.begin_payment().unwrap();
        assert_eq!(charge.amount, 0);
        assert_eq!(flow.checkout_step(), CheckoutStep::Processing);
        assert!(!flow.can_confirm());
        assert!(matches!(
            flow.begin_payment(),
            Err(BookingError::Payment(PaymentError::AlreadyProcessing))
        ));

        flow.settle_payment(Ok(receipt(0))).unwrap();
        assert_eq!(flow.checkout_step(), CheckoutStep::Paid);
        let draft = flow.finish().unwrap();
        assert_eq!(draft.date, "2024-01-16");
        assert_eq!(draft.time, "17:00");
        assert_eq!(flow.selected_date(), None);
        assert_eq!(flow.checkout_step(), CheckoutStep::Idle);
    }

    #[test]
    fn failed_charge_returns_to_idle() {
        let today = day(2024, 1, 15);
        let none = FlowAvailability::default();
        let mut flow = PsychologicalBookingFlow::new(psychological_times(), "COP", today);
        flow.select_date(day(2024, 1, 16), today, &none);
        flow.select_time("17:00", &none);
        flow.begin_payment().unwrap();

        let result = flow.settle_payment(Err(PaymentError::Declined("test".to_string())));
        assert!(result.is_err());
        assert_eq!(flow.checkout_step(), CheckoutStep::Idle);
        assert!(flow.can_confirm());
        assert!(flow.finish().is_err());
    }

    #[test]
    fn psychological_summary_is_free() {
        let today = day(2024, 1, 15);
        let none = FlowAvailability::default();
        let mut flow = PsychologicalBookingFlow::new(psychological_times(), "COP", today);
        flow.select_date(today, today, &none);
        flow.select_time("20:00", &none);

        let summary = flow.summary().unwrap();
        assert_eq!(summary.service_title, "Sesión de Apoyo Psicológico");
        assert_eq!(summary.date_label, "15 de enero de 2024");
        assert_eq!(summary.total, "$ 0");
        assert_eq!(summary.tutor_name, None);
    }

    #[test]
    fn academic_confirm_requires_a_tutor() {
        let today = day(2024, 1, 15);
        let none = FlowAvailability::default();
        let mut flow = academic_flow();
        assert!(flow.selected_tutor().is_none());

        flow.select_date(day(2024, 1, 16), today, &none);
        flow.select_time("10:00", &none);
        assert!(!flow.can_confirm());
        assert!(matches!(
            flow.begin_payment(),
            Err(BookingError::Incomplete("tutor"))
        ));

        flow.select_tutor(2).unwrap();
        assert!(flow.can_confirm());
        let summary = flow.summary().unwrap();
        assert_eq!(summary.total, "$ 3.500");
        assert_eq!(summary.tutor_name.as_deref(), Some("Cristian Portilla"));
    }

    #[test]
    fn unknown_tutor_is_rejected() {
        let mut flow = academic_flow();
        assert!(matches!(
            flow.select_tutor(99),
            Err(BookingError::UnknownTutor(99))
        ));
        assert!(flow.selected_tutor().is_none());
    }

    #[test]
    fn academic_flow_without_service() {
        let mut flow = AcademicBookingFlow::new(
            None,
            tutors(),
            academic_times(),
            "COP",
            day(2024, 1, 15),
        );
        let err = flow.service().unwrap_err();
        assert_eq!(err.to_string(), "Servicio no seleccionado");
        assert!(!flow.can_confirm());
        assert!(matches!(
            flow.begin_payment(),
            Err(BookingError::ServiceNotSelected)
        ));
    }

    #[test]
    fn academic_dates_stay_open_when_every_time_is_taken() {
        let today = day(2024, 1, 15);
        let bookings: Vec<_> = academic_times()
            .iter()
            .map(|t| booking(t, BookingKind::Academic, "2024-01-16", t, BookingStatus::Upcoming))
            .collect();
        let availability =
            FlowAvailability::compute(BookingKind::Academic, &bookings, &academic_times());
        let mut flow = academic_flow();

        assert!(flow.select_date(day(2024, 1, 16), today, &availability));
        assert!(!flow.select_time("09:00", &availability));
    }

    #[tokio::test]
    async fn academic_confirm_carries_tutor_name() {
        let today = day(2024, 1, 15);
        let none = FlowAvailability::default();
        let mut flow = academic_flow();
        flow.select_tutor(3).unwrap();
        flow.select_date(day(2024, 1, 20), today, &none);
        flow.select_time("14:00", &none);

        let draft = flow.confirm(&gateway()).await.unwrap();
        assert_eq!(draft.kind, BookingKind::Academic);
        assert_eq!(draft.service_title, "Asistencia con Tareas");
        assert_eq!(draft.tutor_name.as_deref(), Some("Paula Salcedo"));
        assert_eq!(draft.price, 3500);
        assert_eq!(draft.date, "2024-01-20");

        // Tutor survives, date and time do not.
        assert_eq!(flow.selected_tutor().map(|t| t.id), Some(3));
        assert_eq!(flow.selected_date(), None);
        assert_eq!(flow.selected_time(), None);
    }

    #[tokio::test]
    async fn psychological_confirm_runs_the_free_checkout() {
        let today = day(2024, 1, 15);
        let none = FlowAvailability::default();
        let mut flow = PsychologicalBookingFlow::new(psychological_times(), "COP", today);
        flow.select_date(day(2024, 1, 16), today, &none);
        flow.select_time("18:00", &none);

        let draft = flow.confirm(&gateway()).await.unwrap();
        assert_eq!(draft.kind, BookingKind::Psychological);
        assert_eq!(draft.price, 0);
        assert_eq!(draft.tutor_name, None);
    }

    #[tokio::test]
    async fn currency_mismatch_aborts_checkout() {
        let today = day(2024, 1, 15);
        let none = FlowAvailability::default();
        let mut flow = PsychologicalBookingFlow::new(psychological_times(), "USD", today);
        flow.select_date(day(2024, 1, 16), today, &none);
        flow.select_time("18:00", &none);

        let err = flow.confirm(&gateway()).await.unwrap_err();
        assert!(matches!(
            err,
            BookingError::Payment(PaymentError::UnsupportedCurrency(_))
        ));
        assert_eq!(flow.checkout_step(), CheckoutStep::Idle);
        assert_eq!(flow.selected_time(), Some("18:00"));
    }
}
