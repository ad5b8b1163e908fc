#[cfg(test)]
mod tests {
    use crate::error::BookingError;
    use crate::lifecycle::{can_cancel, cancel, display_status, is_past};
    use crate::models::{BookingKind, BookingStatus, DisplayStatus};
    use crate::my_bookings::{BookingCard, MyBookingsView};
    use crate::test_support::{booking, day, upcoming};

    #[test]
    fn display_status_depends_on_today() {
        let today = day(2024, 1, 15);
        let b = upcoming("1", "2024-01-14", "18:00");
        assert!(is_past(&b, today));
        assert_eq!(display_status(&b, today), DisplayStatus::Completed);

        let b = upcoming("2", "2024-01-15", "18:00");
        assert!(!is_past(&b, today));
        assert_eq!(display_status(&b, today), DisplayStatus::Upcoming);

        let b = booking(
            "3",
            BookingKind::Psychological,
            "2024-02-01",
            "18:00",
            BookingStatus::Cancelled,
        );
        assert_eq!(display_status(&b, today), DisplayStatus::Cancelled);
        assert_eq!(DisplayStatus::Cancelled.label(), "Cancelada");
    }

    #[test]
    fn unreadable_dates_are_never_past() {
        let today = day(2024, 1, 15);
        let b = upcoming("1", "mañana", "18:00");
        assert!(!is_past(&b, today));
        assert!(can_cancel(&b, today));
    }

    #[test]
    fn cancel_only_from_upcoming() {
        let today = day(2024, 1, 15);

        let mut b = upcoming("1", "2024-01-20", "18:00");
        cancel(&mut b, today).unwrap();
        assert_eq!(b.status, BookingStatus::Cancelled);

        let err = cancel(&mut b, today).unwrap_err();
        assert!(matches!(err, BookingError::NotCancellable(id) if id == "1"));

        let mut past = upcoming("2", "2024-01-10", "18:00");
        assert!(cancel(&mut past, today).is_err());
        assert_eq!(past.status, BookingStatus::Upcoming);
    }

    #[test]
    fn card_labels() {
        let today = day(2024, 1, 10);
        let card = BookingCard::new(upcoming("1", "2024-01-15", "18:00"), today);
        assert_eq!(card.kind_label, "Apoyo Psicológico");
        assert_eq!(card.status_label, "Próxima");
        assert_eq!(card.when, "lunes, 15 de enero a las 18:00");
        assert!(card.can_cancel);

        let academic = booking(
            "2",
            BookingKind::Academic,
            "2024-01-05",
            "09:00",
            BookingStatus::Upcoming,
        );
        let card = BookingCard::new(academic, today);
        assert_eq!(card.kind_label, "Apoyo Académico");
        assert_eq!(card.status_label, "Completada");
        assert!(!card.can_cancel);
    }

    #[test]
    fn my_bookings_split_and_sort() {
        let today = day(2024, 1, 15);
        let bookings = vec![
            upcoming("a", "2024-01-10", "17:00"),
            upcoming("b", "2024-01-20", "17:00"),
            booking(
                "c",
                BookingKind::Psychological,
                "2024-01-25",
                "18:00",
                BookingStatus::Cancelled,
            ),
            upcoming("d", "2024-01-30", "19:00"),
            upcoming("e", "2024-01-20", "20:00"),
        ];

        let view = MyBookingsView::build(bookings, today);
        assert!(!view.empty);

        let upcoming_ids: Vec<_> = view.upcoming.iter().map(|c| c.booking.id.as_str()).collect();
        assert_eq!(upcoming_ids, vec!["d", "b", "e"]);

        let history_ids: Vec<_> = view.history.iter().map(|c| c.booking.id.as_str()).collect();
        assert_eq!(history_ids, vec!["c", "a"]);
        assert_eq!(view.history[1].status_label, "Completada");
    }

    #[test]
    fn no_bookings_is_empty() {
        let view = MyBookingsView::build(Vec::new(), day(2024, 1, 15));
        assert!(view.empty);
        assert!(view.upcoming.is_empty() && view.history.is_empty());
    }
}
