#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::availability::{booked_slot_keys, fully_booked_dates, slot_key};
    use crate::models::{Booking, BookingKind, BookingStatus};
    use crate::test_support::booking;
    use proptest::prelude::*;

    const TIMES: [&str; 4] = ["17:00", "18:00", "19:00", "20:00"];

    fn arb_status() -> impl Strategy<Value = BookingStatus> {
        prop_oneof![
            Just(BookingStatus::Upcoming),
            Just(BookingStatus::Completed),
            Just(BookingStatus::Cancelled),
        ]
    }

    fn arb_booking() -> impl Strategy<Value = Booking> {
        (1u32..=5, 0usize..TIMES.len(), arb_status(), any::<bool>()).prop_map(
            |(day, time, status, academic)| {
                let kind = if academic {
                    BookingKind::Academic
                } else {
                    BookingKind::Psychological
                };
                booking(
                    "x",
                    kind,
                    &format!("2024-04-{:02}", day),
                    TIMES[time],
                    status,
                )
            },
        )
    }

    fn arb_bookings_and_shuffle() -> impl Strategy<Value = (Vec<Booking>, Vec<Booking>)> {
        prop::collection::vec(arb_booking(), 0..30).prop_flat_map(|bookings| {
            let shuffled = Just(bookings.clone()).prop_shuffle();
            (Just(bookings), shuffled)
        })
    }

    proptest! {
        // The key set is exactly the (date, time) pairs of upcoming bookings
        #[test]
        fn test_keys_match_upcoming_bookings(bookings in prop::collection::vec(arb_booking(), 0..30)) {
            let keys = booked_slot_keys(&bookings);
            let expected: HashSet<String> = bookings
                .iter()
                .filter(|b| b.status == BookingStatus::Upcoming)
                .map(|b| slot_key(&b.date, &b.time))
                .collect();
            prop_assert_eq!(keys, expected);
        }

        // Reordering the input never changes the result
        #[test]
        fn test_keys_are_order_insensitive((bookings, shuffled) in arb_bookings_and_shuffle()) {
            prop_assert_eq!(booked_slot_keys(&bookings), booked_slot_keys(&shuffled));
            prop_assert_eq!(
                fully_booked_dates(&booked_slot_keys(&bookings), TIMES.len()),
                fully_booked_dates(&booked_slot_keys(&shuffled), TIMES.len())
            );
        }

        // A date is full iff its distinct upcoming slot count reaches the limit
        #[test]
        fn test_full_dates_follow_counts(
            bookings in prop::collection::vec(arb_booking(), 0..40),
            slot_count in 1usize..=4,
        ) {
            let keys = booked_slot_keys(&bookings);
            let full = fully_booked_dates(&keys, slot_count);
            for day in 1..=5u32 {
                let date = format!("2024-04-{:02}", day);
                let count = keys.iter().filter(|k| k.starts_with(&date)).count();
                prop_assert_eq!(full.contains(&date), count >= slot_count);
            }
        }
    }
}
