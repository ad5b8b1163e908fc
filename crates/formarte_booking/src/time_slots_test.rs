#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::time_slots::TimeSlotPicker;
    use crate::test_support::psychological_times;

    fn booked() -> HashSet<String> {
        HashSet::from(["2024-01-15-18:00".to_string()])
    }

    #[test]
    fn booked_labels_are_disabled_for_their_date_only() {
        let picker = TimeSlotPicker::new(psychological_times());
        let cells = picker.cells("2024-01-15", &booked());
        let disabled: Vec<_> = cells.iter().filter(|c| c.disabled).map(|c| c.time.as_str()).collect();
        assert_eq!(disabled, vec!["18:00"]);

        let other_day = picker.cells("2024-01-16", &booked());
        assert!(other_day.iter().all(|c| !c.disabled));
    }

    #[test]
    fn one_active_label_at_a_time() {
        let mut picker = TimeSlotPicker::new(psychological_times());
        assert!(picker.select("2024-01-15", "17:00", &booked(), |_| {}));
        assert!(picker.select("2024-01-15", "19:00", &booked(), |_| {}));
        let cells = picker.cells("2024-01-15", &booked());
        let active: Vec<_> = cells.iter().filter(|c| c.active).map(|c| c.time.as_str()).collect();
        assert_eq!(active, vec!["19:00"]);
    }

    #[test]
    fn selecting_booked_label_changes_nothing() {
        let mut picker = TimeSlotPicker::new(psychological_times());
        picker.select("2024-01-15", "17:00", &booked(), |_| {});

        let mut calls = 0;
        assert!(!picker.select("2024-01-15", "18:00", &booked(), |_| calls += 1));
        assert!(!picker.select("2024-01-15", "09:00", &booked(), |_| calls += 1));
        assert_eq!(calls, 0);
        assert_eq!(picker.active(), Some("17:00"));
    }

    #[test]
    fn clear_drops_active_label() {
        let mut picker = TimeSlotPicker::new(psychological_times());
        picker.select("2024-01-15", "20:00", &booked(), |_| {});
        picker.clear();
        assert_eq!(picker.active(), None);
    }
}
