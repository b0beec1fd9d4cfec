#[cfg(test)]
mod tests {
    use chrono::{Days, NaiveDate, NaiveTime};
    use sitelog::libs::entry::WorkEntry;
    use sitelog::libs::report::delay::analyze;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    fn entry_with_target(activity: &str, status: &str, target: NaiveDate) -> WorkEntry {
        let mut entry = WorkEntry::new(
            Some(1),
            "Tower A",
            today().and_hms_opt(9, 0, 0).unwrap(),
            activity,
            "Alice",
            2.0,
        );
        entry.final_status = status.to_string();
        entry.target_date = Some(target.and_time(NaiveTime::MIN));
        entry
    }

    #[test]
    fn test_buckets_are_mutually_exclusive() {
        let entries = vec![
            entry_with_target("overdue", "Ongoing", today() - Days::new(3)),
            entry_with_target("due today", "Ongoing", today()),
            entry_with_target("upcoming", "Ongoing", today() + Days::new(5)),
        ];
        let analysis = analyze(&entries, today());
        assert_eq!(analysis.overdue_count(), 1);
        assert_eq!(analysis.due_today_count(), 1);
        assert_eq!(analysis.upcoming_count(), 1);
        assert_eq!(analysis.overdue[0].activity, "overdue");
        assert_eq!(analysis.due_today[0].activity, "due today");
        assert_eq!(analysis.upcoming[0].activity, "upcoming");
    }

    #[test]
    fn test_completed_entries_are_excluded() {
        let entries = vec![entry_with_target("done late", "Completed", today() - Days::new(10))];
        let analysis = analyze(&entries, today());
        assert_eq!(analysis.overdue_count(), 0);
        assert_eq!(analysis.due_today_count(), 0);
        assert_eq!(analysis.upcoming_count(), 0);
    }

    #[test]
    fn test_entries_without_target_are_excluded() {
        let mut entry = entry_with_target("no target", "Ongoing", today());
        entry.target_date = None;
        let analysis = analyze(&[entry], today());
        assert_eq!(analysis.due_today_count(), 0);
    }

    #[test]
    fn test_beyond_window_is_excluded() {
        let entries = vec![
            entry_with_target("edge of window", "Ongoing", today() + Days::new(7)),
            entry_with_target("past window", "Ongoing", today() + Days::new(8)),
        ];
        let analysis = analyze(&entries, today());
        assert_eq!(analysis.upcoming_count(), 1);
        assert_eq!(analysis.upcoming[0].activity, "edge of window");
    }

    #[test]
    fn test_delay_percentage_for_overdue() {
        // 3 days pending: round(3/4 * 100) = 75.
        let entries = vec![entry_with_target("late", "Ongoing", today() - Days::new(3))];
        let analysis = analyze(&entries, today());
        let task = &analysis.overdue[0];
        assert_eq!(task.days_diff, -3);
        assert_eq!(task.pending_since_days, 3);
        assert_eq!(task.delay_percentage, 75);
    }

    #[test]
    fn test_delay_percentage_zero_when_not_overdue() {
        let entries = vec![entry_with_target("soon", "Ongoing", today() + Days::new(2))];
        let analysis = analyze(&entries, today());
        assert_eq!(analysis.upcoming[0].delay_percentage, 0);
    }

    #[test]
    fn test_overdue_sorted_most_overdue_first() {
        let entries = vec![
            entry_with_target("one day late", "Ongoing", today() - Days::new(1)),
            entry_with_target("five days late", "Ongoing", today() - Days::new(5)),
        ];
        let analysis = analyze(&entries, today());
        assert_eq!(analysis.overdue[0].activity, "five days late");
        assert_eq!(analysis.overdue[1].activity, "one day late");
    }

    #[test]
    fn test_upcoming_sorted_soonest_first() {
        let entries = vec![
            entry_with_target("in six days", "Ongoing", today() + Days::new(6)),
            entry_with_target("tomorrow", "Ongoing", today() + Days::new(1)),
        ];
        let analysis = analyze(&entries, today());
        assert_eq!(analysis.upcoming[0].activity, "tomorrow");
    }

    #[test]
    fn test_time_of_day_never_shifts_buckets() {
        let mut entry = entry_with_target("due today", "Ongoing", today());
        entry.target_date = Some(today().and_hms_opt(23, 59, 0).unwrap());
        let analysis = analyze(&[entry], today());
        assert_eq!(analysis.due_today_count(), 1);
        assert_eq!(analysis.overdue_count(), 0);
    }
}
