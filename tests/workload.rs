#[cfg(test)]
mod tests {
    use chrono::{Days, NaiveDate, NaiveTime};
    use sitelog::libs::entry::WorkEntry;
    use sitelog::libs::report::workload::{analyze, UNASSIGNED};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    fn entry(project: &str, activity: &str, assignee: &str, status: &str, hours: f64) -> WorkEntry {
        let mut entry = WorkEntry::new(None, project, today().and_hms_opt(9, 0, 0).unwrap(), activity, assignee, hours);
        entry.final_status = status.to_string();
        entry
    }

    #[test]
    fn test_per_assignee_totals() {
        let entries = vec![
            entry("Tower A", "Rebar", "Alice", "Completed", 4.0),
            entry("Tower A", "Formwork", "Alice", "Ongoing", 2.5),
            entry("Bridge B", "Survey", "Alice", "Not Started", 1.0),
            entry("Tower A", "Concrete", "Bob", "Ongoing", 8.0),
        ];
        let report = analyze(&entries, today());

        assert_eq!(report.rows.len(), 2);
        let alice = &report.rows[0];
        assert_eq!(alice.assignee, "Alice");
        assert_eq!(alice.total_tasks, 3);
        assert_eq!(alice.total_hours, 7.5);
        assert_eq!(alice.completed_tasks, 1);
        assert_eq!(alice.ongoing_tasks, 1);
        assert_eq!(alice.not_started_tasks, 1);
        assert_eq!(alice.projects.len(), 2);
        assert_eq!(alice.projects["Tower A"], 2);

        assert_eq!(report.total_tasks, 4);
        assert_eq!(report.total_hours, 15.5);
    }

    #[test]
    fn test_blank_assignee_folds_into_unassigned() {
        let entries = vec![entry("Tower A", "Cleanup", "", "Ongoing", 1.0), entry("Tower A", "Cleanup", "   ", "Ongoing", 1.0)];
        let report = analyze(&entries, today());
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].assignee, UNASSIGNED);
        assert_eq!(report.rows[0].total_tasks, 2);
    }

    #[test]
    fn test_overdue_and_upcoming_tallies() {
        let mut overdue = entry("Tower A", "Late work", "Alice", "Ongoing", 1.0);
        overdue.target_date = Some((today() - Days::new(2)).and_time(NaiveTime::MIN));
        let mut upcoming = entry("Tower A", "Soon", "Alice", "Ongoing", 1.0);
        upcoming.target_date = Some((today() + Days::new(3)).and_time(NaiveTime::MIN));
        // Completed entries never count as overdue even with a past target.
        let mut done = entry("Tower A", "Done", "Alice", "Completed", 1.0);
        done.target_date = Some((today() - Days::new(5)).and_time(NaiveTime::MIN));

        let report = analyze(&[overdue, upcoming, done], today());
        let alice = &report.rows[0];
        assert_eq!(alice.overdue_tasks, 1);
        assert_eq!(alice.upcoming_deadlines, 1);
    }

    #[test]
    fn test_rows_sorted_by_task_count_descending() {
        let entries = vec![
            entry("Tower A", "One", "Bob", "Ongoing", 1.0),
            entry("Tower A", "Two", "Alice", "Ongoing", 1.0),
            entry("Tower A", "Three", "Alice", "Ongoing", 1.0),
        ];
        let report = analyze(&entries, today());
        assert_eq!(report.rows[0].assignee, "Alice");
        assert_eq!(report.rows[1].assignee, "Bob");
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let entries = vec![
            entry("Tower A", "One", "Bob", "Ongoing", 1.0),
            entry("Tower A", "Two", "Alice", "Ongoing", 1.0),
        ];
        let report = analyze(&entries, today());
        assert_eq!(report.rows[0].assignee, "Bob");
        assert_eq!(report.rows[1].assignee, "Alice");
    }

    #[test]
    fn test_recent_activities_capped_at_five() {
        let entries: Vec<WorkEntry> = (0..8).map(|i| entry("Tower A", &format!("Activity {}", i), "Alice", "Ongoing", 1.0)).collect();
        let report = analyze(&entries, today());
        let alice = &report.rows[0];
        assert_eq!(alice.total_tasks, 8);
        assert_eq!(alice.recent_activities.len(), 5);
        // First-seen order over the input slice.
        assert_eq!(alice.recent_activities[0].activity, "Activity 0");
        assert_eq!(alice.recent_activities[4].activity, "Activity 4");
    }
}
