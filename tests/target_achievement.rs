#[cfg(test)]
mod tests {
    use chrono::{Days, NaiveDate, NaiveTime};
    use sitelog::libs::entry::WorkEntry;
    use sitelog::libs::master::Project;
    use sitelog::libs::report::target::{analyze, UNKNOWN_PROJECT};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    fn project(id: i64, name: &str) -> Project {
        Project {
            id: Some(id),
            name: name.to_string(),
            client: String::new(),
            manager: String::new(),
            location: String::new(),
            timeline: String::new(),
        }
    }

    fn entry(project_id: Option<i64>, project_name: &str, status: &str, hours: f64) -> WorkEntry {
        let mut entry = WorkEntry::new(
            project_id,
            project_name,
            today().and_hms_opt(9, 0, 0).unwrap(),
            "Activity",
            "Alice",
            hours,
        );
        entry.final_status = status.to_string();
        entry
    }

    #[test]
    fn test_achievement_rate_rounding() {
        let entries = vec![
            entry(Some(1), "Tower A", "Completed", 2.0),
            entry(Some(1), "Tower A", "Ongoing", 1.0),
            entry(Some(1), "Tower A", "Not Started", 1.0),
        ];
        let rows = analyze(&entries, &[project(1, "Tower A")], today());
        assert_eq!(rows.len(), 1);
        // round(1/3 * 100) = 33
        assert_eq!(rows[0].achievement_rate, 33);
        assert_eq!(rows[0].completed_hours, 2.0);
        assert_eq!(rows[0].total_hours, 4.0);
    }

    #[test]
    fn test_zero_entry_project_still_appears() {
        let rows = analyze(&[], &[project(7, "Silent Site")], today());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].project_name, "Silent Site");
        assert_eq!(rows[0].total_tasks, 0);
        assert_eq!(rows[0].achievement_rate, 0);
    }

    #[test]
    fn test_entries_without_project_fall_back_to_name() {
        let entries = vec![entry(None, "Adhoc Works", "Completed", 1.0)];
        let rows = analyze(&entries, &[], today());
        assert_eq!(rows[0].project_name, "Adhoc Works");
        assert_eq!(rows[0].project_id, None);
    }

    #[test]
    fn test_entries_with_no_identity_bucket_as_unknown() {
        let entries = vec![entry(None, "", "Ongoing", 1.0), entry(None, "  ", "Ongoing", 1.0)];
        let rows = analyze(&entries, &[], today());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].project_name, UNKNOWN_PROJECT);
        assert_eq!(rows[0].total_tasks, 2);
    }

    #[test]
    fn test_delayed_requires_past_target_and_incomplete() {
        let mut late = entry(Some(1), "Tower A", "Ongoing", 1.0);
        late.target_date = Some((today() - Days::new(2)).and_time(NaiveTime::MIN));
        let mut done_late = entry(Some(1), "Tower A", "Completed", 1.0);
        done_late.target_date = Some((today() - Days::new(2)).and_time(NaiveTime::MIN));
        let mut future = entry(Some(1), "Tower A", "Ongoing", 1.0);
        future.target_date = Some((today() + Days::new(2)).and_time(NaiveTime::MIN));

        let rows = analyze(&[late, done_late, future], &[project(1, "Tower A")], today());
        assert_eq!(rows[0].tasks_with_target, 3);
        assert_eq!(rows[0].tasks_delayed, 1);
        // Completed counts as on-target regardless of when it finished.
        assert_eq!(rows[0].tasks_on_target, 1);
    }

    #[test]
    fn test_rows_sorted_by_achievement_rate_descending() {
        let entries = vec![
            entry(Some(1), "Low", "Ongoing", 1.0),
            entry(Some(2), "High", "Completed", 1.0),
        ];
        let rows = analyze(&entries, &[project(1, "Low"), project(2, "High")], today());
        assert_eq!(rows[0].project_name, "High");
        assert_eq!(rows[0].achievement_rate, 100);
        assert_eq!(rows[1].project_name, "Low");
    }
}
