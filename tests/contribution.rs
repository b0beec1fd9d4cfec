#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sitelog::libs::entry::WorkEntry;
    use sitelog::libs::report::contribution::analyze;

    fn entry(project: &str, assignee: &str, status: &str, hours: f64) -> WorkEntry {
        let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let mut entry = WorkEntry::new(None, project, date, "Activity", assignee, hours);
        entry.final_status = status.to_string();
        entry
    }

    #[test]
    fn test_score_formula() {
        // 1 completed task (10) + 2.0 completed hours (4) + 2 projects (10) = 24
        let entries = vec![
            entry("Tower A", "Alice", "Completed", 2.0),
            entry("Bridge B", "Alice", "Ongoing", 3.0),
        ];
        let rows = analyze(&entries);
        assert_eq!(rows.len(), 1);
        let alice = &rows[0];
        assert_eq!(alice.completed_tasks, 1);
        assert_eq!(alice.completed_hours, 2.0);
        assert_eq!(alice.projects_count, 2);
        assert_eq!(alice.contribution_score, 24);
    }

    #[test]
    fn test_rounding_happens_on_final_sum_only() {
        // completed_hours 1.3 -> 10 + 2.6 + 5 = 17.6 -> 18
        let entries = vec![entry("Tower A", "Alice", "Completed", 1.3)];
        let rows = analyze(&entries);
        assert_eq!(rows[0].contribution_score, 18);
    }

    #[test]
    fn test_average_hours_per_task() {
        let entries = vec![entry("Tower A", "Alice", "Ongoing", 2.0), entry("Tower A", "Alice", "Ongoing", 3.0)];
        let rows = analyze(&entries);
        assert_eq!(rows[0].average_hours_per_task, 2.5);
    }

    #[test]
    fn test_only_completed_work_scores() {
        // No completed tasks: score comes from project breadth alone.
        let entries = vec![entry("Tower A", "Bob", "Ongoing", 8.0)];
        let rows = analyze(&entries);
        assert_eq!(rows[0].contribution_score, 5);
    }

    #[test]
    fn test_rows_sorted_by_score_descending() {
        let entries = vec![
            entry("Tower A", "Bob", "Ongoing", 1.0),
            entry("Tower A", "Alice", "Completed", 1.0),
        ];
        let rows = analyze(&entries);
        assert_eq!(rows[0].assignee, "Alice");
        assert_eq!(rows[1].assignee, "Bob");
    }

    #[test]
    fn test_score_ties_keep_encounter_order() {
        let entries = vec![
            entry("Tower A", "Bob", "Ongoing", 1.0),
            entry("Tower A", "Alice", "Ongoing", 2.0),
        ];
        let rows = analyze(&entries);
        // Both score 5 (one project each); Bob was seen first.
        assert_eq!(rows[0].assignee, "Bob");
        assert_eq!(rows[1].assignee, "Alice");
    }

    #[test]
    fn test_recent_projects_are_distinct_and_capped() {
        let mut entries = Vec::new();
        for i in 0..7 {
            entries.push(entry(&format!("Project {}", i), "Alice", "Ongoing", 1.0));
        }
        // Repeat of an already-seen project must not duplicate.
        entries.push(entry("Project 0", "Alice", "Ongoing", 1.0));

        let rows = analyze(&entries);
        assert_eq!(rows[0].projects_count, 7);
        assert_eq!(rows[0].recent_projects.len(), 5);
        assert_eq!(rows[0].recent_projects[0], "Project 0");
    }
}
