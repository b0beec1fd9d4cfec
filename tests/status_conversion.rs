#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use sitelog::libs::entry::{StatusUpdate, WorkEntry};
    use sitelog::libs::report::conversion::analyze;

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    fn update(note: &str, timestamp: NaiveDateTime) -> StatusUpdate {
        StatusUpdate {
            note: note.to_string(),
            timestamp,
            updated_by: "Alice".to_string(),
        }
    }

    fn entry_with_updates(activity: &str, updates: Vec<StatusUpdate>) -> WorkEntry {
        let mut entry = WorkEntry::new(Some(1), "Tower A", at(1, 9), activity, "Alice", 1.0);
        entry.status_updates = updates;
        entry
    }

    #[test]
    fn test_consecutive_pairs_become_records() {
        let entry = entry_with_updates(
            "Rebar",
            vec![update("Not Started", at(1, 9)), update("Ongoing", at(2, 9)), update("Completed", at(3, 9))],
        );
        let report = analyze(&[entry]);
        assert_eq!(report.total_conversions, 2);
        assert_eq!(report.matrix["Not Started"]["Ongoing"], 1);
        assert_eq!(report.matrix["Ongoing"]["Completed"], 1);
    }

    #[test]
    fn test_record_timestamp_is_the_destination_update() {
        let entry = entry_with_updates("Rebar", vec![update("Not Started", at(1, 9)), update("Ongoing", at(2, 9))]);
        let report = analyze(&[entry]);
        assert_eq!(report.records[0].timestamp, at(2, 9));
        assert_eq!(report.records[0].from_label, "Not Started");
        assert_eq!(report.records[0].to_label, "Ongoing");
    }

    #[test]
    fn test_fewer_than_two_updates_contribute_nothing() {
        let none = entry_with_updates("Empty", vec![]);
        let one = entry_with_updates("Single", vec![update("Ongoing", at(1, 9))]);
        let report = analyze(&[none, one]);
        assert_eq!(report.total_conversions, 0);
        assert!(report.records.is_empty());
        assert!(report.matrix.is_empty());
    }

    #[test]
    fn test_matrix_counts_sum_to_total() {
        let a = entry_with_updates(
            "A",
            vec![update("Not Started", at(1, 9)), update("Ongoing", at(2, 9)), update("On Hold", at(3, 9))],
        );
        let b = entry_with_updates("B", vec![update("Not Started", at(1, 10)), update("Ongoing", at(2, 10))]);
        let report = analyze(&[a, b]);

        let matrix_sum: u64 = report.matrix.values().flat_map(|targets| targets.values()).sum();
        assert_eq!(matrix_sum, report.total_conversions as u64);
        assert_eq!(report.matrix["Not Started"]["Ongoing"], 2);
    }

    #[test]
    fn test_records_sorted_most_recent_first() {
        let a = entry_with_updates("Old", vec![update("Not Started", at(1, 9)), update("Ongoing", at(2, 9))]);
        let b = entry_with_updates("New", vec![update("Not Started", at(5, 9)), update("Ongoing", at(6, 9))]);
        let report = analyze(&[a, b]);
        assert_eq!(report.records[0].activity, "New");
        assert_eq!(report.records[1].activity, "Old");
    }

    #[test]
    fn test_display_cap_preserves_true_total() {
        // 60 entries with 3 updates each: 120 transitions, capped at 100.
        let entries: Vec<WorkEntry> = (0..60)
            .map(|i| {
                entry_with_updates(
                    &format!("Activity {}", i),
                    vec![update("Not Started", at(1, 9)), update("Ongoing", at(2, 9)), update("Completed", at(3, 9))],
                )
            })
            .collect();
        let report = analyze(&entries);
        assert_eq!(report.total_conversions, 120);
        assert_eq!(report.records.len(), 100);

        let matrix_sum: u64 = report.matrix.values().flat_map(|targets| targets.values()).sum();
        assert_eq!(matrix_sum, 120);
    }

    #[test]
    fn test_free_text_labels_are_kept_verbatim() {
        let entry = entry_with_updates("Rebar", vec![update("waiting on steel", at(1, 9)), update("Ongoing", at(2, 9))]);
        let report = analyze(&[entry]);
        assert_eq!(report.matrix["waiting on steel"]["Ongoing"], 1);
    }
}
