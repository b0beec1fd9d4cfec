#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sitelog::libs::entry::WorkEntry;
    use sitelog::libs::report::{
        generate, ReportEngine, ReportFilter, ReportKind, ReportOutcome, ReportResult, ReportState, Snapshot,
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    fn entry(project: &str, assignee: &str, status: &str, date: NaiveDate) -> WorkEntry {
        let mut entry = WorkEntry::new(Some(1), project, date.and_hms_opt(9, 0, 0).unwrap(), "Activity", assignee, 1.0);
        entry.final_status = status.to_string();
        entry
    }

    fn snapshot() -> Snapshot {
        Snapshot {
            entries: vec![
                entry("Tower A", "Alice", "Completed", today()),
                entry("Tower A", "Bob", "Ongoing", today()),
                entry("Bridge B", "Alice", "Ongoing", today() - chrono::Days::new(3)),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_analytic_kinds_route_to_their_calculator() {
        let snapshot = snapshot();
        let filter = ReportFilter::default();
        assert!(matches!(generate(&snapshot, ReportKind::Delay, &filter, today()), ReportResult::Delay(_)));
        assert!(matches!(generate(&snapshot, ReportKind::Workload, &filter, today()), ReportResult::Workload(_)));
        assert!(matches!(generate(&snapshot, ReportKind::Target, &filter, today()), ReportResult::Target(_)));
        assert!(matches!(
            generate(&snapshot, ReportKind::StatusConversion, &filter, today()),
            ReportResult::StatusConversion(_)
        ));
        assert!(matches!(
            generate(&snapshot, ReportKind::Contribution, &filter, today()),
            ReportResult::Contribution(_)
        ));
    }

    #[test]
    fn test_analytic_kinds_ignore_generic_filters() {
        let snapshot = snapshot();
        let filter = ReportFilter {
            user: Some("Alice".to_string()),
            ..Default::default()
        };
        let ReportResult::Workload(report) = generate(&snapshot, ReportKind::Workload, &filter, today()) else {
            panic!("expected workload result");
        };
        // Both assignees present despite the user filter.
        assert_eq!(report.rows.len(), 2);
    }

    #[test]
    fn test_generic_report_filters_and_tallies() {
        let snapshot = snapshot();
        let filter = ReportFilter {
            project: Some("tower".to_string()),
            ..Default::default()
        };
        let ReportResult::Entries { entries, status_counts } = generate(&snapshot, ReportKind::Project, &filter, today()) else {
            panic!("expected entries result");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(status_counts["Completed"], 1);
        assert_eq!(status_counts["Ongoing"], 1);
    }

    #[test]
    fn test_generic_report_date_range() {
        let snapshot = snapshot();
        let filter = ReportFilter {
            start_date: Some(today()),
            ..Default::default()
        };
        let ReportResult::Entries { entries, .. } = generate(&snapshot, ReportKind::Daily, &filter, today()) else {
            panic!("expected entries result");
        };
        // The Bridge B entry predates the range start.
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_blank_final_status_tallies_as_unknown() {
        let mut snapshot = snapshot();
        snapshot.entries.push({
            let mut e = entry("Tower A", "Carol", "", today());
            e.final_status = String::new();
            e
        });
        let ReportResult::Entries { status_counts, .. } =
            generate(&snapshot, ReportKind::Daily, &ReportFilter::default(), today())
        else {
            panic!("expected entries result");
        };
        assert_eq!(status_counts["Unknown"], 1);
    }

    #[tokio::test]
    async fn test_engine_ready_outcome() {
        let engine = ReportEngine::new();
        let snapshot = snapshot();
        let outcome = engine
            .generate(|| async { Ok(snapshot) }, ReportKind::Daily, &ReportFilter::default())
            .await;
        assert!(matches!(outcome, ReportOutcome::Ready(ReportResult::Entries { .. })));
        assert_eq!(engine.state(), ReportState::Ready);
    }

    #[tokio::test]
    async fn test_engine_failed_outcome() {
        let engine = ReportEngine::new();
        let outcome = engine
            .generate(
                || async { Err(anyhow::anyhow!("storage unavailable")) },
                ReportKind::Daily,
                &ReportFilter::default(),
            )
            .await;
        let ReportOutcome::Failed(message) = outcome else {
            panic!("expected failed outcome");
        };
        assert!(message.contains("storage unavailable"));
        assert_eq!(engine.state(), ReportState::Failed(message));
    }

    #[tokio::test]
    async fn test_stale_response_is_superseded() {
        let engine = ReportEngine::new();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();

        // The first request's fetch stalls until the second has finished.
        let slow_filter = ReportFilter::default();
        let slow = engine.generate(
            || async {
                rx.await.ok();
                Ok(snapshot())
            },
            ReportKind::Daily,
            &slow_filter,
        );
        let fast = async {
            let outcome = engine
                .generate(|| async { Ok(snapshot()) }, ReportKind::Workload, &ReportFilter::default())
                .await;
            tx.send(()).ok();
            outcome
        };

        let (slow_outcome, fast_outcome) = tokio::join!(slow, fast);
        assert!(matches!(slow_outcome, ReportOutcome::Superseded));
        assert!(matches!(fast_outcome, ReportOutcome::Ready(ReportResult::Workload(_))));
        assert_eq!(engine.state(), ReportState::Ready);
    }
}
