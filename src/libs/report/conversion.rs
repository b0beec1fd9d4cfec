//! Status conversion analysis over entry status-update histories.
//!
//! Transitions are derived from the free-text notes of consecutive status
//! updates, not from the entry's final status. The matrix is therefore keyed
//! by whatever text was recorded, which is the tracked behavior.

use crate::libs::entry::WorkEntry;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How many conversion records are retained for report display.
const RECORD_DISPLAY_CAP: usize = 100;

/// One observed transition between two consecutive status updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub project_name: String,
    pub activity: String,
    pub assigned_to: String,
    pub from_label: String,
    pub to_label: String,
    /// Timestamp of the update that produced the transition.
    pub timestamp: NaiveDateTime,
    pub hours: f64,
}

/// Transition frequency matrix plus a bounded sample of recent transitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Most recent transitions, capped for display.
    pub records: Vec<ConversionRecord>,
    /// `from` label to `to` label to occurrence count.
    pub matrix: BTreeMap<String, BTreeMap<String, u64>>,
    /// True transition count before the display cap was applied.
    pub total_conversions: usize,
}

/// Walks each entry's update history and counts consecutive-pair transitions.
///
/// Entries with fewer than two updates contribute nothing. The sum of all
/// matrix cells always equals `total_conversions`.
pub fn analyze(entries: &[WorkEntry]) -> ConversionReport {
    let mut report = ConversionReport::default();

    for entry in entries {
        for pair in entry.status_updates.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);
            report.records.push(ConversionRecord {
                project_name: entry.project_name.clone(),
                activity: entry.activity.clone(),
                assigned_to: entry.assigned_to.clone(),
                from_label: from.note.clone(),
                to_label: to.note.clone(),
                timestamp: to.timestamp,
                hours: entry.hours,
            });
            *report
                .matrix
                .entry(from.note.clone())
                .or_default()
                .entry(to.note.clone())
                .or_insert(0) += 1;
        }
    }

    report.total_conversions = report.records.len();
    report.records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    report.records.truncate(RECORD_DISPLAY_CAP);
    report
}
