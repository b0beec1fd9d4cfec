//! Entry filtering predicate shared by listings and the generic reports.

use crate::libs::dates::is_same_day;
use crate::libs::entry::WorkEntry;
use chrono::{Local, NaiveDate};

/// Filter criteria for work entries. All provided criteria are ANDed; an
/// absent or empty value is vacuously true.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    /// Case-insensitive substring match against the project name.
    pub project: Option<String>,
    /// Case-insensitive substring match against the entry's date string.
    pub date: Option<String>,
    /// Case-insensitive substring match against the activity description.
    pub activity: Option<String>,
    /// Case-insensitive substring match against the assignee.
    pub assignee: Option<String>,
    /// Exact match against the final status label.
    pub status: Option<String>,
    /// Keep only entries created today or touched today.
    pub today_only: bool,
}

impl EntryFilter {
    /// Whether the entry passes every provided criterion, evaluated against
    /// the current local day.
    pub fn matches(&self, entry: &WorkEntry) -> bool {
        self.matches_on(entry, Local::now().date_naive())
    }

    /// Same as [`matches`](Self::matches) with an explicit "today" so the
    /// predicate stays deterministic under test.
    pub fn matches_on(&self, entry: &WorkEntry, today: NaiveDate) -> bool {
        if !contains_ci(&entry.project_name, &self.project) {
            return false;
        }
        if !contains_ci(&entry.date_time, &self.date) {
            return false;
        }
        if !contains_ci(&entry.activity, &self.activity) {
            return false;
        }
        if !contains_ci(&entry.assigned_to, &self.assignee) {
            return false;
        }
        if let Some(status) = self.status.as_deref() {
            if !status.is_empty() && entry.final_status != status {
                return false;
            }
        }
        if self.today_only {
            // An entry surfaces if it was created today or any of its
            // status updates landed today.
            let touched_today =
                is_same_day(entry.date, today) || entry.status_updates.iter().any(|u| is_same_day(u.timestamp, today));
            if !touched_today {
                return false;
            }
        }
        true
    }
}

fn contains_ci(haystack: &str, needle: &Option<String>) -> bool {
    match needle.as_deref() {
        None | Some("") => true,
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
    }
}
