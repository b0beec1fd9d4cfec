//! Delay analysis: triage of entries by target-date proximity.

use crate::libs::dates::day_difference;
use crate::libs::entry::WorkEntry;
use crate::libs::master::STATUS_COMPLETED;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// How many days ahead a target date still counts as "upcoming".
const UPCOMING_WINDOW_DAYS: i64 = 7;

/// One entry's position relative to its target date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayedTask {
    pub entry_id: Option<i64>,
    pub project_name: String,
    pub activity: String,
    pub assigned_to: String,
    pub target_date: NaiveDateTime,
    pub current_status: String,
    /// Whole days from today to the target date; negative when overdue.
    pub days_diff: i64,
    /// Absolute value of `days_diff`.
    pub pending_since_days: i64,
    /// Rough severity percentage for overdue tasks, zero otherwise.
    pub delay_percentage: i64,
    pub hours: f64,
    pub sub_activities_count: usize,
}

/// Mutually exclusive delay buckets over entries that carry a target date.
///
/// Completed entries appear in no bucket regardless of date. Entries whose
/// target lies more than [`UPCOMING_WINDOW_DAYS`] in the future are excluded
/// from all three buckets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DelayAnalysis {
    /// Target date in the past, most overdue first.
    pub overdue: Vec<DelayedTask>,
    pub due_today: Vec<DelayedTask>,
    /// Target date within the upcoming window, soonest first.
    pub upcoming: Vec<DelayedTask>,
}

impl DelayAnalysis {
    pub fn overdue_count(&self) -> usize {
        self.overdue.len()
    }

    pub fn due_today_count(&self) -> usize {
        self.due_today.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }
}

/// Buckets the snapshot's entries by target-date proximity to `today`.
pub fn analyze(entries: &[WorkEntry], today: NaiveDate) -> DelayAnalysis {
    let reference = today.and_time(NaiveTime::MIN);
    let mut analysis = DelayAnalysis::default();

    for entry in entries {
        let Some(target_date) = entry.target_date else {
            continue;
        };
        if entry.final_status == STATUS_COMPLETED {
            continue;
        }

        let days_diff = day_difference(target_date, reference);
        let pending_since_days = days_diff.abs();
        let delay_percentage = if days_diff < 0 {
            ((pending_since_days as f64 / (pending_since_days + 1) as f64) * 100.0).round() as i64
        } else {
            0
        };

        let task = DelayedTask {
            entry_id: entry.id,
            project_name: entry.project_name.clone(),
            activity: entry.activity.clone(),
            assigned_to: entry.assigned_to.clone(),
            target_date,
            current_status: entry.final_status.clone(),
            days_diff,
            pending_since_days,
            delay_percentage,
            hours: entry.hours,
            sub_activities_count: entry.sub_activities.len(),
        };

        if days_diff < 0 {
            analysis.overdue.push(task);
        } else if days_diff == 0 {
            analysis.due_today.push(task);
        } else if days_diff <= UPCOMING_WINDOW_DAYS {
            analysis.upcoming.push(task);
        }
        // Anything further out is not yet worth surfacing.
    }

    analysis.overdue.sort_by_key(|t| t.days_diff);
    analysis.upcoming.sort_by_key(|t| t.days_diff);
    analysis
}
