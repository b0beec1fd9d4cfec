//! Work entry model: the central unit of daily work-status tracking.
//!
//! An entry records one day of work on a project activity. It carries an
//! ordered, append-only log of status updates and an optional breakdown
//! into sub-activities, each with its own assignee and status history.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A timestamped free-text note appended to an entry's status history.
///
/// Updates are append-only and chronologically non-decreasing. The note text
/// is free form; the status-conversion report derives transitions from
/// whatever text was recorded here, not from the entry's final status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    /// Free-text status note (e.g. "Ongoing", "Completed").
    pub note: String,
    /// When the update was recorded.
    pub timestamp: NaiveDateTime,
    /// Who recorded the update.
    pub updated_by: String,
}

/// A nested breakdown item within an entry, with its own assignee and history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubActivity {
    pub description: String,
    pub assigned_to: String,
    pub hours: f64,
    pub status: String,
    #[serde(default)]
    pub status_updates: Vec<StatusUpdate>,
}

/// One daily work-log record for a project/assignee/day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkEntry {
    /// Database identifier, absent until the entry is persisted.
    pub id: Option<i64>,
    /// Referenced project id, when the project is known.
    pub project_id: Option<i64>,
    /// Denormalized project name, mirrors the project at time of last edit.
    pub project_name: String,
    /// Scheduled/recorded timestamp of the work.
    pub date: NaiveDateTime,
    /// Display form of the date as entered by the user.
    pub date_time: String,
    /// Free-text description of the main activity.
    pub activity: String,
    /// Free-text assignee, matched by exact equality against personnel names.
    pub assigned_to: String,
    /// Hours in HH.MM entry convention (fractional part is minutes).
    pub hours: f64,
    pub start_date: Option<NaiveDateTime>,
    pub target_date: Option<NaiveDateTime>,
    /// Free-text final status, expected to match a registered status name
    /// but not enforced.
    pub final_status: String,
    #[serde(default)]
    pub status_updates: Vec<StatusUpdate>,
    #[serde(default)]
    pub sub_activities: Vec<SubActivity>,
}

impl WorkEntry {
    pub fn new(project_id: Option<i64>, project_name: &str, date: NaiveDateTime, activity: &str, assigned_to: &str, hours: f64) -> Self {
        WorkEntry {
            id: None,
            project_id,
            project_name: project_name.to_string(),
            date,
            date_time: date.format("%Y-%m-%d %H:%M").to_string(),
            activity: activity.to_string(),
            assigned_to: assigned_to.to_string(),
            hours,
            start_date: None,
            target_date: None,
            final_status: String::new(),
            status_updates: Vec::new(),
            sub_activities: Vec::new(),
        }
    }
}
