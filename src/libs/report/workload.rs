//! Workload distribution: per-assignee aggregation over the full snapshot.

use crate::libs::dates::day_difference;
use crate::libs::entry::WorkEntry;
use crate::libs::master::{STATUS_COMPLETED, STATUS_NOT_STARTED, STATUS_ONGOING};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// How many days ahead a target date counts toward the upcoming-deadline tally.
const UPCOMING_WINDOW_DAYS: i64 = 7;

/// How many recent activities are kept per assignee.
const RECENT_ACTIVITY_CAP: usize = 5;

/// Sentinel bucket for entries without an assignee.
pub const UNASSIGNED: &str = "Unassigned";

/// A bounded sample of an assignee's recent work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentActivity {
    pub activity: String,
    pub project: String,
    pub status: String,
    pub hours: f64,
    pub date: String,
}

/// Aggregated workload figures for one assignee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssigneeWorkload {
    pub assignee: String,
    pub total_tasks: usize,
    /// Raw sum of stored hour values, no carry correction.
    pub total_hours: f64,
    pub completed_tasks: usize,
    pub ongoing_tasks: usize,
    pub not_started_tasks: usize,
    pub overdue_tasks: usize,
    pub upcoming_deadlines: usize,
    /// Project name to task count.
    pub projects: BTreeMap<String, usize>,
    /// Up to five activities in the order first encountered. The caller is
    /// expected to hand over a recency-sorted snapshot for these to actually
    /// be the most recent.
    pub recent_activities: Vec<RecentActivity>,
}

impl AssigneeWorkload {
    fn new(assignee: &str) -> Self {
        AssigneeWorkload {
            assignee: assignee.to_string(),
            total_tasks: 0,
            total_hours: 0.0,
            completed_tasks: 0,
            ongoing_tasks: 0,
            not_started_tasks: 0,
            overdue_tasks: 0,
            upcoming_deadlines: 0,
            projects: BTreeMap::new(),
            recent_activities: Vec::new(),
        }
    }
}

/// Per-assignee workload rows plus overall totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkloadReport {
    /// Sorted descending by total task count.
    pub rows: Vec<AssigneeWorkload>,
    pub total_tasks: usize,
    pub total_hours: f64,
}

/// Groups the snapshot's entries by assignee and accumulates workload
/// figures. Entries without an assignee fold into the [`UNASSIGNED`]
/// bucket rather than being dropped.
pub fn analyze(entries: &[WorkEntry], today: NaiveDate) -> WorkloadReport {
    let reference = today.and_time(NaiveTime::MIN);
    let mut order: Vec<String> = Vec::new();
    let mut by_assignee: HashMap<String, AssigneeWorkload> = HashMap::new();

    for entry in entries {
        let key = if entry.assigned_to.trim().is_empty() {
            UNASSIGNED.to_string()
        } else {
            entry.assigned_to.clone()
        };
        let row = by_assignee.entry(key.clone()).or_insert_with(|| {
            order.push(key.clone());
            AssigneeWorkload::new(&key)
        });

        row.total_tasks += 1;
        row.total_hours += entry.hours;
        match entry.final_status.as_str() {
            STATUS_COMPLETED => row.completed_tasks += 1,
            STATUS_ONGOING => row.ongoing_tasks += 1,
            STATUS_NOT_STARTED => row.not_started_tasks += 1,
            // Other labels land in an implicit, unreported bucket.
            _ => {}
        }

        if let Some(target_date) = entry.target_date {
            if entry.final_status != STATUS_COMPLETED {
                let days_diff = day_difference(target_date, reference);
                if days_diff < 0 {
                    row.overdue_tasks += 1;
                } else if days_diff <= UPCOMING_WINDOW_DAYS {
                    row.upcoming_deadlines += 1;
                }
            }
        }

        *row.projects.entry(entry.project_name.clone()).or_insert(0) += 1;

        if row.recent_activities.len() < RECENT_ACTIVITY_CAP {
            row.recent_activities.push(RecentActivity {
                activity: entry.activity.clone(),
                project: entry.project_name.clone(),
                status: entry.final_status.clone(),
                hours: entry.hours,
                date: entry.date_time.clone(),
            });
        }
    }

    // First-seen order before the stable sort keeps ties deterministic.
    let mut rows: Vec<AssigneeWorkload> = order.into_iter().filter_map(|name| by_assignee.remove(&name)).collect();
    rows.sort_by(|a, b| b.total_tasks.cmp(&a.total_tasks));

    let total_tasks = rows.iter().map(|r| r.total_tasks).sum();
    let total_hours = rows.iter().map(|r| r.total_hours).sum();

    WorkloadReport { rows, total_tasks, total_hours }
}
