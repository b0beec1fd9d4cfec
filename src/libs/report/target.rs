//! Target achievement: per-project completion and target-date compliance.

use crate::libs::dates::normalize_to_day;
use crate::libs::entry::WorkEntry;
use crate::libs::master::{Project, STATUS_COMPLETED, STATUS_NOT_STARTED, STATUS_ONGOING};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Synthetic project bucket for entries with neither an id nor a name.
pub const UNKNOWN_PROJECT: &str = "Unknown";

/// Aggregated achievement figures for one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectAchievement {
    pub project_id: Option<i64>,
    pub project_name: String,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub ongoing_tasks: usize,
    pub not_started_tasks: usize,
    pub total_hours: f64,
    pub completed_hours: f64,
    /// Tasks carrying a target date.
    pub tasks_with_target: usize,
    /// Tasks that reached Completed, counted regardless of when. This
    /// captures "eventually achieved" rather than "achieved before the
    /// deadline" and deliberately overlaps with `tasks_delayed`.
    pub tasks_on_target: usize,
    /// Tasks whose target date has passed without completion.
    pub tasks_delayed: usize,
    /// Completed share of total tasks, rounded percentage in 0..=100.
    pub achievement_rate: u32,
}

impl ProjectAchievement {
    fn new(project_id: Option<i64>, project_name: &str) -> Self {
        ProjectAchievement {
            project_id,
            project_name: project_name.to_string(),
            total_tasks: 0,
            completed_tasks: 0,
            ongoing_tasks: 0,
            not_started_tasks: 0,
            total_hours: 0.0,
            completed_hours: 0.0,
            tasks_with_target: 0,
            tasks_on_target: 0,
            tasks_delayed: 0,
            achievement_rate: 0,
        }
    }
}

/// Grouping key: project id when present, otherwise the denormalized name,
/// otherwise the synthetic unknown bucket. Entries are never dropped.
fn project_key(entry: &WorkEntry) -> String {
    match entry.project_id {
        Some(id) => format!("id:{id}"),
        None if !entry.project_name.trim().is_empty() => format!("name:{}", entry.project_name),
        None => format!("name:{UNKNOWN_PROJECT}"),
    }
}

/// Aggregates completion and target-date compliance per project.
///
/// Every known project appears in the output even with zero entries, so a
/// silent project still shows up with a zero achievement rate.
pub fn analyze(entries: &[WorkEntry], projects: &[Project], today: NaiveDate) -> Vec<ProjectAchievement> {
    let reference = today.and_time(NaiveTime::MIN);
    let mut order: Vec<String> = Vec::new();
    let mut by_project: HashMap<String, ProjectAchievement> = HashMap::new();

    for project in projects {
        let key = match project.id {
            Some(id) => format!("id:{id}"),
            None => format!("name:{}", project.name),
        };
        if !by_project.contains_key(&key) {
            order.push(key.clone());
            by_project.insert(key, ProjectAchievement::new(project.id, &project.name));
        }
    }

    for entry in entries {
        let key = project_key(entry);
        let row = by_project.entry(key.clone()).or_insert_with(|| {
            order.push(key.clone());
            let name = if entry.project_name.trim().is_empty() {
                UNKNOWN_PROJECT
            } else {
                entry.project_name.as_str()
            };
            ProjectAchievement::new(entry.project_id, name)
        });

        row.total_tasks += 1;
        row.total_hours += entry.hours;
        match entry.final_status.as_str() {
            STATUS_COMPLETED => {
                row.completed_tasks += 1;
                row.completed_hours += entry.hours;
            }
            STATUS_ONGOING => row.ongoing_tasks += 1,
            STATUS_NOT_STARTED => row.not_started_tasks += 1,
            _ => {}
        }

        if let Some(target_date) = entry.target_date {
            row.tasks_with_target += 1;
            if normalize_to_day(target_date) < reference && entry.final_status != STATUS_COMPLETED {
                row.tasks_delayed += 1;
            }
        }
        if entry.final_status == STATUS_COMPLETED {
            row.tasks_on_target += 1;
        }
    }

    let mut rows: Vec<ProjectAchievement> = order.into_iter().filter_map(|key| by_project.remove(&key)).collect();
    for row in &mut rows {
        // Guard against empty projects before deriving the rate.
        row.achievement_rate = if row.total_tasks > 0 {
            ((row.completed_tasks as f64 / row.total_tasks as f64) * 100.0).round() as u32
        } else {
            0
        };
    }
    rows.sort_by(|a, b| b.achievement_rate.cmp(&a.achievement_rate));
    rows
}
