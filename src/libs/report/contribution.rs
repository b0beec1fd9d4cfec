//! Contribution scoring: a fixed-weight ranking of assignees by output.

use crate::libs::entry::WorkEntry;
use crate::libs::master::STATUS_COMPLETED;
use crate::libs::report::workload::UNASSIGNED;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// How many distinct recent project names are kept per assignee.
const RECENT_PROJECT_CAP: usize = 5;

/// Fixed business weights: completed tasks, completed hours, project breadth.
const WEIGHT_COMPLETED_TASKS: f64 = 10.0;
const WEIGHT_COMPLETED_HOURS: f64 = 2.0;
const WEIGHT_PROJECT_BREADTH: f64 = 5.0;

/// Contribution figures and composite score for one assignee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssigneeContribution {
    pub assignee: String,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub total_hours: f64,
    pub completed_hours: f64,
    /// Cardinality of distinct project names touched.
    pub projects_count: usize,
    /// Rounded to one decimal place, zero when no tasks exist.
    pub average_hours_per_task: f64,
    /// Up to five distinct project names in first-seen order.
    pub recent_projects: Vec<String>,
    /// `completed_tasks * 10 + completed_hours * 2 + projects_count * 5`,
    /// rounded half-up on the final sum only.
    pub contribution_score: i64,
}

struct Accumulator {
    total_tasks: usize,
    completed_tasks: usize,
    total_hours: f64,
    completed_hours: f64,
    projects: HashSet<String>,
    recent_projects: Vec<String>,
}

/// Groups entries by assignee and ranks them by contribution score,
/// descending. Ties retain encounter order.
pub fn analyze(entries: &[WorkEntry]) -> Vec<AssigneeContribution> {
    let mut order: Vec<String> = Vec::new();
    let mut by_assignee: HashMap<String, Accumulator> = HashMap::new();

    for entry in entries {
        let key = if entry.assigned_to.trim().is_empty() {
            UNASSIGNED.to_string()
        } else {
            entry.assigned_to.clone()
        };
        let acc = by_assignee.entry(key.clone()).or_insert_with(|| {
            order.push(key.clone());
            Accumulator {
                total_tasks: 0,
                completed_tasks: 0,
                total_hours: 0.0,
                completed_hours: 0.0,
                projects: HashSet::new(),
                recent_projects: Vec::new(),
            }
        });

        acc.total_tasks += 1;
        acc.total_hours += entry.hours;
        if entry.final_status == STATUS_COMPLETED {
            acc.completed_tasks += 1;
            acc.completed_hours += entry.hours;
        }
        if acc.projects.insert(entry.project_name.clone()) && acc.recent_projects.len() < RECENT_PROJECT_CAP {
            acc.recent_projects.push(entry.project_name.clone());
        }
    }

    let mut rows: Vec<AssigneeContribution> = order
        .into_iter()
        .filter_map(|name| {
            let acc = by_assignee.remove(&name)?;
            let average_hours_per_task = if acc.total_tasks > 0 {
                (acc.total_hours / acc.total_tasks as f64 * 10.0).round() / 10.0
            } else {
                0.0
            };
            let contribution_score = (acc.completed_tasks as f64 * WEIGHT_COMPLETED_TASKS
                + acc.completed_hours * WEIGHT_COMPLETED_HOURS
                + acc.projects.len() as f64 * WEIGHT_PROJECT_BREADTH)
                .round() as i64;
            Some(AssigneeContribution {
                assignee: name,
                total_tasks: acc.total_tasks,
                completed_tasks: acc.completed_tasks,
                total_hours: acc.total_hours,
                completed_hours: acc.completed_hours,
                projects_count: acc.projects.len(),
                average_hours_per_task,
                recent_projects: acc.recent_projects,
                contribution_score,
            })
        })
        .collect();

    // Stable sort keeps encounter order for equal scores.
    rows.sort_by(|a, b| b.contribution_score.cmp(&a.contribution_score));
    rows
}
