//! Report generation facade.
//!
//! Dispatches a report request to the matching calculator over one
//! materialized snapshot of the recorded data. The five analytic
//! calculators are pure and independent; the four generic kinds run the
//! shared entry filter and tally final statuses.
//!
//! A generation moves `Idle -> Generating -> Ready | Failed`. Requests are
//! last-request-wins: when a newer request is issued while an older
//! snapshot fetch is still outstanding, the older result is discarded on
//! arrival so a slow stale response can never overwrite a newer report.

pub mod contribution;
pub mod conversion;
pub mod delay;
pub mod target;
pub mod workload;

use crate::libs::entry::WorkEntry;
use crate::libs::filter::EntryFilter;
use crate::libs::master::{Personnel, Project, Status};
use chrono::{Local, NaiveDate};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

/// A fully materialized, immutable-for-the-call view of the recorded data.
///
/// The calculators only ever read a snapshot; creation and mutation stay
/// with the persistence layer.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub entries: Vec<WorkEntry>,
    pub projects: Vec<Project>,
    pub personnel: Vec<Personnel>,
    pub statuses: Vec<Status>,
}

/// The selectable report types.
///
/// The first five run a dedicated calculator over the full snapshot and
/// ignore the generic filters by design. The remaining four return a
/// filtered entry listing with a status tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportKind {
    Delay,
    Workload,
    Target,
    StatusConversion,
    Contribution,
    Daily,
    Project,
    User,
    Status,
}

impl ReportKind {
    /// Whether this kind runs one of the analytic calculators rather than
    /// the generic entry listing.
    pub fn is_analytic(&self) -> bool {
        matches!(
            self,
            ReportKind::Delay | ReportKind::Workload | ReportKind::Target | ReportKind::StatusConversion | ReportKind::Contribution
        )
    }
}

/// Filter parameters for the generic report kinds.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    /// Exact match on the referenced project id.
    pub project_id: Option<i64>,
    /// Substring match on the project name.
    pub project: Option<String>,
    /// Substring match on the assignee.
    pub user: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub today_only: bool,
}

impl ReportFilter {
    fn entry_filter(&self) -> EntryFilter {
        EntryFilter {
            project: self.project.clone(),
            assignee: self.user.clone(),
            today_only: self.today_only,
            ..EntryFilter::default()
        }
    }
}

/// The output of one report generation, keyed by report kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReportResult {
    Delay(delay::DelayAnalysis),
    Workload(workload::WorkloadReport),
    Target(Vec<target::ProjectAchievement>),
    StatusConversion(conversion::ConversionReport),
    Contribution(Vec<contribution::AssigneeContribution>),
    Entries {
        entries: Vec<WorkEntry>,
        status_counts: BTreeMap<String, usize>,
    },
}

/// Runs the calculator (or generic filter) for `kind` over the snapshot.
///
/// Pure and synchronous; `today` anchors all day-difference arithmetic.
pub fn generate(snapshot: &Snapshot, kind: ReportKind, filter: &ReportFilter, today: NaiveDate) -> ReportResult {
    match kind {
        ReportKind::Delay => ReportResult::Delay(delay::analyze(&snapshot.entries, today)),
        ReportKind::Workload => ReportResult::Workload(workload::analyze(&snapshot.entries, today)),
        ReportKind::Target => ReportResult::Target(target::analyze(&snapshot.entries, &snapshot.projects, today)),
        ReportKind::StatusConversion => ReportResult::StatusConversion(conversion::analyze(&snapshot.entries)),
        ReportKind::Contribution => ReportResult::Contribution(contribution::analyze(&snapshot.entries)),
        ReportKind::Daily | ReportKind::Project | ReportKind::User | ReportKind::Status => filtered_entries(snapshot, filter, today),
    }
}

/// Generic report body: filtered entry list plus a status-name tally.
fn filtered_entries(snapshot: &Snapshot, filter: &ReportFilter, today: NaiveDate) -> ReportResult {
    let entry_filter = filter.entry_filter();
    let entries: Vec<WorkEntry> = snapshot
        .entries
        .iter()
        .filter(|e| {
            if let Some(project_id) = filter.project_id {
                if e.project_id != Some(project_id) {
                    return false;
                }
            }
            if let Some(start) = filter.start_date {
                if e.date.date() < start {
                    return false;
                }
            }
            if let Some(end) = filter.end_date {
                if e.date.date() > end {
                    return false;
                }
            }
            entry_filter.matches_on(e, today)
        })
        .cloned()
        .collect();

    let mut status_counts: BTreeMap<String, usize> = BTreeMap::new();
    for entry in &entries {
        let status = if entry.final_status.is_empty() {
            "Unknown".to_string()
        } else {
            entry.final_status.clone()
        };
        *status_counts.entry(status).or_insert(0) += 1;
    }

    ReportResult::Entries { entries, status_counts }
}

/// Lifecycle of the most recent generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportState {
    Idle,
    Generating,
    Ready,
    /// Generation failed; the message is the only thing callers may use.
    Failed(String),
}

/// What one generation request produced.
#[derive(Debug)]
pub enum ReportOutcome {
    Ready(ReportResult),
    /// Snapshot fetch or generation failed; no partial data is exposed.
    Failed(String),
    /// A newer request was issued while this one was in flight; the result
    /// was discarded.
    Superseded,
}

/// Report facade tracking generation state across requests.
pub struct ReportEngine {
    seq: AtomicU64,
    state: Mutex<ReportState>,
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEngine {
    pub fn new() -> Self {
        ReportEngine {
            seq: AtomicU64::new(0),
            state: Mutex::new(ReportState::Idle),
        }
    }

    /// Current lifecycle state of the most recent request.
    pub fn state(&self) -> ReportState {
        self.state.lock().clone()
    }

    /// Fetches a snapshot and generates the requested report.
    ///
    /// The fetch is the only asynchronous boundary; everything after it is
    /// pure computation. If a newer request was issued while this fetch was
    /// outstanding, the arrived result is dropped and
    /// [`ReportOutcome::Superseded`] is returned instead.
    pub async fn generate<F, Fut>(&self, fetch: F, kind: ReportKind, filter: &ReportFilter) -> ReportOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<Snapshot>>,
    {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        *self.state.lock() = ReportState::Generating;

        let fetched = fetch().await;
        if self.seq.load(Ordering::SeqCst) != ticket {
            // A newer request owns the state now.
            return ReportOutcome::Superseded;
        }

        match fetched {
            Ok(snapshot) => {
                let result = generate(&snapshot, kind, filter, Local::now().date_naive());
                *self.state.lock() = ReportState::Ready;
                ReportOutcome::Ready(result)
            }
            Err(err) => {
                let message = err.to_string();
                *self.state.lock() = ReportState::Failed(message.clone());
                ReportOutcome::Failed(message)
            }
        }
    }
}
