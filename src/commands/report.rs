//! Report generation command.

use crate::db::snapshot;
use crate::libs::messages::Message;
use crate::libs::report::{ReportEngine, ReportFilter, ReportKind, ReportOutcome};
use crate::libs::view::View;
use crate::{msg_debug, msg_error, msg_warning};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

/// Filter options shared by the report and export commands. They only
/// affect the generic report kinds; the analytic calculators always run
/// over the full data set.
#[derive(Debug, Args)]
pub struct ReportFilterArgs {
    /// Exact project id filter
    #[arg(long)]
    pub project_id: Option<i64>,

    /// Project name substring filter
    #[arg(short, long)]
    pub project: Option<String>,

    /// Assignee substring filter
    #[arg(short, long)]
    pub user: Option<String>,

    /// Range start, YYYY-MM-DD
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Range end, YYYY-MM-DD
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// Only entries touched today
    #[arg(long)]
    pub today: bool,
}

impl ReportFilterArgs {
    pub fn filter(&self) -> ReportFilter {
        ReportFilter {
            project_id: self.project_id,
            project: self.project.clone(),
            user: self.user.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            today_only: self.today,
        }
    }
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Which report to generate
    #[arg(value_enum, default_value = "daily")]
    pub kind: ReportKind,

    #[command(flatten)]
    pub filter: ReportFilterArgs,
}

pub async fn cmd(args: ReportArgs) -> Result<()> {
    msg_debug!(format!("Generating {:?} report", args.kind));

    let engine = ReportEngine::new();
    let filter = args.filter.filter();
    let outcome = engine.generate(|| async { snapshot::fetch() }, args.kind, &filter).await;

    match outcome {
        ReportOutcome::Ready(result) => View::report(&result)?,
        ReportOutcome::Failed(err) => msg_error!(Message::ReportFailed(err)),
        ReportOutcome::Superseded => msg_warning!(Message::ReportSuperseded),
    }
    Ok(())
}
