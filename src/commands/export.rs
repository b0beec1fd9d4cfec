//! Data export command.

use crate::commands::report::ReportFilterArgs;
use crate::db::entries::{Entries, EntryQuery};
use crate::db::snapshot;
use crate::libs::config::Config;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::libs::report::{ReportEngine, ReportKind, ReportOutcome};
use crate::{msg_error, msg_warning};
use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportData {
    /// A generated report
    Report,
    /// The raw entry list
    Entries,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(value_enum, default_value = "report")]
    data: ExportData,

    /// Which report to export when exporting a report
    #[arg(short, long, value_enum, default_value = "daily")]
    report: ReportKind,

    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file; relative paths land in the configured export
    /// directory, omitted paths get a timestamped name
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    filter: ReportFilterArgs,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let output = resolve_output(args.output)?;
    let exporter = Exporter::new(args.format, output);

    match args.data {
        ExportData::Entries => {
            let entries = Entries::new()?.fetch(EntryQuery::All)?;
            exporter.export_entries(&entries)?;
        }
        ExportData::Report => {
            let engine = ReportEngine::new();
            let filter = args.filter.filter();
            let outcome = engine.generate(|| async { snapshot::fetch() }, args.report, &filter).await;
            match outcome {
                ReportOutcome::Ready(result) => exporter.export_report(&result)?,
                ReportOutcome::Failed(err) => msg_error!(Message::ExportFailed(err)),
                ReportOutcome::Superseded => msg_warning!(Message::ReportSuperseded),
            }
        }
    }
    Ok(())
}

/// Places an unqualified output path into the configured export directory.
fn resolve_output(output: Option<PathBuf>) -> Result<Option<PathBuf>> {
    let Some(dir) = Config::read()?.export.and_then(|e| e.output_dir) else {
        return Ok(output);
    };
    Ok(match output {
        Some(path) if path.is_relative() => Some(PathBuf::from(dir).join(path)),
        Some(path) => Some(path),
        None => None,
    })
}
