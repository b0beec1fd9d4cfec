//! Command-line interface and subcommand dispatch.

pub mod entry;
pub mod export;
pub mod init;
pub mod migrations;
pub mod personnel;
pub mod project;
pub mod report;
pub mod status;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage work entries")]
    Entry(entry::EntryArgs),
    #[command(about = "Manage projects")]
    Project(project::ProjectArgs),
    #[command(about = "Manage personnel")]
    Personnel(personnel::PersonnelArgs),
    #[command(about = "Manage the status registry")]
    Status(status::StatusArgs),
    #[command(about = "Generate a report")]
    Report(report::ReportArgs),
    #[command(about = "Export reports or entries")]
    Export(export::ExportArgs),
    #[command(about = "Inspect the database schema")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Entry(args) => entry::cmd(args),
            Commands::Project(args) => project::cmd(args),
            Commands::Personnel(args) => personnel::cmd(args),
            Commands::Status(args) => status::cmd(args),
            Commands::Report(args) => report::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
