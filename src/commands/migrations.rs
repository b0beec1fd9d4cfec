//! Database schema inspection.

use crate::db::db::Db;
use crate::db::migrations::{current_version, MigrationManager};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Show the current schema version
    Status,
    /// List applied migrations
    History,
}

pub fn cmd(args: MigrationsArgs) -> Result<()> {
    let db = Db::new()?;

    match args.command {
        MigrationsCommand::Status => {
            let version = current_version(&db.conn)?;
            msg_print!(Message::Custom(format!("Database schema version: {}", version)));
            msg_info!(Message::MigrationsUpToDate);
        }
        MigrationsCommand::History => {
            let history = MigrationManager::new().history(&db.conn)?;
            View::migrations(&history)?;
        }
    }
    Ok(())
}
