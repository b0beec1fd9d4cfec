//! Status master data management.

use crate::db::statuses::Statuses;
use crate::libs::master::Status;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct StatusArgs {
    #[command(subcommand)]
    command: StatusCommand,
}

#[derive(Debug, Subcommand)]
enum StatusCommand {
    /// Create a custom status
    Add,
    /// List all statuses, built-ins first
    List,
    /// Delete a status by id
    Delete { id: i64 },
}

pub fn cmd(args: StatusArgs) -> Result<()> {
    match args.command {
        StatusCommand::Add => {
            let theme = ColorfulTheme::default();
            let name: String = Input::with_theme(&theme)
                .with_prompt(Message::PromptStatusName.to_string())
                .interact_text()?;
            let color: String = Input::with_theme(&theme)
                .with_prompt(Message::PromptStatusColor.to_string())
                .allow_empty(true)
                .interact_text()?;

            let status = Status {
                id: None,
                name: name.clone(),
                color: if color.trim().is_empty() { None } else { Some(color) },
                order: None,
            };
            Statuses::new()?.insert(&status)?;
            msg_success!(Message::StatusCreated(name));
        }
        StatusCommand::List => {
            let statuses = Statuses::new()?.fetch_all()?;
            View::statuses(&statuses)?;
        }
        StatusCommand::Delete { id } => match Statuses::new()?.delete(id) {
            Ok(()) => msg_success!(Message::StatusDeleted(id)),
            Err(_) => msg_error!(Message::StatusNotFound(id)),
        },
    }
    Ok(())
}
