//! Personnel master data management.

use crate::db::personnel::PersonnelStore;
use crate::libs::master::Personnel;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct PersonnelArgs {
    #[command(subcommand)]
    command: PersonnelCommand,
}

#[derive(Debug, Subcommand)]
enum PersonnelCommand {
    /// Add a person, prompting for details
    Add,
    /// List all personnel
    List,
    /// Remove a person by id
    Delete { id: i64 },
}

pub fn cmd(args: PersonnelArgs) -> Result<()> {
    match args.command {
        PersonnelCommand::Add => {
            let theme = ColorfulTheme::default();
            let name: String = Input::with_theme(&theme)
                .with_prompt(Message::PromptPersonnelName.to_string())
                .interact_text()?;
            let email: String = Input::with_theme(&theme)
                .with_prompt(Message::PromptPersonnelEmail.to_string())
                .allow_empty(true)
                .interact_text()?;

            let person = Personnel {
                id: None,
                name: name.clone(),
                email: if email.trim().is_empty() { None } else { Some(email) },
            };
            PersonnelStore::new()?.insert(&person)?;
            msg_success!(Message::PersonnelCreated(name));
        }
        PersonnelCommand::List => {
            let personnel = PersonnelStore::new()?.fetch_all()?;
            View::personnel(&personnel)?;
        }
        PersonnelCommand::Delete { id } => match PersonnelStore::new()?.delete(id) {
            Ok(()) => msg_success!(Message::PersonnelDeleted(id)),
            Err(_) => msg_error!(Message::PersonnelNotFound(id)),
        },
    }
    Ok(())
}
