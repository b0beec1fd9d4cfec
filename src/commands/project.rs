//! Project master data management.

use crate::db::projects::Projects;
use crate::libs::master::Project;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    command: ProjectCommand,
}

#[derive(Debug, Subcommand)]
enum ProjectCommand {
    /// Create a project, prompting for details
    Add,
    /// List all projects
    List,
    /// Delete a project by id
    Delete { id: i64 },
}

pub fn cmd(args: ProjectArgs) -> Result<()> {
    match args.command {
        ProjectCommand::Add => {
            let theme = ColorfulTheme::default();
            let name: String = Input::with_theme(&theme)
                .with_prompt(Message::PromptProjectName.to_string())
                .interact_text()?;
            let client: String = Input::with_theme(&theme)
                .with_prompt(Message::PromptProjectClient.to_string())
                .allow_empty(true)
                .interact_text()?;
            let manager: String = Input::with_theme(&theme)
                .with_prompt(Message::PromptProjectManager.to_string())
                .allow_empty(true)
                .interact_text()?;
            let location: String = Input::with_theme(&theme)
                .with_prompt(Message::PromptProjectLocation.to_string())
                .allow_empty(true)
                .interact_text()?;
            let timeline: String = Input::with_theme(&theme)
                .with_prompt(Message::PromptProjectTimeline.to_string())
                .allow_empty(true)
                .interact_text()?;

            let project = Project {
                id: None,
                name: name.clone(),
                client,
                manager,
                location,
                timeline,
            };
            Projects::new()?.insert(&project)?;
            msg_success!(Message::ProjectCreated(name));
        }
        ProjectCommand::List => {
            let projects = Projects::new()?.fetch_all()?;
            View::projects(&projects)?;
        }
        ProjectCommand::Delete { id } => match Projects::new()?.delete(id) {
            Ok(()) => msg_success!(Message::ProjectDeleted(id)),
            Err(_) => msg_error!(Message::ProjectNotFound(id)),
        },
    }
    Ok(())
}
