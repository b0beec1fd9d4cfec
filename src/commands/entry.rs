//! Work entry management: recording, listing and status progression.

use crate::db::entries::{Entries, EntryQuery};
use crate::db::projects::Projects;
use crate::db::statuses::Statuses;
use crate::libs::config::Config;
use crate::libs::entry::{StatusUpdate, WorkEntry};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveTime};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct EntryArgs {
    #[command(subcommand)]
    command: EntryCommand,
}

#[derive(Debug, Subcommand)]
enum EntryCommand {
    /// Record a work entry, prompting for missing details
    Add {
        /// Referenced project id
        #[arg(short, long)]
        project: Option<i64>,
        #[arg(short, long)]
        activity: Option<String>,
        #[arg(long)]
        assignee: Option<String>,
        /// Hours in HH.MM convention
        #[arg(long)]
        hours: Option<f64>,
        /// Target completion date, YYYY-MM-DD
        #[arg(short, long)]
        target: Option<NaiveDate>,
        /// Work start date, YYYY-MM-DD
        #[arg(short, long)]
        start: Option<NaiveDate>,
    },
    /// List entries, optionally narrowed by day, assignee or project
    List {
        #[arg(short, long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        assignee: Option<String>,
        #[arg(short, long)]
        project: Option<i64>,
    },
    /// Append a status update to an entry
    Status {
        id: i64,
        /// Status note; prompted when omitted
        note: Option<String>,
        /// Who recorded the update
        #[arg(long)]
        by: Option<String>,
        /// Keep the entry's final status unchanged
        #[arg(long)]
        keep_final: bool,
    },
    /// Delete an entry by id
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: EntryArgs) -> Result<()> {
    match args.command {
        EntryCommand::Add {
            project,
            activity,
            assignee,
            hours,
            target,
            start,
        } => add(project, activity, assignee, hours, target, start),
        EntryCommand::List { date, assignee, project } => list(date, assignee, project),
        EntryCommand::Status { id, note, by, keep_final } => status(id, note, by, keep_final),
        EntryCommand::Delete { id, yes } => delete(id, yes),
    }
}

fn add(
    project_id: Option<i64>,
    activity: Option<String>,
    assignee: Option<String>,
    hours: Option<f64>,
    target: Option<NaiveDate>,
    start: Option<NaiveDate>,
) -> Result<()> {
    let theme = ColorfulTheme::default();
    let config = Config::read().unwrap_or_default();
    let defaults = config.defaults.unwrap_or_default();

    let project_name = match project_id {
        Some(id) => match Projects::new()?.fetch_by_id(id)? {
            Some(project) => project.name,
            None => {
                msg_error!(Message::ProjectNotFound(id));
                return Ok(());
            }
        },
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptProjectName.to_string())
            .with_initial_text(defaults.project.unwrap_or_default())
            .allow_empty(true)
            .interact_text()?,
    };

    let activity = match activity {
        Some(activity) => activity,
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptEntryActivity.to_string())
            .interact_text()?,
    };
    let assignee = match assignee {
        Some(assignee) => assignee,
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptEntryAssignee.to_string())
            .with_initial_text(defaults.assignee.unwrap_or_default())
            .allow_empty(true)
            .interact_text()?,
    };
    let hours = match hours {
        Some(hours) => hours,
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptEntryHours.to_string())
            .default(0.0)
            .interact_text()?,
    };

    let statuses = Statuses::new()?.fetch_all()?;
    let status_names: Vec<&str> = statuses.iter().map(|s| s.name.as_str()).collect();
    let selected = Select::with_theme(&theme)
        .with_prompt(Message::PromptEntryStatus.to_string())
        .items(&status_names)
        .default(0)
        .interact()?;
    let final_status = status_names[selected].to_string();

    let now = Local::now().naive_local();
    let mut entry = WorkEntry::new(project_id, &project_name, now, &activity, &assignee, hours);
    entry.final_status = final_status.clone();
    entry.start_date = start.map(|d| d.and_time(NaiveTime::MIN));
    entry.target_date = target.map(|d| d.and_time(NaiveTime::MIN));
    entry.status_updates.push(StatusUpdate {
        note: final_status,
        timestamp: now,
        updated_by: assignee,
    });

    let id = Entries::new()?.insert(&entry)?;
    msg_success!(Message::EntryCreated(id));
    Ok(())
}

fn list(date: Option<NaiveDate>, assignee: Option<String>, project: Option<i64>) -> Result<()> {
    let query = if let Some(date) = date {
        EntryQuery::OnDate(date)
    } else if let Some(assignee) = assignee {
        EntryQuery::ByAssignee(assignee)
    } else if let Some(project_id) = project {
        EntryQuery::ByProject(project_id)
    } else {
        EntryQuery::All
    };
    let entries = Entries::new()?.fetch(query)?;
    View::entries(&entries)
}

fn status(id: i64, note: Option<String>, by: Option<String>, keep_final: bool) -> Result<()> {
    let theme = ColorfulTheme::default();
    let note = match note {
        Some(note) => note,
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptStatusNote.to_string())
            .interact_text()?,
    };

    let update = StatusUpdate {
        note: note.clone(),
        timestamp: Local::now().naive_local(),
        updated_by: by.unwrap_or_default(),
    };
    Entries::new()?.append_status_update(id, update, !keep_final)?;
    msg_success!(Message::StatusUpdateRecorded(id, note));
    Ok(())
}

fn delete(id: i64, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteEntry(id).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }
    match Entries::new()?.delete(id) {
        Ok(()) => msg_success!(Message::EntryDeleted(id)),
        Err(_) => msg_error!(Message::EntryNotFound(id)),
    }
    Ok(())
}
