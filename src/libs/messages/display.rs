//! Human-readable text for every [`Message`] variant.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === ENTRY MESSAGES ===
            Message::EntryCreated(id) => format!("Work entry #{} recorded", id),
            Message::EntryUpdated(id) => format!("Work entry #{} updated", id),
            Message::EntryDeleted(id) => format!("Work entry #{} deleted", id),
            Message::EntryNotFound(id) => format!("Work entry #{} not found", id),
            Message::EntriesNotFound => "No work entries found".to_string(),
            Message::EntriesHeader => "Work entries".to_string(),
            Message::StatusUpdateRecorded(id, status) => {
                format!("Status of entry #{} moved to '{}'", id, status)
            }
            Message::PromptEntryActivity => "Activity description".to_string(),
            Message::PromptEntryAssignee => "Assigned to".to_string(),
            Message::PromptEntryHours => "Hours spent (HH.MM)".to_string(),
            Message::PromptEntryStatus => "Current status".to_string(),
            Message::PromptStatusNote => "Status note".to_string(),
            Message::ConfirmDeleteEntry(id) => format!("Delete work entry #{}?", id),

            // === PROJECT MESSAGES ===
            Message::ProjectCreated(name) => format!("Project '{}' created", name),
            Message::ProjectUpdated(name) => format!("Project '{}' updated", name),
            Message::ProjectDeleted(id) => format!("Project #{} deleted", id),
            Message::ProjectNotFound(id) => format!("Project #{} not found", id),
            Message::ProjectsNotFound => "No projects found".to_string(),
            Message::ProjectsHeader => "Projects".to_string(),
            Message::PromptProjectName => "Project name".to_string(),
            Message::PromptProjectClient => "Client".to_string(),
            Message::PromptProjectManager => "Project manager".to_string(),
            Message::PromptProjectLocation => "Location".to_string(),
            Message::PromptProjectTimeline => "Timeline".to_string(),

            // === PERSONNEL MESSAGES ===
            Message::PersonnelCreated(name) => format!("Personnel '{}' added", name),
            Message::PersonnelUpdated(name) => format!("Personnel '{}' updated", name),
            Message::PersonnelDeleted(id) => format!("Personnel #{} removed", id),
            Message::PersonnelNotFound(id) => format!("Personnel #{} not found", id),
            Message::PersonnelListEmpty => "No personnel recorded".to_string(),
            Message::PersonnelHeader => "Personnel".to_string(),
            Message::PromptPersonnelName => "Name".to_string(),
            Message::PromptPersonnelEmail => "Email (optional)".to_string(),

            // === STATUS MESSAGES ===
            Message::StatusCreated(name) => format!("Status '{}' created", name),
            Message::StatusDeleted(id) => format!("Status #{} deleted", id),
            Message::StatusNotFound(id) => format!("Status #{} not found", id),
            Message::StatusesHeader => "Statuses".to_string(),
            Message::StatusDefaultsSeeded => "Default statuses seeded".to_string(),
            Message::PromptStatusName => "Status name".to_string(),
            Message::PromptStatusColor => "Color (hex)".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportHeader(name) => format!("📊 {} report", name),
            Message::ReportGenerating(name) => format!("Generating {} report...", name),
            Message::ReportEmpty => "No data matched the report criteria".to_string(),
            Message::ReportFailed(err) => format!("Report generation failed: {}", err),
            Message::ReportSuperseded => "Report request superseded by a newer one".to_string(),
            Message::DelaySummary(overdue, due_today, upcoming) => {
                format!("{} overdue, {} due today, {} upcoming", overdue, due_today, upcoming)
            }
            Message::ConversionRecordsCapped(total, shown) => {
                format!("Showing {} of {} status conversions", shown, total)
            }

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ExportFailed(err) => format!("Export failed: {}", err),
            Message::ExportNoData => "Nothing to export".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigParseError => "Failed to parse configuration file".to_string(),
            Message::PromptConfigDataDir => "Data directory (blank for default)".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsApplied(count) => format!("Applied {} migration(s)", count),
            Message::MigrationsUpToDate => "Database schema is up to date".to_string(),
            Message::MigrationsHeader => "Applied migrations".to_string(),

            // === GENERAL MESSAGES ===
            Message::Custom(text) => text.clone(),
        };
        write!(f, "{}", text)
    }
}
