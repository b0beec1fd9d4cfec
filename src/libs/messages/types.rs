//! Structured message variants for all user-facing output.
//!
//! Every message the application prints is a variant here; the text lives
//! in the `Display` implementation. Keeping the catalog in one place makes
//! wording changes and future localization a single-file affair.

#[derive(Debug, Clone)]
pub enum Message {
    // === ENTRY MESSAGES ===
    EntryCreated(i64),
    EntryUpdated(i64),
    EntryDeleted(i64),
    EntryNotFound(i64),
    EntriesNotFound,
    EntriesHeader,
    StatusUpdateRecorded(i64, String), // entry id, status
    PromptEntryActivity,
    PromptEntryAssignee,
    PromptEntryHours,
    PromptEntryStatus,
    PromptStatusNote,
    ConfirmDeleteEntry(i64),

    // === PROJECT MESSAGES ===
    ProjectCreated(String),
    ProjectUpdated(String),
    ProjectDeleted(i64),
    ProjectNotFound(i64),
    ProjectsNotFound,
    ProjectsHeader,
    PromptProjectName,
    PromptProjectClient,
    PromptProjectManager,
    PromptProjectLocation,
    PromptProjectTimeline,

    // === PERSONNEL MESSAGES ===
    PersonnelCreated(String),
    PersonnelUpdated(String),
    PersonnelDeleted(i64),
    PersonnelNotFound(i64),
    PersonnelListEmpty,
    PersonnelHeader,
    PromptPersonnelName,
    PromptPersonnelEmail,

    // === STATUS MESSAGES ===
    StatusCreated(String),
    StatusDeleted(i64),
    StatusNotFound(i64),
    StatusesHeader,
    StatusDefaultsSeeded,
    PromptStatusName,
    PromptStatusColor,

    // === REPORT MESSAGES ===
    ReportHeader(String),       // report name
    ReportGenerating(String),   // report name
    ReportEmpty,
    ReportFailed(String),       // error
    ReportSuperseded,
    DelaySummary(usize, usize, usize), // overdue, due today, upcoming
    ConversionRecordsCapped(u64, usize), // total, shown

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportFailed(String),    // error
    ExportNoData,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigFileNotFound,
    ConfigParseError,
    PromptConfigDataDir,

    // === MIGRATION MESSAGES ===
    MigrationsApplied(u32),
    MigrationsUpToDate,
    MigrationsHeader,

    // === GENERAL MESSAGES ===
    Custom(String),
}
