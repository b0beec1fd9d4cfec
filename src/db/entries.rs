//! Work entry storage.
//!
//! Entries are the engine's input; the nested status-update and
//! sub-activity sequences are stored as JSON columns and deserialized on
//! read. A malformed nested column never aborts a fetch; it degrades to an
//! empty sequence so one bad record cannot take down a whole report.

use crate::db::db::Db;
use crate::db::error::DbError;
use crate::libs::dates::format_hours_carry;
use crate::libs::entry::{StatusUpdate, SubActivity, WorkEntry};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Params, Row, Statement};

const SELECT_ENTRIES: &str = "SELECT id, project_id, project_name, date, date_time, activity, assigned_to, hours,
    start_date, target_date, final_status, status_updates, sub_activities FROM entries";
const INSERT_ENTRY: &str = "INSERT INTO entries (project_id, project_name, date, date_time, activity, assigned_to,
    hours, start_date, target_date, final_status, status_updates, sub_activities)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)";
const UPDATE_ENTRY: &str = "UPDATE entries SET project_id = ?1, project_name = ?2, date = ?3, date_time = ?4,
    activity = ?5, assigned_to = ?6, hours = ?7, start_date = ?8, target_date = ?9, final_status = ?10,
    status_updates = ?11, sub_activities = ?12 WHERE id = ?13";

/// Which entries to fetch.
#[derive(Debug, Clone)]
pub enum EntryQuery {
    /// All entries, most recent first.
    All,
    /// Entries recorded on the given day.
    OnDate(NaiveDate),
    /// Entries assigned to the given person, exact match.
    ByAssignee(String),
    /// Entries for the given project.
    ByProject(i64),
}

pub struct Entries {
    pub conn: Connection,
}

impl Entries {
    pub fn new() -> Result<Entries> {
        let db = Db::new()?;
        Ok(Entries { conn: db.conn })
    }

    /// Inserts a new entry and returns its id. The hour value is passed
    /// through the minute-carry rule before it is stored.
    pub fn insert(&mut self, entry: &WorkEntry) -> Result<i64> {
        self.conn.execute(
            INSERT_ENTRY,
            params![
                entry.project_id,
                entry.project_name,
                entry.date,
                entry.date_time,
                entry.activity,
                entry.assigned_to,
                format_hours_carry(entry.hours),
                entry.start_date,
                entry.target_date,
                entry.final_status,
                serde_json::to_string(&entry.status_updates)?,
                serde_json::to_string(&entry.sub_activities)?,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Rewrites a stored entry. Carry correction applies here as well, so
    /// edited hours keep the HH.MM convention.
    pub fn update(&mut self, id: i64, entry: &WorkEntry) -> Result<()> {
        self.conn.execute(
            UPDATE_ENTRY,
            params![
                entry.project_id,
                entry.project_name,
                entry.date,
                entry.date_time,
                entry.activity,
                entry.assigned_to,
                format_hours_carry(entry.hours),
                entry.start_date,
                entry.target_date,
                entry.final_status,
                serde_json::to_string(&entry.status_updates)?,
                serde_json::to_string(&entry.sub_activities)?,
                id,
            ],
        )?;
        Ok(())
    }

    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute("DELETE FROM entries WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(DbError::not_found("Entry", id).into());
        }
        Ok(())
    }

    pub fn fetch_by_id(&mut self, id: i64) -> Result<Option<WorkEntry>> {
        let entry = self
            .conn
            .query_row(&format!("{SELECT_ENTRIES} WHERE id = ?1"), params![id], map_entry_row)
            .optional()?;
        Ok(entry)
    }

    /// Fetches entries most-recent first; the recent-activity samples in
    /// the workload and contribution reports rely on this ordering.
    pub fn fetch(&mut self, query: EntryQuery) -> Result<Vec<WorkEntry>> {
        match query {
            EntryQuery::All => {
                let mut stmt = self.conn.prepare(&format!("{SELECT_ENTRIES} ORDER BY date DESC"))?;
                collect_entries(&mut stmt, [])
            }
            EntryQuery::OnDate(date) => {
                let mut stmt = self.conn.prepare(&format!("{SELECT_ENTRIES} WHERE DATE(date) = ?1 ORDER BY date DESC"))?;
                collect_entries(&mut stmt, params![date.format("%Y-%m-%d").to_string()])
            }
            EntryQuery::ByAssignee(name) => {
                let mut stmt = self.conn.prepare(&format!("{SELECT_ENTRIES} WHERE assigned_to = ?1 ORDER BY date DESC"))?;
                collect_entries(&mut stmt, params![name])
            }
            EntryQuery::ByProject(project_id) => {
                let mut stmt = self.conn.prepare(&format!("{SELECT_ENTRIES} WHERE project_id = ?1 ORDER BY date DESC"))?;
                collect_entries(&mut stmt, params![project_id])
            }
        }
    }

    /// Appends a status update to the entry's history, optionally moving
    /// its final status to the same label.
    pub fn append_status_update(&mut self, id: i64, update: StatusUpdate, set_final_status: bool) -> Result<()> {
        let Some(mut entry) = self.fetch_by_id(id)? else {
            return Err(DbError::not_found("Entry", id).into());
        };
        if set_final_status {
            entry.final_status = update.note.clone();
        }
        entry.status_updates.push(update);
        self.update(id, &entry)
    }
}

fn collect_entries<P: Params>(stmt: &mut Statement, params: P) -> Result<Vec<WorkEntry>> {
    let entry_iter = stmt.query_map(params, map_entry_row)?;
    let mut entries = Vec::new();
    for entry in entry_iter {
        entries.push(entry?);
    }
    Ok(entries)
}

fn map_entry_row(row: &Row) -> rusqlite::Result<WorkEntry> {
    let status_updates: Vec<StatusUpdate> = serde_json::from_str(&row.get::<_, String>(11)?).unwrap_or_default();
    let sub_activities: Vec<SubActivity> = serde_json::from_str(&row.get::<_, String>(12)?).unwrap_or_default();
    Ok(WorkEntry {
        id: row.get(0)?,
        project_id: row.get(1)?,
        project_name: row.get(2)?,
        date: row.get(3)?,
        date_time: row.get(4)?,
        activity: row.get(5)?,
        assigned_to: row.get(6)?,
        hours: row.get(7)?,
        start_date: row.get(8)?,
        target_date: row.get(9)?,
        final_status: row.get(10)?,
        status_updates,
        sub_activities,
    })
}
