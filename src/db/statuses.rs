//! Status master data storage.
//!
//! The built-in status set is seeded once on first use; site-specific
//! statuses can be added alongside and are sorted after the built-ins.

use crate::db::db::Db;
use crate::db::error::DbError;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::libs::master::{Status, DEFAULT_STATUSES};

const SELECT_STATUSES: &str = "SELECT id, name, color, sort_order FROM statuses";

pub struct Statuses {
    pub conn: Connection,
}

impl Statuses {
    pub fn new() -> Result<Statuses> {
        let db = Db::new()?;
        let mut statuses = Statuses { conn: db.conn };
        statuses.ensure_defaults()?;
        Ok(statuses)
    }

    /// Seeds the built-in statuses if the table is empty.
    pub fn ensure_defaults(&mut self) -> Result<()> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM statuses", [], |row| row.get(0))?;
        if count > 0 {
            return Ok(());
        }
        for (order, (name, color)) in DEFAULT_STATUSES.iter().enumerate() {
            self.conn.execute(
                "INSERT INTO statuses (name, color, sort_order) VALUES (?1, ?2, ?3)",
                params![name, color, order as i64],
            )?;
        }
        Ok(())
    }

    pub fn insert(&mut self, status: &Status) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO statuses (name, color, sort_order) VALUES (?1, ?2, ?3)",
            params![status.name, status.color, status.order],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute("DELETE FROM statuses WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(DbError::not_found("Status", id).into());
        }
        Ok(())
    }

    pub fn fetch_by_name(&mut self, name: &str) -> Result<Option<Status>> {
        let status = self
            .conn
            .query_row(&format!("{SELECT_STATUSES} WHERE name = ?1"), params![name], map_status_row)
            .optional()?;
        Ok(status)
    }

    pub fn fetch_all(&mut self) -> Result<Vec<Status>> {
        let mut stmt = self.conn.prepare(&format!("{SELECT_STATUSES} ORDER BY sort_order, name"))?;
        let rows = stmt.query_map([], map_status_row)?;
        let mut statuses = Vec::new();
        for status in rows {
            statuses.push(status?);
        }
        Ok(statuses)
    }
}

fn map_status_row(row: &Row) -> rusqlite::Result<Status> {
    Ok(Status {
        id: row.get(0)?,
        name: row.get(1)?,
        color: row.get(2)?,
        order: row.get(3)?,
    })
}
