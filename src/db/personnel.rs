//! Personnel master data storage.

use crate::db::db::Db;
use crate::db::error::DbError;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::libs::master::Personnel;

const SELECT_PERSONNEL: &str = "SELECT id, name, email FROM personnel";

pub struct PersonnelStore {
    pub conn: Connection,
}

impl PersonnelStore {
    pub fn new() -> Result<PersonnelStore> {
        let db = Db::new()?;
        Ok(PersonnelStore { conn: db.conn })
    }

    pub fn insert(&mut self, person: &Personnel) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO personnel (name, email) VALUES (?1, ?2)",
            params![person.name, person.email],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn update(&mut self, id: i64, person: &Personnel) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE personnel SET name = ?1, email = ?2 WHERE id = ?3",
            params![person.name, person.email, id],
        )?;
        if affected == 0 {
            return Err(DbError::not_found("Personnel", id).into());
        }
        Ok(())
    }

    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute("DELETE FROM personnel WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(DbError::not_found("Personnel", id).into());
        }
        Ok(())
    }

    pub fn fetch_by_id(&mut self, id: i64) -> Result<Option<Personnel>> {
        let person = self
            .conn
            .query_row(&format!("{SELECT_PERSONNEL} WHERE id = ?1"), params![id], map_personnel_row)
            .optional()?;
        Ok(person)
    }

    pub fn fetch_all(&mut self) -> Result<Vec<Personnel>> {
        let mut stmt = self.conn.prepare(&format!("{SELECT_PERSONNEL} ORDER BY name"))?;
        let rows = stmt.query_map([], map_personnel_row)?;
        let mut personnel = Vec::new();
        for person in rows {
            personnel.push(person?);
        }
        Ok(personnel)
    }
}

fn map_personnel_row(row: &Row) -> rusqlite::Result<Personnel> {
    Ok(Personnel {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
    })
}
