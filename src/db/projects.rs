//! Project master data storage.

use crate::db::db::Db;
use crate::db::error::DbError;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::libs::master::Project;

const SELECT_PROJECTS: &str = "SELECT id, name, client, manager, location, timeline FROM projects";

pub struct Projects {
    pub conn: Connection,
}

impl Projects {
    pub fn new() -> Result<Projects> {
        let db = Db::new()?;
        Ok(Projects { conn: db.conn })
    }

    pub fn insert(&mut self, project: &Project) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO projects (name, client, manager, location, timeline) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![project.name, project.client, project.manager, project.location, project.timeline],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn update(&mut self, id: i64, project: &Project) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE projects SET name = ?1, client = ?2, manager = ?3, location = ?4, timeline = ?5 WHERE id = ?6",
            params![project.name, project.client, project.manager, project.location, project.timeline, id],
        )?;
        if affected == 0 {
            return Err(DbError::not_found("Project", id).into());
        }
        Ok(())
    }

    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute("DELETE FROM projects WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(DbError::not_found("Project", id).into());
        }
        Ok(())
    }

    pub fn fetch_by_id(&mut self, id: i64) -> Result<Option<Project>> {
        let project = self
            .conn
            .query_row(&format!("{SELECT_PROJECTS} WHERE id = ?1"), params![id], map_project_row)
            .optional()?;
        Ok(project)
    }

    pub fn fetch_all(&mut self) -> Result<Vec<Project>> {
        let mut stmt = self.conn.prepare(&format!("{SELECT_PROJECTS} ORDER BY name"))?;
        let rows = stmt.query_map([], map_project_row)?;
        let mut projects = Vec::new();
        for project in rows {
            projects.push(project?);
        }
        Ok(projects)
    }
}

fn map_project_row(row: &Row) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        client: row.get(2)?,
        manager: row.get(3)?,
        location: row.get(4)?,
        timeline: row.get(5)?,
    })
}
