//! Database schema migration management and versioning.
//!
//! Applies pending schema changes in version order during database
//! initialization. Each migration runs inside a transaction and is recorded
//! in a tracking table, so a database can be upgraded from any prior
//! version to the current one.

use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

/// Tracking table recording every applied migration.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema change with its version and transformation logic.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations in application order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        self.migrations.push(Migration {
            version: 1,
            name: "initial_schema",
            up: migrate_v1_initial_schema,
        });
        self.migrations.push(Migration {
            version: 2,
            name: "entry_indexes",
            up: migrate_v2_entry_indexes,
        });
    }

    /// Applies every migration newer than the database's current version.
    pub fn apply_pending(&self, conn: &mut Connection) -> Result<u32> {
        conn.execute(MIGRATIONS_TABLE, [])?;
        let current = current_version(conn)?;
        let mut applied = 0;

        for migration in self.migrations.iter().filter(|m| m.version > current) {
            msg_debug!(format!("Applying migration v{} ({})", migration.version, migration.name));
            let tx = conn.transaction()?;
            (migration.up)(&tx)?;
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
            tx.commit()?;
            applied += 1;
        }

        Ok(applied)
    }

    /// Applied migrations as `(version, name, applied_at)` rows.
    pub fn history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?;
        let mut history = Vec::new();
        for row in rows {
            history.push(row?);
        }
        Ok(history)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Ensures the schema is current. Called from every `Db::new`.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().apply_pending(conn)?;
    Ok(())
}

/// Highest applied migration version, zero for a fresh database.
pub fn current_version(conn: &Connection) -> Result<u32> {
    conn.execute(MIGRATIONS_TABLE, [])?;
    let version = conn.query_row("SELECT COALESCE(MAX(version), 0) FROM migrations", [], |row| row.get(0))?;
    Ok(version)
}

fn migrate_v1_initial_schema(tx: &Transaction) -> Result<()> {
    tx.execute(
        "CREATE TABLE IF NOT EXISTS projects (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            client TEXT NOT NULL DEFAULT '',
            manager TEXT NOT NULL DEFAULT '',
            location TEXT NOT NULL DEFAULT '',
            timeline TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;
    tx.execute(
        "CREATE TABLE IF NOT EXISTS personnel (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;
    tx.execute(
        "CREATE TABLE IF NOT EXISTS statuses (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            color TEXT,
            sort_order INTEGER,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;
    tx.execute(
        "CREATE TABLE IF NOT EXISTS entries (
            id INTEGER PRIMARY KEY,
            project_id INTEGER,
            project_name TEXT NOT NULL DEFAULT '',
            date TIMESTAMP NOT NULL,
            date_time TEXT NOT NULL DEFAULT '',
            activity TEXT NOT NULL DEFAULT '',
            assigned_to TEXT NOT NULL DEFAULT '',
            hours REAL NOT NULL DEFAULT 0,
            start_date TIMESTAMP,
            target_date TIMESTAMP,
            final_status TEXT NOT NULL DEFAULT '',
            status_updates TEXT NOT NULL DEFAULT '[]',
            sub_activities TEXT NOT NULL DEFAULT '[]',
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;
    Ok(())
}

fn migrate_v2_entry_indexes(tx: &Transaction) -> Result<()> {
    tx.execute("CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date)", [])?;
    tx.execute("CREATE INDEX IF NOT EXISTS idx_entries_project ON entries(project_id)", [])?;
    tx.execute("CREATE INDEX IF NOT EXISTS idx_entries_assignee ON entries(assigned_to)", [])?;
    Ok(())
}
