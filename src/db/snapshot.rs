//! Snapshot assembly for report generation.
//!
//! A report always runs over one consistent read of the database; the
//! snapshot is fetched in full before any calculator touches it.

use crate::db::entries::{Entries, EntryQuery};
use crate::db::personnel::PersonnelStore;
use crate::db::projects::Projects;
use crate::db::statuses::Statuses;
use crate::libs::report::Snapshot;
use anyhow::Result;

/// Materializes the full data set: entries most-recent first, plus the
/// three master collections.
pub fn fetch() -> Result<Snapshot> {
    let entries = Entries::new()?.fetch(EntryQuery::All)?;
    let projects = Projects::new()?.fetch_all()?;
    let personnel = PersonnelStore::new()?.fetch_all()?;
    let statuses = Statuses::new()?.fetch_all()?;

    Ok(Snapshot {
        entries,
        projects,
        personnel,
        statuses,
    })
}
