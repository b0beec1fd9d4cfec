//! SQLite persistence layer.
//!
//! One database file holds the work entries and the three master
//! collections. Every store opens its own connection through [`db::Db`],
//! which runs pending schema migrations on open.

pub mod db;
pub mod entries;
pub mod error;
pub mod migrations;
pub mod personnel;
pub mod projects;
pub mod snapshot;
pub mod statuses;
