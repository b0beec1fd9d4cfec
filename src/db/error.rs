use thiserror::Error;

/// Storage-level errors that callers match on, as opposed to the
/// anyhow-wrapped SQLite failures they only report.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: i64 },
}

impl DbError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        DbError::NotFound { entity, id }
    }
}
