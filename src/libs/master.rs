//! Master data models: projects, personnel and the status registry.

use serde::{Deserialize, Serialize};

/// A construction project entries are recorded against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Option<i64>,
    /// Unique by convention, not enforced.
    pub name: String,
    pub client: String,
    pub manager: String,
    pub location: String,
    /// Free-text timeline description.
    pub timeline: String,
}

/// A person entries can be assigned to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personnel {
    pub id: Option<i64>,
    pub name: String,
    pub email: Option<String>,
}

/// A registered status label with display metadata.
///
/// The registry carries known labels and their colors for rendering, but
/// entry statuses remain free text; comparisons stay case-sensitive exact
/// matches against these names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    pub id: Option<i64>,
    pub name: String,
    pub color: Option<String>,
    pub order: Option<i64>,
}

/// Status names seeded on first run, mirroring the conventional workflow.
pub const DEFAULT_STATUSES: [(&str, &str); 4] = [
    ("Not Started", "#dc3545"),
    ("Ongoing", "#ffc107"),
    ("Completed", "#28a745"),
    ("On Hold", "#6c757d"),
];

/// Final status labels the aggregate reports count explicitly. Any other
/// label falls into an implicit, unreported "other" bucket.
pub const STATUS_COMPLETED: &str = "Completed";
pub const STATUS_ONGOING: &str = "Ongoing";
pub const STATUS_NOT_STARTED: &str = "Not Started";
