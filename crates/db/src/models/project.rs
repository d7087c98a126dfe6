//! Rows for the `projects` and `secrets` tables.

use sqlx::FromRow;
use uuid::Uuid;

use leadlink_core::project::{Project, Secret, TimeFrame};
use leadlink_core::types::Timestamp;

/// A project row. The optional time frame is flattened into two nullable
/// columns; on read it surfaces as `Some` when either endpoint is set.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: Uuid,
    pub name: String,
    pub time_start: Option<Timestamp>,
    pub time_end: Option<Timestamp>,
    pub leads_goal: i64,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        let time_frame = if row.time_start.is_some() || row.time_end.is_some() {
            Some(TimeFrame {
                start: row.time_start,
                end: row.time_end,
            })
        } else {
            None
        };
        Project {
            id: row.id,
            name: row.name,
            time_frame,
            leads_goal: row.leads_goal,
        }
    }
}

/// A secret row: the bearer capability and the project it authorizes.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct SecretRow {
    pub id: Uuid,
    pub project_id: Uuid,
}

impl From<SecretRow> for Secret {
    fn from(row: SecretRow) -> Self {
        Secret {
            id: row.id,
            project_id: row.project_id,
        }
    }
}
