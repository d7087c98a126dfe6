//! PostgreSQL implementation of [`Store`].
//!
//! Runtime-checked queries via `query_as`/`query_scalar`; ids are assigned
//! by the database (`gen_random_uuid()` defaults).

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::lead::LeadRow;
use crate::models::project::{ProjectRow, SecretRow};
use crate::store::{Store, StoreError};
use leadlink_core::lead::{Lead, LeadData};
use leadlink_core::project::{Project, ProjectData, Secret, TimeFrame};
use leadlink_core::types::Timestamp;

/// Column lists shared across queries to avoid repetition.
const PROJECT_COLUMNS: &str = "id, name, time_start, time_end, leads_goal";
const SECRET_COLUMNS: &str = "id, project_id";
const LEAD_COLUMNS: &str = "id, name, description, status, interactions";

/// Production storage backend over a PostgreSQL pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Split an optional time frame into its two nullable columns.
fn frame_columns(frame: Option<&TimeFrame>) -> (Option<Timestamp>, Option<Timestamp>) {
    match frame {
        Some(f) => (f.start, f.end),
        None => (None, None),
    }
}

#[async_trait]
impl Store for PgStore {
    async fn insert_project(&self, data: &ProjectData) -> Result<Uuid, StoreError> {
        let (start, end) = frame_columns(data.time_frame.as_ref());
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO projects (name, time_start, time_end, leads_goal)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&data.name)
        .bind(start)
        .bind(end)
        .bind(data.leads_goal)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn get_project(&self, id: Uuid) -> Result<Option<Project>, StoreError> {
        let query = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1");
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Project::from))
    }

    async fn update_project(&self, id: Uuid, data: &ProjectData) -> Result<bool, StoreError> {
        let (start, end) = frame_columns(data.time_frame.as_ref());
        let result = sqlx::query(
            "UPDATE projects
             SET name = $2, time_start = $3, time_end = $4, leads_goal = $5
             WHERE id = $1",
        )
        .bind(id)
        .bind(&data.name)
        .bind(start)
        .bind(end)
        .bind(data.leads_goal)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_project(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_secret(&self, project_id: Uuid) -> Result<Uuid, StoreError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO secrets (project_id) VALUES ($1) RETURNING id",
        )
        .bind(project_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn get_secret(&self, id: Uuid) -> Result<Option<Secret>, StoreError> {
        let query = format!("SELECT {SECRET_COLUMNS} FROM secrets WHERE id = $1");
        let row = sqlx::query_as::<_, SecretRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Secret::from))
    }

    async fn delete_secret(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM secrets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_lead(&self, project_id: Uuid, data: &LeadData) -> Result<Uuid, StoreError> {
        let interactions = serde_json::to_value(&data.interactions)
            .map_err(|e| StoreError(format!("failed to encode interactions: {e}")))?;
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO leads (project_id, name, description, status, interactions)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(project_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.status.as_str())
        .bind(interactions)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update_lead(
        &self,
        project_id: Uuid,
        lead_id: Uuid,
        data: &LeadData,
    ) -> Result<bool, StoreError> {
        let interactions = serde_json::to_value(&data.interactions)
            .map_err(|e| StoreError(format!("failed to encode interactions: {e}")))?;
        let result = sqlx::query(
            "UPDATE leads
             SET name = $3, description = $4, status = $5, interactions = $6
             WHERE id = $1 AND project_id = $2",
        )
        .bind(lead_id)
        .bind(project_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.status.as_str())
        .bind(interactions)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_lead(&self, project_id: Uuid, lead_id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM leads WHERE id = $1 AND project_id = $2")
            .bind(lead_id)
            .bind(project_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_leads(&self, project_id: Uuid) -> Result<Vec<Lead>, StoreError> {
        let query = format!(
            "SELECT {LEAD_COLUMNS} FROM leads
             WHERE project_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        let rows = sqlx::query_as::<_, LeadRow>(&query)
            .bind(project_id)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(Lead::try_from).collect()
    }
}
